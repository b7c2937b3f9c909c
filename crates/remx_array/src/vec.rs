use crate::{adapter::ElemType, NdArray};
use remx_core::{
    error::{Error, Result},
    scalar::Scalar,
};

impl NdArray {
    /// Reads the elements back into a flat host vector, converting when
    /// `T` is not the array's own element type.
    pub fn to_flatten_vec<T: ElemType>(&self) -> Result<Vec<T>> {
        let size = self.size();
        let mut result = vec![T::default(); size];

        if self.dtype() == T::DTYPE {
            let elem_size = self.dtype().size_in_bytes();
            unsafe {
                self.buffer()
                    .copy_to_host(result.as_mut_ptr() as *mut std::ffi::c_void, size * elem_size)?;
            }
        } else {
            for (i, slot) in result.iter_mut().enumerate() {
                *slot = T::from_scalar(self.buffer().read_scalar(i)?);
            }
        }

        Ok(result)
    }

    pub fn item_at_flat_index(&self, index: usize) -> Result<Scalar> {
        if index >= self.size() {
            return Err(Error::IndexOutOfBounds { index, size: self.size() });
        }

        self.buffer().read_scalar(index)
    }
}

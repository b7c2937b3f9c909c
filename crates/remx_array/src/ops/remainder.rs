use crate::{utils::broadcast::broadcast_operands, NdArray};
use remx_core::{
    error::{Error, Result},
    scalar::Scalar,
};

impl NdArray {
    /// Elementwise remainder with broadcasting.
    ///
    /// Both operands must carry the same element type. Integer results
    /// and nonzero float results take the divisor's sign; a zero divisor
    /// panics for integer dtypes and yields NaN for float dtypes.
    pub fn remainder(&self, rhs: &NdArray) -> Result<NdArray> {
        self.remainder_with_axis(rhs, None)
    }

    /// Like [`NdArray::remainder`], but aligns the lower-rank operand at
    /// `axis` instead of right-aligning it.
    pub fn remainder_with_axis(&self, rhs: &NdArray, axis: Option<usize>) -> Result<NdArray> {
        if self.dtype() != rhs.dtype() {
            return Err(Error::DTypeMismatch {
                expected: self.dtype(),
                got: rhs.dtype(),
            });
        }

        let (lhs, rhs) = broadcast_operands(self, rhs, axis)?;

        let mut result = Self::empty_with_dtype(lhs.shape(), lhs.dtype())?;

        let dims_and_strides = prepare_dims_and_strides(&lhs, &rhs);
        unsafe {
            result.with_buffer_mut(|out_buf| {
                if lhs.dtype().is_int() {
                    remx_core::be::ops::remainder::remainder_int(
                        out_buf,
                        lhs.buffer(),
                        rhs.buffer(),
                        lhs.size(),
                        lhs.ndim(),
                        Some(&dims_and_strides),
                    )?;
                } else {
                    remx_core::be::ops::remainder::remainder_float(
                        out_buf,
                        lhs.buffer(),
                        rhs.buffer(),
                        lhs.size(),
                        lhs.ndim(),
                        Some(&dims_and_strides),
                    )?;
                }

                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Elementwise remainder against a scalar divisor. The scalar is
    /// cast to this array's element type and broadcast.
    pub fn remainder_scalar<T: Into<Scalar>>(&self, rhs: T) -> Result<NdArray> {
        let rhs = Self::fill_like(self, rhs)?;
        self.remainder(&rhs)
    }
}

fn prepare_dims_and_strides(lhs: &NdArray, rhs: &NdArray) -> Vec<usize> {
    let mut dims_and_strides = Vec::new();

    // Add dimensions
    dims_and_strides.extend_from_slice(lhs.shape());

    // Add strides for both arrays
    dims_and_strides.extend_from_slice(lhs.strides());
    dims_and_strides.extend_from_slice(rhs.strides());

    dims_and_strides
}

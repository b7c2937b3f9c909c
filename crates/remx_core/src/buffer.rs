use crate::{
    dtype::DType,
    error::{Error, Result},
    scalar::Scalar,
};
use std::{ffi::c_void, ptr};

pub struct CpuBuffer {
    data: Vec<u8>,
    dtype: DType,
}

impl CpuBuffer {
    pub fn new(size: usize, dtype: DType) -> Result<Self> {
        let total_size = size
            .checked_mul(dtype.size_in_bytes())
            .ok_or_else(|| Error::InvalidArgument("Overflow in allocation".into()))?;
        Ok(Self {
            data: vec![0; total_size],
            dtype,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dtype.size_in_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.data.as_ptr() as *const _
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.data.as_mut_ptr() as *mut _
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// # Safety
    ///
    /// Requires a valid source pointer, matching `size_in_bytes` and no memory overlap.
    pub unsafe fn copy_from_host(&mut self, src: *const c_void, size_in_bytes: usize) -> Result<()> {
        if size_in_bytes != self.data.len() {
            return Err(Error::InvalidArgument("Size mismatch in copy_from_host".into()));
        }
        ptr::copy_nonoverlapping(src as *const u8, self.data.as_mut_ptr(), self.data.len());
        Ok(())
    }

    /// # Safety
    ///
    /// Requires a valid destination pointer, matching `size_in_bytes` and no memory overlap.
    pub unsafe fn copy_to_host(&self, dest: *mut c_void, size_in_bytes: usize) -> Result<()> {
        if size_in_bytes > self.data.len() {
            return Err(Error::InvalidArgument(format!(
                "Size mismatch in copy_to_host: requested {}, available {}",
                size_in_bytes,
                self.data.len()
            )));
        }
        ptr::copy_nonoverlapping(self.data.as_ptr(), dest as *mut u8, size_in_bytes);
        Ok(())
    }

    pub fn read_scalar(&self, index: usize) -> Result<Scalar> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len(),
            });
        }
        unsafe {
            let ptr = self.data.as_ptr().add(index * self.dtype.size_in_bytes());
            Ok(self.dtype.read_scalar(ptr))
        }
    }

    pub fn write_scalar(&mut self, index: usize, value: impl Into<Scalar>) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len(),
            });
        }
        let value = value.into();
        unsafe {
            let ptr = self.data.as_mut_ptr().add(index * self.dtype.size_in_bytes());
            self.dtype.write_scalar(ptr, value);
        }
        Ok(())
    }
}

use crate::{utils::broadcast::pad_shape, NdArray};
use remx_core::error::{Error, Result};

impl NdArray {
    /// Materializes this array expanded to `shape` under the broadcast
    /// rule: dimensions are right-aligned and size-1 dimensions stretch.
    pub fn broadcast(&self, shape: &[usize]) -> Result<Self> {
        if self.shape() == shape {
            return Ok(self.clone());
        }

        let old_shape = self.shape();
        let rank = shape.len();

        if old_shape.is_empty() {
            return self.broadcast_scalar_to(shape);
        }

        if shape.is_empty() {
            return Err(Error::InvalidShape {
                message: format!("Cannot broadcast non-scalar shape {:?} to scalar ()", old_shape),
            });
        }

        if rank < self.ndim() {
            return Err(Error::InvalidShape {
                message: format!("Cannot broadcast shape {:?} to lower-rank shape {:?}", old_shape, shape),
            });
        }

        let padded_old = pad_shape(old_shape, rank);

        // Validate broadcast compatibility
        for i in 0..rank {
            let dim_old = padded_old[i];
            let dim_new = shape[i];
            if dim_old != 1 && dim_old != dim_new {
                return Err(Error::InvalidShape {
                    message: format!(
                        "Cannot broadcast dimension {} -> {} (shape {:?} -> {:?})",
                        dim_old, dim_new, old_shape, shape
                    ),
                });
            }
        }

        let mut result = Self::empty_with_dtype(shape, self.dtype())?;

        let elem_size = self.dtype().size_in_bytes();
        let src_buf = self.buffer().as_bytes();
        let mut result_buf = vec![0u8; result.size() * elem_size];

        let padded_src_strides = {
            let mut padded = vec![0; rank - self.ndim()];
            padded.extend(self.strides());
            padded
        };

        // Stretched dimensions walk in place
        let mut effective_strides = padded_src_strides;
        for i in 0..rank {
            if padded_old[i] == 1 {
                effective_strides[i] = 0;
            }
        }

        let mut pos = vec![0; rank];
        for i in 0..result.size() {
            let mut remainder = i;
            for d in (0..rank).rev() {
                pos[d] = remainder % shape[d];
                remainder /= shape[d];
            }

            let mut src_idx = 0;
            for d in 0..rank {
                src_idx += pos[d] * effective_strides[d];
            }

            let src_offset = src_idx * elem_size;
            let dst_offset = i * elem_size;
            result_buf[dst_offset..dst_offset + elem_size].copy_from_slice(&src_buf[src_offset..src_offset + elem_size]);
        }

        unsafe {
            result.with_buffer_mut(|buf| {
                buf.copy_from_host(result_buf.as_ptr() as *const std::ffi::c_void, result_buf.len())?;
                Ok(())
            })?;
        }

        Ok(result)
    }

    pub fn broadcast_like(&self, other: &Self) -> Result<Self> {
        self.broadcast(other.shape())
    }

    // ==== helper ====

    fn broadcast_scalar_to(&self, shape: &[usize]) -> Result<Self> {
        let mut result = Self::empty_with_dtype(shape, self.dtype())?;
        let elem_size = self.dtype().size_in_bytes();
        let scalar_buf = self.buffer().as_bytes();

        let mut result_buf = vec![0u8; result.size() * elem_size];
        for i in 0..result.size() {
            let offset = i * elem_size;
            result_buf[offset..offset + elem_size].copy_from_slice(scalar_buf);
        }

        unsafe {
            result.with_buffer_mut(|buf| {
                buf.copy_from_host(result_buf.as_ptr() as *const std::ffi::c_void, result_buf.len())?;
                Ok(())
            })?;
        }

        Ok(result)
    }
}

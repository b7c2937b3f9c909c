pub mod adapter;
mod api;
mod creation;
mod d;
mod operators;
pub(crate) mod ops;
#[cfg(feature = "serde")]
mod serde;
pub mod utils;
mod vec;

use remx_core::{
    buffer::CpuBuffer,
    dtype::DType,
    error::{Error, Result},
    layout::Layout,
};
use std::sync::Arc;

pub use adapter::{ArrayAdapter, ElemType};
pub use api::{remainder, remainder_with_axis, Operand};

#[derive(Clone)]
pub(crate) struct ArrayData {
    buffer: Arc<CpuBuffer>,
}

#[derive(Clone)]
pub(crate) struct ArrayMetadata {
    dtype: DType,
    layout: Layout,
}

/// An immutable n-dimensional array of a fixed element type.
///
/// Cloning is cheap: the element buffer is shared, and every operation
/// allocates a fresh output instead of mutating its inputs.
#[derive(Clone)]
pub struct NdArray {
    data: ArrayData,
    metadata: ArrayMetadata,
}

impl NdArray {
    // data

    pub fn buffer(&self) -> &CpuBuffer {
        Arc::as_ref(&self.data.buffer)
    }

    pub(crate) fn with_buffer_mut<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut CpuBuffer) -> Result<()>,
    {
        let buffer = Arc::get_mut(&mut self.data.buffer).ok_or(Error::BufferShared)?;
        f(buffer)
    }

    pub(crate) fn from_parts(buffer: CpuBuffer, dtype: DType, layout: Layout) -> Self {
        Self {
            data: ArrayData {
                buffer: Arc::new(buffer),
            },
            metadata: ArrayMetadata { dtype, layout },
        }
    }

    // metadata

    pub fn dtype(&self) -> DType {
        self.metadata.dtype
    }

    pub fn layout(&self) -> &Layout {
        &self.metadata.layout
    }

    pub fn shape(&self) -> &[usize] {
        self.metadata.layout.shape()
    }

    pub fn strides(&self) -> &[usize] {
        self.metadata.layout.strides()
    }

    pub fn ndim(&self) -> usize {
        self.metadata.layout.ndim()
    }

    pub fn size(&self) -> usize {
        self.metadata.layout.size()
    }

    /// Reinterprets the shape without touching the element buffer.
    /// The new shape must cover the same number of elements.
    pub fn with_shape(&mut self, shape: &[usize]) -> Result<()> {
        if self.size() != Layout::compute_size(shape) {
            return Err(Error::InvalidShape {
                message: format!(
                    "Shape mismatch: expected total size {}, but got {} for shape {:?}",
                    self.size(),
                    Layout::compute_size(shape),
                    shape
                ),
            });
        }

        self.metadata.layout = Layout::from_shape(shape);

        Ok(())
    }
}

pub mod prelude;

pub use remx_array as array;
pub use remx_core as core;

pub use remx_core::dtype::{float32, float64, int32, int64};
pub use crate::core::{
    dtype::{get_default_dtype, set_default_dtype, DType},
    error::{Error, Result},
    scalar::Scalar,
};
pub use crate::array::{remainder, remainder_with_axis, NdArray, Operand};

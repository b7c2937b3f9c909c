pub use crate::core::{
    dtype::*,
    error::{Error, Result},
    scalar::Scalar,
};
pub use crate::array::{remainder, remainder_with_axis, ArrayAdapter, NdArray, Operand};

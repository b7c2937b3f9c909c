use crate::NdArray;
use remx_core::{
    error::{Error, Result},
    scalar::Scalar,
};

/// A value crossing the remainder API boundary.
///
/// The boundary only evaluates `Array % Array` and `Array % Scalar`.
/// `Raw` tags a plain host collection that was passed where an array is
/// required; it is always rejected, matching the original interface.
pub enum Operand {
    Array(NdArray),
    Scalar(Scalar),
    Raw(Vec<Scalar>),
}

impl From<NdArray> for Operand {
    fn from(array: NdArray) -> Self {
        Self::Array(array)
    }
}

impl From<&NdArray> for Operand {
    fn from(array: &NdArray) -> Self {
        Self::Array(array.clone())
    }
}

impl From<Scalar> for Operand {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

macro_rules! impl_operand_from {
    ($($type:ty),* $(,)?) => {
        $(
            impl From<$type> for Operand {
                fn from(value: $type) -> Self {
                    Self::Scalar(Scalar::from(value))
                }
            }

            impl From<Vec<$type>> for Operand {
                fn from(values: Vec<$type>) -> Self {
                    Self::Raw(values.into_iter().map(Scalar::from).collect())
                }
            }
        )*
    };
}

impl_operand_from!(f32, f64, i32, i64);

/// Evaluates `x % y` under the operand rules above.
pub fn remainder(x: impl Into<Operand>, y: impl Into<Operand>) -> Result<NdArray> {
    remainder_with_axis(x, y, None)
}

/// Evaluates `x % y`, aligning a lower-rank array operand at `axis`.
pub fn remainder_with_axis(x: impl Into<Operand>, y: impl Into<Operand>, axis: Option<usize>) -> Result<NdArray> {
    match (x.into(), y.into()) {
        (Operand::Raw(_), _) | (_, Operand::Raw(_)) => Err(Error::InvalidOperand(
            "expected an NdArray, got a raw host collection".to_string(),
        )),
        (Operand::Array(x), Operand::Array(y)) => x.remainder_with_axis(&y, axis),
        (Operand::Array(x), Operand::Scalar(y)) => x.remainder_scalar(y),
        (Operand::Scalar(_), _) => Err(Error::InvalidOperand(
            "a scalar dividend is not supported; the left operand must be an NdArray".to_string(),
        )),
    }
}

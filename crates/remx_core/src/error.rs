use crate::dtype::DType;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    DTypeMismatch {
        expected: DType,
        got: DType,
    },
    UnsupportedDType,
    InvalidOperand(String),
    InvalidArgument(String),
    IncompatibleShape(String),
    InvalidShape {
        message: String,
    },
    DimensionOutOfBounds {
        dim: usize,
        ndim: usize,
    },
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
    BufferShared,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DTypeMismatch { expected, got } => {
                write!(f, "DType mismatch: expected {:?}, got {:?}", expected, got)
            }
            Self::UnsupportedDType => write!(f, "Unsupported data type"),
            Self::InvalidOperand(msg) => write!(f, "Invalid operand: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::IncompatibleShape(msg) => write!(f, "Incompatible shape: {}", msg),
            Self::InvalidShape { message } => {
                write!(f, "Invalid shape: {}", message)
            }
            Self::DimensionOutOfBounds { dim, ndim } => {
                write!(
                    f,
                    "Dimension out of bounds: axis {} is not valid for an array with {} dimensions",
                    dim, ndim
                )
            }
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Index out of bounds: index {} is out of bounds for an array with size {}", index, size)
            }
            Self::BufferShared => write!(f, "Buffer is shared"),
        }
    }
}

impl std::error::Error for Error {}

#![allow(non_upper_case_globals)]

use crate::scalar::Scalar;

pub const float32: DType = DType::F32;
pub const float64: DType = DType::F64;
pub const int32: DType = DType::I32;
pub const int64: DType = DType::I64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    F32,
    F64,
    I32,
    I64,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
            Self::I32 => 4,
            Self::I64 => 8,
        }
    }

    #[allow(clippy::match_like_matches_macro)]
    pub fn is_int(&self) -> bool {
        match self {
            Self::I32 | Self::I64 => true,
            _ => false,
        }
    }

    pub fn is_float(&self) -> bool {
        match self {
            Self::F32 | Self::F64 => true,
            Self::I32 | Self::I64 => false,
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reading one element of this dtype.
    pub unsafe fn read_scalar(&self, ptr: *const u8) -> Scalar {
        match self {
            Self::F32 => Scalar::F32(std::ptr::read_unaligned(ptr as *const f32)),
            Self::F64 => Scalar::F64(std::ptr::read_unaligned(ptr as *const f64)),
            Self::I32 => Scalar::I32(std::ptr::read_unaligned(ptr as *const i32)),
            Self::I64 => Scalar::I64(std::ptr::read_unaligned(ptr as *const i64)),
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for writing one element of this dtype.
    pub unsafe fn write_scalar(&self, ptr: *mut u8, value: Scalar) {
        match self {
            Self::F32 => std::ptr::write_unaligned(ptr as *mut f32, value.as_f32()),
            Self::F64 => std::ptr::write_unaligned(ptr as *mut f64, value.as_f64()),
            Self::I32 => std::ptr::write_unaligned(ptr as *mut i32, value.as_i32()),
            Self::I64 => std::ptr::write_unaligned(ptr as *mut i64, value.as_i64()),
        }
    }
}

thread_local! {
    static DEFAULT_DTYPE: std::cell::Cell<DType> = const { std::cell::Cell::new(DType::F32) };
}

pub fn get_default_dtype() -> DType {
    DEFAULT_DTYPE.with(|d| d.get())
}

pub fn set_default_dtype(dtype: DType) {
    DEFAULT_DTYPE.with(|d| d.set(dtype));
}

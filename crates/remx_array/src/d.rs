use crate::NdArray;
use remx_core::dtype::DType;
use std::fmt;

macro_rules! impl_display_for_type {
    ($val_type:ty, $format:expr) => {
        fn display_array_data(f: &mut fmt::Formatter<'_>, data: &[$val_type], stride: usize, shape: &[usize]) -> fmt::Result {
            match shape.len() {
                0 => write!(f, "{}", data[0]),
                1 => {
                    write!(f, "[")?;
                    for (i, val) in data.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?
                        }
                        write!(f, $format, val)?;
                    }
                    write!(f, "]")
                }
                _ => {
                    let sub_stride = if shape[0] == 0 { 0 } else { stride / shape[0] };
                    write!(f, "[")?;
                    for i in 0..shape[0] {
                        display_array_data(f, &data[i * sub_stride..(i + 1) * sub_stride], sub_stride, &shape[1..])?;
                        if i < shape[0] - 1 {
                            write!(f, ", ")?;
                        }
                    }
                    write!(f, "]")
                }
            }
        }
    };
}

impl fmt::Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        macro_rules! handle_type {
            ($type:ty, $format:expr) => {{
                if let Ok(data) = self.to_flatten_vec::<$type>() {
                    impl_display_for_type!($type, $format);
                    display_array_data(f, &data, self.size(), self.shape())
                } else {
                    write!(f, "Failed to fetch data")
                }
            }};
        }

        match self.dtype() {
            DType::F32 => handle_type!(f32, "{:.8}"),
            DType::F64 => handle_type!(f64, "{:.8}"),
            DType::I32 => handle_type!(i32, "{}"),
            DType::I64 => handle_type!(i64, "{}"),
        }
    }
}

impl fmt::Debug for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NdArray(dtype={}, shape={:?}, data=", self.dtype().as_str(), self.shape())?;
        fmt::Display::fmt(self, f)?;
        write!(f, ")")
    }
}

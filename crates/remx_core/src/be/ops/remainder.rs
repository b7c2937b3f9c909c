use crate::{
    buffer::CpuBuffer,
    dtype::DType,
    error::{Error, Result},
};
use remx_cpu::ops::remainder::*;

macro_rules! impl_for_type {
    ($name:ident, $size:expr, $num_dims:expr, $dims:expr, $lhs:expr, $rhs:expr, $out:expr, $type:ty) => {
        paste::paste! {
            [<$name _ $type>](
                $size,
                $num_dims,
                $dims,
                $lhs.as_ptr() as *const $type,
                $rhs.as_ptr() as *const $type,
                $out.as_mut_ptr() as *mut $type,
            )
        }
    };
}

macro_rules! declare_remainder_op {
    ($name:ident, [$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            pub unsafe fn $name(
                output: &mut CpuBuffer,
                lhs: &CpuBuffer,
                rhs: &CpuBuffer,
                size: usize,
                num_dims: usize,
                metadata: Option<&[usize]>,
            ) -> Result<()> {
                assert_eq!(lhs.dtype(), rhs.dtype(), concat!("DType mismatch in ", stringify!($name)));
                assert_eq!(output.dtype(), lhs.dtype(), "Output dtype must match input dtype");

                let metadata: *const usize = metadata.map_or(std::ptr::null(), |d| d.as_ptr());

                match lhs.dtype() {
                    $(
                        DType::$dtype => impl_for_type!($name, size, num_dims, metadata, lhs, rhs, output, [<$dtype:lower>]),
                    )*
                    _ => return Err(Error::UnsupportedDType),
                }

                Ok(())
            }
        }
    };
}

declare_remainder_op!(remainder_int, [I32, I64]);
declare_remainder_op!(remainder_float, [F32, F64]);

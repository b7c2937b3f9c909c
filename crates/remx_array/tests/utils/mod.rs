use remx_array::{ArrayAdapter, NdArray};
use remx_core::{dtype::DType, error::Result};

// Helper functions
pub fn setup_array<T: ArrayAdapter>(data: T, dtype: DType) -> Result<NdArray> {
    NdArray::new_with_dtype(data, dtype)
}

pub fn setup_array_with_shape<T: ArrayAdapter>(data: T, dtype: DType, shape: &[usize]) -> Result<NdArray> {
    let mut array = NdArray::new_with_dtype(data, dtype)?;
    array.with_shape(shape)?;
    Ok(array)
}

#[macro_export]
macro_rules! test_ops_with_dtype {
    ([
        $($op:ident: [$($dtype:ident),*$(,)?]),*$(,)?
    ]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;
                paste! {
                    $(
                        #[test]
                        fn [<$dtype:lower>]() -> Result<()> {
                            test_functions::[<$op _test>](DType::$dtype)
                        }
                    )*
                }
            }
        )*
    };
}

mod utils;

use remx_array::NdArray;
use remx_core::{
    dtype::DType,
    error::{Error, Result},
};
use utils::{setup_array, setup_array_with_shape};

mod test_functions {
    use super::*;

    pub fn remainder_test(dtype: DType) -> Result<()> {
        match dtype {
            DType::I32 | DType::I64 => {
                let x = setup_array(vec![-3i64, 11, -2, 3], dtype)?;
                let y = setup_array(vec![-1i64, 2, 3, -2], dtype)?;

                let result = x.remainder(&y)?;

                assert_eq!(result.dtype(), dtype);
                assert_eq!(result.to_flatten_vec::<i64>()?, vec![0, 1, 1, -1]);
            }
            DType::F32 | DType::F64 => {
                let x = setup_array(vec![-3.3f64, 11.5, -2.0, 3.5], dtype)?;
                let y = setup_array(vec![-1.2f64, 2.0, 3.3, -2.3], dtype)?;

                let result = x.remainder(&y)?;
                let expected = [-0.9f64, 1.5, 1.3, -1.1];

                assert_eq!(result.dtype(), dtype);
                for (a, e) in result.to_flatten_vec::<f64>()?.iter().zip(expected.iter()) {
                    assert!((a - e).abs() < 1e-5, "expected value close to {}, got {}", e, a);
                }
            }
        }
        Ok(())
    }

    pub fn remainder_scalar_test(dtype: DType) -> Result<()> {
        match dtype {
            DType::I32 | DType::I64 => {
                let x = setup_array(vec![2i64, 3, 4], dtype)?;

                let result = x.remainder_scalar(2)?;

                assert_eq!(result.dtype(), dtype);
                assert_eq!(result.to_flatten_vec::<i64>()?, vec![0, 1, 0]);

                // A scalar divisor behaves exactly like a filled array
                let filled = x.remainder(&NdArray::fill_like(&x, 2)?)?;
                assert_eq!(result.to_flatten_vec::<i64>()?, filled.to_flatten_vec::<i64>()?);
            }
            DType::F32 | DType::F64 => {
                let x = setup_array(vec![1.0f64, 2.0, 4.0], dtype)?;

                let result = x.remainder_scalar(1.5)?;

                assert_eq!(result.dtype(), dtype);
                assert_eq!(result.to_flatten_vec::<f64>()?, vec![1.0, 0.5, 1.0]);

                let filled = x.remainder(&NdArray::fill_like(&x, 1.5)?)?;
                assert_eq!(result.to_flatten_vec::<f64>()?, filled.to_flatten_vec::<f64>()?);
            }
        }
        Ok(())
    }

    pub fn remainder_broadcast_test(dtype: DType) -> Result<()> {
        match dtype {
            DType::I32 | DType::I64 => {
                let x = setup_array(vec![-3i64, 3], dtype)?;
                let y = setup_array(vec![vec![2i64, 3], vec![-2, -1]], dtype)?;

                let result = x.remainder(&y)?;

                assert_eq!(result.shape(), &[2, 2]);
                assert_eq!(result.to_flatten_vec::<i64>()?, vec![1, 0, -1, 0]);
            }
            DType::F32 | DType::F64 => {
                let x = setup_array(vec![-3.0f64, -2.0, -1.0, 1.0, 2.0, 3.0], dtype)?;
                let y = setup_array(vec![2.0f64], dtype)?;

                let result = x.remainder(&y)?;

                assert_eq!(result.shape(), &[6]);
                assert_eq!(result.to_flatten_vec::<f64>()?, vec![1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
            }
        }
        Ok(())
    }

    pub fn remainder_axis_test(dtype: DType) -> Result<()> {
        match dtype {
            DType::I32 | DType::I64 => {
                let x = setup_array(vec![vec![1i64, 2, 3], vec![4, 5, 6]], dtype)?;
                let y = setup_array(vec![2i64, 3], dtype)?;

                let result = x.remainder_with_axis(&y, Some(0))?;

                assert_eq!(result.shape(), &[2, 3]);
                assert_eq!(result.to_flatten_vec::<i64>()?, vec![1, 0, 1, 1, 2, 0]);
            }
            DType::F32 | DType::F64 => {
                let x = setup_array(vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]], dtype)?;
                let y = setup_array(vec![1.5f64, 2.5], dtype)?;

                let result = x.remainder_with_axis(&y, Some(0))?;

                assert_eq!(result.shape(), &[2, 3]);
                assert_eq!(result.to_flatten_vec::<f64>()?, vec![1.0, 0.5, 0.0, 1.5, 0.0, 1.0]);
            }
        }

        // An axis that does not leave room for the divisor's dimensions
        let x = setup_array_with_shape(vec![0i64; 6], dtype, &[2, 3])?;
        let y = setup_array(vec![1i64, 1], dtype)?;
        match x.remainder_with_axis(&y, Some(2)) {
            Err(Error::DimensionOutOfBounds { dim: 2, ndim: 2 }) => {}
            _ => panic!("expected DimensionOutOfBounds for axis 2"),
        }

        Ok(())
    }

    pub fn remainder_random_test(dtype: DType) -> Result<()> {
        match dtype {
            DType::I32 | DType::I64 => {
                let x = NdArray::uniform_with_dtype(&[10, 10], 0.0, 10_000.0, dtype)?;
                let y = NdArray::uniform_with_dtype(&[10, 10], 1.0, 1_000.0, dtype)?;

                let result = x.remainder(&y)?;

                let xv = x.to_flatten_vec::<i64>()?;
                let yv = y.to_flatten_vec::<i64>()?;
                let expected: Vec<i64> = xv.iter().zip(yv.iter()).map(|(&a, &b)| a % b).collect();

                assert_eq!(result.to_flatten_vec::<i64>()?, expected);
            }
            DType::F32 => {
                let x = NdArray::uniform_with_dtype(&[10, 10], -1_000.0, 1_000.0, dtype)?;
                let y = NdArray::uniform_with_dtype(&[10, 10], -100.0, -1.0, dtype)?;

                let result = x.remainder(&y)?;

                let xv = x.to_flatten_vec::<f32>()?;
                let yv = y.to_flatten_vec::<f32>()?;
                let expected: Vec<f32> = xv.iter().zip(yv.iter()).map(|(&a, &b)| (b + a % b) % b).collect();
                let actual = result.to_flatten_vec::<f32>()?;

                assert_eq!(actual, expected);
                for (r, b) in actual.iter().zip(yv.iter()) {
                    assert!(*r == 0.0 || (*r < 0.0) == (*b < 0.0), "result {} must carry the sign of divisor {}", r, b);
                }
            }
            DType::F64 => {
                let x = NdArray::uniform_with_dtype(&[10, 10], -1_000.0, 1_000.0, dtype)?;
                let y = NdArray::uniform_with_dtype(&[10, 10], 1.0, 100.0, dtype)?;

                let result = x.remainder(&y)?;

                let xv = x.to_flatten_vec::<f64>()?;
                let yv = y.to_flatten_vec::<f64>()?;
                let expected: Vec<f64> = xv.iter().zip(yv.iter()).map(|(&a, &b)| (b + a % b) % b).collect();
                let actual = result.to_flatten_vec::<f64>()?;

                assert_eq!(actual, expected);
                for (r, b) in actual.iter().zip(yv.iter()) {
                    assert!(*r == 0.0 || (*r < 0.0) == (*b < 0.0), "result {} must carry the sign of divisor {}", r, b);
                }
            }
        }
        Ok(())
    }

    pub fn remainder_shape_mismatch_test(dtype: DType) -> Result<()> {
        let x = setup_array_with_shape(vec![1i64, 2, 3, 4], dtype, &[2, 2])?;
        let y = setup_array_with_shape(vec![1i64, 2, 3, 4, 5, 6], dtype, &[2, 3])?;

        match x.remainder(&y) {
            Err(Error::IncompatibleShape(_)) => {}
            Err(e) => panic!("expected IncompatibleShape, got {}", e),
            Ok(_) => panic!("expected IncompatibleShape, got a result"),
        }

        Ok(())
    }
}

test_ops_with_dtype!([
    remainder: [I32, I64, F32, F64],
    remainder_scalar: [I32, I64, F32, F64],
    remainder_broadcast: [I32, I64, F32, F64],
    remainder_axis: [I32, I64, F32, F64],
    remainder_random: [I32, I64, F32, F64],
    remainder_shape_mismatch: [I32, I64, F32, F64],
]);

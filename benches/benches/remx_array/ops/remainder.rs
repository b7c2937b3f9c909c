use criterion::{black_box, Criterion};
use remx_array::NdArray;
use remx_core::{dtype::DType, error::Result};

// Constants for benchmark data sizes
const SIZES: [(usize, &str); 3] = [(100, "small"), (5000, "medium"), (10000, "large")];

const DTYPES: [DType; 4] = [DType::I32, DType::I64, DType::F32, DType::F64];

// Helper function for array creation and benchmarking
fn bench_remainder_op<F>(b: &mut criterion::Bencher, dtype: DType, size: usize, op_fn: F)
where
    F: Fn(&NdArray, &NdArray) -> Result<NdArray>,
{
    // Dividends swing negative, divisors stay away from zero
    let x_data: Vec<f64> = (0..size).map(|i| i as f64 - size as f64 / 2.0).collect();
    let y_data: Vec<f64> = (0..size).map(|i| (i % 97) as f64 + 1.0).collect();

    let x = NdArray::new_with_dtype(x_data, dtype).unwrap();
    let y = NdArray::new_with_dtype(y_data, dtype).unwrap();

    b.iter(|| black_box(op_fn(&x, &y)).unwrap())
}

pub fn basic(c: &mut Criterion) {
    let mut group = c.benchmark_group("remainder");

    for (size, label) in SIZES {
        for dtype in DTYPES {
            group.bench_function(format!("{}_{}", dtype.as_str(), label), |b| {
                bench_remainder_op(b, dtype, size, |x, y| x.remainder(y));
            });
        }
    }

    group.finish();
}

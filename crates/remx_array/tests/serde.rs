#![cfg(feature = "serde")]

use remx_array::NdArray;
use remx_core::{dtype::DType, error::Result};

#[test]
fn json_round_trip() -> Result<()> {
    let mut x = NdArray::new_with_dtype(vec![-3i64, 11, -2, 3], DType::I64)?;
    x.with_shape(&[2, 2])?;

    let json = serde_json::to_string(&x).expect("serialize to json");
    let restored: NdArray = serde_json::from_str(&json).expect("deserialize from json");

    assert_eq!(restored.dtype(), DType::I64);
    assert_eq!(restored.shape(), &[2, 2]);
    assert_eq!(restored.to_flatten_vec::<i64>()?, x.to_flatten_vec::<i64>()?);

    Ok(())
}

#[test]
fn bincode_round_trip() -> Result<()> {
    let x = NdArray::new_with_dtype(vec![-3.3f64, 11.5, -2.0, 3.5], DType::F64)?;

    let bytes = bincode::serde::encode_to_vec(&x, bincode::config::standard()).expect("encode");
    let (restored, _): (NdArray, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard()).expect("decode");

    assert_eq!(restored.dtype(), DType::F64);
    assert_eq!(restored.shape(), &[4]);
    assert_eq!(restored.to_flatten_vec::<f64>()?, x.to_flatten_vec::<f64>()?);

    Ok(())
}

#[test]
fn round_trip_preserves_op_results() -> Result<()> {
    let x = NdArray::new_with_dtype(vec![-3.0f64, -2.0, -1.0, 1.0, 2.0, 3.0], DType::F64)?;
    let y = NdArray::new_with_dtype(vec![2.0f64], DType::F64)?;
    let z = x.remainder(&y)?;

    let json = serde_json::to_string(&z).expect("serialize to json");
    let restored: NdArray = serde_json::from_str(&json).expect("deserialize from json");

    assert_eq!(restored.to_flatten_vec::<f64>()?, vec![1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);

    Ok(())
}

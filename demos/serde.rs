use remx::prelude::*;

fn main() -> Result<()> {
    let x = NdArray::new_with_dtype(vec![vec![-3.3f64, 11.5], vec![-2.0, 3.5]], float64)?;
    let y = NdArray::new_with_dtype(vec![vec![-1.2f64, 2.0], vec![3.3, -2.3]], float64)?;
    let z = x.remainder(&y)?;

    let json = serde_json::to_string(&z).expect("serialize to json");
    println!("json: {}", json);

    let restored: NdArray = serde_json::from_str(&json).expect("deserialize from json");
    println!("restored: {}", restored);

    let bytes = bincode::serde::encode_to_vec(&z, bincode::config::standard()).expect("encode");
    let (decoded, _): (NdArray, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard()).expect("decode");
    println!("bincode: {} bytes -> {}", bytes.len(), decoded);

    Ok(())
}

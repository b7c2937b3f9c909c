use remx::prelude::*;

fn main() -> Result<()> {
    set_default_dtype(float64);

    let x = NdArray::new(vec![1.0, 2.0, 4.0])?;
    let y = NdArray::new(vec![1.5])?;
    println!("x % y = {}", &x % &y);

    let ints = NdArray::new_with_dtype(vec![2, 3, 4], int32)?;
    println!("ints % 2 = {}", &ints % 2);

    let z = remainder(&x, 2.0)?;
    println!("remainder(x, 2.0) = {}", z);

    let wide = NdArray::new_with_dtype(vec![vec![2i64, 3], vec![-2, -1]], int64)?;
    let narrow = NdArray::new_with_dtype(vec![-3i64, 3], int64)?;
    println!("broadcast result = {}", remainder(&narrow, &wide)?);

    // A raw host vector is not an array and gets rejected
    match remainder(&x, vec![1.0, 2.0, 3.0]) {
        Err(e) => println!("raw divisor: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}

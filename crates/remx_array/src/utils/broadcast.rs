use remx_core::error::{Error, Result};

use crate::NdArray;

pub fn compute_broadcast_shape(lhs_shape: &[usize], rhs_shape: &[usize]) -> Result<Vec<usize>> {
    // Special case: if lhs is a scalar (empty shape), use rhs shape
    if lhs_shape.is_empty() {
        return Ok(rhs_shape.to_vec());
    }

    // Special case: if rhs is a scalar (empty shape), use lhs shape
    if rhs_shape.is_empty() {
        return Ok(lhs_shape.to_vec());
    }

    let max_rank = lhs_shape.len().max(rhs_shape.len());
    let mut broadcasted_shape = Vec::with_capacity(max_rank);

    // Pad shapes with 1s
    let padded_lhs = pad_shape(lhs_shape, max_rank);
    let padded_rhs = pad_shape(rhs_shape, max_rank);

    // Compare dimensions and build output shape
    for (i, (&dim1, &dim2)) in padded_lhs.iter().zip(padded_rhs.iter()).enumerate() {
        if dim1 != 1 && dim2 != 1 && dim1 != dim2 {
            return Err(Error::IncompatibleShape(format!(
                "Cannot broadcast shapes {:?} and {:?} at dimension {}",
                lhs_shape, rhs_shape, i
            )));
        }
        broadcasted_shape.push(dim1.max(dim2));
    }

    Ok(broadcasted_shape)
}

pub fn pad_shape(shape: &[usize], target_rank: usize) -> Vec<usize> {
    let mut padded = vec![1; target_rank - shape.len()];
    padded.extend(shape);
    padded
}

/// Pads `shape` to `target_rank` with the original dimensions placed at
/// `axis` instead of right-aligned.
pub fn pad_shape_at(shape: &[usize], target_rank: usize, axis: usize) -> Result<Vec<usize>> {
    if axis + shape.len() > target_rank {
        return Err(Error::DimensionOutOfBounds {
            dim: axis,
            ndim: target_rank,
        });
    }

    let mut padded = vec![1; axis];
    padded.extend(shape);
    padded.resize(target_rank, 1);
    Ok(padded)
}

/// Expands both operands to their common broadcast shape. With an
/// explicit `axis` the lower-rank operand is aligned at that position
/// first; the default aligns trailing dimensions.
pub fn broadcast_operands(lhs: &NdArray, rhs: &NdArray, axis: Option<usize>) -> Result<(NdArray, NdArray)> {
    let (lhs, rhs) = match axis {
        Some(axis) => align_at_axis(lhs, rhs, axis)?,
        None => (lhs.clone(), rhs.clone()),
    };

    let output_shape = compute_broadcast_shape(lhs.shape(), rhs.shape())?;
    let lhs = lhs.broadcast(&output_shape)?;
    let rhs = rhs.broadcast(&output_shape)?;

    Ok((lhs, rhs))
}

fn align_at_axis(lhs: &NdArray, rhs: &NdArray, axis: usize) -> Result<(NdArray, NdArray)> {
    if lhs.ndim() >= rhs.ndim() {
        let padded = pad_shape_at(rhs.shape(), lhs.ndim(), axis)?;
        let mut rhs = rhs.clone();
        rhs.with_shape(&padded)?;
        Ok((lhs.clone(), rhs))
    } else {
        let padded = pad_shape_at(lhs.shape(), rhs.ndim(), axis)?;
        let mut lhs = lhs.clone();
        lhs.with_shape(&padded)?;
        Ok((lhs, rhs.clone()))
    }
}

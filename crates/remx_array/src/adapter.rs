use remx_core::{
    dtype::DType,
    error::{Error, Result},
    scalar::Scalar,
};

/// Primitive element types an [`crate::NdArray`] can hold.
pub trait ElemType: Copy + Default + Into<Scalar> + 'static {
    const DTYPE: DType;

    fn from_scalar(value: Scalar) -> Self;
}

macro_rules! impl_elem_type {
    ($($type:ty => $dtype:ident, $accessor:ident),* $(,)?) => {
        $(
            impl ElemType for $type {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn from_scalar(value: Scalar) -> Self {
                    value.$accessor()
                }
            }
        )*
    };
}

impl_elem_type! {
    f32 => F32, as_f32,
    f64 => F64, as_f64,
    i32 => I32, as_i32,
    i64 => I64, as_i64,
}

/// Host data that can seed an array: flat or nested vectors and slices.
/// Nested levels must be rectangular.
pub trait ArrayAdapter {
    type Elem: ElemType;

    fn to_shape(&self) -> Vec<usize>;
    fn to_flat_vec(self) -> Result<Vec<Self::Elem>>;
    fn dtype(&self) -> DType {
        Self::Elem::DTYPE
    }
}

impl<T: ElemType> ArrayAdapter for Vec<T> {
    type Elem = T;

    fn to_shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn to_flat_vec(self) -> Result<Vec<T>> {
        Ok(self)
    }
}

impl<T: ElemType> ArrayAdapter for &[T] {
    type Elem = T;

    fn to_shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn to_flat_vec(self) -> Result<Vec<T>> {
        Ok(self.to_vec())
    }
}

impl<T: ElemType> ArrayAdapter for Vec<Vec<T>> {
    type Elem = T;

    fn to_shape(&self) -> Vec<usize> {
        vec![self.len(), self.first().map_or(0, |row| row.len())]
    }

    fn to_flat_vec(self) -> Result<Vec<T>> {
        let cols = self.first().map_or(0, |row| row.len());
        let mut flat = Vec::with_capacity(self.len() * cols);
        for row in self {
            if row.len() != cols {
                return Err(Error::InvalidShape {
                    message: format!("Ragged nested data: expected row length {}, got {}", cols, row.len()),
                });
            }
            flat.extend(row);
        }
        Ok(flat)
    }
}

impl<T: ElemType> ArrayAdapter for Vec<Vec<Vec<T>>> {
    type Elem = T;

    fn to_shape(&self) -> Vec<usize> {
        let rows = self.first().map_or(0, |plane| plane.len());
        let cols = self
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, |row| row.len());
        vec![self.len(), rows, cols]
    }

    fn to_flat_vec(self) -> Result<Vec<T>> {
        let rows = self.first().map_or(0, |plane| plane.len());
        let cols = self
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, |row| row.len());
        let mut flat = Vec::with_capacity(self.len() * rows * cols);
        for plane in self {
            if plane.len() != rows {
                return Err(Error::InvalidShape {
                    message: format!("Ragged nested data: expected {} rows, got {}", rows, plane.len()),
                });
            }
            for row in plane {
                if row.len() != cols {
                    return Err(Error::InvalidShape {
                        message: format!("Ragged nested data: expected row length {}, got {}", cols, row.len()),
                    });
                }
                flat.extend(row);
            }
        }
        Ok(flat)
    }
}

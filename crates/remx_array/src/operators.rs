use crate::NdArray;
use std::ops::Rem;

impl Rem<&NdArray> for &NdArray {
    type Output = NdArray;

    fn rem(self, rhs: &NdArray) -> Self::Output {
        NdArray::remainder(self, rhs).unwrap()
    }
}

impl Rem<NdArray> for &NdArray {
    type Output = NdArray;

    fn rem(self, rhs: NdArray) -> Self::Output {
        NdArray::remainder(self, &rhs).unwrap()
    }
}

impl Rem<&NdArray> for NdArray {
    type Output = NdArray;

    fn rem(self, rhs: &NdArray) -> Self::Output {
        NdArray::remainder(&self, rhs).unwrap()
    }
}

impl Rem<NdArray> for NdArray {
    type Output = NdArray;

    fn rem(self, rhs: NdArray) -> Self::Output {
        NdArray::remainder(&self, &rhs).unwrap()
    }
}

macro_rules! impl_rem_scalar {
    ($($type:ty),* $(,)?) => {
        $(
            impl Rem<$type> for &NdArray {
                type Output = NdArray;

                fn rem(self, rhs: $type) -> Self::Output {
                    NdArray::remainder_scalar(self, rhs).unwrap()
                }
            }

            impl Rem<$type> for NdArray {
                type Output = NdArray;

                fn rem(self, rhs: $type) -> Self::Output {
                    NdArray::remainder_scalar(&self, rhs).unwrap()
                }
            }
        )*
    };
}

impl_rem_scalar!(f32, f64, i32, i64);

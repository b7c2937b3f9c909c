use crate::dtype::DType;

macro_rules! numeric_variants {
    ($($variant:ident => $type:ty),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Scalar {
            $($variant($type),)*
        }

        impl Scalar {
            #[inline]
            pub fn new<T: Into<Self>>(value: T) -> Self {
                value.into()
            }

            #[inline]
            pub fn dtype(&self) -> DType {
                match self {
                    $(Self::$variant(_) => DType::$variant,)*
                }
            }

            #[inline]
            pub fn is_int(&self) -> bool {
                match self {
                    Self::F32(_) | Self::F64(_) => false,
                    Self::I32(_) | Self::I64(_) => true,
                }
            }

            #[inline]
            pub fn is_float(&self) -> bool {
                match self {
                    Self::F32(_) | Self::F64(_) => true,
                    Self::I32(_) | Self::I64(_) => false,
                }
            }

            #[inline]
            pub fn as_f64_any(&self) -> f64 {
                match *self {
                    $(
                        Self::$variant(x) => {
                            numeric_variants!(@as_f64 $variant, x)
                        },
                    )*
                }
            }

            $(
                paste::paste! {
                    #[inline]
                    pub fn [<as_ $variant:lower>](&self) -> $type {
                        match *self {
                            Self::$variant(x) => x,
                            _ => numeric_variants!(@convert $variant => self.as_f64_any()),
                        }
                    }
                }
            )*
        }

        $(
            impl From<$type> for Scalar {
                #[inline]
                fn from(x: $type) -> Self {
                    Self::$variant(x)
                }
            }
        )*
    };

    (@as_f64 F32, $x:ident) => {
        $x as f64
    };
    (@as_f64 F64, $x:ident) => {
        $x
    };
    (@as_f64 I32, $x:ident) => {
        $x as f64
    };
    (@as_f64 I64, $x:ident) => {
        $x as f64
    };

    (@convert F32 => $val:expr) => {
        $val as f32
    };
    (@convert F64 => $val:expr) => {
        $val
    };
    (@convert I32 => $val:expr) => {
        $val.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    };
    (@convert I64 => $val:expr) => {
        $val.clamp(i64::MIN as f64, i64::MAX as f64) as i64
    };
}

numeric_variants! {
    F32 => f32,
    F64 => f64,
    I32 => i32,
    I64 => i64,
}

//! Element types a raster may hold

/// Declared element kind of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
}

impl SampleKind {
    pub fn is_float(self) -> bool {
        matches!(self, SampleKind::F32 | SampleKind::F64)
    }

    /// Representable range of the element type, the widest level range that
    /// makes sense for data of this kind.
    pub fn value_range(self) -> (f64, f64) {
        match self {
            SampleKind::I8 => (i8::MIN as f64, i8::MAX as f64),
            SampleKind::U8 => (0.0, u8::MAX as f64),
            SampleKind::I16 => (i16::MIN as f64, i16::MAX as f64),
            SampleKind::U16 => (0.0, u16::MAX as f64),
            SampleKind::I32 => (i32::MIN as f64, i32::MAX as f64),
            SampleKind::U32 => (0.0, u32::MAX as f64),
            SampleKind::F32 => (f32::MIN as f64, f32::MAX as f64),
            SampleKind::F64 => (f64::MIN, f64::MAX),
        }
    }
}

/// A numeric sample type the engine can read.
pub trait Scalar: Copy + Send + Sync + 'static {
    const KIND: SampleKind;

    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                const KIND: SampleKind = SampleKind::$kind;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    f32 => F32,
    f64 => F64,
}

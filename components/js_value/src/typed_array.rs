//! TypedArray element kinds
//!
//! Element storage is kept as `f64` after conversion to the kind's numeric
//! domain, which is all the classification layer needs to observe.

/// TypedArray element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    Uint8,
    /// 8-bit unsigned integer (clamped)
    Uint8Clamped,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    Uint32,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// 64-bit signed BigInt
    BigInt64,
    /// 64-bit unsigned BigInt
    BigUint64,
}

impl TypedArrayKind {
    /// Every kind in constructor order
    pub const ALL: [TypedArrayKind; 11] = [
        TypedArrayKind::Int8,
        TypedArrayKind::Uint8,
        TypedArrayKind::Uint8Clamped,
        TypedArrayKind::Int16,
        TypedArrayKind::Uint16,
        TypedArrayKind::Int32,
        TypedArrayKind::Uint32,
        TypedArrayKind::Float32,
        TypedArrayKind::Float64,
        TypedArrayKind::BigInt64,
        TypedArrayKind::BigUint64,
    ];

    /// Get the byte size of each element for this kind
    pub fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// Get the constructor name of this TypedArray kind
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Look a kind up by constructor name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether elements are BigInts rather than numbers
    pub fn is_bigint(&self) -> bool {
        matches!(self, TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64)
    }

    /// Convert a number into this kind's element domain
    pub fn coerce(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return match self {
                TypedArrayKind::Float32 | TypedArrayKind::Float64 => value,
                TypedArrayKind::Uint8Clamped if value == f64::INFINITY => 255.0,
                _ => 0.0,
            };
        }
        match self {
            TypedArrayKind::Int8 => value.trunc() as i64 as i8 as f64,
            TypedArrayKind::Uint8 => value.trunc() as i64 as u8 as f64,
            TypedArrayKind::Uint8Clamped => clamp_round_half_even(value),
            TypedArrayKind::Int16 => value.trunc() as i64 as i16 as f64,
            TypedArrayKind::Uint16 => value.trunc() as i64 as u16 as f64,
            TypedArrayKind::Int32 => value.trunc() as i64 as i32 as f64,
            TypedArrayKind::Uint32 => value.trunc() as i64 as u32 as f64,
            TypedArrayKind::Float32 => value as f32 as f64,
            TypedArrayKind::Float64 => value,
            TypedArrayKind::BigInt64 => value.trunc() as i64 as f64,
            TypedArrayKind::BigUint64 => value.trunc() as i64 as u64 as f64,
        }
    }
}

fn clamp_round_half_even(value: f64) -> f64 {
    let clamped = value.clamp(0.0, 255.0);
    let floor = clamped.floor();
    let diff = clamped - floor;
    if diff > 0.5 || (diff == 0.5 && floor % 2.0 != 0.0) {
        floor + 1.0
    } else {
        floor
    }
}

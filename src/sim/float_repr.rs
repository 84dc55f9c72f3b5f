//! Serde helper for float fields that may hold NaN or ±Inf
//!
//! Works for `f64` and `f32`. Finite values are plain JSON numbers. Non-finite values, which JSON cannot
//! represent, are written as the strings `"NaN"`, `"inf"` and `"-inf"`.
//! Use with `#[serde(with = "float_repr")]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub trait Float: Copy + for<'de> Deserialize<'de> {
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn classify(self) -> Option<&'static str>;
    fn serialize_number<S: Serializer>(self, serializer: S) -> Result<S::Ok, S::Error>;
}

macro_rules! impl_float {
    ($ty:ty, $method:ident) => {
        impl Float for $ty {
            const NAN: Self = <$ty>::NAN;
            const INFINITY: Self = <$ty>::INFINITY;
            const NEG_INFINITY: Self = <$ty>::NEG_INFINITY;

            fn classify(self) -> Option<&'static str> {
                if self.is_finite() {
                    None
                } else if self.is_nan() {
                    Some("NaN")
                } else if self > 0.0 {
                    Some("inf")
                } else {
                    Some("-inf")
                }
            }

            fn serialize_number<S: Serializer>(self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.$method(self)
            }
        }
    };
}

impl_float!(f64, serialize_f64);
impl_float!(f32, serialize_f32);

pub fn serialize<T: Float, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    match value.classify() {
        Some(text) => serializer.serialize_str(text),
        None => value.serialize_number(serializer),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Number(T),
    Text(String),
}

pub fn deserialize<'de, T: Float, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    match Repr::<T>::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            "NaN" => Ok(T::NAN),
            "inf" => Ok(T::INFINITY),
            "-inf" => Ok(T::NEG_INFINITY),
            other => Err(D::Error::custom(format!("expected a number, got {other:?}"))),
        },
    }
}

//! Literal integer discriminants.
//!
//! Shapes whose discriminant may only take one value store it as a
//! [`MustBeU8`]. Deserializing any other integer fails, so a payload can't be
//! decoded into the wrong shape by accident.

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Unexpected, Visitor},
    ser::{Serialize, Serializer},
};
use std::fmt::{Formatter, Result as FmtResult};

/// Discriminant fixed to the value `N`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MustBeU8<const N: u8>;

impl<const N: u8> MustBeU8<N> {
    /// Literal value of the discriminant.
    pub const VALUE: u8 = N;
}

impl<'de, const N: u8> Deserialize<'de> for MustBeU8<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MustBeVisitor<const N: u8>;

        impl<const N: u8> Visitor<'_> for MustBeVisitor<N> {
            type Value = MustBeU8<N>;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "the integer {}", N)
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
                if value == u64::from(N) {
                    Ok(MustBeU8)
                } else {
                    Err(DeError::invalid_value(Unexpected::Unsigned(value), &self))
                }
            }

            fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
                if value == i64::from(N) {
                    Ok(MustBeU8)
                } else {
                    Err(DeError::invalid_value(Unexpected::Signed(value), &self))
                }
            }
        }

        deserializer.deserialize_any(MustBeVisitor::<N>)
    }
}

impl<const N: u8> Serialize for MustBeU8<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(N)
    }
}

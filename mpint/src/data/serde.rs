//! Serialization support for `Int`
//!
//! An `Int` serializes as a struct with a `neg` flag and the little-endian
//! vector of magnitude digits. The digit width is a compile-time parameter,
//! so the representation is only portable between builds with the same
//! `DIGIT_BITS`. Deserialization validates digits against the payload mask
//! and re-clamps, so malformed input cannot produce a non-canonical value.

use alloc::vec::Vec;
use core::fmt;

use serde::{
    de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor},
    ser::{Serialize, SerializeStruct, Serializer},
};

use crate::{mpint_internals::Digit, Int, Sign};

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("Int", 2)?;
        st.serialize_field("neg", &self.is_neg())?;
        st.serialize_field("digits", self.as_le_digits())?;
        st.end()
    }
}

fn int_from_parts<E: de::Error>(neg: bool, digits: &[Digit]) -> Result<Int, E> {
    let sign = if neg { Sign::Neg } else { Sign::Pos };
    Int::from_le_digits(digits, sign).map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        const FIELDS: &[&str] = &["neg", "digits"];

        enum Field {
            Neg,
            Digits,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                struct FieldVisitor;

                impl Visitor<'_> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("`neg` or `digits`")
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                        match v {
                            "neg" => Ok(Field::Neg),
                            "digits" => Ok(Field::Digits),
                            _ => Err(de::Error::unknown_field(v, FIELDS)),
                        }
                    }
                }

                d.deserialize_identifier(FieldVisitor)
            }
        }

        struct IntVisitor;

        impl<'de> Visitor<'de> for IntVisitor {
            type Value = Int;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("struct Int")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Int, A::Error> {
                let neg: bool = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let digits: Vec<Digit> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                int_from_parts(neg, &digits)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Int, A::Error> {
                let mut neg: Option<bool> = None;
                let mut digits: Option<Vec<Digit>> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Neg => {
                            if neg.is_some() {
                                return Err(de::Error::duplicate_field("neg"))
                            }
                            neg = Some(map.next_value()?);
                        }
                        Field::Digits => {
                            if digits.is_some() {
                                return Err(de::Error::duplicate_field("digits"))
                            }
                            digits = Some(map.next_value()?);
                        }
                    }
                }
                let neg = neg.ok_or_else(|| de::Error::missing_field("neg"))?;
                let digits = digits.ok_or_else(|| de::Error::missing_field("digits"))?;
                int_from_parts(neg, &digits)
            }
        }

        d.deserialize_struct("Int", FIELDS, IntVisitor)
    }
}

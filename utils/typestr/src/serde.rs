// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Serde impls for character sequence types.
//!
//! A sequence serializes as its decoded string. Deserialization is a
//! verification: the input must equal the decoded string exactly, which makes
//! sequence types usable as static tags in wire formats — a mismatched tag
//! surfaces as a deserialization error, not as silently divergent data.

use core::fmt;

use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::seq::{Ch, Nul, TypeStr};

struct ExactVisitor(&'static str);

impl<'de> Visitor<'de> for ExactVisitor {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the string {:?}", self.0)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<(), E> {
        if v == self.0 {
            Ok(())
        } else {
            Err(E::invalid_value(Unexpected::Str(v), &self))
        }
    }
}

impl Serialize for Nul {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::STR)
    }
}

impl<const C: char, T> Serialize for Ch<C, T>
where
    Self: TypeStr,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::STR)
    }
}

impl<'de> Deserialize<'de> for Nul {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ExactVisitor(Self::STR))?;
        Ok(Nul)
    }
}

impl<'de, const C: char, T> Deserialize<'de> for Ch<C, T>
where
    Self: TypeStr,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ExactVisitor(Self::STR))?;
        Ok(Self::new())
    }
}

//! Identifier newtypes and client integer normalization
//!
//! Clients send integers either as JSON numbers or as numeric strings
//! (`"2"` from HTML form values). [`IntOrString`] accepts both and is
//! converted to `i32` once, at the request boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Store-assigned question identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct QuestionId(pub i32);

/// Store-assigned category identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CategoryId(pub i32);

impl CategoryId {
    /// Quiz sentinel meaning "every category".
    pub const ALL: CategoryId = CategoryId(0);

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer as sent by a client: a JSON number or a string holding one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    /// Normalize to `i32`, reporting failures against `field`.
    pub fn to_i32(&self, field: &'static str) -> Result<i32, ValidationError> {
        let wide = match self {
            Self::Int(n) => *n,
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
                field,
                reason: "expected an integer",
            })?,
        };

        i32::try_from(wide).map_err(|_| ValidationError::InvalidFormat {
            field,
            reason: "integer out of range",
        })
    }
}

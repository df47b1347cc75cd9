//! Request extractors
//!
//! Wrappers around axum's `Path` and `Json` whose rejections are reported as
//! [`AppError`] so malformed input gets the same JSON error body as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts, Path};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Integer `:id` path segment; anything else is a 404
#[derive(Debug, FromRequestParts)]
#[from_request(rejection(AppError))]
pub struct IdPath(#[from_request(via(Path))] pub i32);

/// JSON request body; syntax and shape errors are a 400
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// A create body holding either a single object or an array of them.
///
/// The response mirrors the request: one object in, one view out.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn is_one(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    /// Re-wrap results in the shape of the request they answer
    pub fn shaped(one: bool, mut items: Vec<T>) -> Result<Self, AppError> {
        if !one {
            return Ok(OneOrMany::Many(items));
        }
        match (items.pop(), items.is_empty()) {
            (Some(item), true) => Ok(OneOrMany::One(item)),
            _ => Err(AppError::Internal(
                "single create produced an unexpected number of rows".to_string(),
            )),
        }
    }
}

// Dispatch on the JSON shape first so field errors (unknown or missing keys)
// surface instead of a generic untagged-enum mismatch.
impl<'de, T: DeserializeOwned> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_array() {
            serde_json::from_value(value)
                .map(OneOrMany::Many)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(OneOrMany::One)
                .map_err(de::Error::custom)
        }
    }
}

//! Named configuration attributes with defaults.
//!
//! Blueprints and behaviors are populated from string key/value pairs.  Every
//! accessor takes a default so absent keys are never an error; *malformed*
//! values are — configuration problems must surface at load time, not
//! mid-session.
//!
//! Range-valued attributes use the `"min~max"` token format, e.g.
//! `healing_power = "1~3"`.

use std::collections::BTreeMap;

use crate::{CoreError, CoreResult};

/// An ordered map of named string attributes.
///
/// Backed by a `BTreeMap` so iteration (and the serialized form) is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AttributeMap {
    inner: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `"key=value;key=value"` list (the blueprint CSV `attrs`
    /// column).  Empty input yields an empty map; a segment without `=` is a
    /// fatal parse error.
    pub fn parse_kv_list(input: &str) -> CoreResult<Self> {
        let mut map = Self::new();
        for segment in input.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((key, value)) = segment.split_once('=') else {
                return Err(CoreError::Parse(format!(
                    "attribute segment {segment:?} is not key=value"
                )));
            };
            map.set(key.trim(), value.trim());
        }
        Ok(map)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.inner.insert(key.to_owned(), value.to_owned());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The attribute as `f64`, or `default` when absent.
    pub fn get_f64_or(&self, key: &str, default: f64) -> CoreResult<f64> {
        match self.inner.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| {
                CoreError::Parse(format!("attribute {key:?}: {raw:?} is not a number"))
            }),
        }
    }

    /// The attribute as `i32`, or `default` when absent.
    pub fn get_i32_or(&self, key: &str, default: i32) -> CoreResult<i32> {
        match self.inner.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| {
                CoreError::Parse(format!("attribute {key:?}: {raw:?} is not an integer"))
            }),
        }
    }

    /// The attribute as a `"min~max"` integer range, or `default` when absent.
    ///
    /// Both bounds must parse and `min <= max` must hold.
    pub fn get_range_or(&self, key: &str, default: (i32, i32)) -> CoreResult<(i32, i32)> {
        let Some(raw) = self.inner.get(key) else {
            return Ok(default);
        };
        let Some((lo, hi)) = raw.split_once('~') else {
            return Err(CoreError::Parse(format!(
                "attribute {key:?}: {raw:?} is not a min~max range"
            )));
        };
        let parse = |s: &str| -> CoreResult<i32> {
            s.trim().parse().map_err(|_| {
                CoreError::Parse(format!("attribute {key:?}: {s:?} is not an integer"))
            })
        };
        let (min, max) = (parse(lo)?, parse(hi)?);
        if min > max {
            return Err(CoreError::Parse(format!(
                "attribute {key:?}: range {raw:?} has min > max"
            )));
        }
        Ok((min, max))
    }
}

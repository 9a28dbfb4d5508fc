//! Flat string parameters sent as a request body.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Display;

use serde::Serialize;
use teleapi_types::ChatId;

use crate::error::{Error, Result};

/// Field name to wire-ready value.
///
/// Values are always stored encoded: numbers in decimal, booleans as
/// `"true"`/`"false"`, nested structures as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

/// Numeric values that are omitted when zero.
pub trait NumParam: Copy {
    fn is_zero(self) -> bool;
    fn encode(self) -> String;
}

macro_rules! int_param {
    ($($ty:ty),*) => {$(
        impl NumParam for $ty {
            fn is_zero(self) -> bool {
                self == 0
            }

            fn encode(self) -> String {
                self.to_string()
            }
        }
    )*};
}

int_param!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl NumParam for f64 {
    fn is_zero(self) -> bool {
        self == 0.0
    }

    fn encode(self) -> String {
        self.to_string()
    }
}

/// One alternative for [`Params::add_first_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    Int(i64),
    Str(&'a str),
}

impl Candidate<'_> {
    fn encode(self) -> Option<String> {
        match self {
            Self::Int(0) | Self::Str("") => None,
            Self::Int(value) => Some(value.to_string()),
            Self::Str(value) => Some(value.to_string()),
        }
    }
}

impl From<i64> for Candidate<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a ChatId> for Candidate<'a> {
    fn from(value: &'a ChatId) -> Self {
        match value {
            ChatId::Id(id) => Self::Int(*id),
            ChatId::Username(username) => Self::Str(username),
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value unconditionally.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Copies every entry of `other` into `self`, overwriting duplicates.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    pub fn add_non_zero<N: NumParam>(&mut self, key: &str, value: N) {
        if !value.is_zero() {
            self.insert(key, value.encode());
        }
    }

    pub fn add_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    /// Writes `"true"` or `"false"`, never omitting the key.
    pub fn add_bool(&mut self, key: &str, value: bool) {
        self.insert(key, if value { "true" } else { "false" });
    }

    /// Writes `"true"` when set and leaves the key absent otherwise.
    pub fn add_flag(&mut self, key: &str, value: bool) {
        if value {
            self.insert(key, "true");
        }
    }

    /// Writes the display form of `value` when present.
    pub fn add_some<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.insert(key, value.to_string());
        }
    }

    /// Writes the first non-zero / non-empty candidate.
    ///
    /// Fails with [`Error::InvalidParameter`] when no candidate qualifies.
    pub fn add_first_valid(&mut self, key: &str, candidates: &[Candidate<'_>]) -> Result<()> {
        if self.add_first_present(key, candidates) {
            Ok(())
        } else {
            Err(Error::invalid_parameter(key))
        }
    }

    /// Like [`Params::add_first_valid`] for optional keys; returns whether a
    /// value was written.
    pub fn add_first_present(&mut self, key: &str, candidates: &[Candidate<'_>]) -> bool {
        match candidates.iter().find_map(|candidate| candidate.encode()) {
            Some(value) => {
                self.insert(key, value);
                true
            }
            None => false,
        }
    }

    /// Required chat target.
    pub fn add_chat_id(&mut self, key: &str, chat_id: &ChatId) -> Result<()> {
        self.add_first_valid(key, &[chat_id.into()])
    }

    /// Serializes `value` as JSON text. A value encoding to `null` is skipped.
    pub fn add_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_string(value).map_err(|source| Error::Serialization {
            key: key.to_string(),
            source,
        })?;
        if encoded != "null" {
            self.insert(key, encoded);
        }
        Ok(())
    }

    /// Serializes a list as JSON text, skipping it when empty.
    pub fn add_json_list<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.add_json(key, items)
    }

    /// Verifies that every key in `keys` has been written.
    pub fn require(&self, keys: &[&str]) -> Result<()> {
        match keys.iter().copied().find(|key| !self.contains_key(key)) {
            Some(missing) => Err(Error::invalid_parameter(missing)),
            None => Ok(()),
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_add_non_zero() {
        let mut params = Params::new();
        params.add_non_zero("a", 42_i64);
        params.add_non_zero("b", 0_i32);
        params.add_non_zero("c", -7_i32);
        params.add_non_zero("d", 55.75_f64);
        params.add_non_zero("e", 0.0_f64);
        assert_eq!(params.get("a"), Some("42"));
        assert!(!params.contains_key("b"));
        assert_eq!(params.get("c"), Some("-7"));
        assert_eq!(params.get("d"), Some("55.75"));
        assert!(!params.contains_key("e"));
    }

    #[test]
    fn test_add_non_empty() {
        let mut params = Params::new();
        params.add_non_empty("text", "hello");
        params.add_non_empty("caption", "");
        assert_eq!(params.get("text"), Some("hello"));
        assert!(!params.contains_key("caption"));
    }

    #[test]
    fn test_add_bool_always_writes() {
        let mut params = Params::new();
        params.add_bool("yes", true);
        params.add_bool("no", false);
        assert_eq!(params.get("yes"), Some("true"));
        assert_eq!(params.get("no"), Some("false"));
    }

    #[test]
    fn test_add_flag_only_writes_true() {
        let mut params = Params::new();
        params.add_flag("on", true);
        params.add_flag("off", false);
        assert_eq!(params.get("on"), Some("true"));
        assert!(!params.contains_key("off"));
    }

    #[test]
    fn test_add_first_valid_picks_first_qualifying() {
        let mut params = Params::new();
        params
            .add_first_valid("chat_id", &[Candidate::Int(0), Candidate::Str(""), Candidate::Str("x")])
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("x"));

        let mut params = Params::new();
        params
            .add_first_valid("chat_id", &[Candidate::Int(42), Candidate::Str("@ignored")])
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("42"));
    }

    #[test]
    fn test_add_first_valid_without_candidate_fails() {
        let mut params = Params::new();
        let err = params
            .add_first_valid("chat_id", &[Candidate::Int(0), Candidate::Str("")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "chat_id"));
        assert!(params.is_empty());
        assert!(!params.add_first_present("chat_id", &[]));
    }

    #[test]
    fn test_add_chat_id() {
        let mut params = Params::new();
        params.add_chat_id("chat_id", &ChatId::from("@news")).unwrap();
        assert_eq!(params.get("chat_id"), Some("@news"));
        assert!(params.add_chat_id("from_chat_id", &ChatId::Id(0)).is_err());
    }

    #[test]
    fn test_add_json() {
        let mut params = Params::new();
        params.add_json("ids", &[1, 2, 3]).unwrap();
        params.add_json("none", &Option::<u8>::None).unwrap();
        params.add_json_list::<u8>("empty", &[]).unwrap();
        assert_eq!(params.get("ids"), Some("[1,2,3]"));
        assert!(!params.contains_key("none"));
        assert!(!params.contains_key("empty"));
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_add_json_failure_is_serialization_error() {
        let mut params = Params::new();
        let err = params.add_json("media", &Unencodable).unwrap_err();
        assert!(matches!(err, Error::Serialization { ref key, .. } if key == "media"));
        assert!(!params.contains_key("media"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut params = Params::new();
        params.insert("k", "1");
        params.insert("k", "2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("k"), Some("2"));
    }

    #[test]
    fn test_require() {
        let params: Params = [("chat_id", "1"), ("text", "hi")].into_iter().collect();
        assert!(params.require(&["chat_id", "text"]).is_ok());
        let err = params.require(&["chat_id", "photo"]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "photo"));
    }
}

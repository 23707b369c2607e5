//! Tagged result for operations that can legitimately produce nothing.

use serde::{Deserialize, Serialize};

/// Result of a geometry or correlation operation.
///
/// - `Ok(value)`: a usable result.
/// - `Empty`: the input was well-formed but there is nothing to produce
///   (empty depth window, all samples missing). Callers draw / apply nothing.
/// - `Invalid(reason)`: the request could not be served (e.g. curve not
///   present in the well). Advisory, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok(T),
    Empty,
    Invalid(String),
}

impl<T> Outcome<T> {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(v) => Some(v),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(v) => Some(v),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Invalid(r) => Some(r),
            Self::Ok(_) | Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ok(v) => Outcome::Ok(f(v)),
            Self::Empty => Outcome::Empty,
            Self::Invalid(r) => Outcome::Invalid(r),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_tag() {
        let o: Outcome<i32> = Outcome::invalid("missing GR");
        let mapped = o.map(|v| v * 2);
        assert_eq!(mapped.reason(), Some("missing GR"));

        let ok: Outcome<i32> = Outcome::Ok(2);
        assert_eq!(ok.map(|v| v * 2).ok(), Some(4));
    }

    #[test]
    fn test_value_borrows_only_ok() {
        let ok: Outcome<String> = Outcome::Ok("GR".to_string());
        assert_eq!(ok.value().map(String::as_str), Some("GR"));
        assert_eq!(Outcome::<String>::Empty.value(), None);
        assert!(ok.is_ok(), "value() does not consume");
    }

    #[test]
    fn test_from_option() {
        assert!(Outcome::<u8>::from(None).is_empty());
        assert!(Outcome::from(Some(1u8)).is_ok());
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_string(&Outcome::<u8>::Empty).unwrap();
        assert_eq!(json, r#"{"status":"empty"}"#);
    }
}

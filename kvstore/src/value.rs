//  VALUE.rs
//    by Lut99
//
//  Created:
//    07 Oct 2026, 13:48:02
//  Last edited:
//    19 Oct 2026, 14:22:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the values stored in the key-value store and the coercions
//!   from them to text or raw bytes.
//!
//!   Values come in exactly two flavours, text and bytes, represented by
//!   [`KvValue`]. Callers that receive values of a type only known at
//!   runtime can use [`to_string()`] and [`to_bytes()`], which check the
//!   type and return a [`CoerceError::UnsupportedType`] for anything that
//!   is neither.
//

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::str::Utf8Error;

use enum_debug::EnumDebug;
use thiserror::Error;


/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_to_string_with_string() {
        assert_eq!(to_string(&String::from("myString")).unwrap(), "myString");
        assert_eq!(to_string(&"myString").unwrap(), "myString");
    }

    #[test]
    fn test_to_string_with_empty() {
        assert_eq!(to_string(&"").unwrap(), "");
        assert_eq!(to_string(&String::new()).unwrap(), "");
    }

    #[test]
    fn test_to_string_with_bytes() {
        assert_eq!(to_string(&b"Hello".to_vec()).unwrap(), "Hello");
        assert_eq!(to_string(&b"Hello".as_slice()).unwrap(), "Hello");
        assert_eq!(to_string(&Vec::<u8>::new()).unwrap(), "");
    }

    #[test]
    fn test_to_string_with_kv_value() {
        assert_eq!(to_string(&KvValue::from("text")).unwrap(), "text");
        assert_eq!(to_string(&KvValue::from(b"bytes".as_slice())).unwrap(), "bytes");
    }

    #[test]
    fn test_to_string_unsupported_type() {
        match to_string(&200i32) {
            Err(CoerceError::UnsupportedType { type_name }) => assert_eq!(type_name, "i32"),
            other => panic!("Expected an unsupported type error, got {other:?}"),
        }
        let err = to_string(&1.5f64).unwrap_err();
        assert_eq!(err.to_string(), "unexpected-type-f64");
    }

    #[test]
    fn test_to_string_invalid_utf8() {
        assert!(matches!(to_string(&vec![0xFFu8, 0xFE]), Err(CoerceError::NotUtf8 { .. })));
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(to_bytes(&b"raw".to_vec()).unwrap(), b"raw");
        assert_eq!(to_bytes(&vec![0xFFu8, 0x00]).unwrap(), vec![0xFFu8, 0x00]);
        assert_eq!(to_bytes(&"Hello").unwrap(), b"Hello");
        assert_eq!(to_bytes(&String::from("héllo")).unwrap(), "héllo".as_bytes());
        assert!(matches!(to_bytes(&Some(5u8)), Err(CoerceError::UnsupportedType { .. })));
    }

    #[test]
    fn test_kv_value_accessors() {
        let text = KvValue::from("abc");
        assert!(text.is_text());
        assert_eq!(text.len(), 3);
        assert_eq!(text.as_bytes(), b"abc");
        assert_eq!(text.to_text().unwrap(), "abc");

        let bytes = KvValue::from(Vec::new());
        assert!(bytes.is_bytes());
        assert!(bytes.is_empty());
        assert_eq!(bytes.into_text().unwrap(), "");
    }
}





/***** ERRORS *****/
/// Errors that relate to coercing values to text or bytes.
#[derive(Debug, Error)]
pub enum CoerceError {
    /// The value was neither text nor raw bytes.
    #[error("unexpected-type-{type_name}")]
    UnsupportedType { type_name: &'static str },
    /// Raw bytes could not be read as text.
    #[error("Value of {len} bytes is not valid UTF-8")]
    NotUtf8 { len: usize, source: Utf8Error },
}





/***** LIBRARY *****/
/// A value as stored in the key-value store.
#[derive(Clone, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum KvValue {
    /// The value is text.
    Text(String),
    /// The value is an opaque sequence of bytes.
    Bytes(Vec<u8>),
}
// Accessors
impl KvValue {
    /// Returns whether this value is [text](KvValue::Text).
    #[inline]
    pub const fn is_text(&self) -> bool { matches!(self, Self::Text(_)) }

    /// Returns whether this value is [raw bytes](KvValue::Bytes).
    #[inline]
    pub const fn is_bytes(&self) -> bool { matches!(self, Self::Bytes(_)) }

    /// Returns the length of the value in bytes.
    #[inline]
    pub fn len(&self) -> usize { self.as_bytes().len() }

    /// Returns whether the value is zero bytes long.
    #[inline]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the value as raw bytes. Text is given in its UTF-8 encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }

    /// Returns the value as text without taking ownership.
    ///
    /// # Returns
    /// The value as a borrowed [`str`].
    ///
    /// # Errors
    /// This function errors if the value holds bytes that are not valid UTF-8.
    pub fn to_text(&self) -> Result<Cow<'_, str>, CoerceError> {
        match self {
            Self::Text(text) => Ok(Cow::Borrowed(text)),
            Self::Bytes(bytes) => std::str::from_utf8(bytes).map(Cow::Borrowed).map_err(|source| CoerceError::NotUtf8 { len: bytes.len(), source }),
        }
    }

    /// Turns the value into text.
    ///
    /// Bytes are read as-is, without any replacement of invalid sequences.
    ///
    /// # Errors
    /// This function errors if the value holds bytes that are not valid UTF-8.
    pub fn into_text(self) -> Result<String, CoerceError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Bytes(bytes) => {
                let len: usize = bytes.len();
                String::from_utf8(bytes).map_err(|err| CoerceError::NotUtf8 { len, source: err.utf8_error() })
            },
        }
    }

    /// Turns the value into raw bytes. Text is given in its UTF-8 encoding.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}
// Conversion
impl From<String> for KvValue {
    #[inline]
    fn from(value: String) -> Self { Self::Text(value) }
}
impl From<&str> for KvValue {
    #[inline]
    fn from(value: &str) -> Self { Self::Text(value.into()) }
}
impl From<Vec<u8>> for KvValue {
    #[inline]
    fn from(value: Vec<u8>) -> Self { Self::Bytes(value) }
}
impl From<&[u8]> for KvValue {
    #[inline]
    fn from(value: &[u8]) -> Self { Self::Bytes(value.into()) }
}
impl From<KvValue> for Vec<u8> {
    #[inline]
    fn from(value: KvValue) -> Self { value.into_bytes() }
}



/// Attempts to interpret a value of any type as a [`KvValue`].
///
/// # Returns
/// The value as a [`KvValue`], or [`None`] if its type is neither text nor bytes.
fn as_kv_value<T: Any>(value: &T) -> Option<KvValue> {
    let value: &dyn Any = value;
    if let Some(value) = value.downcast_ref::<KvValue>() {
        Some(value.clone())
    } else if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
        Some(KvValue::Bytes(bytes.clone()))
    } else if let Some(bytes) = value.downcast_ref::<&[u8]>() {
        Some(KvValue::Bytes(bytes.to_vec()))
    } else if let Some(bytes) = value.downcast_ref::<Box<[u8]>>() {
        Some(KvValue::Bytes(bytes.to_vec()))
    } else if let Some(text) = value.downcast_ref::<String>() {
        Some(KvValue::Text(text.clone()))
    } else if let Some(text) = value.downcast_ref::<&str>() {
        Some(KvValue::Text((*text).into()))
    } else {
        value.downcast_ref::<Box<str>>().map(|text| KvValue::Text(text.to_string()))
    }
}

/// Converts a value of which the type is only known at runtime to a string.
///
/// Accepted are [`String`], `&str`, `Box<str>`, [`Vec<u8>`], `&[u8]`, `Box<[u8]>` and
/// [`KvValue`]. Raw bytes are read as UTF-8 as-is.
///
/// # Arguments
/// - `value`: The value to convert.
///
/// # Returns
/// The value as a [`String`].
///
/// # Errors
/// This function errors with [`CoerceError::UnsupportedType`] if the value is of any other type,
/// or with [`CoerceError::NotUtf8`] if it holds bytes that are not valid UTF-8.
pub fn to_string<T: Any>(value: &T) -> Result<String, CoerceError> {
    match as_kv_value(value) {
        Some(value) => value.into_text(),
        None => Err(CoerceError::UnsupportedType { type_name: type_name::<T>() }),
    }
}

/// Converts a value of which the type is only known at runtime to raw bytes.
///
/// Accepts the same types as [`to_string()`]. Text is given in its UTF-8 encoding.
///
/// # Errors
/// This function errors with [`CoerceError::UnsupportedType`] if the value is neither text nor
/// bytes.
pub fn to_bytes<T: Any>(value: &T) -> Result<Vec<u8>, CoerceError> {
    as_kv_value(value).map(KvValue::into_bytes).ok_or(CoerceError::UnsupportedType { type_name: type_name::<T>() })
}

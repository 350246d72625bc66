//! Default assertions over [`Value`]
//!
//! | name        | holds for                      |
//! |-------------|--------------------------------|
//! | `number`    | [`Value::Number`]              |
//! | `string`    | [`Value::String`]              |
//! | `boolean`   | [`Value::Bool`]                |
//! | `array`     | [`Value::Array`]               |
//! | `null`      | [`Value::Null`]                |
//! | `undefined` | [`Value::Undefined`]           |
//! | `exists`    | anything but null or undefined |
//!
//! Each is also reachable inverted through [`Insure::not`].

use crate::assertion::Assertion;
use crate::entry::{Insure, InsureBuilder};
use crate::error::Result;
use crate::value::Value;

/// Names registered by [`register_defaults`], in registration order.
pub const DEFAULT_NAMES: [&str; 7] = [
    "number",
    "string",
    "boolean",
    "array",
    "null",
    "undefined",
    "exists",
];

/// The default assertions, in registration order.
pub fn default_assertions() -> Vec<Assertion<Value>> {
    vec![
        Assertion::new("number", Value::is_number),
        Assertion::new("string", Value::is_string),
        Assertion::new("boolean", Value::is_boolean),
        Assertion::new("array", Value::is_array),
        Assertion::new("null", Value::is_null),
        Assertion::new("undefined", Value::is_undefined),
        Assertion::new("exists", Value::exists),
    ]
}

/// Register the default assertions.
///
/// # Errors
///
/// [`InsureError::DuplicateName`](crate::InsureError::DuplicateName) if one of
/// the default names is already taken.
///
/// # Example
///
/// ```rust
/// use insure::{defaults, Insure};
///
/// let mut ensure: Insure = Insure::new();
/// defaults::register_defaults(&mut ensure).unwrap();
/// assert!(ensure.contains("exists"));
/// ```
pub fn register_defaults(insure: &mut Insure<Value>) -> Result<&mut Insure<Value>> {
    for assertion in default_assertions() {
        insure.register_assertion(assertion)?;
    }
    Ok(insure)
}

impl Insure<Value> {
    /// Create an enabled checker with the default assertions registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use insure::{insure, Insure};
    ///
    /// let ensure = Insure::with_defaults();
    /// let boolean = ensure.assertion("boolean").unwrap();
    /// assert!(insure!(ensure; true, false).must(&[boolean]).is_ok());
    /// ```
    pub fn with_defaults() -> Self {
        let mut insure = Self::new();
        for assertion in default_assertions() {
            // a fresh registry has no conflicting names
            let _ = insure.register_assertion(assertion);
        }
        insure
    }
}

impl InsureBuilder<Value> {
    /// Queue the default assertions for registration.
    pub fn with_defaults(self) -> Self {
        default_assertions()
            .into_iter()
            .fold(self, |builder, assertion| builder.with_assertion(assertion))
    }
}

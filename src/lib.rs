//! # Insure
//!
//! Runtime contract assertions for values whose shape is only known at run
//! time.
//!
//! Register named tests once at startup, then guard function inputs with
//! `must` (every assertion holds) and `either` (at least one holds) clauses.
//! A violated contract comes back as an [`InsureError::Assertion`] naming the
//! clause, the index and content of the offending value, and the assertions
//! that were checked.
//!
//! ## Quick Example
//!
//! ```rust
//! use insure::{insure, Insure, Value};
//!
//! fn area(ensure: &Insure, width: Value, height: Value) -> insure::Result<f64> {
//!     insure!(ensure; width.clone(), height.clone())
//!         .must(&[ensure.assertion("number")?])?;
//!     Ok(width.as_f64().unwrap_or_default() * height.as_f64().unwrap_or_default())
//! }
//!
//! let ensure = Insure::with_defaults();
//! assert_eq!(area(&ensure, 2.into(), 3.into()).unwrap(), 6.0);
//!
//! let err = area(&ensure, 2.into(), "3".into()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"must-clause failed to ensure state of variable with index 1 [value: 3] for assertion "number""#
//! );
//! ```
//!
//! ## Switching checks off
//!
//! [`Insure::disable`] is a one-way switch: afterwards registrations are
//! skipped, lookups return inert assertions, and every clause succeeds without
//! evaluating anything. Guarded code keeps working unchanged.
//!
//! ```rust
//! use insure::{insure, Insure};
//!
//! let mut ensure = Insure::with_defaults();
//! ensure.disable();
//! assert!(insure!(ensure; "x").must(&[ensure.assertion("number").unwrap()]).is_ok());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit registration, rejection, disable and violation events.
//! - `serde`: `Serialize`/`Deserialize` for [`Value`].
//! - `proptest`: `Arbitrary` for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assertion;
pub mod check;
pub mod defaults;
pub mod entry;
pub mod error;
pub mod predicate;
pub mod registry;
pub mod testing;
pub mod value;

// Re-exports
pub use assertion::{invert, Assertion};
pub use check::Check;
pub use entry::{Insure, InsureBuilder};
pub use error::{AssertionFailure, Clause, InsureError, Result};
pub use predicate::{Predicate, PredicateExt};
pub use registry::Registry;
pub use value::{Kind, Value};

/// Bind values to a [`Check`] on an [`Insure`].
///
/// Each value is converted with `Into` into the checker's value type.
///
/// ```rust
/// use insure::{insure, Insure};
///
/// let ensure = Insure::with_defaults();
/// let check = insure!(ensure; 1, "two", vec![3]);
/// assert_eq!(check.len(), 3);
/// ```
#[macro_export]
macro_rules! insure {
    ($entry:expr; $($value:expr),* $(,)?) => {
        $entry.of([$(::core::convert::Into::into($value)),*])
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertion::{invert, Assertion};
    pub use crate::check::Check;
    pub use crate::entry::Insure;
    pub use crate::error::{AssertionFailure, Clause, InsureError};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::value::Value;
    pub use crate::{assert_fails, assert_passes, insure};
}

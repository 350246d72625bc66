//! Check groups: a batch of values bound to pending assertions
//!
//! A [`Check`] is created by [`Insure::of`](crate::Insure::of) and offers two
//! clauses:
//!
//! - [`Check::must`]: every assertion must hold for every value.
//! - [`Check::either`]: at least one assertion must hold for every value.
//!
//! Both short-circuit on the first violating value and return the check
//! itself on success so clauses chain with `?`.
//!
//! # Example
//!
//! ```rust
//! use insure::{insure, Insure};
//!
//! # fn main() -> insure::Result<()> {
//! let ensure = Insure::with_defaults();
//! let number = ensure.assertion("number")?;
//! let string = ensure.assertion("string")?;
//!
//! insure!(ensure; 5, "x")
//!     .either(&[number.clone(), string])?
//!     .must(&[ensure.assertion("exists")?])?;
//!
//! let err = insure!(ensure; "x").must(&[number]).unwrap_err();
//! assert!(err.to_string().contains("index 0 [value: x]"));
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::assertion::Assertion;
use crate::error::{AssertionFailure, Clause, InsureError, Result};

/// Values captured for checking, or the inert check of a disabled
/// [`Insure`](crate::Insure).
#[derive(Clone, PartialEq)]
pub enum Check<T> {
    /// Values awaiting assertions, in call order.
    Active(Vec<T>),
    /// Checking is switched off; every clause succeeds without evaluating.
    Disabled,
}

impl<T> Check<T> {
    /// Bind a batch of values.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Check::Active(values.into_iter().collect())
    }

    /// Returns true if clauses on this check evaluate assertions.
    pub fn is_active(&self) -> bool {
        matches!(self, Check::Active(_))
    }

    /// The captured values. Empty for a disabled check.
    pub fn values(&self) -> &[T] {
        match self {
            Check::Active(values) => values,
            Check::Disabled => &[],
        }
    }

    /// Number of captured values.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns true if no values were captured.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

impl<T: fmt::Display> Check<T> {
    /// Require every assertion to hold for every value.
    ///
    /// Values are visited in index order and, for each value, assertions in
    /// the order given. The first assertion returning false fails the clause
    /// and nothing further is evaluated. No assertions at all is vacuously
    /// satisfied.
    pub fn must(&self, assertions: &[Assertion<T>]) -> Result<&Self> {
        let Check::Active(values) = self else {
            return Ok(self);
        };

        for (index, value) in values.iter().enumerate() {
            if let Some(failed) = assertions.iter().find(|a| !a.test(value)) {
                return Err(fail(
                    Clause::Must,
                    index,
                    value,
                    std::slice::from_ref(failed),
                ));
            }
        }

        Ok(self)
    }

    /// Require at least one assertion to hold for every value.
    ///
    /// Each value stops at its first satisfied assertion. A value satisfying
    /// none fails the clause, citing every assertion given, and later values
    /// are not visited. No assertions at all fails the first value.
    pub fn either(&self, assertions: &[Assertion<T>]) -> Result<&Self> {
        let Check::Active(values) = self else {
            return Ok(self);
        };

        for (index, value) in values.iter().enumerate() {
            if !assertions.iter().any(|a| a.test(value)) {
                return Err(fail(Clause::Either, index, value, assertions));
            }
        }

        Ok(self)
    }
}

fn fail<T: fmt::Display>(
    clause: Clause,
    index: usize,
    value: &T,
    assertions: &[Assertion<T>],
) -> InsureError {
    let failure = AssertionFailure::new(
        clause,
        index,
        value.to_string(),
        assertions
            .iter()
            .map(|a| a.display_name().to_string())
            .collect(),
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        clause = %failure.clause,
        index = failure.index,
        value = %failure.value,
        "contract violated"
    );

    InsureError::Assertion(failure)
}

impl<T: fmt::Debug> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Active(values) => f.debug_tuple("Active").field(values).finish(),
            Check::Disabled => f.write_str("Disabled"),
        }
    }
}

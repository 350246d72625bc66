//! Error types for registration and contract checks.

use std::fmt;

/// The clause a failed check was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    /// Every assertion had to hold.
    Must,
    /// At least one assertion had to hold.
    Either,
}

impl Clause {
    /// The clause keyword used in failure messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Clause::Must => "must",
            Clause::Either => "either",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated contract.
///
/// Names the clause, the position of the offending value in its
/// [`Check`](crate::Check), the value as rendered text, and the display names
/// of the assertions that were being checked.
///
/// # Example
///
/// ```rust
/// use insure::{AssertionFailure, Clause};
///
/// let failure = AssertionFailure::new(Clause::Must, 0, "x", vec!["number".to_string()]);
/// assert_eq!(
///     failure.to_string(),
///     r#"must-clause failed to ensure state of variable with index 0 [value: x] for assertion "number""#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Clause the failure occurred in.
    pub clause: Clause,
    /// Zero-based index of the offending value.
    pub index: usize,
    /// The offending value, rendered as text.
    pub value: String,
    /// Display names of the assertions involved.
    pub assertions: Vec<String>,
}

impl AssertionFailure {
    /// Create a new failure report.
    pub fn new(
        clause: Clause,
        index: usize,
        value: impl Into<String>,
        assertions: Vec<String>,
    ) -> Self {
        Self {
            clause,
            index,
            value: value.into(),
            assertions,
        }
    }

    /// Describe the assertions involved.
    ///
    /// One assertion is quoted by name, several are listed one per line, and
    /// none at all reads `no assertions`.
    pub fn describe_assertions(&self) -> String {
        match self.assertions.as_slice() {
            [] => "no assertions".to_string(),
            [single] => format!("assertion \"{}\"", single),
            many => {
                let mut out = String::from("assertions\n");
                for name in many {
                    out.push_str(&format!("\t\"{}\"\n", name));
                }
                out.trim_end().to_string()
            }
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-clause failed to ensure state of variable with index {} [value: {}] for {}",
            self.clause,
            self.index,
            self.value,
            self.describe_assertions()
        )
    }
}

impl std::error::Error for AssertionFailure {}

/// Errors raised by [`Insure`](crate::Insure) and [`Check`](crate::Check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsureError {
    /// An assertion with this name is already registered.
    DuplicateName {
        /// The rejected name.
        name: String,
    },
    /// The name cannot be used as an assertion name.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// No assertion is registered under this name.
    UnknownAssertion {
        /// The name that was looked up.
        name: String,
    },
    /// A value violated its contract.
    Assertion(AssertionFailure),
}

impl InsureError {
    /// Returns true if this is a contract violation.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }

    /// Returns true if this is a configuration error raised at registration
    /// or lookup time.
    pub fn is_configuration(&self) -> bool {
        !self.is_assertion()
    }

    /// The failure report, if this is a contract violation.
    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            _ => None,
        }
    }

    /// Extract the failure report, if this is a contract violation.
    pub fn into_failure(self) -> Option<AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<AssertionFailure> for InsureError {
    fn from(failure: AssertionFailure) -> Self {
        Self::Assertion(failure)
    }
}

impl fmt::Display for InsureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(
                f,
                "cannot register assertion \"{}\" since an assertion with the same name already exists",
                name
            ),
            Self::InvalidName { name } => {
                write!(f, "cannot register assertion with invalid name {:?}", name)
            }
            Self::UnknownAssertion { name } => {
                write!(f, "no assertion registered under \"{}\"", name)
            }
            Self::Assertion(failure) => write!(f, "{}", failure),
        }
    }
}

impl std::error::Error for InsureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Assertion(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Result alias for fallible `insure` operations.
pub type Result<T> = std::result::Result<T, InsureError>;

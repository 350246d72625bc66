//! Named assertions and their inversion
//!
//! An [`Assertion`] pairs a [`Predicate`] with a registry name and a display
//! name used in failure messages. Assertions are cheap to clone: the test is
//! shared behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

/// A named boolean test over one value.
///
/// # Example
///
/// ```rust
/// use insure::{invert, Assertion, Value};
///
/// let number = Assertion::new("number", |v: &Value| v.is_number());
/// assert!(number.test(&Value::from(5)));
///
/// let not_number = invert(&number);
/// assert_eq!(not_number.display_name(), "not number");
/// assert!(not_number.test(&Value::from("x")));
/// ```
pub struct Assertion<T> {
    name: Arc<str>,
    display_name: Arc<str>,
    inverted: bool,
    test: Arc<dyn Predicate<T>>,
}

impl<T> Assertion<T> {
    /// Create an assertion whose display name is its name.
    pub fn new<P>(name: impl Into<String>, test: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        let name: Arc<str> = Arc::from(name.into());
        Self {
            display_name: Arc::clone(&name),
            name,
            inverted: false,
            test: Arc::new(test),
        }
    }

    /// Replace the display name shown in failure messages.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Arc::from(display_name.into());
        self
    }

    /// An assertion that never runs its test.
    ///
    /// Handed out by a disabled [`Insure`](crate::Insure), whose checks never
    /// evaluate anything.
    pub(crate) fn inert(name: &str, inverted: bool) -> Self
    where
        T: 'static,
    {
        let assertion = Self::new(name, |_: &T| true);
        if inverted {
            assertion.invert()
        } else {
            assertion
        }
    }

    /// The registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name shown in failure messages.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns true if this assertion negates another one.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Run the test against a value.
    #[inline]
    pub fn test(&self, value: &T) -> bool {
        self.test.check(value)
    }

    /// Derive the negated assertion.
    ///
    /// The name is kept so the pair stays keyed together; the display name
    /// gains a `not ` prefix.
    pub fn invert(&self) -> Self
    where
        T: 'static,
    {
        let base = Arc::clone(&self.test);
        Self {
            name: Arc::clone(&self.name),
            display_name: Arc::from(format!("not {}", self.display_name)),
            inverted: !self.inverted,
            test: Arc::new(move |value: &T| !base.check(value)),
        }
    }
}

/// Negate an assertion. See [`Assertion::invert`].
pub fn invert<T: 'static>(assertion: &Assertion<T>) -> Assertion<T> {
    assertion.invert()
}

impl<T> Clone for Assertion<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            display_name: Arc::clone(&self.display_name),
            inverted: self.inverted,
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> Predicate<T> for Assertion<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.test(value)
    }
}

impl<T> fmt::Debug for Assertion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("inverted", &self.inverted)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Assertion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

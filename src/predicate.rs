//! Raw predicate trait and logical combinators
//!
//! A [`Predicate`] is the boolean test behind every named
//! [`Assertion`](crate::Assertion). Closures implement it through a blanket
//! impl, and [`PredicateExt`] composes predicates with `and`, `or` and `not`
//! before they are registered or wrapped.
//!
//! # Example
//!
//! ```rust
//! use insure::predicate::*;
//! use insure::Value;
//!
//! let small_number = (|v: &Value| v.is_number()).and(|v: &Value| v.as_f64() < Some(10.0));
//! assert!(small_number.check(&Value::from(3)));
//! assert!(!small_number.check(&Value::from(30)));
//! assert!(small_number.not().check(&Value::from("x")));
//! ```

/// A boolean test over a single value of type `T`.
///
/// # Example
///
/// ```rust
/// use insure::predicate::*;
///
/// let even = |n: &i64| n % 2 == 0;
/// assert!(even.check(&4));
/// assert!(!even.check(&3));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so composed predicates cost no more
/// than the hand-written boolean expression.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use insure::predicate::*;
    ///
    /// let p = (|n: &i32| *n > 0).and(|n: &i32| *n < 100);
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use insure::predicate::*;
    ///
    /// let p = (|n: &i32| *n < 0).or(|n: &i32| *n > 100);
    /// assert!(p.check(&-5));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use insure::predicate::*;
    ///
    /// let p = (|n: &i32| *n > 0).not();
    /// assert!(p.check(&-5));
    /// assert!(!p.check(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

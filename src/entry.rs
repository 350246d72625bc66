//! The entry point: registry ownership, the kill switch, and check creation.

use crate::assertion::Assertion;
use crate::check::Check;
use crate::error::{InsureError, Result};
use crate::predicate::Predicate;
use crate::registry::Registry;
use crate::value::Value;

/// Contract checker holding named assertions and the enable switch.
///
/// `Insure` is an ordinary value: construct one at startup, register
/// assertions, then hand out [`Check`]s with [`Insure::of`] (or the
/// [`insure!`](crate::insure!) macro). Calling [`Insure::disable`] turns every
/// operation into a no-op for the rest of the instance's life.
///
/// # Example
///
/// ```rust
/// use insure::{insure, Insure, Value};
///
/// # fn main() -> insure::Result<()> {
/// let mut ensure: Insure = Insure::new();
/// ensure
///     .register("number", |v: &Value| v.is_number())?
///     .register("string", |v: &Value| v.is_string())?;
///
/// insure!(ensure; 5).must(&[ensure.assertion("number")?])?;
/// insure!(ensure; 5, "x").either(&[ensure.assertion("number")?, ensure.not("number")?])?;
///
/// let err = insure!(ensure; "x").must(&[ensure.assertion("number")?]).unwrap_err();
/// assert!(err.is_assertion());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Insure<T = Value> {
    registry: Registry<T>,
    enabled: bool,
}

impl<T: 'static> Insure<T> {
    /// Create an enabled checker with no assertions.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            enabled: true,
        }
    }

    /// Start building a checker.
    pub fn builder() -> InsureBuilder<T> {
        InsureBuilder::new()
    }

    /// Bind a batch of values for checking.
    ///
    /// Returns [`Check::Disabled`] without consuming the values when checking
    /// is switched off.
    pub fn of<I>(&self, values: I) -> Check<T>
    where
        I: IntoIterator<Item = T>,
    {
        if !self.enabled {
            return Check::Disabled;
        }
        Check::new(values)
    }

    /// Register a named test.
    ///
    /// The inverted assertion is registered alongside it and reachable through
    /// [`Insure::not`]. Returns `self` for chaining. Skipped without error
    /// when checking is switched off.
    ///
    /// # Errors
    ///
    /// [`InsureError::DuplicateName`] if the name is taken,
    /// [`InsureError::InvalidName`] if it is blank.
    pub fn register<P>(&mut self, name: impl Into<String>, test: P) -> Result<&mut Self>
    where
        P: Predicate<T> + 'static,
    {
        self.register_assertion(Assertion::new(name, test))
    }

    /// Register a prepared assertion, keeping its display name.
    pub fn register_assertion(&mut self, assertion: Assertion<T>) -> Result<&mut Self> {
        if !self.enabled {
            return Ok(self);
        }

        #[cfg(feature = "tracing")]
        let name = assertion.name().to_string();

        let result = self.registry.insert(assertion);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(()) => tracing::debug!(assertion = %name, "registered assertion"),
            Err(err) => {
                tracing::warn!(assertion = %name, error = %err, "assertion registration rejected")
            }
        }

        result.map(|()| self)
    }

    /// The assertion registered under `name`.
    ///
    /// A disabled checker answers every lookup with an assertion that is never
    /// evaluated, so guarded code runs unchanged.
    ///
    /// # Errors
    ///
    /// [`InsureError::UnknownAssertion`] if nothing is registered under `name`.
    pub fn assertion(&self, name: &str) -> Result<Assertion<T>> {
        self.lookup(name, false)
    }

    /// The inversion of the assertion registered under `name`.
    ///
    /// # Errors
    ///
    /// [`InsureError::UnknownAssertion`] if nothing is registered under `name`.
    pub fn not(&self, name: &str) -> Result<Assertion<T>> {
        self.lookup(name, true)
    }

    fn lookup(&self, name: &str, inverted: bool) -> Result<Assertion<T>> {
        if !self.enabled {
            return Ok(Assertion::inert(name, inverted));
        }

        let found = if inverted {
            self.registry.get_inverted(name)
        } else {
            self.registry.get(name)
        };
        found.cloned().ok_or_else(|| InsureError::UnknownAssertion {
            name: name.to_string(),
        })
    }

    /// Switch checking off for good. Calling it again has no further effect.
    pub fn disable(&mut self) {
        #[cfg(feature = "tracing")]
        if self.enabled {
            tracing::info!(
                registered = self.registry.len(),
                "contract checking disabled"
            );
        }
        self.enabled = false;
    }
}

impl<T> Insure<T> {
    /// Returns true until [`Insure::disable`] is called.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    /// Number of registered assertions, not counting inversions.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }
}

impl<T: 'static> Default for Insure<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Insure`].
///
/// # Example
///
/// ```rust
/// use insure::{Assertion, Insure, Value};
///
/// let ensure = Insure::builder()
///     .with_enabled(cfg!(debug_assertions))
///     .with_defaults()
///     .with_assertion(Assertion::new("positive", |v: &Value| v.as_f64() > Some(0.0)))
///     .build()
///     .unwrap();
///
/// assert_eq!(ensure.is_enabled(), cfg!(debug_assertions));
/// ```
#[derive(Debug)]
pub struct InsureBuilder<T = Value> {
    enabled: bool,
    assertions: Vec<Assertion<T>>,
}

impl<T: 'static> InsureBuilder<T> {
    /// Create a builder for an enabled checker with no assertions.
    pub fn new() -> Self {
        Self {
            enabled: true,
            assertions: Vec::new(),
        }
    }

    /// Set whether the built checker evaluates anything.
    ///
    /// A disabled checker skips every registration.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Queue an assertion for registration.
    pub fn with_assertion(mut self, assertion: Assertion<T>) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Queue a named test for registration.
    pub fn with_test<P>(self, name: impl Into<String>, test: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.with_assertion(Assertion::new(name, test))
    }

    /// Build the checker, registering queued assertions in order.
    ///
    /// # Errors
    ///
    /// The first registration error, as from [`Insure::register_assertion`].
    pub fn build(self) -> Result<Insure<T>> {
        let mut insure = Insure::new();
        if !self.enabled {
            insure.disable();
        }
        for assertion in self.assertions {
            insure.register_assertion(assertion)?;
        }
        Ok(insure)
    }
}

impl<T: 'static> Default for InsureBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insure;

    fn checker() -> Insure {
        let mut ensure = Insure::new();
        ensure
            .register("number", |v: &Value| v.is_number())
            .unwrap()
            .register("string", |v: &Value| v.is_string())
            .unwrap();
        ensure
    }

    #[test]
    fn test_register_and_lookup() {
        let ensure = checker();
        assert_eq!(ensure.len(), 2);
        assert!(ensure.contains("number"));
        let number = ensure.assertion("number").unwrap();
        let not_number = ensure.not("number").unwrap();
        assert!(number.test(&Value::from(1)));
        assert!(!not_number.test(&Value::from(1)));
        assert_eq!(not_number.display_name(), "not number");
    }

    #[test]
    fn test_register_chains() {
        let mut ensure: Insure = Insure::new();
        let result = ensure
            .register("a", |_: &Value| true)
            .and_then(|e| e.register("b", |_: &Value| true))
            .and_then(|e| e.register("c", |_: &Value| true));
        assert!(result.is_ok());
        assert_eq!(ensure.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut ensure = checker();
        let err = ensure
            .register("number", |_: &Value| false)
            .unwrap_err();
        assert!(matches!(err, InsureError::DuplicateName { ref name } if name == "number"));
        assert!(ensure.assertion("number").unwrap().test(&Value::from(1)));
    }

    #[test]
    fn test_unknown_lookup() {
        let ensure = checker();
        let err = ensure.assertion("boolean").unwrap_err();
        assert_eq!(
            err,
            InsureError::UnknownAssertion {
                name: "boolean".to_string()
            }
        );
        assert!(ensure.not("boolean").is_err());
    }

    #[test]
    fn test_of_builds_active_check() {
        let ensure = checker();
        let check = insure!(ensure; 1, "two", true);
        assert!(check.is_active());
        assert_eq!(check.len(), 3);
        assert_eq!(check.values()[1], Value::from("two"));
    }

    #[test]
    fn test_disable_is_one_way_and_idempotent() {
        let mut ensure = checker();
        ensure.disable();
        ensure.disable();
        assert!(!ensure.is_enabled());

        let check = ensure.of([Value::from("x")]);
        assert_eq!(check, Check::Disabled);
        assert!(check
            .must(&[ensure.assertion("number").unwrap()])
            .is_ok());
    }

    #[test]
    fn test_disabled_skips_registration() {
        let mut ensure = checker();
        ensure.disable();
        ensure
            .register("boolean", |v: &Value| v.is_boolean())
            .unwrap()
            .register("number", |_: &Value| false)
            .unwrap();
        assert!(!ensure.contains("boolean"));
        assert_eq!(ensure.len(), 2);
    }

    #[test]
    fn test_disabled_lookup_is_inert() {
        let mut ensure = checker();
        ensure.disable();
        let unknown = ensure.assertion("never_registered").unwrap();
        assert_eq!(unknown.name(), "never_registered");
        let inverted = ensure.not("number").unwrap();
        assert_eq!(inverted.display_name(), "not number");
    }

    #[test]
    fn test_builder() {
        let ensure = Insure::builder()
            .with_test("number", |v: &Value| v.is_number())
            .with_assertion(
                Assertion::new("text", |v: &Value| v.is_string()).with_display_name("a string"),
            )
            .build()
            .unwrap();
        assert!(ensure.is_enabled());
        assert_eq!(ensure.assertion("text").unwrap().display_name(), "a string");
        assert_eq!(ensure.not("text").unwrap().display_name(), "not a string");
    }

    #[test]
    fn test_builder_duplicate() {
        let err = Insure::builder()
            .with_test("n", |_: &Value| true)
            .with_test("n", |_: &Value| true)
            .build()
            .unwrap_err();
        assert!(matches!(err, InsureError::DuplicateName { .. }));
    }

    #[test]
    fn test_builder_disabled() {
        let ensure = Insure::builder()
            .with_enabled(false)
            .with_test("n", |_: &Value| true)
            .with_test("n", |_: &Value| true)
            .build()
            .unwrap();
        assert!(!ensure.is_enabled());
        assert!(ensure.is_empty());
    }

    #[test]
    fn test_error_propagates_with_question_mark() {
        fn guarded(ensure: &Insure) -> std::result::Result<(), Box<dyn std::error::Error>> {
            insure!(ensure; "x").must(&[ensure.assertion("number")?])?;
            Ok(())
        }
        let err = guarded(&checker()).unwrap_err();
        assert!(err.to_string().starts_with("must-clause failed"));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_registration_is_logged() {
            let _ensure = checker();
            assert!(logs_contain("registered assertion"));
        }

        #[test]
        #[traced_test]
        fn test_rejection_and_disable_are_logged() {
            let mut ensure = checker();
            let _ = ensure.register("number", |_: &Value| true);
            assert!(logs_contain("assertion registration rejected"));
            ensure.disable();
            assert!(logs_contain("contract checking disabled"));
        }

        #[test]
        #[traced_test]
        fn test_violation_is_logged() {
            let ensure = checker();
            let _ = insure!(ensure; "x").must(&[ensure.assertion("number").unwrap()]);
            assert!(logs_contain("contract violated"));
        }
    }
}

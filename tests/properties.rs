//! Property-based tests for clause semantics and inversion

use insure::prelude::*;
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec(any::<i8>(), 0..4).prop_map(Value::from),
    ]
}

fn checker() -> Insure {
    Insure::with_defaults()
}

proptest! {
    #[test]
    fn prop_must_single_value_matches_test(
        v in value_strategy(),
        name in prop::sample::select(insure::defaults::DEFAULT_NAMES.to_vec()),
    ) {
        let ensure = checker();
        let assertion = ensure.assertion(name).unwrap();
        let expected = assertion.test(&v);

        match ensure.of([v.clone()]).must(&[assertion]) {
            Ok(_) => prop_assert!(expected),
            Err(err) => {
                prop_assert!(!expected);
                let failure = err.failure().unwrap();
                prop_assert_eq!(failure.index, 0);
                prop_assert_eq!(&failure.assertions, &vec![name.to_string()]);
                prop_assert_eq!(&failure.value, &v.to_string());
            }
        }
    }

    #[test]
    fn prop_either_iff_any_holds(
        v in value_strategy(),
        names in prop::sample::subsequence(insure::defaults::DEFAULT_NAMES.to_vec(), 0..=4),
    ) {
        let ensure = checker();
        let assertions: Vec<_> = names
            .iter()
            .map(|n| ensure.assertion(n).unwrap())
            .collect();
        let expected = assertions.iter().any(|a| a.test(&v));

        let check = ensure.of([v]);
        prop_assert_eq!(check.either(&assertions).is_ok(), expected);
    }

    #[test]
    fn prop_inversion_law(
        v in value_strategy(),
        name in prop::sample::select(insure::defaults::DEFAULT_NAMES.to_vec()),
    ) {
        let ensure = checker();
        let base = ensure.assertion(name).unwrap();
        let registered_inverse = ensure.not(name).unwrap();
        let adhoc_inverse = invert(&base);

        prop_assert_eq!(registered_inverse.test(&v), !base.test(&v));
        prop_assert_eq!(adhoc_inverse.test(&v), !base.test(&v));
        prop_assert_eq!(registered_inverse.display_name(), format!("not {}", name));
    }

    #[test]
    fn prop_must_reports_first_failing_index(
        values in prop::collection::vec(value_strategy(), 0..10),
    ) {
        let ensure = checker();
        let number = ensure.assertion("number").unwrap();
        let first_bad = values.iter().position(|v| !v.is_number());

        let check = ensure.of(values);
        let result = check.must(&[number]);
        match first_bad {
            None => prop_assert!(result.is_ok()),
            Some(index) => {
                let err = result.unwrap_err();
                prop_assert_eq!(err.failure().unwrap().index, index);
            }
        }
    }

    #[test]
    fn prop_disabled_never_fails(
        values in prop::collection::vec(value_strategy(), 0..10),
        disable_twice in any::<bool>(),
    ) {
        let mut ensure = checker();
        ensure.disable();
        if disable_twice {
            ensure.disable();
        }
        let number = ensure.assertion("number").unwrap();
        let check = ensure.of(values);
        prop_assert!(check.must(&[number.clone()]).is_ok());
        prop_assert!(check.either(&[]).is_ok());
        prop_assert!(ensure.register("fresh", |_: &Value| true).is_ok());
        prop_assert!(!ensure.contains("fresh"));
    }

    #[test]
    fn prop_duplicate_never_mutates(v in value_strategy()) {
        let mut ensure = checker();
        let before = ensure.assertion("number").unwrap().test(&v);
        prop_assert!(ensure.register("number", |_: &Value| true).is_err());
        let after = ensure.assertion("number").unwrap();
        prop_assert_eq!(after.test(&v), before);
        prop_assert_eq!(after.display_name(), "number");
    }
}

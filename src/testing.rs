//! Testing utilities for code guarded by `insure`
//!
//! Assertion macros for clause results and, behind the `proptest` feature,
//! an [`Arbitrary`](proptest::arbitrary::Arbitrary) implementation for
//! [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use insure::{assert_fails, assert_passes, insure, Insure};
//!
//! let ensure = Insure::with_defaults();
//! let number = ensure.assertion("number").unwrap();
//!
//! assert_passes!(insure!(ensure; 5).must(&[number.clone()]));
//! assert_fails!(insure!(ensure; "x").must(&[number]), index = 0);
//! ```

/// Assert that a clause succeeded.
///
/// Panics with the failure message otherwise.
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected clause to pass, got: {}", e);
            }
        }
    };
}

/// Assert that a clause failed with a contract violation.
///
/// Optionally checks the index of the offending value.
#[macro_export]
macro_rules! assert_fails {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err($crate::InsureError::Assertion(_)) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected contract violation, got: {}", e);
            }
            ::core::result::Result::Ok(_) => {
                panic!("Expected contract violation, clause passed");
            }
        }
    };
    ($result:expr, index = $index:expr) => {
        match $result {
            ::core::result::Result::Err($crate::InsureError::Assertion(failure)) => {
                assert_eq!(
                    failure.index, $index,
                    "violation reported at the wrong index: {}",
                    failure
                );
            }
            ::core::result::Result::Err(e) => {
                panic!("Expected contract violation, got: {}", e);
            }
            ::core::result::Result::Ok(_) => {
                panic!("Expected contract violation, clause passed");
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(Value::from),
            any::<f64>().prop_map(Value::Number),
            "[a-z0-9 ]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(2, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..3).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}

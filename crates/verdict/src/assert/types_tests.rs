// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{run, Outcome};
use crate::value::Value;
use rstest::rstest;
use std::collections::BTreeMap;

#[rstest]
#[case(5u8.to_value(), Capability::Numeric)]
#[case(Value::complex(0.0, 1.0), Capability::Numeric)]
#[case('x'.to_value(), Capability::Ordered)]
#[case("s".to_value(), Capability::Text)]
#[case(vec![1].to_value(), Capability::Sequence)]
#[case(vec![1].to_value(), Capability::Container)]
#[case(BTreeMap::<i32, i32>::new().to_value(), Capability::Container)]
#[case(BTreeMap::<i32, i32>::new().to_value(), Capability::Map)]
#[case(Value::record("R", Vec::<(String, Value)>::new()), Capability::Record)]
#[case(Value::error("bad"), Capability::Error)]
fn implements_passes(#[case] val: Value, #[case] capability: Capability) {
    assert_eq!(
        run(|t| assert_implements(t, &val, capability, &[])),
        Outcome::Passed
    );
}

#[test]
fn implements_fails_with_kind() {
    let outcome = run(|t| assert_implements(t, "5", Capability::Numeric, &[]));
    assert_eq!(
        outcome.message(),
        "AssertImplements failed, val = 5, kind = string, capability = numeric"
    );
    assert!(run(|t| assert_implements(t, Value::complex(1.0, 1.0), Capability::Ordered, &[])).failed());
    assert!(run(|t| assert_implements(t, Value::Nil, Capability::Container, &[])).failed());
}

#[test]
fn same_type() {
    assert_eq!(
        run(|t| assert_same_type(t, &1i32, &2i32, &[])),
        Outcome::Passed
    );
    assert_eq!(
        run(|t| assert_same_type(t, "a", "b", &[])),
        Outcome::Passed
    );
    let outcome = run(|t| assert_same_type(t, &1i32, &1i64, &[]));
    assert_eq!(
        outcome.message(),
        "AssertSameType failed, expected = i32, got = i64"
    );
}

#[test]
fn same_type_looks_through_erasure() {
    let a: Box<dyn Any> = Box::new(1i32);
    let b: Box<dyn Any> = Box::new(String::from("x"));
    let c: Box<dyn Any> = Box::new(2i32);

    let outcome = run(|t| assert_same_type(t, &*a, &*b, &[]));
    assert!(outcome.failed());
    assert!(outcome.message().starts_with("AssertSameType failed, expected = TypeId"));
    assert_eq!(run(|t| assert_same_type(t, &*a, &*c, &[])), Outcome::Passed);

    // One side erased, the other concrete
    assert_eq!(run(|t| assert_same_type(t, &*a, &5i32, &[])), Outcome::Passed);
    assert!(run(|t| assert_same_type(t, &*b, &5i32, &[])).failed());
}

#[test]
fn is_type_checks_dynamic_type() {
    let erased: Box<dyn Any> = Box::new(String::from("hi"));
    assert_eq!(
        run(|t| assert_is_type::<String, _>(t, &*erased, &[])),
        Outcome::Passed
    );
    let outcome = run(|t| assert_is_type::<u8, _>(t, &*erased, &[]));
    assert_eq!(outcome.message(), "AssertIsType failed, expected = u8");
}

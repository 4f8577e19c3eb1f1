// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use crate::value::{Kind, ToValue};
use std::any::{type_name, type_name_of_val, Any};
use std::fmt::{self, Display};

/// A capability a value's runtime shape may provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Signed, unsigned, float or complex number.
    Numeric,
    /// Totally ordered scalar: integers, floats, chars and strings.
    Ordered,
    /// Ordered sequence.
    Sequence,
    /// Keyed mapping.
    Map,
    /// Sequence or mapping.
    Container,
    Text,
    Record,
    Error,
}

impl Capability {
    /// Whether values of `kind` provide this capability.
    pub fn admits(self, kind: Kind) -> bool {
        match self {
            Capability::Numeric => matches!(
                kind,
                Kind::Int | Kind::Uint | Kind::Float | Kind::Complex
            ),
            Capability::Ordered => matches!(
                kind,
                Kind::Int | Kind::Uint | Kind::Float | Kind::Char | Kind::Str
            ),
            Capability::Sequence => kind == Kind::Seq,
            Capability::Map => kind == Kind::Map,
            Capability::Container => matches!(kind, Kind::Seq | Kind::Map),
            Capability::Text => matches!(kind, Kind::Str | Kind::Char),
            Capability::Record => kind == Kind::Record,
            Capability::Error => kind == Kind::Error,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Numeric => "numeric",
            Capability::Ordered => "ordered",
            Capability::Sequence => "sequence",
            Capability::Map => "map",
            Capability::Container => "container",
            Capability::Text => "text",
            Capability::Record => "record",
            Capability::Error => "error",
        };
        f.write_str(name)
    }
}

/// Fail unless `val`'s runtime shape provides `capability`.
#[track_caller]
pub fn assert_implements<C, V>(t: &C, val: V, capability: Capability, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    V: ToValue,
{
    let val = val.to_value();
    if !capability.admits(val.kind()) {
        fail(
            t,
            "AssertImplements",
            format!("val = {val}, kind = {}, capability = {capability}", val.kind()),
            args,
        );
    }
}

/// Fail unless `expected` and `got` have the same dynamic type.
///
/// Type-erased values (`&dyn Any`, or `&*boxed` for a `Box<dyn Any>`) are
/// compared by the type behind the erasure.
#[track_caller]
pub fn assert_same_type<C, E, G>(t: &C, expected: &E, got: &G, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    E: Any + ?Sized,
    G: Any + ?Sized,
{
    let (expected_id, got_id) = (Any::type_id(expected), Any::type_id(got));
    if expected_id != got_id {
        let (expected_name, got_name) = (type_name_of_val(expected), type_name_of_val(got));
        let detail = if expected_name == got_name {
            // Erased on both sides: the names carry no information
            format!("expected = {expected_id:?}, got = {got_id:?}")
        } else {
            format!("expected = {expected_name}, got = {got_name}")
        };
        fail(t, "AssertSameType", detail, args);
    }
}

/// Fail unless the value behind `val` is a `T`.
///
/// Checks the dynamic type of a type-erased value.
#[track_caller]
pub fn assert_is_type<T, C>(t: &C, val: &dyn Any, args: &[&dyn Display])
where
    T: Any,
    C: TestContext + ?Sized,
{
    if !val.is::<T>() {
        fail(
            t,
            "AssertIsType",
            format!("expected = {}", type_name::<T>()),
            args,
        );
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence and map membership.
//!
//! Passing a value of the wrong shape (a string to a slice check, a slice to
//! a map check) is a usage error: the call panics without reporting to the
//! test context.

use super::fail;
use crate::context::TestContext;
use crate::equal::{deep_equal, map_get};
use crate::error::{raise, UsageError};
use crate::value::{ToValue, Value};
use std::fmt::Display;

#[track_caller]
fn sequence_contains(op: &'static str, slice: &Value, elem: &Value) -> bool {
    let Value::Seq(items) = slice else {
        raise(UsageError::NotASequence {
            op,
            kind: slice.kind(),
        })
    };
    items.iter().any(|item| deep_equal(item, elem))
}

#[track_caller]
fn map_entries<'a>(op: &'static str, map: &'a Value) -> &'a [(Value, Value)] {
    let Value::Map(entries) = map else {
        raise(UsageError::NotAMap {
            op,
            kind: map.kind(),
        })
    };
    entries
}

/// Fail unless some element of `slice` deeply equals `elem`.
#[track_caller]
pub fn assert_slice_contain<C, S, E>(t: &C, slice: S, elem: E, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    S: ToValue,
    E: ToValue,
{
    const OP: &str = "AssertSliceContain";
    let (slice, elem) = (slice.to_value(), elem.to_value());
    if !sequence_contains(OP, &slice, &elem) {
        fail(t, OP, format!("slice = {slice}, elem = {elem}"), args);
    }
}

/// Fail if some element of `slice` deeply equals `elem`.
#[track_caller]
pub fn assert_slice_not_contain<C, S, E>(t: &C, slice: S, elem: E, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    S: ToValue,
    E: ToValue,
{
    const OP: &str = "AssertSliceNotContain";
    let (slice, elem) = (slice.to_value(), elem.to_value());
    if sequence_contains(OP, &slice, &elem) {
        fail(t, OP, format!("slice = {slice}, elem = {elem}"), args);
    }
}

/// Fail unless `map` has the key `key`.
#[track_caller]
pub fn assert_map_contain_key<C, M, K>(t: &C, map: M, key: K, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    M: ToValue,
    K: ToValue,
{
    const OP: &str = "AssertMapContainKey";
    let (map, key) = (map.to_value(), key.to_value());
    if map_get(map_entries(OP, &map), &key).is_none() {
        fail(t, OP, format!("map = {map}, key = {key}"), args);
    }
}

/// Fail if `map` has the key `key`.
#[track_caller]
pub fn assert_map_not_contain_key<C, M, K>(t: &C, map: M, key: K, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    M: ToValue,
    K: ToValue,
{
    const OP: &str = "AssertMapNotContainKey";
    let (map, key) = (map.to_value(), key.to_value());
    if map_get(map_entries(OP, &map), &key).is_some() {
        fail(t, OP, format!("map = {map}, key = {key}"), args);
    }
}

/// Fail unless some value in `map` deeply equals `elem`.
#[track_caller]
pub fn assert_map_contain_value<C, M, E>(t: &C, map: M, elem: E, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    M: ToValue,
    E: ToValue,
{
    const OP: &str = "AssertMapContainValue";
    let (map, elem) = (map.to_value(), elem.to_value());
    let found = map_entries(OP, &map)
        .iter()
        .any(|(_, v)| deep_equal(v, &elem));
    if !found {
        fail(t, OP, format!("map = {map}, elem = {elem}"), args);
    }
}

/// Fail if some value in `map` deeply equals `elem`.
#[track_caller]
pub fn assert_map_not_contain_value<C, M, E>(t: &C, map: M, elem: E, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    M: ToValue,
    E: ToValue,
{
    const OP: &str = "AssertMapNotContainValue";
    let (map, elem) = (map.to_value(), elem.to_value());
    let found = map_entries(OP, &map)
        .iter()
        .any(|(_, v)| deep_equal(v, &elem));
    if found {
        fail(t, OP, format!("map = {map}, elem = {elem}"), args);
    }
}

/// Fail unless `map[key]` exists and deeply equals `elem`.
#[track_caller]
pub fn assert_map_contain<C, M, K, E>(t: &C, map: M, key: K, elem: E, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    M: ToValue,
    K: ToValue,
    E: ToValue,
{
    const OP: &str = "AssertMapContain";
    let (map, key, elem) = (map.to_value(), key.to_value(), elem.to_value());
    let found = map_get(map_entries(OP, &map), &key).is_some_and(|v| deep_equal(v, &elem));
    if !found {
        fail(
            t,
            OP,
            format!("map = {map}, key = {key}, elem = {elem}"),
            args,
        );
    }
}

/// Fail if `map[key]` exists and deeply equals `elem`.
#[track_caller]
pub fn assert_map_not_contain<C, M, K, E>(t: &C, map: M, key: K, elem: E, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    M: ToValue,
    K: ToValue,
    E: ToValue,
{
    const OP: &str = "AssertMapNotContain";
    let (map, key, elem) = (map.to_value(), key.to_value(), elem.to_value());
    let found = map_get(map_entries(OP, &map), &key).is_some_and(|v| deep_equal(v, &elem));
    if found {
        fail(
            t,
            OP,
            format!("map = {map}, key = {key}, elem = {elem}"),
            args,
        );
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Equality and numeric classification predicates.

use crate::value::Value;

/// Numeric category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Int,
    Uint,
    Float,
    Complex,
    NotNumber,
}

/// Classify a value's numeric category.
pub fn numeric_kind(v: &Value) -> NumericKind {
    match v {
        Value::Int(..) => NumericKind::Int,
        Value::Uint(..) => NumericKind::Uint,
        Value::Float(..) => NumericKind::Float,
        Value::Complex { .. } => NumericKind::Complex,
        _ => NumericKind::NotNumber,
    }
}

/// Deep structural equality.
///
/// Sequences compare element-wise in order, maps compare by key set and
/// per-key value regardless of entry order, records compare by name and by
/// their fields in declaration order. Values of different kinds, and
/// numbers of the same kind but different declared widths, are unequal.
/// Floats follow IEEE rules, so a NaN is never equal to itself.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x, wx), Value::Int(y, wy)) => wx == wy && x == y,
        (Value::Uint(x, wx), Value::Uint(y, wy)) => wx == wy && x == y,
        (Value::Float(x, wx), Value::Float(y, wy)) => wx == wy && x == y,
        (
            Value::Complex {
                re: ra,
                im: ia,
                width: wa,
            },
            Value::Complex {
                re: rb,
                im: ib,
                width: wb,
            },
        ) => wa == wb && ra == rb && ia == ib,
        (Value::Char(x), Value::Char(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Seq(x), Value::Seq(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| deep_equal(l, r))
        }
        (Value::Map(x), Value::Map(y)) => {
            // Hand-built maps may repeat a key, so check both directions
            x.len() == y.len() && map_subset(x, y) && map_subset(y, x)
        }
        (
            Value::Record {
                name: na,
                fields: fa,
            },
            Value::Record {
                name: nb,
                fields: fb,
            },
        ) => {
            na == nb
                && fa.len() == fb.len()
                && fa
                    .iter()
                    .zip(fb)
                    .all(|((ka, va), (kb, vb))| ka == kb && deep_equal(va, vb))
        }
        (Value::Error(x), Value::Error(y)) => x == y,
        _ => false,
    }
}

fn map_subset(x: &[(Value, Value)], y: &[(Value, Value)]) -> bool {
    x.iter()
        .all(|(k, v)| map_get(y, k).is_some_and(|w| deep_equal(v, w)))
}

/// Look up a key in map entries using deep equality.
pub(crate) fn map_get<'a>(entries: &'a [(Value, Value)], key: &Value) -> Option<&'a Value> {
    entries
        .iter()
        .find(|(k, _)| deep_equal(k, key))
        .map(|(_, v)| v)
}

/// Canonical decimal text of a numeric value, `None` for anything else.
pub fn canonical_text(v: &Value) -> Option<String> {
    match numeric_kind(v) {
        NumericKind::NotNumber => None,
        _ => Some(v.to_string()),
    }
}

/// Numeric equivalence across widths and kinds.
///
/// True iff both values are numeric and their canonical decimal text is
/// identical, so `5i32` equals `5i64`, `5u8` equals `5.0f64` and `1.1f32`
/// equals `1.1f64`. Two floats whose shortest text forms coincide compare
/// equal even when their bits differ; NaN equals NaN on this path.
pub fn numerically_equal(a: &Value, b: &Value) -> bool {
    match (canonical_text(a), canonical_text(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Numeric-aware equality: the numeric path when both sides are numbers,
/// deep equality otherwise.
pub fn equivalent(a: &Value, b: &Value) -> bool {
    let numeric =
        numeric_kind(a) != NumericKind::NotNumber && numeric_kind(b) != NumericKind::NotNumber;
    if numeric {
        numerically_equal(a, b)
    } else {
        deep_equal(a, b)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

#[cfg(test)]
#[path = "equal_tests.rs"]
mod tests;

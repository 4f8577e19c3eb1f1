// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic value model used by the comparison logic.
//!
//! Assertions accept any type implementing [`ToValue`]. The value is rendered
//! into a [`Value`] tree once per call and all equality, classification and
//! message formatting runs against that tree.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Declared width of an integer value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    /// `isize` / `usize`
    Size,
}

/// Declared width of a floating point (or complex) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Runtime shape of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Complex,
    Char,
    Str,
    Seq,
    Map,
    Record,
    Error,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Char => "char",
            Kind::Str => "string",
            Kind::Seq => "slice",
            Kind::Map => "map",
            Kind::Record => "struct",
            Kind::Error => "error",
        };
        f.write_str(name)
    }
}

/// A dynamically typed value.
///
/// Equality on `Value` is deep structural equality (see
/// [`deep_equal`](crate::deep_equal)).
#[derive(Clone, Debug)]
pub enum Value {
    /// The absence sentinel (`None`, `()`, `Ok(())`).
    Nil,
    Bool(bool),
    Int(i64, IntWidth),
    Uint(u64, IntWidth),
    /// `f32` values are stored widened; the width keeps their text form.
    Float(f64, FloatWidth),
    Complex {
        re: f64,
        im: f64,
        width: FloatWidth,
    },
    Char(char),
    Str(String),
    /// Ordered sequence.
    Seq(Vec<Value>),
    /// Keyed mapping. Keys are unique; entry order carries no meaning.
    Map(Vec<(Value, Value)>),
    /// Named record with ordered, named fields.
    Record {
        name: String,
        fields: Vec<(String, Value)>,
    },
    /// An error-like value, carrying its description.
    Error(String),
}

impl Value {
    /// Complex number with `f64` parts.
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex {
            re,
            im,
            width: FloatWidth::F64,
        }
    }

    /// Complex number with `f32` parts.
    pub fn complex32(re: f32, im: f32) -> Self {
        Value::Complex {
            re: f64::from(re),
            im: f64::from(im),
            width: FloatWidth::F32,
        }
    }

    /// Build a record from its type name and fields.
    pub fn record<N, I, K>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Record {
            name: name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build an error value from anything displayable.
    pub fn error(err: impl fmt::Display) -> Self {
        Value::Error(err.to_string())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(..) => Kind::Int,
            Value::Uint(..) => Kind::Uint,
            Value::Float(..) => Kind::Float,
            Value::Complex { .. } => Kind::Complex,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Record { .. } => Kind::Record,
            Value::Error(_) => Kind::Error,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64, width: FloatWidth) -> fmt::Result {
    match width {
        // Narrowing is exact: the value was widened from an f32.
        FloatWidth::F32 => write!(f, "{}", v as f32),
        FloatWidth::F64 => write!(f, "{}", v),
    }
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(v, _) => write!(f, "{v}"),
            Value::Uint(v, _) => write!(f, "{v}"),
            Value::Float(v, width) => write_float(f, *v, *width),
            Value::Complex { re, im, width } => {
                f.write_str("(")?;
                write_float(f, *re, *width)?;
                if !im.is_sign_negative() || im.is_nan() {
                    f.write_str("+")?;
                }
                write_float(f, *im, *width)?;
                f.write_str("i)")
            }
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
            Value::Seq(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Value::Map(entries) => {
                // Sorted by key text so output is stable across hash orders
                let mut rendered: Vec<(String, String)> = entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                rendered.sort();
                f.write_str("map[")?;
                for (i, (k, v)) in rendered.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
            Value::Record { fields, .. } => {
                f.write_str("{")?;
                write_joined(f, fields.iter().map(|(_, v)| v))?;
                f.write_str("}")
            }
            Value::Error(desc) => f.write_str(desc),
        }
    }
}

/// Anything that can render itself as a [`Value`].
///
/// Implement this for your own types to make them usable with the
/// structural assertions:
///
/// ```
/// use verdict::{ToValue, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ToValue for Point {
///     fn to_value(&self) -> Value {
///         Value::record("Point", [("x", self.x.to_value()), ("y", self.y.to_value())])
///     }
/// }
///
/// assert_eq!(Point { x: 1, y: 2 }.to_value().to_string(), "{1 2}");
/// ```
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &mut T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

macro_rules! int_to_value {
    ($($ty:ty => $variant:ident($wide:ty, $width:ident)),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $wide, IntWidth::$width)
                }
            }
        )*
    };
}

int_to_value! {
    i8 => Int(i64, W8),
    i16 => Int(i64, W16),
    i32 => Int(i64, W32),
    i64 => Int(i64, W64),
    isize => Int(i64, Size),
    u8 => Uint(u64, W8),
    u16 => Uint(u64, W16),
    u32 => Uint(u64, W32),
    u64 => Uint(u64, W64),
    usize => Uint(u64, Size),
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self), FloatWidth::F32)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self, FloatWidth::F64)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Nil
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Nil,
        }
    }
}

impl<T: ToValue, E: fmt::Display> ToValue for Result<T, E> {
    fn to_value(&self) -> Value {
        match self {
            Ok(v) => v.to_value(),
            Err(e) => Value::error(e),
        }
    }
}

impl<K: ToValue, V: ToValue, S: BuildHasher> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;

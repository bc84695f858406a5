//! Type tag enumerations.
//!
//! [`TypeTag`] is the coarse label produced by JavaScript's `typeof`
//! operator. [`RealType`] is the refined label that additionally separates
//! arrays, dates, regular expressions, sets, maps, `null`, `NaN` and
//! `Infinity` from the generic object and number tags.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Coarse type tag, the result of `typeof`.
///
/// # Examples
///
/// ```
/// use core_types::TypeTag;
///
/// assert_eq!(TypeTag::BigInt.as_str(), "bigint");
/// assert_eq!("function".parse::<TypeTag>().unwrap(), TypeTag::Function);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// `true` or `false`
    Boolean,
    /// Any number, including NaN and the infinities
    Number,
    /// String primitive
    String,
    /// Every object kind, plus `null`
    Object,
    /// Callable
    Function,
    /// `undefined`
    Undefined,
    /// Arbitrary precision integer
    BigInt,
    /// Symbol primitive
    Symbol,
}

impl TypeTag {
    /// Every coarse tag, in declaration order.
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Object,
        TypeTag::Function,
        TypeTag::Undefined,
        TypeTag::BigInt,
        TypeTag::Symbol,
    ];

    /// The label as `typeof` spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Object => "object",
            TypeTag::Function => "function",
            TypeTag::Undefined => "undefined",
            TypeTag::BigInt => "bigint",
            TypeTag::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TagError::UnknownTag(s.to_string()))
    }
}

/// Refined type tag.
///
/// Ordering is lexicographic on the label (byte order), so `Infinity` and
/// `NaN` sort ahead of the lowercase labels.
///
/// # Examples
///
/// ```
/// use core_types::RealType;
///
/// assert_eq!(RealType::NaN.to_string(), "NaN");
/// assert!(RealType::Infinity < RealType::Array);
/// assert!(RealType::Boolean < RealType::Null);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RealType {
    /// `true` or `false`
    Boolean,
    /// Finite number
    Number,
    /// String primitive
    String,
    /// Array instance
    Array,
    /// Any other object, including boxed primitives
    Object,
    /// Callable
    Function,
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// Not-a-Number
    #[serde(rename = "NaN")]
    NaN,
    /// Positive or negative infinity
    #[serde(rename = "Infinity")]
    Infinity,
    /// Date instance, valid or not
    Date,
    /// Regular expression instance
    RegExp,
    /// Set instance
    Set,
    /// Map instance
    Map,
    /// Arbitrary precision integer
    BigInt,
    /// Symbol primitive
    Symbol,
}

impl RealType {
    /// Every refined tag, in declaration order.
    pub const ALL: [RealType; 16] = [
        RealType::Boolean,
        RealType::Number,
        RealType::String,
        RealType::Array,
        RealType::Object,
        RealType::Function,
        RealType::Undefined,
        RealType::Null,
        RealType::NaN,
        RealType::Infinity,
        RealType::Date,
        RealType::RegExp,
        RealType::Set,
        RealType::Map,
        RealType::BigInt,
        RealType::Symbol,
    ];

    /// The label of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            RealType::Boolean => "boolean",
            RealType::Number => "number",
            RealType::String => "string",
            RealType::Array => "array",
            RealType::Object => "object",
            RealType::Function => "function",
            RealType::Undefined => "undefined",
            RealType::Null => "null",
            RealType::NaN => "NaN",
            RealType::Infinity => "Infinity",
            RealType::Date => "date",
            RealType::RegExp => "regexp",
            RealType::Set => "set",
            RealType::Map => "map",
            RealType::BigInt => "bigint",
            RealType::Symbol => "symbol",
        }
    }
}

impl From<TypeTag> for RealType {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Boolean => RealType::Boolean,
            TypeTag::Number => RealType::Number,
            TypeTag::String => RealType::String,
            TypeTag::Object => RealType::Object,
            TypeTag::Function => RealType::Function,
            TypeTag::Undefined => RealType::Undefined,
            TypeTag::BigInt => RealType::BigInt,
            TypeTag::Symbol => RealType::Symbol,
        }
    }
}

impl Ord for RealType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for RealType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RealType {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RealType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TagError::UnknownTag(s.to_string()))
    }
}

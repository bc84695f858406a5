//! Core JavaScript value model and type tags.
//!
//! This crate provides the foundational types for classifying runtime
//! values: the value representation itself, the coarse and refined type
//! tag enumerations, and the errors raised when tags or values are built
//! from text.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`TypeTag`] - Coarse labels, as produced by `typeof`
//! - [`RealType`] - Refined labels (arrays, dates, NaN, ... told apart)
//! - [`TagError`] - Errors from tag parsing and pattern compilation
//!
//! # Examples
//!
//! ```
//! use core_types::{RealType, TypeTag, Value};
//!
//! let num = Value::Number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), TypeTag::Number);
//!
//! let tag: RealType = "regexp".parse().unwrap();
//! assert_eq!(tag, RealType::RegExp);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod tags;
mod value;

pub use error::{TagError, TagResult};
pub use tags::{RealType, TypeTag};
pub use value::{
    DateValue, Function, NativeFn, ObjectData, PrimitiveWrapper, RegExpValue, Symbol, Value,
};

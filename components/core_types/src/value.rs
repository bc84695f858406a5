//! JavaScript value representation.
//!
//! This module provides the `Value` enum that models every kind of runtime
//! value the classifier has to tell apart: primitives, plain objects, boxed
//! primitives, arrays, functions and the built-in object kinds (dates,
//! regular expressions, sets and maps).
//!
//! Object kinds are reference counted. Two object values are the same value
//! only when they share an allocation, which is what gives sets and maps
//! their identity semantics.

use std::fmt;
use std::rc::Rc;

use chrono::Utc;
use num_bigint::BigInt;
use num_traits::Zero;
use regex::{Regex, RegexBuilder};

use crate::error::{TagError, TagResult};
use crate::tags::TypeTag;

/// Largest absolute time value a date can hold, in milliseconds.
const MAX_TIME_VALUE: f64 = 8.64e15;
const MS_PER_DAY: i64 = 86_400_000;

/// A unique symbol with an optional description.
#[derive(Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Text given to `Symbol(description)`
    pub description: Option<String>,
}

/// A plain object: string keyed properties in insertion order.
#[derive(Debug, Default)]
pub struct ObjectData {
    /// Properties in insertion order
    pub properties: Vec<(String, Value)>,
}

impl ObjectData {
    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// The primitive held by a wrapper object such as `new String("12")`.
#[derive(Debug)]
pub enum PrimitiveWrapper {
    /// `new Boolean(b)`
    Boolean(bool),
    /// `new Number(n)`
    Number(f64),
    /// `new String(s)`
    String(String),
    /// `Object(1n)`
    BigInt(BigInt),
    /// `Object(Symbol())`
    Symbol(Rc<Symbol>),
}

impl PrimitiveWrapper {
    /// The primitive value inside the wrapper.
    pub fn primitive(&self) -> Value {
        match self {
            PrimitiveWrapper::Boolean(b) => Value::Boolean(*b),
            PrimitiveWrapper::Number(n) => Value::Number(*n),
            PrimitiveWrapper::String(s) => Value::String(s.clone()),
            PrimitiveWrapper::BigInt(n) => Value::BigInt(n.clone()),
            PrimitiveWrapper::Symbol(sym) => Value::Symbol(Rc::clone(sym)),
        }
    }
}

/// Body of a native function.
pub type NativeFn = dyn Fn(&[Value]) -> Value;

/// A callable value.
pub struct Function {
    name: String,
    arity: usize,
    body: Box<NativeFn>,
}

impl Function {
    /// Function name, empty for anonymous functions
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke the function. Missing arguments are not padded.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A date: milliseconds since the Unix epoch, NaN when invalid.
#[derive(Debug, Clone, Copy)]
pub struct DateValue {
    time_value: f64,
}

impl DateValue {
    /// The current time.
    pub fn now() -> Self {
        DateValue {
            time_value: Utc::now().timestamp_millis() as f64,
        }
    }

    /// A date from a time value. Out of range or non-finite input yields an
    /// invalid date.
    pub fn from_millis(ms: f64) -> Self {
        let time_value = if ms.is_finite() && ms.abs() <= MAX_TIME_VALUE {
            ms.trunc()
        } else {
            f64::NAN
        };
        DateValue { time_value }
    }

    /// Milliseconds since the epoch (NaN for an invalid date)
    pub fn time_value(&self) -> f64 {
        self.time_value
    }

    /// Whether the date holds a real point in time
    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }

    /// ISO 8601 rendering, `None` for an invalid date.
    ///
    /// Years outside `0..=9999` use the signed six digit form, so every
    /// valid date renders, e.g. `+275760-09-13T00:00:00.000Z`.
    pub fn to_iso_string(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let ms = self.time_value as i64;
        let days = ms.div_euclid(MS_PER_DAY);
        let ms_of_day = ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        let year = if (0..=9999).contains(&year) {
            format!("{:04}", year)
        } else if year < 0 {
            format!("-{:06}", -year)
        } else {
            format!("+{:06}", year)
        };
        Some(format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year,
            month,
            day,
            ms_of_day / 3_600_000,
            ms_of_day / 60_000 % 60,
            ms_of_day / 1000 % 60,
            ms_of_day % 1000
        ))
    }
}

/// Proleptic Gregorian (year, month, day) for days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// A compiled regular expression.
#[derive(Debug)]
pub struct RegExpValue {
    regex: Regex,
    source: String,
    flags: String,
}

impl RegExpValue {
    /// Compile `source` with JavaScript style `flags`.
    ///
    /// Accepted flags are `d g i m s u v y`, each at most once. `i`, `m` and
    /// `s` change matching; the others are recorded only.
    pub fn new(source: &str, flags: &str) -> TagResult<Self> {
        let mut seen = String::new();
        for ch in flags.chars() {
            if !"dgimsuvy".contains(ch) || seen.contains(ch) {
                return Err(TagError::InvalidFlags(flags.to_string()));
            }
            seen.push(ch);
        }

        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| TagError::InvalidRegExp {
                pattern: source.to_string(),
                reason: e.to_string(),
            })?;

        Ok(RegExpValue {
            regex,
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }

    /// The pattern as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags as written
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the pattern matches anywhere in `input`
    pub fn test(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use core_types::{TypeTag, Value};
///
/// let undefined = Value::Undefined;
/// let number = Value::Number(42.0);
/// let list = Value::array(vec![Value::Number(1.0), Value::string("a")]);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), TypeTag::Number);
/// assert_eq!(list.type_of(), TypeTag::Object);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision number
    Number(f64),
    /// JavaScript string value
    String(String),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Symbol, compared by identity
    Symbol(Rc<Symbol>),
    /// Plain object
    Object(Rc<ObjectData>),
    /// Boxed primitive
    Wrapper(Rc<PrimitiveWrapper>),
    /// Array
    Array(Rc<Vec<Value>>),
    /// Function object
    Function(Rc<Function>),
    /// Date object
    Date(Rc<DateValue>),
    /// RegExp object
    RegExp(Rc<RegExpValue>),
    /// Set collection, insertion ordered
    Set(Rc<Vec<Value>>),
    /// Map collection, insertion ordered
    Map(Rc<Vec<(Value, Value)>>),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a BigInt value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Create a fresh symbol
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Rc::new(Symbol {
            description: description.map(str::to_string),
        }))
    }

    /// Create an array from values
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(elements))
    }

    /// Create a plain object. A repeated key overwrites the earlier value but
    /// keeps its position.
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut data = ObjectData::default();
        for (key, value) in properties {
            let key = key.into();
            match data.properties.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => data.properties.push((key, value)),
            }
        }
        Value::Object(Rc::new(data))
    }

    /// Box a value the way `Object(value)` does.
    ///
    /// Primitives get a wrapper object, `undefined` and `null` become an
    /// empty plain object, and objects are returned unchanged.
    ///
    /// ```
    /// use core_types::{TypeTag, Value};
    ///
    /// let boxed = Value::boxed(Value::string("12"));
    /// assert_eq!(boxed.type_of(), TypeTag::Object);
    /// assert_eq!(boxed.to_string(), "12");
    /// ```
    pub fn boxed(value: Value) -> Self {
        let wrapper = match value {
            Value::Undefined | Value::Null => {
                return Value::Object(Rc::new(ObjectData::default()))
            }
            Value::Boolean(b) => PrimitiveWrapper::Boolean(b),
            Value::Number(n) => PrimitiveWrapper::Number(n),
            Value::String(s) => PrimitiveWrapper::String(s),
            Value::BigInt(n) => PrimitiveWrapper::BigInt(n),
            Value::Symbol(sym) => PrimitiveWrapper::Symbol(sym),
            object => return object,
        };
        Value::Wrapper(Rc::new(wrapper))
    }

    /// Create a function value
    pub fn function<F>(name: impl Into<String>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Value::Function(Rc::new(Function {
            name: name.into(),
            arity,
            body: Box::new(body),
        }))
    }

    /// Create a date holding the current time
    pub fn date_now() -> Self {
        Value::Date(Rc::new(DateValue::now()))
    }

    /// Create a date from milliseconds since the epoch
    pub fn date_from_millis(ms: f64) -> Self {
        Value::Date(Rc::new(DateValue::from_millis(ms)))
    }

    /// Create a regular expression value
    pub fn regexp(source: &str, flags: &str) -> TagResult<Self> {
        Ok(Value::RegExp(Rc::new(RegExpValue::new(source, flags)?)))
    }

    /// Create a set. Later duplicates (by SameValueZero) are dropped.
    pub fn set_from(values: impl IntoIterator<Item = Value>) -> Self {
        let mut elements: Vec<Value> = Vec::new();
        for value in values {
            if !elements.iter().any(|e| e.same_value_zero(&value)) {
                elements.push(value);
            }
        }
        Value::Set(Rc::new(elements))
    }

    /// Create a map. A repeated key overwrites the earlier value but keeps
    /// its position.
    pub fn map_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut data: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            match data.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(slot) => slot.1 = value,
                None => data.push((key, value)),
            }
        }
        Value::Map(Rc::new(data))
    }

    /// Check if value is a primitive (not an object of any kind)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Undefined
                | Value::Null
                | Value::Boolean(_)
                | Value::Number(_)
                | Value::String(_)
                | Value::BigInt(_)
                | Value::Symbol(_)
        )
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Get as function
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(&**func),
            _ => None,
        }
    }

    /// SameValueZero comparison, as used by set and map membership.
    ///
    /// NaN equals NaN and `+0` equals `-0`. Primitives compare by content;
    /// symbols and objects compare by identity.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Number(f64::NAN).same_value_zero(&Value::Number(f64::NAN)));
    /// assert!(!Value::array(vec![]).same_value_zero(&Value::array(vec![])));
    /// ```
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Wrapper(a), Value::Wrapper(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// Falsy values are `undefined`, `null`, `false`, `0`, `-0`, `NaN`,
    /// `""` and `0n`. Every object is truthy, including `new Boolean(false)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Number(f64::NAN).is_truthy());
    /// assert!(Value::boxed(Value::Boolean(false)).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::BigInt(n) => !n.is_zero(),
            Value::Symbol(_)
            | Value::Object(_)
            | Value::Wrapper(_)
            | Value::Array(_)
            | Value::Function(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Set(_)
            | Value::Map(_) => true,
        }
    }

    /// Returns the JavaScript `typeof` result for this value.
    ///
    /// `null` reports `object` (historical quirk), as do arrays, dates,
    /// regular expressions, sets, maps and boxed primitives.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{TypeTag, Value};
    ///
    /// assert_eq!(Value::Undefined.type_of(), TypeTag::Undefined);
    /// assert_eq!(Value::Null.type_of(), TypeTag::Object);
    /// assert_eq!(Value::Number(f64::NAN).type_of(), TypeTag::Number);
    /// ```
    pub fn type_of(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Object, // JavaScript quirk
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::BigInt(_) => TypeTag::BigInt,
            Value::Symbol(_) => TypeTag::Symbol,
            Value::Function(_) => TypeTag::Function,
            Value::Object(_)
            | Value::Wrapper(_)
            | Value::Array(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Set(_)
            | Value::Map(_) => TypeTag::Object,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_zero(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::array(elements)
    }
}

fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        // Shortest digits, JS exponent form: 1e+21, 1.5e-7
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => write!(f, "{}", exp),
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// JavaScript `String(value)` conversion.
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Number(1.0 / 0.0).to_string(), "Infinity");
/// assert_eq!(Value::object(Vec::<(&str, Value)>::new()).to_string(), "[object Object]");
/// assert_eq!(
///     Value::array(vec![Value::string("0"), Value::Null, Value::Number(2.0)]).to_string(),
///     "0,,2"
/// );
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Symbol(sym) => {
                write!(f, "Symbol({})", sym.description.as_deref().unwrap_or(""))
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Wrapper(wrapper) => write!(f, "{}", wrapper.primitive()),
            Value::Array(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Holes, undefined and null join as empty strings
                    if !matches!(element, Value::Undefined | Value::Null) {
                        write!(f, "{}", element)?;
                    }
                }
                Ok(())
            }
            Value::Function(func) => {
                write!(f, "function {}() {{ [native code] }}", func.name())
            }
            Value::Date(date) => match date.to_iso_string() {
                Some(iso) => write!(f, "{}", iso),
                None => write!(f, "Invalid Date"),
            },
            Value::RegExp(re) => write!(f, "/{}/{}", re.source(), re.flags()),
            Value::Set(_) => write!(f, "[object Set]"),
            Value::Map(_) => write!(f, "[object Map]"),
        }
    }
}

//! Host value representation.
//!
//! Primitives are stored inline; everything else is a [`JsObject`] whose
//! internal class distinguishes arrays, functions, dates and the rest.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::date::{now_ms, parse_date, time_clip};
use crate::error::{ErrorKind, JsError, JsResult};
use crate::key::{array_index, PropertyKey};
use crate::object::{FunctionData, FunctionKind, JsObject, ObjectClass, RegExpData};
use crate::realm;
use crate::symbol::SymbolValue;
use crate::typed_array::TypedArrayKind;

/// Largest typed array byte length accepted (2GB - 1)
const MAX_TYPED_ARRAY_BYTES: usize = 2_147_483_647;

/// Result of the host `typeof` operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOf {
    /// `"undefined"`
    Undefined,
    /// `"object"` (also reported for null)
    Object,
    /// `"boolean"`
    Boolean,
    /// `"number"`
    Number,
    /// `"string"`
    String,
    /// `"symbol"`
    Symbol,
    /// `"bigint"`
    BigInt,
    /// `"function"`
    Function,
}

impl TypeOf {
    /// The string the host operator returns
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeOf::Undefined => "undefined",
            TypeOf::Object => "object",
            TypeOf::Boolean => "boolean",
            TypeOf::Number => "number",
            TypeOf::String => "string",
            TypeOf::Symbol => "symbol",
            TypeOf::BigInt => "bigint",
            TypeOf::Function => "function",
        }
    }
}

impl fmt::Display for TypeOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents any host value.
///
/// # Examples
///
/// ```
/// use js_value::{JsValue, TypeOf};
///
/// let undefined = JsValue::Undefined;
/// let number = JsValue::number(42.0);
/// let list = JsValue::array_from(vec![number.clone()]);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(list.type_of(), TypeOf::Object);
/// assert_eq!(list.get_str("length"), JsValue::number(1.0));
/// ```
#[derive(Debug, Clone)]
pub enum JsValue {
    /// The "no value" marker
    Undefined,
    /// The "absence of object" marker
    Null,
    /// Boolean primitive
    Boolean(bool),
    /// Number primitive (IEEE 754 double)
    Number(f64),
    /// String primitive
    String(String),
    /// Symbol primitive
    Symbol(SymbolValue),
    /// BigInt primitive
    BigInt(BigInt),
    /// Heap object
    Object(JsObject),
}

impl JsValue {
    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create a fresh unique symbol
    pub fn symbol(description: Option<&str>) -> Self {
        JsValue::Symbol(SymbolValue::new(description))
    }

    /// Create a BigInt value
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        JsValue::BigInt(v.into())
    }

    fn with_class(class: ObjectClass, prototype: Option<JsObject>) -> Self {
        JsValue::Object(JsObject::new(class, prototype))
    }

    fn builtin_instance(class: ObjectClass, constructor: &str) -> Self {
        Self::with_class(class, realm::prototype_of(constructor))
    }

    /// Create empty object (`{}`)
    pub fn object() -> Self {
        Self::with_class(ObjectClass::Ordinary, Some(realm::object_prototype()))
    }

    /// Create an object literal from key/value pairs
    pub fn object_from<K, I>(entries: I) -> Self
    where
        K: Into<PropertyKey>,
        I: IntoIterator<Item = (K, JsValue)>,
    {
        let obj = Self::object();
        for (key, value) in entries {
            obj.set(key, value);
        }
        obj
    }

    /// `Object.create(proto)`: `proto` must be an object or null
    pub fn create(proto: &JsValue) -> JsResult<Self> {
        match proto {
            JsValue::Object(p) => Ok(Self::with_class(ObjectClass::Ordinary, Some(p.clone()))),
            JsValue::Null => Ok(Self::with_class(ObjectClass::Ordinary, None)),
            other => Err(JsError::type_error(format!(
                "Object prototype may only be an Object or null: {}",
                other.to_display_string()
            ))),
        }
    }

    /// Create empty array
    pub fn array() -> Self {
        Self::array_from(Vec::new())
    }

    /// Create array from values
    pub fn array_from(values: Vec<JsValue>) -> Self {
        Self::builtin_instance(ObjectClass::Array(values.into_iter().map(Some).collect()), "Array")
    }

    /// Create a function `arguments` object
    pub fn arguments(values: Vec<JsValue>) -> Self {
        Self::with_class(ObjectClass::Arguments(values), Some(realm::object_prototype()))
    }

    fn callable(name: &str, kind: FunctionKind, is_constructor: bool) -> JsObject {
        JsObject::new(
            ObjectClass::Function(FunctionData {
                name: name.to_string(),
                kind,
                is_constructor,
            }),
            Some(realm::function_prototype()),
        )
    }

    /// Create a function declaration: constructible, with its own
    /// `prototype` object whose `constructor` points back.
    pub fn function(name: &str) -> Self {
        let func = Self::callable(name, FunctionKind::Normal, true);
        let proto = JsObject::new(ObjectClass::Ordinary, Some(realm::object_prototype()));
        link_constructor(&func, &proto);
        JsValue::Object(func)
    }

    /// Create an arrow function (not constructible, no `prototype`)
    pub fn arrow_function(name: &str) -> Self {
        JsValue::Object(Self::callable(name, FunctionKind::Normal, false))
    }

    /// Create an `async function`
    pub fn async_function(name: &str) -> Self {
        JsValue::Object(Self::callable(name, FunctionKind::Async, false))
    }

    /// Create a generator function
    pub fn generator_function(name: &str) -> Self {
        JsValue::Object(Self::callable(name, FunctionKind::Generator, false))
    }

    /// Create an async generator function
    pub fn async_generator_function(name: &str) -> Self {
        JsValue::Object(Self::callable(name, FunctionKind::AsyncGenerator, false))
    }

    /// Declare a class, optionally extending `parent`.
    ///
    /// The class prototype inherits from `parent.prototype` (or
    /// `Object.prototype`) and the constructor itself inherits from
    /// `parent` (or `Function.prototype`).
    pub fn class(name: &str, parent: Option<&JsValue>) -> JsResult<Self> {
        let ctor = Self::callable(name, FunctionKind::Normal, true);
        let proto = match parent {
            None => JsObject::new(ObjectClass::Ordinary, Some(realm::object_prototype())),
            Some(JsValue::Object(p)) if p.is_constructor() => {
                ctor.set_prototype(Some(p.clone()))?;
                match p.get(&"prototype".into()) {
                    JsValue::Object(parent_proto) => {
                        JsObject::new(ObjectClass::Ordinary, Some(parent_proto))
                    }
                    JsValue::Null => JsObject::new(ObjectClass::Ordinary, None),
                    other => {
                        return Err(JsError::type_error(format!(
                            "Class extends value does not have valid prototype property {}",
                            other.to_display_string()
                        )))
                    }
                }
            }
            Some(other) => {
                return Err(JsError::type_error(format!(
                    "Class extends value {} is not a constructor or null",
                    other.to_display_string()
                )))
            }
        };
        link_constructor(&ctor, &proto);
        Ok(JsValue::Object(ctor))
    }

    /// `new ctor()`: an ordinary instance whose prototype is
    /// `ctor.prototype`, falling back to `Object.prototype`.
    pub fn construct(ctor: &JsValue) -> JsResult<Self> {
        match ctor {
            JsValue::Object(c) if c.is_constructor() => {
                let proto = match c.get(&"prototype".into()) {
                    JsValue::Object(p) => p,
                    _ => realm::object_prototype(),
                };
                Ok(Self::with_class(ObjectClass::Ordinary, Some(proto)))
            }
            other => Err(JsError::type_error(format!(
                "{} is not a constructor",
                other.to_display_string()
            ))),
        }
    }

    /// Create a Date from milliseconds since the epoch (TimeClip applied)
    pub fn date(ms: f64) -> Self {
        Self::builtin_instance(ObjectClass::Date(time_clip(ms)), "Date")
    }

    /// `new Date()`: the current instant
    pub fn date_now() -> Self {
        Self::date(now_ms())
    }

    /// `new Date(text)`: an invalid date when the text does not parse
    pub fn date_from_str(text: &str) -> Self {
        Self::date(parse_date(text).unwrap_or(f64::NAN))
    }

    /// `new RegExp(pattern, flags)`
    pub fn regexp(pattern: &str, flags: &str) -> JsResult<Self> {
        let data = RegExpData::new(pattern, flags)?;
        Ok(Self::builtin_instance(ObjectClass::RegExp(data), "RegExp"))
    }

    /// Create an error instance of the given kind
    pub fn error(kind: ErrorKind, message: &str) -> Self {
        let err = Self::builtin_instance(ObjectClass::Error(kind), kind.name());
        if let JsValue::Object(obj) = &err {
            if !message.is_empty() {
                obj.define("message", JsValue::string(message), false);
            }
        }
        err
    }

    /// Create an empty Map
    pub fn map() -> Self {
        Self::builtin_instance(ObjectClass::Map(Vec::new()), "Map")
    }

    /// Create a Map from key-value pairs; later duplicates win
    pub fn map_from(entries: impl IntoIterator<Item = (JsValue, JsValue)>) -> Self {
        let map = Self::map();
        if let JsValue::Object(obj) = &map {
            for (key, value) in entries {
                obj.collection_insert(key, value);
            }
        }
        map
    }

    /// Create an empty Set
    pub fn set_collection() -> Self {
        Self::builtin_instance(ObjectClass::Set(Vec::new()), "Set")
    }

    /// Create a Set from values; duplicates collapse
    pub fn set_from(values: impl IntoIterator<Item = JsValue>) -> Self {
        let set = Self::set_collection();
        if let JsValue::Object(obj) = &set {
            for value in values {
                obj.collection_insert(value, JsValue::Undefined);
            }
        }
        set
    }

    /// Create an empty WeakMap
    pub fn weak_map() -> Self {
        Self::builtin_instance(ObjectClass::WeakMap, "WeakMap")
    }

    /// Create an empty WeakSet
    pub fn weak_set() -> Self {
        Self::builtin_instance(ObjectClass::WeakSet, "WeakSet")
    }

    /// Create a typed array, converting each value to the kind's domain
    pub fn typed_array(kind: TypedArrayKind, values: &[f64]) -> Self {
        let items = values.iter().map(|&v| kind.coerce(v)).collect();
        Self::builtin_instance(ObjectClass::TypedArray(kind, items), kind.name())
    }

    /// Create a zero-filled typed array of `length` elements
    pub fn typed_array_with_length(kind: TypedArrayKind, length: usize) -> JsResult<Self> {
        let bytes = length.checked_mul(kind.bytes_per_element());
        match bytes {
            Some(b) if b <= MAX_TYPED_ARRAY_BYTES => Ok(Self::typed_array(kind, &vec![0.0; length])),
            _ => Err(JsError::range_error(format!(
                "Invalid typed array length: {}",
                length
            ))),
        }
    }

    /// `Object(value)`: wrap a primitive in its wrapper object.
    /// Objects are returned unchanged; null and undefined give `{}`.
    pub fn boxed(value: &JsValue) -> Self {
        match value {
            JsValue::Undefined | JsValue::Null => Self::object(),
            JsValue::Boolean(b) => Self::builtin_instance(ObjectClass::Boolean(*b), "Boolean"),
            JsValue::Number(n) => Self::builtin_instance(ObjectClass::Number(*n), "Number"),
            JsValue::String(s) => Self::builtin_instance(ObjectClass::String(s.clone()), "String"),
            JsValue::Symbol(sym) => {
                Self::builtin_instance(ObjectClass::Symbol(sym.clone()), "Symbol")
            }
            JsValue::BigInt(n) => Self::builtin_instance(ObjectClass::BigInt(n.clone()), "BigInt"),
            JsValue::Object(_) => value.clone(),
        }
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check if value is null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    /// Check if value can be called
    pub fn is_callable(&self) -> bool {
        matches!(self, JsValue::Object(obj) if obj.is_callable())
    }

    /// Get as heap object
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// String content of a string primitive or a String wrapper object
    pub fn string_content(&self) -> Option<String> {
        match self {
            JsValue::String(s) => Some(s.clone()),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::String(s) => Some(s.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// The falsy values are undefined, null, false, `0`, `-0`, `NaN`,
    /// `""` and `0n`. Every object is truthy, wrappers of falsy
    /// primitives included.
    pub fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => !n.is_nan() && *n != 0.0,
            JsValue::String(s) => !s.is_empty(),
            JsValue::Symbol(_) => true,
            JsValue::BigInt(n) => !n.is_zero(),
            JsValue::Object(_) => true,
        }
    }

    /// The host `typeof` operator
    pub fn type_of(&self) -> TypeOf {
        match self {
            JsValue::Undefined => TypeOf::Undefined,
            JsValue::Null => TypeOf::Object,
            JsValue::Boolean(_) => TypeOf::Boolean,
            JsValue::Number(_) => TypeOf::Number,
            JsValue::String(_) => TypeOf::String,
            JsValue::Symbol(_) => TypeOf::Symbol,
            JsValue::BigInt(_) => TypeOf::BigInt,
            JsValue::Object(obj) if obj.is_callable() => TypeOf::Function,
            JsValue::Object(_) => TypeOf::Object,
        }
    }

    /// The object property lookups start from: the object's own
    /// `[[Prototype]]`, or the wrapper prototype for primitives.
    pub fn prototype(&self) -> Option<JsObject> {
        match self {
            JsValue::Undefined | JsValue::Null => None,
            JsValue::Boolean(_) => realm::prototype_of("Boolean"),
            JsValue::Number(_) => realm::prototype_of("Number"),
            JsValue::String(_) => realm::prototype_of("String"),
            JsValue::Symbol(_) => realm::prototype_of("Symbol"),
            JsValue::BigInt(_) => realm::prototype_of("BigInt"),
            JsValue::Object(obj) => obj.prototype(),
        }
    }

    /// Property read (`value[key]`).
    ///
    /// Primitives read through their wrapper prototype; reads on null or
    /// undefined give undefined instead of throwing.
    pub fn get(&self, key: &PropertyKey) -> JsValue {
        match self {
            JsValue::Undefined | JsValue::Null => JsValue::Undefined,
            JsValue::Object(obj) => obj.get(key),
            JsValue::String(s) => match string_own_property(s, key) {
                Some(value) => value,
                None => self.prototype_get(key),
            },
            _ => self.prototype_get(key),
        }
    }

    fn prototype_get(&self, key: &PropertyKey) -> JsValue {
        self.prototype()
            .map(|proto| proto.get(key))
            .unwrap_or(JsValue::Undefined)
    }

    /// Property read by string key
    pub fn get_str(&self, key: &str) -> JsValue {
        self.get(&PropertyKey::from(key))
    }

    /// Assign an object property; a no-op on primitives
    pub fn set(&self, key: impl Into<PropertyKey>, value: JsValue) {
        if let JsValue::Object(obj) = self {
            obj.set(key, value);
        }
    }

    /// `Object.prototype.hasOwnProperty.call(value, key)`
    pub fn has_own(&self, key: &str) -> bool {
        let key = PropertyKey::from(key);
        match self {
            JsValue::Object(obj) => obj.has_own(&key),
            JsValue::String(s) => string_own_property(s, &key).is_some(),
            _ => false,
        }
    }

    /// `Object.keys(value)`: own enumerable string keys.
    ///
    /// String primitives expose their indices; other primitives and
    /// null/undefined have none.
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            JsValue::Object(obj) => obj.own_enumerable_keys(),
            JsValue::String(s) => (0..utf16_len(s)).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Keys visited by `for (k in value)`, own then inherited
    pub fn for_in_keys(&self) -> Vec<String> {
        match self {
            JsValue::Object(obj) => obj.for_in_keys(),
            JsValue::Undefined | JsValue::Null => Vec::new(),
            _ => {
                let mut keys = self.own_keys();
                if let Some(proto) = self.prototype() {
                    for key in proto.for_in_keys() {
                        if !self.has_own(&key) {
                            keys.push(key);
                        }
                    }
                }
                keys
            }
        }
    }

    /// Strict equality (`===`): identity for objects, value for
    /// primitives, `NaN !== NaN`
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// SameValueZero comparison for Map/Set key equality
    ///
    /// Like strict_equals() but treats NaN === NaN.
    pub fn same_value_zero(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Number(a), JsValue::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }

    /// `value == n` for a number `n` under the host's loose equality.
    ///
    /// Strings and booleans are converted to numbers, wrappers are
    /// unwrapped, arrays compare through their joined string form;
    /// null, undefined, symbols and other objects never match.
    pub fn loosely_equals_number(&self, n: f64) -> bool {
        match self {
            JsValue::Number(x) => *x == n,
            JsValue::String(s) => string_to_number(s) == n,
            JsValue::Boolean(b) => (*b as u8 as f64) == n,
            JsValue::BigInt(b) => n.fract() == 0.0 && b.to_f64() == Some(n),
            JsValue::Undefined | JsValue::Null | JsValue::Symbol(_) => false,
            JsValue::Object(obj) => {
                let primitive = match &*obj.class() {
                    ObjectClass::Number(x) => JsValue::Number(*x),
                    ObjectClass::String(s) => JsValue::String(s.clone()),
                    ObjectClass::Boolean(b) => JsValue::Boolean(*b),
                    ObjectClass::BigInt(b) => JsValue::BigInt(b.clone()),
                    ObjectClass::Array(_) => JsValue::String(self.to_display_string()),
                    _ => return false,
                };
                primitive.loosely_equals_number(n)
            }
        }
    }

    /// The host's `Number(value)` conversion.
    ///
    /// Wrappers unwrap to their primitive, dates yield their time value and
    /// arrays convert through their joined string form. Symbols, which the
    /// host refuses to convert, and all other objects are `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            JsValue::Undefined | JsValue::Symbol(_) => f64::NAN,
            JsValue::Null => 0.0,
            JsValue::Boolean(b) => *b as u8 as f64,
            JsValue::Number(n) => *n,
            JsValue::String(s) => string_to_number(s),
            JsValue::BigInt(b) => b.to_f64().unwrap_or(f64::NAN),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::Number(n) => *n,
                ObjectClass::String(s) => string_to_number(s),
                ObjectClass::Boolean(b) => *b as u8 as f64,
                ObjectClass::BigInt(b) => b.to_f64().unwrap_or(f64::NAN),
                ObjectClass::Date(t) => *t,
                ObjectClass::Array(_) => string_to_number(&self.to_display_string()),
                _ => f64::NAN,
            },
        }
    }

    /// `ToPropertyKey(value)`
    pub fn to_property_key(&self) -> PropertyKey {
        match self {
            JsValue::Symbol(sym) => PropertyKey::Symbol(sym.clone()),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::Symbol(sym) => PropertyKey::Symbol(sym.clone()),
                _ => PropertyKey::String(self.to_display_string()),
            },
            _ => PropertyKey::String(self.to_display_string()),
        }
    }

    /// Convert to the host's string representation (`String(value)`)
    pub fn to_display_string(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Boolean(b) => b.to_string(),
            JsValue::Number(n) => number_to_string(*n),
            JsValue::String(s) => s.clone(),
            JsValue::Symbol(sym) => sym.to_string(),
            JsValue::BigInt(n) => n.to_string(),
            JsValue::Object(obj) => match &*obj.class() {
                ObjectClass::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Some(value) if !value.is_nullish() => value.to_display_string(),
                        _ => String::new(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                ObjectClass::Function(data) => {
                    format!("function {}() {{ [native code] }}", data.name)
                }
                ObjectClass::RegExp(re) => format!("/{}/{}", re.source(), re.flags()),
                ObjectClass::Boolean(b) => b.to_string(),
                ObjectClass::Number(n) => number_to_string(*n),
                ObjectClass::String(s) => s.clone(),
                ObjectClass::Symbol(sym) => sym.to_string(),
                ObjectClass::BigInt(n) => n.to_string(),
                ObjectClass::Error(kind) => match obj.get(&"message".into()) {
                    JsValue::String(m) if !m.is_empty() => format!("{}: {}", kind, m),
                    _ => kind.to_string(),
                },
                other => format!("[object {}]", other.class_name()),
            },
        }
    }
}

/// Equality of handles is strict equality
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<JsObject> for JsValue {
    fn from(obj: JsObject) -> Self {
        JsValue::Object(obj)
    }
}

fn link_constructor(ctor: &JsObject, proto: &JsObject) {
    ctor.define("prototype", JsValue::Object(proto.clone()), false);
    proto.define("constructor", JsValue::Object(ctor.clone()), false);
}

fn string_own_property(s: &str, key: &PropertyKey) -> Option<JsValue> {
    let name = key.as_str()?;
    if name == "length" {
        return Some(JsValue::Number(utf16_len(s) as f64));
    }
    array_index(name)
        .and_then(|index| utf16_unit_at(s, index as usize))
        .map(JsValue::String)
}

/// Length of a string in UTF-16 code units, as the host counts it
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// The UTF-16 code unit at `index` as a one-unit string
pub(crate) fn utf16_unit_at(s: &str, index: usize) -> Option<String> {
    s.encode_utf16()
        .nth(index)
        .map(|unit| String::from_utf16_lossy(&[unit]))
}

/// Format a number the way the host's `String(n)` does: integral values
/// without a fractional part, exponent notation outside `[1e-6, 1e21)`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        }
    } else if n == n.trunc() {
        format!("{}", n as i128)
    } else {
        n.to_string()
    }
}

/// The host's `Number(string)` conversion.
///
/// Surrounding whitespace is ignored, the empty string is `0`, and
/// `0x`/`0o`/`0b` prefixes select a radix; anything else that is not a
/// decimal literal is `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }
    let is_decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

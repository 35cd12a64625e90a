//! Category tags
//!
//! A [`CategoryTag`] is the canonical label of a value's internal class,
//! the same information the host exposes through
//! `Object.prototype.toString` as `"[object <Name>]"`. Every predicate in
//! this crate consults [`classify`] rather than inspecting classes itself.

use std::collections::HashMap;
use std::fmt;

use js_value::{FunctionKind, JsValue, ObjectClass, TypedArrayKind};
use lazy_static::lazy_static;
use tracing::trace;

/// Canonical category of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryTag {
    /// The null marker
    Null,
    /// The undefined marker
    Undefined,
    /// String primitive or wrapper
    String,
    /// Number primitive or wrapper
    Number,
    /// Ordinary object
    Object,
    /// Array
    Array,
    /// Plain, arrow or class function
    Function,
    /// Date instance
    Date,
    /// Boolean primitive or wrapper
    Boolean,
    /// Function `arguments` object
    Arguments,
    /// Map
    Map,
    /// WeakMap
    WeakMap,
    /// WeakSet
    WeakSet,
    /// Set
    Set,
    /// Symbol primitive or wrapper
    Symbol,
    /// Regular expression
    RegExp,
    /// Error instance of any kind
    Error,
    /// Typed array of the given element kind
    TypedArray(TypedArrayKind),
    /// Host class outside the named set (`BigInt`, `AsyncFunction`, ...)
    Other(&'static str),
}

/// Host classes reported as [`CategoryTag::Other`]
const OTHER_CLASSES: [&str; 4] = [
    "BigInt",
    "AsyncFunction",
    "GeneratorFunction",
    "AsyncGeneratorFunction",
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, CategoryTag> = {
        let mut m = HashMap::new();
        for tag in [
            CategoryTag::Null,
            CategoryTag::Undefined,
            CategoryTag::String,
            CategoryTag::Number,
            CategoryTag::Object,
            CategoryTag::Array,
            CategoryTag::Function,
            CategoryTag::Date,
            CategoryTag::Boolean,
            CategoryTag::Arguments,
            CategoryTag::Map,
            CategoryTag::WeakMap,
            CategoryTag::WeakSet,
            CategoryTag::Set,
            CategoryTag::Symbol,
            CategoryTag::RegExp,
            CategoryTag::Error,
        ] {
            m.insert(tag.name(), tag);
        }
        for kind in TypedArrayKind::ALL {
            m.insert(kind.name(), CategoryTag::TypedArray(kind));
        }
        for name in OTHER_CLASSES {
            m.insert(name, CategoryTag::Other(name));
        }
        m
    };
}

impl CategoryTag {
    /// Class name, as it appears inside `[object <Name>]`
    pub fn name(&self) -> &'static str {
        match self {
            CategoryTag::Null => "Null",
            CategoryTag::Undefined => "Undefined",
            CategoryTag::String => "String",
            CategoryTag::Number => "Number",
            CategoryTag::Object => "Object",
            CategoryTag::Array => "Array",
            CategoryTag::Function => "Function",
            CategoryTag::Date => "Date",
            CategoryTag::Boolean => "Boolean",
            CategoryTag::Arguments => "Arguments",
            CategoryTag::Map => "Map",
            CategoryTag::WeakMap => "WeakMap",
            CategoryTag::WeakSet => "WeakSet",
            CategoryTag::Set => "Set",
            CategoryTag::Symbol => "Symbol",
            CategoryTag::RegExp => "RegExp",
            CategoryTag::Error => "Error",
            CategoryTag::TypedArray(kind) => kind.name(),
            CategoryTag::Other(name) => name,
        }
    }

    /// Parse the host description string (`"[object Map]"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use type_checks::CategoryTag;
    ///
    /// assert_eq!(CategoryTag::from_description("[object Map]"), Some(CategoryTag::Map));
    /// assert_eq!(CategoryTag::from_description("Map"), None);
    /// ```
    pub fn from_description(description: &str) -> Option<CategoryTag> {
        let name = description.strip_prefix("[object ")?.strip_suffix(']')?;
        BY_NAME.get(name).copied()
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.name())
    }
}

/// Resolve the category tag of any value.
///
/// Undefined and null map to their own tags; everything else reports the
/// internal class of its object form, so primitives and their wrappers
/// share a tag.
///
/// # Examples
///
/// ```
/// use js_value::JsValue;
/// use type_checks::{classify, CategoryTag};
///
/// assert_eq!(classify(&JsValue::array()), CategoryTag::Array);
/// assert_eq!(classify(&JsValue::string("")), CategoryTag::String);
/// assert_eq!(classify(&JsValue::Null).to_string(), "[object Null]");
/// ```
pub fn classify(value: &JsValue) -> CategoryTag {
    let tag = match value {
        JsValue::Undefined => CategoryTag::Undefined,
        JsValue::Null => CategoryTag::Null,
        JsValue::Boolean(_) => CategoryTag::Boolean,
        JsValue::Number(_) => CategoryTag::Number,
        JsValue::String(_) => CategoryTag::String,
        JsValue::Symbol(_) => CategoryTag::Symbol,
        JsValue::BigInt(_) => CategoryTag::Other("BigInt"),
        JsValue::Object(obj) => class_tag(&obj.class()),
    };
    trace!(%tag, "classified value");
    tag
}

fn class_tag(class: &ObjectClass) -> CategoryTag {
    match class {
        ObjectClass::Ordinary => CategoryTag::Object,
        ObjectClass::Array(_) => CategoryTag::Array,
        ObjectClass::Arguments(_) => CategoryTag::Arguments,
        ObjectClass::Function(data) => match data.kind {
            FunctionKind::Normal => CategoryTag::Function,
            other => CategoryTag::Other(other.class_name()),
        },
        ObjectClass::Date(_) => CategoryTag::Date,
        ObjectClass::RegExp(_) => CategoryTag::RegExp,
        ObjectClass::Error(_) => CategoryTag::Error,
        ObjectClass::Map(_) => CategoryTag::Map,
        ObjectClass::Set(_) => CategoryTag::Set,
        ObjectClass::WeakMap => CategoryTag::WeakMap,
        ObjectClass::WeakSet => CategoryTag::WeakSet,
        ObjectClass::TypedArray(kind, _) => CategoryTag::TypedArray(*kind),
        ObjectClass::Boolean(_) => CategoryTag::Boolean,
        ObjectClass::Number(_) => CategoryTag::Number,
        ObjectClass::String(_) => CategoryTag::String,
        ObjectClass::Symbol(_) => CategoryTag::Symbol,
        ObjectClass::BigInt(_) => CategoryTag::Other("BigInt"),
    }
}

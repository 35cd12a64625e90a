//! Heap objects: internal class, ordered properties and the prototype link.
//!
//! Every non-primitive value is a [`JsObject`]. The object's
//! [`ObjectClass`] decides how the host describes it (`[object Array]`,
//! `[object Map]`, ...) and which exotic own properties it exposes (array
//! indices, `length`). Ordinary properties are kept in insertion order so
//! key enumeration matches the host.

use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use regex::{Regex, RegexBuilder};

use crate::error::{ErrorKind, JsError, JsResult};
use crate::key::{array_index, PropertyKey};
use crate::symbol::SymbolValue;
use crate::typed_array::TypedArrayKind;
use crate::value::{utf16_len, utf16_unit_at, JsValue};

/// Flavour of a callable object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Plain function, arrow function or class constructor
    Normal,
    /// `async function`
    Async,
    /// `function*`
    Generator,
    /// `async function*`
    AsyncGenerator,
}

impl FunctionKind {
    /// Internal class name the host reports for this kind
    pub fn class_name(&self) -> &'static str {
        match self {
            FunctionKind::Normal => "Function",
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// Internal function data
#[derive(Debug, Clone)]
pub struct FunctionData {
    /// Function name
    pub name: String,
    /// Function flavour
    pub kind: FunctionKind,
    /// Whether `new` may be applied to it
    pub is_constructor: bool,
}

/// Internal RegExp data
#[derive(Debug, Clone)]
pub struct RegExpData {
    source: String,
    flags: String,
    compiled: Regex,
}

impl RegExpData {
    /// Compile a pattern with host flags (`dgimsuyv`).
    pub fn new(source: &str, flags: &str) -> JsResult<Self> {
        let mut seen = String::new();
        for ch in flags.chars() {
            if !"dgimsuyv".contains(ch) {
                return Err(JsError::syntax_error(format!(
                    "Invalid regular expression flags '{}'",
                    flags
                )));
            }
            if seen.contains(ch) {
                return Err(JsError::syntax_error(format!(
                    "Invalid flags: duplicate '{}'",
                    ch
                )));
            }
            seen.push(ch);
        }
        if seen.contains('u') && seen.contains('v') {
            return Err(JsError::syntax_error(
                "Invalid flags: 'v' incompatible with 'u'",
            ));
        }

        let compiled = RegexBuilder::new(source)
            .case_insensitive(seen.contains('i'))
            .multi_line(seen.contains('m'))
            .dot_matches_new_line(seen.contains('s'))
            .unicode(true)
            .build()
            .map_err(|e| {
                JsError::syntax_error(format!("Invalid regular expression: /{}/: {}", source, e))
            })?;

        let flags: String = "dgimsuvy".chars().filter(|c| seen.contains(*c)).collect();
        Ok(RegExpData {
            source: source.to_string(),
            flags,
            compiled,
        })
    }

    /// The pattern source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flags in canonical order
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the pattern matches anywhere in `input`
    pub fn is_match(&self, input: &str) -> bool {
        self.compiled.is_match(input)
    }
}

/// Internal class of a heap object
#[derive(Debug)]
pub enum ObjectClass {
    /// Ordinary object (`{}`, `Object.create(..)`, class instances)
    Ordinary,
    /// Array exotic object; `None` slots are holes
    Array(Vec<Option<JsValue>>),
    /// Function `arguments` object
    Arguments(Vec<JsValue>),
    /// Callable object
    Function(FunctionData),
    /// Date with its time value in milliseconds (NaN for an invalid date)
    Date(f64),
    /// Regular expression
    RegExp(RegExpData),
    /// Error instance
    Error(ErrorKind),
    /// Map entries in insertion order
    Map(Vec<(JsValue, JsValue)>),
    /// Set values in insertion order
    Set(Vec<JsValue>),
    /// WeakMap; entries are not observable through this model
    WeakMap,
    /// WeakSet; members are not observable through this model
    WeakSet,
    /// Typed array with elements already converted to the kind's domain
    TypedArray(TypedArrayKind, Vec<f64>),
    /// Boolean wrapper object
    Boolean(bool),
    /// Number wrapper object
    Number(f64),
    /// String wrapper object
    String(String),
    /// Symbol wrapper object
    Symbol(SymbolValue),
    /// BigInt wrapper object
    BigInt(BigInt),
}

impl ObjectClass {
    /// Class name used in the host's `[object <Name>]` description
    pub fn class_name(&self) -> &'static str {
        match self {
            ObjectClass::Ordinary => "Object",
            ObjectClass::Array(_) => "Array",
            ObjectClass::Arguments(_) => "Arguments",
            ObjectClass::Function(data) => data.kind.class_name(),
            ObjectClass::Date(_) => "Date",
            ObjectClass::RegExp(_) => "RegExp",
            ObjectClass::Error(_) => "Error",
            ObjectClass::Map(_) => "Map",
            ObjectClass::Set(_) => "Set",
            ObjectClass::WeakMap => "WeakMap",
            ObjectClass::WeakSet => "WeakSet",
            ObjectClass::TypedArray(kind, _) => kind.name(),
            ObjectClass::Boolean(_) => "Boolean",
            ObjectClass::Number(_) => "Number",
            ObjectClass::String(_) => "String",
            ObjectClass::Symbol(_) => "Symbol",
            ObjectClass::BigInt(_) => "BigInt",
        }
    }

    /// Number of index properties the class exposes, if it is indexed
    fn indexed_len(&self) -> Option<usize> {
        match self {
            ObjectClass::Array(items) => Some(items.len()),
            ObjectClass::Arguments(items) => Some(items.len()),
            ObjectClass::TypedArray(_, items) => Some(items.len()),
            ObjectClass::String(s) => Some(utf16_len(s)),
            _ => None,
        }
    }

    fn indexed_get(&self, index: usize) -> Option<JsValue> {
        match self {
            ObjectClass::Array(items) => items.get(index).cloned().flatten(),
            ObjectClass::Arguments(items) => items.get(index).cloned(),
            ObjectClass::TypedArray(kind, items) => items.get(index).map(|&n| {
                if kind.is_bigint() {
                    JsValue::BigInt(BigInt::from(n as i64))
                } else {
                    JsValue::Number(n)
                }
            }),
            ObjectClass::String(s) => utf16_unit_at(s, index).map(JsValue::String),
            _ => None,
        }
    }
}

/// An own property slot
#[derive(Debug, Clone)]
pub(crate) struct Property {
    value: JsValue,
    /// Whether `Object.keys` and `for…in` visit it
    enumerable: bool,
}

#[derive(Debug)]
struct ObjectData {
    class: ObjectClass,
    properties: Vec<(PropertyKey, Property)>,
    prototype: Option<JsObject>,
}

/// A shared, interior-mutable heap object.
///
/// Cloning a `JsObject` clones the handle, not the object; equality of
/// handles is identity.
#[derive(Clone)]
pub struct JsObject(Rc<RefCell<ObjectData>>);

impl JsObject {
    /// Create an object of the given class with the given prototype
    pub fn new(class: ObjectClass, prototype: Option<JsObject>) -> Self {
        JsObject(Rc::new(RefCell::new(ObjectData {
            class,
            properties: Vec::new(),
            prototype,
        })))
    }

    /// Identity of the object, stable for its lifetime
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Borrow the internal class
    pub fn class(&self) -> Ref<'_, ObjectClass> {
        Ref::map(self.0.borrow(), |data| &data.class)
    }

    /// Class name used in the host description
    pub fn class_name(&self) -> &'static str {
        self.0.borrow().class.class_name()
    }

    /// Whether the object can be called
    pub fn is_callable(&self) -> bool {
        matches!(self.0.borrow().class, ObjectClass::Function(_))
    }

    /// Whether `new` may be applied to the object
    pub fn is_constructor(&self) -> bool {
        matches!(&self.0.borrow().class, ObjectClass::Function(f) if f.is_constructor)
    }

    /// The `[[Prototype]]` link
    pub fn prototype(&self) -> Option<JsObject> {
        self.0.borrow().prototype.clone()
    }

    /// Replace the `[[Prototype]]` link.
    ///
    /// Fails with a TypeError when the new chain would contain `self`.
    pub fn set_prototype(&self, prototype: Option<JsObject>) -> JsResult<()> {
        let mut current = prototype.clone();
        while let Some(obj) = current {
            if obj.ptr_eq(self) {
                return Err(JsError::type_error("Cyclic __proto__ value"));
            }
            current = obj.prototype();
        }
        self.0.borrow_mut().prototype = prototype;
        Ok(())
    }

    /// Whether `prototype` appears anywhere on this object's chain
    pub fn inherits_from(&self, prototype: &JsObject) -> bool {
        let mut current = self.prototype();
        while let Some(obj) = current {
            if obj.ptr_eq(prototype) {
                return true;
            }
            current = obj.prototype();
        }
        false
    }

    /// Define (or redefine) an own property with explicit enumerability
    pub fn define(&self, key: impl Into<PropertyKey>, value: JsValue, enumerable: bool) {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        if let Some((_, slot)) = data.properties.iter_mut().find(|(k, _)| *k == key) {
            *slot = Property { value, enumerable };
        } else {
            data.properties.push((key, Property { value, enumerable }));
        }
    }

    /// Assign a property.
    ///
    /// Index keys write through to array elements; writing past the end
    /// grows `length` to `index + 1` and leaves holes in between. Other
    /// keys become ordinary properties, enumerable when newly created.
    pub fn set(&self, key: impl Into<PropertyKey>, value: JsValue) {
        let key = key.into();
        {
            let mut data = self.0.borrow_mut();
            if let (ObjectClass::Array(items), Some(index)) = (&mut data.class, key.array_index()) {
                let index = index as usize;
                if index >= items.len() {
                    items.resize(index + 1, None);
                }
                items[index] = Some(value);
                return;
            }
            if let Some((_, slot)) = data.properties.iter_mut().find(|(k, _)| *k == key) {
                slot.value = value;
                return;
            }
        }
        self.define(key, value, true);
    }

    /// Remove an own ordinary property, returning whether it existed
    pub fn delete(&self, key: &PropertyKey) -> bool {
        let mut data = self.0.borrow_mut();
        let before = data.properties.len();
        data.properties.retain(|(k, _)| k != key);
        data.properties.len() != before
    }

    /// Read an own property, exotic slots included
    pub fn get_own(&self, key: &PropertyKey) -> Option<JsValue> {
        let data = self.0.borrow();
        if let Some(len) = data.class.indexed_len() {
            if key.as_str() == Some("length") {
                return Some(JsValue::Number(len as f64));
            }
            if let Some(index) = key.array_index() {
                if let Some(value) = data.class.indexed_get(index as usize) {
                    return Some(value);
                }
            }
        }
        data.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, slot)| slot.value.clone())
    }

    /// `Object.prototype.hasOwnProperty`
    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.get_own(key).is_some()
    }

    /// Property read: own slots first, then up the prototype chain.
    /// Missing properties read as undefined.
    pub fn get(&self, key: &PropertyKey) -> JsValue {
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if let Some(value) = obj.get_own(key) {
                return value;
            }
            current = obj.prototype();
        }
        JsValue::Undefined
    }

    /// All own string keys with their enumerability, in host order:
    /// exotic indices, exotic `length`, then integer keys ascending and
    /// remaining strings in insertion order.
    fn own_string_keys(&self) -> Vec<(String, bool)> {
        let data = self.0.borrow();
        let mut keys = Vec::new();
        if let Some(len) = data.class.indexed_len() {
            keys.extend(
                (0..len)
                    .filter(|&i| data.class.indexed_get(i).is_some())
                    .map(|i| (i.to_string(), true)),
            );
            keys.push(("length".to_string(), false));
        }

        let mut indexed: Vec<(u32, &str, bool)> = Vec::new();
        let mut named: Vec<(&str, bool)> = Vec::new();
        for (key, slot) in &data.properties {
            if let PropertyKey::String(s) = key {
                match array_index(s) {
                    Some(index) => indexed.push((index, s, slot.enumerable)),
                    None => named.push((s, slot.enumerable)),
                }
            }
        }
        indexed.sort_by_key(|(index, _, _)| *index);
        keys.extend(indexed.into_iter().map(|(_, s, e)| (s.to_string(), e)));
        keys.extend(named.into_iter().map(|(s, e)| (s.to_string(), e)));
        keys
    }

    /// `Object.keys`: own enumerable string keys
    pub fn own_enumerable_keys(&self) -> Vec<String> {
        self.own_string_keys()
            .into_iter()
            .filter_map(|(key, enumerable)| enumerable.then_some(key))
            .collect()
    }

    /// `for…in` order: own enumerable keys, then each prototype's, skipping
    /// any key already seen lower in the chain (enumerable or not).
    pub fn for_in_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            for (key, enumerable) in obj.own_string_keys() {
                if seen.insert(key.clone()) && enumerable {
                    keys.push(key);
                }
            }
            current = obj.prototype();
        }
        keys
    }

    /// Entry count of a Map or Set
    pub fn collection_size(&self) -> Option<usize> {
        match &self.0.borrow().class {
            ObjectClass::Map(entries) => Some(entries.len()),
            ObjectClass::Set(values) => Some(values.len()),
            _ => None,
        }
    }

    /// `Map.prototype.has` / `Set.prototype.has` (SameValueZero)
    pub fn collection_has(&self, key: &JsValue) -> bool {
        match &self.0.borrow().class {
            ObjectClass::Map(entries) => entries.iter().any(|(k, _)| k.same_value_zero(key)),
            ObjectClass::Set(values) => values.iter().any(|v| v.same_value_zero(key)),
            _ => false,
        }
    }

    /// Insert into a Map (replacing an existing SameValueZero key) or Set
    pub(crate) fn collection_insert(&self, key: JsValue, value: JsValue) {
        let mut data = self.0.borrow_mut();
        match &mut data.class {
            ObjectClass::Map(entries) => {
                if let Some(entry) = entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                    entry.1 = value;
                } else {
                    entries.push((key, value));
                }
            }
            ObjectClass::Set(values) => {
                if !values.iter().any(|v| v.same_value_zero(&key)) {
                    values.push(key);
                }
            }
            _ => {}
        }
    }
}

impl PartialEq for JsObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prototype links form cycles, so only the class and identity are shown
        write!(f, "JsObject({} @ {:#x})", self.class_name(), self.id())
    }
}

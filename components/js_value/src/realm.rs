//! Per-thread intrinsics.
//!
//! The host keeps one set of built-in constructors and prototypes per
//! realm. Values here are `Rc`-based, so each thread gets its own realm,
//! created lazily on first use and shared by every value built on that
//! thread.
//!
//! Each built-in constructor is a callable object with a non-enumerable
//! `prototype` property, and each prototype has a non-enumerable
//! `constructor` pointing back, the same shape as user-defined classes.

use std::collections::HashMap;

use tracing::trace;

use crate::error::ErrorKind;
use crate::object::{FunctionData, FunctionKind, JsObject, ObjectClass};
use crate::typed_array::TypedArrayKind;
use crate::value::JsValue;

/// Built-in constructors whose prototypes inherit directly from
/// `Object.prototype`. `Object` and `Function` are set up separately.
const PLAIN_BUILTINS: &[&str] = &[
    "Array", "Boolean", "Number", "String", "Symbol", "BigInt", "Date", "RegExp", "Map", "Set",
    "WeakMap", "WeakSet", "Error",
];

/// The intrinsic objects of one realm
pub struct Intrinsics {
    object_prototype: JsObject,
    function_prototype: JsObject,
    constructors: HashMap<&'static str, JsObject>,
}

thread_local! {
    static INTRINSICS: Intrinsics = Intrinsics::create();
}

impl Intrinsics {
    fn create() -> Self {
        trace!("creating realm intrinsics");
        let object_prototype = JsObject::new(ObjectClass::Ordinary, None);
        let function_prototype = JsObject::new(
            ObjectClass::Function(FunctionData {
                name: String::new(),
                kind: FunctionKind::Normal,
                is_constructor: false,
            }),
            Some(object_prototype.clone()),
        );
        let mut intrinsics = Intrinsics {
            object_prototype: object_prototype.clone(),
            function_prototype: function_prototype.clone(),
            constructors: HashMap::new(),
        };

        intrinsics.install("Object", object_prototype, None);
        intrinsics.install("Function", function_prototype, None);
        for &name in PLAIN_BUILTINS {
            let proto = intrinsics.prototype_object(builtin_prototype_class(name));
            intrinsics.install(name, proto, None);
        }
        for kind in TypedArrayKind::ALL {
            let proto = intrinsics.prototype_object(ObjectClass::Ordinary);
            intrinsics.install(kind.name(), proto, None);
        }

        // Error subtypes chain to Error for both prototype and constructor
        let error_ctor = intrinsics.constructors.get("Error").cloned();
        let error_proto = error_ctor.as_ref().and_then(prototype_property);
        for kind in ErrorKind::ALL.into_iter().skip(1) {
            let proto = JsObject::new(ObjectClass::Ordinary, error_proto.clone());
            intrinsics.install(kind.name(), proto, error_ctor.clone());
        }
        intrinsics
    }

    fn prototype_object(&self, class: ObjectClass) -> JsObject {
        JsObject::new(class, Some(self.object_prototype.clone()))
    }

    fn install(&mut self, name: &'static str, proto: JsObject, parent: Option<JsObject>) {
        let ctor = JsObject::new(
            ObjectClass::Function(FunctionData {
                name: name.to_string(),
                kind: FunctionKind::Normal,
                is_constructor: true,
            }),
            Some(parent.unwrap_or_else(|| self.function_prototype.clone())),
        );
        ctor.define("prototype", JsValue::Object(proto.clone()), false);
        proto.define("constructor", JsValue::Object(ctor.clone()), false);
        self.constructors.insert(name, ctor);
    }

    /// `Object.prototype`, the root of ordinary prototype chains
    pub fn object_prototype(&self) -> &JsObject {
        &self.object_prototype
    }

    /// `Function.prototype`
    pub fn function_prototype(&self) -> &JsObject {
        &self.function_prototype
    }

    /// A built-in constructor by name
    pub fn constructor(&self, name: &str) -> Option<&JsObject> {
        self.constructors.get(name)
    }
}

/// Some built-in prototypes are themselves instances of their class.
fn builtin_prototype_class(name: &str) -> ObjectClass {
    match name {
        "Array" => ObjectClass::Array(Vec::new()),
        "Boolean" => ObjectClass::Boolean(false),
        "Number" => ObjectClass::Number(0.0),
        "String" => ObjectClass::String(String::new()),
        _ => ObjectClass::Ordinary,
    }
}

fn prototype_property(ctor: &JsObject) -> Option<JsObject> {
    match ctor.get_own(&"prototype".into()) {
        Some(JsValue::Object(proto)) => Some(proto),
        _ => None,
    }
}

/// Run `f` against this thread's intrinsics
pub fn with_intrinsics<R>(f: impl FnOnce(&Intrinsics) -> R) -> R {
    INTRINSICS.with(f)
}

/// `Object.prototype` of this thread's realm
pub fn object_prototype() -> JsObject {
    with_intrinsics(|realm| realm.object_prototype().clone())
}

/// `Function.prototype` of this thread's realm
pub fn function_prototype() -> JsObject {
    with_intrinsics(|realm| realm.function_prototype().clone())
}

/// A built-in constructor (`"Map"`, `"TypeError"`, `"Int8Array"`, ...)
pub fn constructor_of(name: &str) -> Option<JsObject> {
    with_intrinsics(|realm| realm.constructor(name).cloned())
}

/// The `prototype` of a built-in constructor
pub fn prototype_of(name: &str) -> Option<JsObject> {
    constructor_of(name).as_ref().and_then(prototype_property)
}

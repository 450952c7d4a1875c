use crate::interop::{new_obj, set_kv};
use netview::{LoadError, ReferenceError};
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, key: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_str(key));
    err("invalid_id", format!("unknown {} '{}'", kind, key), Some(d.into()))
}

/// Error object for a rejected load, with the offending key under `data`
/// where there is one.
pub fn load_error(e: &LoadError) -> JsValue {
    let d = new_obj();
    match e {
        LoadError::Lookup(l) => {
            let key = match l {
                netview::LookupError::DuplicateNode(k) | netview::LookupError::DuplicateEdge(k) => k,
            };
            set_kv(&d, "key", &JsValue::from_str(key));
        }
        LoadError::Reference(r) => {
            let key = match r {
                ReferenceError::UnknownNode { name, .. } => name,
                ReferenceError::UnknownEdge { id, .. } => id,
                ReferenceError::DetachedArc { edge, .. } => edge,
            };
            set_kv(&d, "key", &JsValue::from_str(key));
        }
        LoadError::TooLarge { kind, got, max } => {
            set_kv(&d, "kind", &JsValue::from_str(kind));
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
        LoadError::BadCoordinate { name } => set_kv(&d, "key", &JsValue::from_str(name)),
        LoadError::InvalidBundle { id, .. } => set_kv(&d, "key", &JsValue::from_str(id)),
        LoadError::Json(_) | LoadError::BadConfig(_) => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

use wasm_bindgen::prelude::*;
use pathgraph::PathError;

use crate::interop::{new_obj, set_kv};

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
    err("non_finite", format!("parameter '{}' must be finite and in bounds", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_str(id));
    err("invalid_id", format!("invalid {} id '{}'", kind, id), Some(d.into()))
}

#[inline]
pub fn same_node(op: &str, id: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "id", &JsValue::from_str(id));
    err("same_node", format!("{} needs two different nodes, got '{}' twice", op, id), Some(d.into()))
}

#[inline]
pub fn duplicate_id(id: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "id", &JsValue::from_str(id));
    err("duplicate_id", format!("node '{}' already exists", id), Some(d.into()))
}

/// Envelope for a core persistence error, keeping its stable code.
pub fn from_path_error(e: &PathError) -> JsValue {
    let d = new_obj();
    match e {
        PathError::MissingNode { path, node } => {
            set_kv(&d, "path", &JsValue::from_str(path));
            set_kv(&d, "node", &JsValue::from_str(node));
        }
        PathError::SyntheticNode { node } | PathError::SelfLoop { node } => {
            set_kv(&d, "node", &JsValue::from_str(node));
        }
        PathError::NonFinite { param } => set_kv(&d, "param", &JsValue::from_str(param)),
        PathError::LimitExceeded { what, max, got } => {
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
        }
        PathError::InvalidJson(_) => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

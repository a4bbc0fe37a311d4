#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use pathgraph_wasm::PathGraph;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

fn is_err(v: &JsValue, code: &str) -> bool {
    if is_ok(v) {
        return false;
    }
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
            return c.as_string().map_or(false, |s| s == code);
        }
    }
    false
}

#[wasm_bindgen_test]
fn invalid_ids_return_typed_errors_without_mutation() {
    let mut g = PathGraph::new();
    assert!(is_ok(&g.add_edge_res("a", 0.0, 0.0, "b", 10.0, 0.0)));
    assert!(is_err(&g.delete_node_res("ghost"), "invalid_id"));
    assert!(is_err(&g.delete_edge_res("a", "ghost"), "invalid_id"));
    assert!(is_err(&g.merge_nodes_res("a", "a"), "same_node"));
    assert!(is_err(&g.set_node_position_res("ghost", 1.0, 1.0), "invalid_id"));
    assert!(is_err(&g.split_edge_res("a", "b", "a", 5.0, 0.0), "duplicate_id"));
    assert!(is_err(&g.get_argument_res("a", "a"), "same_node"));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[wasm_bindgen_test]
fn non_finite_inputs_rejected() {
    let mut g = PathGraph::new();
    assert!(is_err(&g.add_edge_res("a", f64::NAN, 0.0, "b", 1.0, 1.0), "non_finite"));
    assert!(is_err(&g.add_edge_res("a", 0.0, 0.0, "b", 1e12, 1.0), "non_finite"));
    assert!(is_err(&g.add_edge_res("a", 0.0, 0.0, "a", 1.0, 1.0), "same_node"));
    assert!(is_err(&g.corner_handles_res(-1.0), "non_finite"));
    assert!(is_err(&g.pick_res(f64::INFINITY, 0.0), "non_finite"));
    assert_eq!(g.node_count(), 0);
    assert!(!g.add_edge("a", f64::NAN, 0.0, "b", 1.0, 1.0));
}

#[wasm_bindgen_test]
fn entity_errors_keep_core_codes() {
    let mut g = PathGraph::new();
    let missing = r#"{"id":"p","nodes":[{"id":"a","x":0,"y":0}],"edges":[["a","z"]]}"#;
    assert!(is_err(&g.from_entity_res(missing), "missing_node"));
    let looped = r#"{"id":"p","nodes":[{"id":"a","x":0,"y":0}],"edges":[["a","a"]]}"#;
    assert!(is_err(&g.from_entity_res(looped), "self_loop"));
    assert!(is_err(&g.from_entity_res("not json"), "invalid_json"));
    assert!(is_err(&g.set_config_res("[1]"), "invalid_json"));
    assert!(is_ok(&g.set_config_res(r#"{"nodeHitRadius": 4}"#)));
    assert_eq!(g.node_count(), 0);
}

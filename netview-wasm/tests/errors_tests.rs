use js_sys::Reflect;
use netview_wasm::Diagram;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false)
}

fn err_code(v: &JsValue) -> Option<String> {
    if is_ok(v) {
        return None;
    }
    let err = Reflect::get(v, &JsValue::from_str("error")).ok()?;
    Reflect::get(&err, &JsValue::from_str("code")).ok()?.as_string()
}

fn load_err(graph: &str) -> Option<String> {
    match Diagram::load_str(graph, JsValue::UNDEFINED) {
        Ok(_) => None,
        Err(e) => err_code(&e),
    }
}

#[wasm_bindgen_test]
fn load_errors_carry_codes() {
    assert_eq!(load_err("{").as_deref(), Some("json_parse"));
    assert_eq!(
        load_err(r#"{"nodes": [{"name": "a", "x": 0, "y": 0}, {"name": "a", "x": 0, "y": 0}]}"#).as_deref(),
        Some("lookup")
    );
    assert_eq!(
        load_err(r#"{"nodes": [{"name": "a", "x": 0, "y": 0}], "links": [{"id": "e", "source": "a", "target": "b"}]}"#).as_deref(),
        Some("reference")
    );
    assert_eq!(
        load_err(r#"{"nodes": [{"name": "a", "x": 0, "y": 0}, {"name": "b", "x": 1, "y": 0}],
                     "links": [{"id": "e", "source": "a", "target": "b", "edge_index": 2, "num_edge_siblings": 2}]}"#).as_deref(),
        Some("invalid_bundle")
    );
}

#[wasm_bindgen_test]
fn lookup_error_names_the_key() {
    let e = Diagram::load_str(
        r#"{"nodes": [{"name": "dup", "x": 0, "y": 0}, {"name": "dup", "x": 0, "y": 0}]}"#,
        JsValue::UNDEFINED,
    )
    .err()
    .unwrap();
    let data = Reflect::get(&Reflect::get(&e, &JsValue::from_str("error")).unwrap(), &JsValue::from_str("data")).unwrap();
    assert_eq!(Reflect::get(&data, &JsValue::from_str("key")).unwrap().as_string().as_deref(), Some("dup"));
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    let config = js_sys::JSON::parse(r#"{"scale": -3}"#).unwrap();
    let e = Diagram::load_str(r#"{"nodes": []}"#, config).err().unwrap();
    assert_eq!(err_code(&e).as_deref(), Some("bad_config"));

    let config = js_sys::JSON::parse(r#"{"scale": "wide"}"#).unwrap();
    let e = Diagram::load_str(r#"{"nodes": []}"#, config).err().unwrap();
    assert_eq!(err_code(&e).as_deref(), Some("bad_config"));
}

#[wasm_bindgen_test]
fn strict_gestures_reject_bad_input_without_mutation() {
    let mut d = Diagram::load_str(r#"{"nodes": [{"name": "a", "x": 5, "y": 5}]}"#, JsValue::UNDEFINED).unwrap();
    assert_eq!(err_code(&d.press_res("zz")).as_deref(), Some("invalid_id"));
    assert!(is_ok(&d.press_res("a")));

    assert_eq!(err_code(&d.drag_res(f32::NAN, 0.0)).as_deref(), Some("non_finite"));
    assert_eq!(err_code(&d.drag_res(0.0, f32::INFINITY)).as_deref(), Some("non_finite"));
    assert!(d.drag(f32::NAN, 1.0).is_null());
    assert_eq!(d.edge_path("missing"), None);

    assert_eq!(err_code(&d.brush_move_res(0.0, f32::NAN, 1.0, 1.0)).as_deref(), Some("non_finite"));
    assert_eq!(d.is_selected("a"), Some(true));
    assert!(is_ok(&d.drag_res(1.0, 1.0)));
}

#[wasm_bindgen_test]
fn brush_rect_object() {
    let mut d = Diagram::load_str(
        r#"{"nodes": [{"name": "a", "x": 5, "y": 5}, {"name": "b", "x": 50, "y": 50}]}"#,
        JsValue::UNDEFINED,
    )
    .unwrap();
    d.brush_start();
    let rect = js_sys::JSON::parse(r#"{"x0": 0, "y0": 0, "x1": 10, "y1": 10}"#).unwrap();
    assert!(is_ok(&d.brush_rect_res(rect)));
    assert_eq!(d.is_selected("a"), Some(true));
    assert_eq!(d.is_selected("b"), Some(false));

    let partial = js_sys::JSON::parse(r#"{"x0": 0, "y0": 0}"#).unwrap();
    assert_eq!(err_code(&d.brush_rect_res(partial)).as_deref(), Some("json_parse"));
    assert_eq!(d.is_selected("a"), Some(true));

    assert!(is_ok(&d.brush_rect_res(JsValue::NULL)));
    assert_eq!(d.is_selected("a"), Some(false));
}

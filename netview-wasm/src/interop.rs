use js_sys::{Array, Float32Array, Object, Reflect, Uint32Array, Uint8Array};
use netview::Redraw;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_u32(slice: &[u32]) -> Uint32Array {
    let arr = Uint32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_f32(slice: &[f32]) -> Float32Array {
    let arr = Float32Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_u8(slice: &[u8]) -> Uint8Array {
    let arr = Uint8Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_str<'a>(items: impl IntoIterator<Item = &'a str>) -> Array {
    items.into_iter().map(JsValue::from_str).collect()
}

fn paths(d: &netview::Diagram, updates: &[netview::PathUpdate], edges: bool) -> Object {
    let ids: Vec<u32> = updates.iter().map(|p| p.id).collect();
    let obj = new_obj();
    set_kv(&obj, "ids", &arr_u32(&ids).into());
    if edges {
        let keys = ids
            .iter()
            .map(|&id| d.index().edge(id).map_or("", |e| e.id.as_str()));
        set_kv(&obj, "keys", &arr_str(keys).into());
    }
    set_kv(&obj, "paths", &arr_str(updates.iter().map(|p| p.d.as_str())).into());
    obj
}

/// Flatten a redraw batch into typed arrays plus name/key lookups.
///
/// `nodes.positions` is interleaved `[x0, y0, x1, y1, ...]`; `styles.selected`
/// holds 0/1 per entry of `styles.ids`.
pub fn redraw_to_js(d: &netview::Diagram, r: &Redraw) -> JsValue {
    let name = |id: u32| d.index().node(id).map_or("", |n| n.name.as_str());

    let nodes = new_obj();
    let ids: Vec<u32> = r.nodes.iter().map(|n| n.id).collect();
    let pos: Vec<f32> = r.nodes.iter().flat_map(|n| [n.x, n.y]).collect();
    set_kv(&nodes, "ids", &arr_u32(&ids).into());
    set_kv(&nodes, "names", &arr_str(ids.iter().map(|&id| name(id))).into());
    set_kv(&nodes, "positions", &arr_f32(&pos).into());

    let styles = new_obj();
    let ids: Vec<u32> = r.styles.iter().map(|s| s.id).collect();
    let selected: Vec<u8> = r.styles.iter().map(|s| s.selected as u8).collect();
    set_kv(&styles, "ids", &arr_u32(&ids).into());
    set_kv(&styles, "names", &arr_str(ids.iter().map(|&id| name(id))).into());
    set_kv(&styles, "selected", &arr_u8(&selected).into());

    let obj = new_obj();
    set_kv(&obj, "nodes", &nodes.into());
    set_kv(&obj, "styles", &styles.into());
    set_kv(&obj, "edges", &paths(d, &r.edges, true).into());
    set_kv(&obj, "arcs", &paths(d, &r.arcs, false).into());
    set_kv(&obj, "stop_propagation", &JsValue::from_bool(r.stop_propagation));
    obj.into()
}

use crate::interop::{arr_f32, arr_str, redraw_to_js};
use crate::Diagram;
use netview::{Rect, RenderConfig, Vec2};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_config(config: JsValue) -> Result<RenderConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(RenderConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| error::err("bad_config", format!("{}", e), None))
}

/// Corners of a brush rectangle as sent by the host: `{x0, y0, x1, y1}`.
fn parse_corners(v: JsValue) -> Result<(f32, f32, f32, f32), JsValue> {
    #[derive(serde::Deserialize)]
    struct CornersJs {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    }

    let c: CornersJs = serde_wasm_bindgen::from_value(v)
        .map_err(|e| error::err("json_parse", format!("brush rectangle: {}", e), None))?;
    Ok((c.x0, c.y0, c.x1, c.y1))
}

#[wasm_bindgen]
impl Diagram {
    /// Build a diagram from a graph description object and an optional
    /// render config. Rejects with an `{ok: false, error}` object.
    pub fn load(graph: JsValue, config: JsValue) -> Result<Diagram, JsValue> {
        let config = parse_config(config)?;
        let value = serde_wasm_bindgen::from_value::<serde_json::Value>(graph)
            .map_err(|e| error::err("json_parse", format!("{}", e), None))?;
        netview::Diagram::from_json_value(value, config)
            .map(Diagram::rs_new)
            .map_err(|e| error::load_error(&e))
    }
    /// Same as [`Diagram::load`], from JSON text.
    pub fn load_str(graph: &str, config: JsValue) -> Result<Diagram, JsValue> {
        let config = parse_config(config)?;
        netview::Diagram::from_json_str(graph, config)
            .map(Diagram::rs_new)
            .map_err(|e| error::load_error(&e))
    }

    pub fn node_count(&self) -> u32 {
        self.inner.index().node_count()
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.index().edge_count()
    }
    pub fn arc_count(&self) -> u32 {
        self.inner.index().arc_count()
    }

    // Input
    pub fn set_modifier(&mut self, shift: bool, meta: bool) {
        self.inner.set_modifier(shift, meta);
    }

    // Gestures
    pub fn press(&mut self, name: &str) -> JsValue {
        match self.inner.press(name) {
            Some(r) => redraw_to_js(&self.inner, &r),
            None => JsValue::NULL,
        }
    }
    pub fn press_res(&mut self, name: &str) -> JsValue {
        match self.inner.press(name) {
            Some(r) => error::ok(redraw_to_js(&self.inner, &r)),
            None => error::invalid_id("node", name),
        }
    }
    pub fn drag(&mut self, dx: f32, dy: f32) -> JsValue {
        if !dx.is_finite() || !dy.is_finite() {
            return JsValue::NULL;
        }
        let r = self.inner.drag(dx, dy);
        redraw_to_js(&self.inner, &r)
    }
    pub fn drag_res(&mut self, dx: f32, dy: f32) -> JsValue {
        if !dx.is_finite() {
            return error::non_finite("dx");
        }
        if !dy.is_finite() {
            return error::non_finite("dy");
        }
        let r = self.inner.drag(dx, dy);
        error::ok(redraw_to_js(&self.inner, &r))
    }
    pub fn brush_start(&mut self) -> JsValue {
        let r = self.inner.brush_start();
        redraw_to_js(&self.inner, &r)
    }
    /// Current brush rectangle from two opposite corners.
    pub fn brush_move(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> JsValue {
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return JsValue::NULL;
        }
        let rect = Rect::from_corners(Vec2::new(x0, y0), Vec2::new(x1, y1));
        let r = self.inner.brush_move(Some(rect));
        redraw_to_js(&self.inner, &r)
    }
    pub fn brush_move_res(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> JsValue {
        for (name, v) in [("x0", x0), ("y0", y0), ("x1", x1), ("y1", y1)] {
            if !v.is_finite() {
                return error::non_finite(name);
            }
        }
        error::ok(self.brush_move(x0, y0, x1, y1))
    }
    /// Brush from a `{x0, y0, x1, y1}` object; `null` collapses it.
    /// Always answers with a result object.
    pub fn brush_rect_res(&mut self, rect: JsValue) -> JsValue {
        if rect.is_null() || rect.is_undefined() {
            return error::ok(self.brush_clear());
        }
        match parse_corners(rect) {
            Ok((x0, y0, x1, y1)) => self.brush_move_res(x0, y0, x1, y1),
            Err(e) => e,
        }
    }
    /// Brush collapsed to nothing: selection falls back to the snapshot.
    pub fn brush_clear(&mut self) -> JsValue {
        let r = self.inner.brush_move(None);
        redraw_to_js(&self.inner, &r)
    }
    pub fn brush_end(&mut self) -> JsValue {
        let r = self.inner.brush_end();
        redraw_to_js(&self.inner, &r)
    }
    pub fn redraw_all(&self) -> JsValue {
        redraw_to_js(&self.inner, &self.inner.redraw_all())
    }

    // Queries
    pub fn edge_path(&self, key: &str) -> Option<String> {
        self.inner.edge_path(key)
    }
    pub fn arc_path(&self, index: u32) -> Option<String> {
        self.inner.arc_path(index)
    }
    pub fn node_position(&self, name: &str) -> JsValue {
        match self.inner.node_position(name) {
            Some(p) => arr_f32(&[p.x, p.y]).into(),
            None => JsValue::NULL,
        }
    }
    pub fn is_selected(&self, name: &str) -> Option<bool> {
        self.inner.is_selected(name)
    }
    pub fn selected_nodes(&self) -> JsValue {
        arr_str(self.inner.selected_nodes()).into()
    }
    pub fn neighbors(&self, name: &str) -> JsValue {
        arr_str(self.inner.neighbors(name)).into()
    }
    pub fn to_svg_paths(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_svg_paths()).unwrap_or(JsValue::NULL)
    }
    /// Curve descriptor of an edge as a plain object (`kind`, endpoints, radii).
    pub fn edge_curve(&self, id: u32) -> JsValue {
        self.inner
            .edge_curve(id)
            .and_then(|c| serde_wasm_bindgen::to_value(c).ok())
            .unwrap_or(JsValue::NULL)
    }

    // Presentation parameters
    pub fn arrowhead_ref_x(&self) -> f32 {
        self.inner.config().arrowhead_ref_x()
    }
    pub fn label_offset_y(&self) -> f32 {
        self.inner.config().label_offset_y()
    }
    pub fn show_labels(&self) -> bool {
        self.inner.config().show_labels
    }
    pub fn node_size(&self) -> f32 {
        self.inner.config().node_size
    }
}

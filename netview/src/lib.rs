pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod path;
pub mod selection;
pub mod geometry {
    pub mod ellipse;
    pub mod limits;
    pub mod math;
    pub mod path_length;
    pub mod tolerance;
}
mod json;
mod svg;

pub use config::RenderConfig;
pub use error::{LoadError, LookupError, ReferenceError};
pub use index::GraphIndex;
pub use model::{ArcId, EdgeId, GraphDoc, NodeId, Rect, Vec2};
pub use path::Curve;
pub use selection::{Dirty, Gesture, InputContext, Selection};

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeUpdate {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleUpdate {
    pub id: NodeId,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathUpdate {
    pub id: u32,
    pub d: String,
}

/// Everything the rendering surface has to change after one gesture.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Redraw {
    pub nodes: Vec<NodeUpdate>,
    pub styles: Vec<StyleUpdate>,
    pub edges: Vec<PathUpdate>,
    pub arcs: Vec<PathUpdate>,
    pub stop_propagation: bool,
}

/// One displayed diagram: the indexed graph, its selection state and the
/// current curve of every edge and arc.
pub struct Diagram {
    pub(crate) index: GraphIndex,
    pub(crate) selection: Selection,
    pub(crate) config: RenderConfig,
    pub(crate) input: InputContext,
    pub(crate) edge_curves: Vec<Curve>, // id is index
    pub(crate) arc_curves: Vec<Curve>,  // id is index
}

impl Diagram {
    pub fn from_doc(doc: GraphDoc, config: RenderConfig) -> Result<Diagram, LoadError> {
        let built = config
            .validate()
            .and_then(|_| GraphIndex::build(doc));
        let index = match built {
            Ok(ix) => ix,
            Err(e) => {
                log::warn!("rejected graph: {}", e);
                return Err(e);
            }
        };
        let mut d = Diagram {
            selection: Selection::new(index.node_count() as usize),
            index,
            config,
            input: InputContext::default(),
            edge_curves: Vec::new(),
            arc_curves: Vec::new(),
        };
        // edges first: arc anchors are measured along edge curves
        d.edge_curves = (0..d.index.edge_count()).map(|e| d.compute_edge(e)).collect();
        d.arc_curves = (0..d.index.arc_count()).map(|a| d.compute_arc(a)).collect();
        Ok(d)
    }

    pub fn from_json_str(s: &str, config: RenderConfig) -> Result<Diagram, LoadError> {
        let doc = json::parse_doc_str(s).map_err(|e| {
            log::warn!("rejected graph: {}", e);
            e
        })?;
        Diagram::from_doc(doc, config)
    }

    pub fn from_json_value(v: serde_json::Value, config: RenderConfig) -> Result<Diagram, LoadError> {
        let doc = json::parse_doc_value(v).map_err(|e| {
            log::warn!("rejected graph: {}", e);
            e
        })?;
        Diagram::from_doc(doc, config)
    }

    fn compute_edge(&self, id: EdgeId) -> Curve {
        let e = &self.index.edges[id as usize];
        let from = self.index.nodes[e.source as usize].pos;
        let to = self.index.nodes[e.target as usize].pos;
        path::edge_curve(from, to, e.bundle, self.config.scale)
    }

    fn compute_arc(&self, id: ArcId) -> Curve {
        let a = &self.index.arcs[id as usize];
        let anchor = self.index.nodes[a.at_v as usize].pos;
        path::arc_curve(
            a,
            &self.edge_curves[a.source as usize],
            &self.edge_curves[a.target as usize],
            anchor,
        )
    }

    // Key observations

    pub fn set_modifier(&mut self, shift: bool, meta: bool) {
        self.input = InputContext::from_keys(shift, meta);
    }
    pub fn input(&self) -> InputContext {
        self.input
    }

    // Gestures

    pub fn handle(&mut self, gesture: Gesture) -> Redraw {
        let gesture = match gesture {
            Gesture::BrushMove { rect: Some(r) } => Gesture::BrushMove {
                rect: Some(self.config.extent().map_or(r, |ext| r.clamp_to(&ext))),
            },
            g => g,
        };
        let dirty = self.selection.apply(&mut self.index, self.input, gesture);
        self.consume(dirty)
    }

    /// Press on the node called `name`; `None` if there is no such node.
    pub fn press(&mut self, name: &str) -> Option<Redraw> {
        let node = self.index.node_id(name)?;
        Some(self.handle(Gesture::Press { node }))
    }
    pub fn drag(&mut self, dx: f32, dy: f32) -> Redraw {
        self.handle(Gesture::Drag { dx, dy })
    }
    pub fn brush_start(&mut self) -> Redraw {
        self.handle(Gesture::BrushStart)
    }
    pub fn brush_move(&mut self, rect: Option<Rect>) -> Redraw {
        self.handle(Gesture::BrushMove { rect })
    }
    pub fn brush_end(&mut self) -> Redraw {
        self.handle(Gesture::BrushEnd)
    }

    fn consume(&mut self, dirty: Dirty) -> Redraw {
        let mut out = Redraw {
            stop_propagation: dirty.stop_propagation,
            ..Redraw::default()
        };
        for &id in &dirty.nodes_moved {
            let p = self.index.nodes[id as usize].pos;
            out.nodes.push(NodeUpdate { id, x: p.x, y: p.y });
        }
        for &id in &dirty.restyled {
            out.styles.push(StyleUpdate {
                id,
                selected: self.selection.is_selected(id),
            });
        }
        for &id in &dirty.edges {
            let c = self.compute_edge(id);
            self.edge_curves[id as usize] = c;
            out.edges.push(PathUpdate { id, d: c.to_svg() });
        }
        for &id in &dirty.arcs {
            let c = self.compute_arc(id);
            self.arc_curves[id as usize] = c;
            out.arcs.push(PathUpdate { id, d: c.to_svg() });
        }
        out
    }

    /// Full repaint: every node position and style, every path.
    pub fn redraw_all(&self) -> Redraw {
        let mut out = Redraw::default();
        for (i, n) in self.index.nodes.iter().enumerate() {
            let id = i as NodeId;
            out.nodes.push(NodeUpdate { id, x: n.pos.x, y: n.pos.y });
            out.styles.push(StyleUpdate {
                id,
                selected: self.selection.is_selected(id),
            });
        }
        for (i, c) in self.edge_curves.iter().enumerate() {
            out.edges.push(PathUpdate { id: i as u32, d: c.to_svg() });
        }
        for (i, c) in self.arc_curves.iter().enumerate() {
            out.arcs.push(PathUpdate { id: i as u32, d: c.to_svg() });
        }
        out
    }

    // Accessors

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    pub fn node_position(&self, name: &str) -> Option<Vec2> {
        self.index.position(self.index.node_id(name)?)
    }
    pub fn is_selected(&self, name: &str) -> Option<bool> {
        Some(self.selection.is_selected(self.index.node_id(name)?))
    }
    pub fn selected_nodes(&self) -> Vec<&str> {
        self.selection
            .selected_ids()
            .filter_map(|id| self.index.node(id).map(|n| n.name.as_str()))
            .collect()
    }
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let Some(id) = self.index.node_id(name) else {
            return Vec::new();
        };
        self.index
            .neighbors(id)
            .iter()
            .filter_map(|&n| self.index.node(n).map(|n| n.name.as_str()))
            .collect()
    }
    pub fn edge_curve(&self, id: EdgeId) -> Option<&Curve> {
        self.edge_curves.get(id as usize)
    }
    pub fn arc_curve(&self, id: ArcId) -> Option<&Curve> {
        self.arc_curves.get(id as usize)
    }
    /// Path data of the edge with key `key`.
    pub fn edge_path(&self, key: &str) -> Option<String> {
        self.edge_curve(self.index.edge_id(key)?).map(Curve::to_svg)
    }
    pub fn arc_path(&self, id: ArcId) -> Option<String> {
        self.arc_curve(id).map(Curve::to_svg)
    }
    /// Every edge path followed by every arc path.
    pub fn to_svg_paths(&self) -> Vec<String> {
        svg::to_svg_paths_impl(self)
    }
}

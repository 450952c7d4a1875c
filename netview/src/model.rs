use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type NodeId = u32;
pub type EdgeId = u32;
pub type ArcId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// Axis-aligned rectangle with `min <= max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Normalize two arbitrary corners into a rectangle.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Rect {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Half-open containment: the min edges are inside, the max edges are not.
    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    pub fn clamp_to(&self, extent: &Rect) -> Rect {
        let cx = |x: f32| x.max(extent.min.x).min(extent.max.x);
        let cy = |y: f32| y.max(extent.min.y).min(extent.max.y);
        Rect {
            min: Vec2::new(cx(self.min.x), cy(self.min.y)),
            max: Vec2::new(cx(self.max.x), cy(self.max.y)),
        }
    }
}

/// Position of an edge inside its bundle of parallel siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub index: u32,
    pub siblings: u32,
    pub flip: bool,
}

impl Bundle {
    pub const SINGLE: Bundle = Bundle {
        index: 0,
        siblings: 1,
        flip: false,
    };
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub t: i64,
    pub pos: Vec2,
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub bundle: Bundle,
    pub label: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arc {
    pub source: EdgeId,
    pub target: EdgeId,
    pub at_v: NodeId,
    // v1,v2: endpoints of `source`; v3,v4: endpoints of `target`
    pub v: [NodeId; 4],
}

// Input records, as emitted by the notebook side.

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(deserialize_with = "key_string")]
    pub name: String,
    #[serde(default)]
    pub t: i64,
    pub x: f32,
    pub y: f32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(deserialize_with = "key_string")]
    pub id: String,
    #[serde(deserialize_with = "key_string")]
    pub source: String,
    #[serde(deserialize_with = "key_string")]
    pub target: String,
    #[serde(default)]
    pub edge_index: Option<u32>,
    #[serde(default)]
    pub num_edge_siblings: Option<u32>,
    #[serde(default)]
    pub flip_orientation: Option<bool>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArcRecord {
    #[serde(deserialize_with = "key_string")]
    pub source: String,
    #[serde(deserialize_with = "key_string")]
    pub target: String,
    #[serde(deserialize_with = "key_string")]
    pub at_v: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDoc {
    pub nodes: Vec<NodeRecord>,
    #[serde(alias = "edges", default)]
    pub links: Vec<EdgeRecord>,
    #[serde(default)]
    pub arcs: Vec<ArcRecord>,
}

// Keys are strings, but integer vertex/edge ids are common in the wild.
fn key_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or integer key, got {}",
            other
        ))),
    }
}

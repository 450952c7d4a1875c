use crate::error::LoadError;
use crate::geometry::limits;
use crate::model::{Rect, Vec2};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCALE: f32 = 50.0;
pub const MIN_NODE_SIZE: f32 = 2.0;

/// Surface parameters supplied by the presentation layer.
///
/// Missing fields fall back to the notebook defaults: a scale of 50 and a node
/// size of a tenth of the scale (never below 2).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawConfig")]
pub struct RenderConfig {
    /// Surface width in px; 0 leaves the brush unbounded horizontally.
    pub width: f32,
    pub height: f32,
    /// Spread of bundled edges.
    pub scale: f32,
    pub node_size: f32,
    pub show_labels: bool,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    scale: Option<f32>,
    node_size: Option<f32>,
    #[serde(default)]
    show_labels: bool,
}

impl From<RawConfig> for RenderConfig {
    fn from(raw: RawConfig) -> Self {
        let base = RenderConfig::with_scale(raw.scale.unwrap_or(DEFAULT_SCALE));
        RenderConfig {
            width: raw.width,
            height: raw.height,
            node_size: raw.node_size.unwrap_or(base.node_size),
            show_labels: raw.show_labels,
            ..base
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::with_scale(DEFAULT_SCALE)
    }
}

impl RenderConfig {
    pub fn with_scale(scale: f32) -> Self {
        RenderConfig {
            width: 0.0,
            height: 0.0,
            scale,
            node_size: (0.1 * scale).max(MIN_NODE_SIZE),
            show_labels: false,
        }
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("scale", self.scale),
            ("node_size", self.node_size),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(LoadError::BadConfig(format!(
                    "'{}' must be finite and non-negative, got {}",
                    name, v
                )));
            }
        }
        if self.scale > limits::SCALE_MAX {
            return Err(LoadError::BadConfig(format!(
                "'scale' must be at most {}",
                limits::SCALE_MAX
            )));
        }
        if self.node_size == 0.0 {
            return Err(LoadError::BadConfig("'node_size' must be positive".into()));
        }
        Ok(())
    }

    /// Brush extent; `None` when the surface size is unknown.
    pub fn extent(&self) -> Option<Rect> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(Rect {
                min: Vec2::new(0.0, 0.0),
                max: Vec2::new(self.width, self.height),
            })
        } else {
            None
        }
    }

    /// Arrowhead marker offset so the tip stops short of the target node.
    pub fn arrowhead_ref_x(&self) -> f32 {
        3.0 * self.node_size
    }

    /// Vertical offset of a node's name label above its center.
    pub fn label_offset_y(&self) -> f32 {
        -0.7 * self.node_size - 5.0
    }
}

//! Selection and drag state machine.
//!
//! A flat reducer: every [`Gesture`] is applied against the current flags and
//! the node arena, and the ids it invalidated come back as a [`Dirty`] set.
//! Recomputing curves and touching the rendering surface is left to the
//! caller.

use crate::index::GraphIndex;
use crate::model::{ArcId, EdgeId, NodeId, Rect};
use std::collections::BTreeSet;

/// Keyboard state observed for one gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputContext {
    /// Shift or meta held.
    pub modifier: bool,
}

impl InputContext {
    pub fn from_keys(shift: bool, meta: bool) -> Self {
        InputContext {
            modifier: shift || meta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Pointer down on a node.
    Press { node: NodeId },
    /// Pointer moved while dragging, by this delta.
    Drag { dx: f32, dy: f32 },
    BrushStart,
    /// Current brush rectangle; `None` once the brush collapses.
    BrushMove { rect: Option<Rect> },
    BrushEnd,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dirty {
    pub nodes_moved: BTreeSet<NodeId>,
    /// Nodes whose `selected` flag changed.
    pub restyled: BTreeSet<NodeId>,
    pub edges: BTreeSet<EdgeId>,
    pub arcs: BTreeSet<ArcId>,
    /// The gesture was consumed by a node and must not start a brush.
    pub stop_propagation: bool,
}

impl Dirty {
    pub fn is_empty(&self) -> bool {
        self.nodes_moved.is_empty()
            && self.restyled.is_empty()
            && self.edges.is_empty()
            && self.arcs.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Selection {
    selected: Vec<bool>,
    previously_selected: Vec<bool>,
    brush: Option<Rect>,
}

impl Selection {
    pub fn new(node_count: usize) -> Self {
        Selection {
            selected: vec![false; node_count],
            previously_selected: vec![false; node_count],
            brush: None,
        }
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.get(id as usize).copied().unwrap_or(false)
    }

    pub fn previously_selected(&self, id: NodeId) -> bool {
        self.previously_selected.get(id as usize).copied().unwrap_or(false)
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(i, _)| i as NodeId)
    }

    /// Rectangle of the brush in progress.
    pub fn brush(&self) -> Option<Rect> {
        self.brush
    }

    fn set(&mut self, id: usize, value: bool, dirty: &mut Dirty) {
        if self.selected[id] != value {
            self.selected[id] = value;
            dirty.restyled.insert(id as NodeId);
        }
    }

    pub fn apply(&mut self, index: &mut GraphIndex, input: InputContext, gesture: Gesture) -> Dirty {
        let mut dirty = Dirty::default();
        match gesture {
            Gesture::Press { node } => {
                let n = node as usize;
                if n >= self.selected.len() {
                    return dirty;
                }
                if input.modifier {
                    let v = !self.selected[n];
                    self.set(n, v, &mut dirty);
                    dirty.stop_propagation = true;
                } else if !self.selected[n] {
                    // keep an existing multi-selection so it can be dragged
                    for i in 0..self.selected.len() {
                        self.set(i, i == n, &mut dirty);
                    }
                }
            }
            Gesture::Drag { dx, dy } => {
                for id in self.selected_ids().collect::<Vec<_>>() {
                    index.translate(id, dx, dy);
                    dirty.nodes_moved.insert(id);
                    dirty.edges.extend(index.edges_at(id));
                    dirty.arcs.extend(index.arcs_at(id));
                }
            }
            Gesture::BrushStart => {
                // without the modifier the brush starts from an empty selection
                for i in 0..self.selected.len() {
                    let keep = input.modifier && self.selected[i];
                    self.previously_selected[i] = keep;
                    self.set(i, keep, &mut dirty);
                }
            }
            Gesture::BrushMove { rect } => {
                self.brush = rect;
                for i in 0..self.selected.len() {
                    let covered = match (rect, index.position(i as NodeId)) {
                        (Some(r), Some(p)) => r.contains(p),
                        _ => false,
                    };
                    let v = self.previously_selected[i] ^ covered;
                    self.set(i, v, &mut dirty);
                }
            }
            Gesture::BrushEnd => {
                self.brush = None;
            }
        }
        if !dirty.is_empty() {
            log::trace!(
                "{:?}: {} moved, {} restyled, {} edges, {} arcs",
                gesture,
                dirty.nodes_moved.len(),
                dirty.restyled.len(),
                dirty.edges.len(),
                dirty.arcs.len()
            );
        }
        dirty
    }
}

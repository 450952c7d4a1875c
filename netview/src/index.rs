//! Arena of nodes, edges and arcs with resolved references.
//!
//! Ids are positions in declaration order. Everything that the original
//! records expressed as embedded references (edge endpoints, arc edges,
//! neighbor lists) is stored here as ids into the arena.

use crate::error::{LoadError, LookupError, ReferenceError};
use crate::geometry::limits;
use crate::model::{Arc, ArcId, Bundle, Edge, EdgeId, GraphDoc, Node, NodeId, Vec2};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct GraphIndex {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) arcs: Vec<Arc>,
    node_by_name: HashMap<String, NodeId>,
    edge_by_key: HashMap<String, EdgeId>,
    neighbors: Vec<Vec<NodeId>>,
    incident_edges: Vec<Vec<EdgeId>>,
    incident_arcs: Vec<Vec<ArcId>>,
}

fn check_cap(kind: &'static str, got: usize, max: usize) -> Result<(), LoadError> {
    if got > max {
        return Err(LoadError::TooLarge { kind, got, max });
    }
    Ok(())
}

// Vertex names are usually stringified integers; order those numerically.
fn cmp_names(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[inline]
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl GraphIndex {
    pub fn build(doc: GraphDoc) -> Result<GraphIndex, LoadError> {
        check_cap("nodes", doc.nodes.len(), limits::MAX_NODES)?;
        check_cap("edges", doc.links.len(), limits::MAX_EDGES)?;
        check_cap("arcs", doc.arcs.len(), limits::MAX_ARCS)?;

        let mut ix = GraphIndex::default();

        // Nodes
        for rec in doc.nodes {
            if !limits::in_coord_bounds(rec.x) || !limits::in_coord_bounds(rec.y) {
                return Err(LoadError::BadCoordinate { name: rec.name });
            }
            if ix.node_by_name.contains_key(&rec.name) {
                return Err(LookupError::DuplicateNode(rec.name).into());
            }
            let id = ix.nodes.len() as NodeId;
            ix.node_by_name.insert(rec.name.clone(), id);
            ix.nodes.push(Node {
                name: rec.name,
                t: rec.t,
                pos: Vec2::new(rec.x, rec.y),
                extra: rec.extra,
            });
        }
        ix.neighbors = vec![Vec::new(); ix.nodes.len()];
        ix.incident_edges = vec![Vec::new(); ix.nodes.len()];
        ix.incident_arcs = vec![Vec::new(); ix.nodes.len()];

        // Edge endpoints first, bundle sizes need every edge resolved
        let mut endpoints = Vec::with_capacity(doc.links.len());
        let mut bundle_sizes: HashMap<(NodeId, NodeId), u32> = HashMap::new();
        let mut supplied: HashMap<(NodeId, NodeId), HashSet<u32>> = HashMap::new();
        for rec in &doc.links {
            let context = format!("edge '{}'", rec.id);
            let s = ix
                .node_id(&rec.source)
                .ok_or_else(|| ReferenceError::unknown_node(&context, &rec.source))?;
            let t = ix
                .node_id(&rec.target)
                .ok_or_else(|| ReferenceError::unknown_node(&context, &rec.target))?;
            *bundle_sizes.entry(pair_key(s, t)).or_insert(0) += 1;
            if let Some(i) = rec.edge_index {
                supplied.entry(pair_key(s, t)).or_default().insert(i);
            }
            endpoints.push((s, t));
        }

        // derived indices skip the slots other members of the bundle claim
        let mut next_free: HashMap<(NodeId, NodeId), u32> = HashMap::new();
        let mut taken: HashSet<((NodeId, NodeId), u32)> = HashSet::new();
        for (rec, (s, t)) in doc.links.into_iter().zip(endpoints) {
            if ix.edge_by_key.contains_key(&rec.id) {
                return Err(LookupError::DuplicateEdge(rec.id).into());
            }
            let key = pair_key(s, t);
            let index = match rec.edge_index {
                Some(i) => i,
                None => {
                    let claimed = supplied.get(&key);
                    let next = next_free.entry(key).or_insert(0);
                    while claimed.map_or(false, |c| c.contains(&*next)) {
                        *next += 1;
                    }
                    let free = *next;
                    *next += 1;
                    free
                }
            };
            let bundle = Bundle {
                index,
                siblings: rec
                    .num_edge_siblings
                    .unwrap_or_else(|| bundle_sizes.get(&key).copied().unwrap_or(1)),
                flip: rec.flip_orientation.unwrap_or_else(|| {
                    cmp_names(&rec.source, &rec.target) == Ordering::Greater
                }),
            };
            if bundle.siblings == 0 || bundle.index >= bundle.siblings {
                return Err(LoadError::InvalidBundle {
                    id: rec.id,
                    index: bundle.index,
                    siblings: bundle.siblings,
                });
            }
            if !taken.insert((key, bundle.index)) {
                log::warn!(
                    "edge '{}' shares bundle slot {} with a sibling and will overlap it",
                    rec.id,
                    bundle.index
                );
            }

            let id = ix.edges.len() as EdgeId;
            ix.edge_by_key.insert(rec.id.clone(), id);
            ix.neighbors[s as usize].push(t);
            ix.neighbors[t as usize].push(s);
            ix.incident_edges[s as usize].push(id);
            if t != s {
                ix.incident_edges[t as usize].push(id);
            }
            ix.edges.push(Edge {
                id: rec.id,
                source: s,
                target: t,
                bundle,
                label: rec.label,
            });
        }

        // Arcs
        for (i, rec) in doc.arcs.into_iter().enumerate() {
            let context = format!("arc {}", i);
            let e1 = ix
                .edge_id(&rec.source)
                .ok_or_else(|| ReferenceError::unknown_edge(&context, &rec.source))?;
            let e2 = ix
                .edge_id(&rec.target)
                .ok_or_else(|| ReferenceError::unknown_edge(&context, &rec.target))?;
            let at_v = ix
                .node_id(&rec.at_v)
                .ok_or_else(|| ReferenceError::unknown_node(&context, &rec.at_v))?;
            let (a, b) = (&ix.edges[e1 as usize], &ix.edges[e2 as usize]);
            for (edge, key) in [(a, &rec.source), (b, &rec.target)] {
                if edge.source != at_v && edge.target != at_v {
                    return Err(ReferenceError::DetachedArc {
                        arc: i,
                        at_v: rec.at_v.clone(),
                        edge: key.clone(),
                    }
                    .into());
                }
            }
            let v = [a.source, a.target, b.source, b.target];
            let id = ix.arcs.len() as ArcId;
            for (k, n) in v.iter().enumerate() {
                if !v[..k].contains(n) {
                    ix.incident_arcs[*n as usize].push(id);
                }
            }
            ix.arcs.push(Arc {
                source: e1,
                target: e2,
                at_v,
                v,
            });
        }

        log::debug!(
            "indexed {} nodes, {} edges ({} bundles), {} arcs",
            ix.nodes.len(),
            ix.edges.len(),
            bundle_sizes.len(),
            ix.arcs.len()
        );
        Ok(ix)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_by_name.get(name).copied()
    }
    pub fn edge_id(&self, key: &str) -> Option<EdgeId> {
        self.edge_by_key.get(key).copied()
    }
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id as usize)
    }
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id as usize)
    }
    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }
    pub fn arc_count(&self) -> u32 {
        self.arcs.len() as u32
    }

    /// Opposite endpoint of every incident edge; one entry per edge.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.neighbors.get(id as usize).map_or(&[], |v| v.as_slice())
    }
    pub fn edges_at(&self, id: NodeId) -> &[EdgeId] {
        self.incident_edges.get(id as usize).map_or(&[], |v| v.as_slice())
    }
    /// Arcs with `id` among the four endpoints of their two edges.
    pub fn arcs_at(&self, id: NodeId) -> &[ArcId] {
        self.incident_arcs.get(id as usize).map_or(&[], |v| v.as_slice())
    }

    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.nodes.get(id as usize).map(|n| n.pos)
    }
    pub(crate) fn translate(&mut self, id: NodeId, dx: f32, dy: f32) {
        if let Some(n) = self.nodes.get_mut(id as usize) {
            n.pos.x += dx;
            n.pos.y += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(v: serde_json::Value) -> GraphDoc {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn neighbors_both_directions_with_duplicates() {
        let ix = GraphIndex::build(doc(json!({
            "nodes": [{"name":"a","x":0,"y":0},{"name":"b","x":1,"y":0},{"name":"c","x":2,"y":0}],
            "links": [
                {"id":"0","source":"a","target":"b"},
                {"id":"1","source":"b","target":"a"},
                {"id":"2","source":"b","target":"c"}
            ]
        })))
        .unwrap();
        let (a, b, c) = (ix.node_id("a").unwrap(), ix.node_id("b").unwrap(), ix.node_id("c").unwrap());
        assert_eq!(ix.neighbors(a), &[b, b]);
        let mut nb = ix.neighbors(b).to_vec();
        nb.sort();
        assert_eq!(nb, vec![a, a, c]);
        assert_eq!(ix.edges_at(c), &[2]);
    }

    #[test]
    fn bundle_metadata_is_derived() {
        let ix = GraphIndex::build(doc(json!({
            "nodes": [{"name":"2","x":0,"y":0},{"name":"10","x":1,"y":0}],
            "links": [
                {"id":"e0","source":"2","target":"10"},
                {"id":"e1","source":"10","target":"2"},
                {"id":"e2","source":"2","target":"10"}
            ]
        })))
        .unwrap();
        let bundles: Vec<Bundle> = ix.edges.iter().map(|e| e.bundle).collect();
        assert_eq!(bundles[0], Bundle { index: 0, siblings: 3, flip: false });
        // "10" > "2" numerically, not lexicographically
        assert_eq!(bundles[1], Bundle { index: 1, siblings: 3, flip: true });
        assert_eq!(bundles[2], Bundle { index: 2, siblings: 3, flip: false });
    }

    #[test]
    fn supplied_bundle_metadata_wins() {
        let ix = GraphIndex::build(doc(json!({
            "nodes": [{"name":"a","x":0,"y":0},{"name":"b","x":1,"y":0}],
            "links": [{"id":"e","source":"a","target":"b",
                       "edge_index":2,"num_edge_siblings":5,"flip_orientation":true}]
        })))
        .unwrap();
        assert_eq!(ix.edges[0].bundle, Bundle { index: 2, siblings: 5, flip: true });
    }

    #[test]
    fn arc_endpoints_and_incidence() {
        let ix = GraphIndex::build(doc(json!({
            "nodes": [{"name":"a","x":0,"y":0},{"name":"b","x":1,"y":0},{"name":"c","x":2,"y":0}],
            "links": [{"id":"e0","source":"a","target":"b"},{"id":"e1","source":"b","target":"c"}],
            "arcs": [{"source":"e0","target":"e1","at_v":"b"}]
        })))
        .unwrap();
        let arc = ix.arc(0).unwrap();
        assert_eq!(arc.v, [0, 1, 1, 2]);
        assert_eq!(arc.at_v, 1);
        assert_eq!(ix.arcs_at(1), &[0]);
        assert_eq!(ix.arcs_at(0), &[0]);
        assert_eq!(ix.arcs_at(2), &[0]);
    }

    #[test]
    fn derived_index_skips_supplied_slots() {
        let ix = GraphIndex::build(doc(json!({
            "nodes": [{"name":"a","x":0,"y":0},{"name":"b","x":1,"y":0}],
            "links": [
                {"id":"e0","source":"a","target":"b"},
                {"id":"e1","source":"a","target":"b","edge_index":0,"num_edge_siblings":3},
                {"id":"e2","source":"b","target":"a"}
            ]
        })))
        .unwrap();
        let indices: Vec<u32> = ix.edges.iter().map(|e| e.bundle.index).collect();
        assert_eq!(indices, vec![1, 0, 2]);
        assert!(ix.edges.iter().all(|e| e.bundle.siblings == 3));
    }
}

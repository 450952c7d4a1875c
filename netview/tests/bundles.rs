use netview::model::Bundle;
use netview::path::edge_curve;
use netview::{Curve, Diagram, RenderConfig, Vec2};
use proptest::prelude::*;
use serde_json::json;

fn radii(c: &Curve) -> Option<(f32, f32, bool)> {
    match *c {
        Curve::EllipticalArc { rx, ry, sweep, .. } => Some((rx, ry, sweep)),
        Curve::Line { .. } => None,
    }
}

#[test]
fn three_parallel_edges_end_to_end() {
    let graph = json!({
        "nodes": [
            {"name": "A", "x": 0, "y": 0},
            {"name": "B", "x": 100, "y": 0},
            {"name": "C", "x": 50, "y": 50}
        ],
        "links": [
            {"id": "e0", "source": "A", "target": "B", "edge_index": 0, "num_edge_siblings": 3, "flip_orientation": false},
            {"id": "e1", "source": "A", "target": "B", "edge_index": 1, "num_edge_siblings": 3, "flip_orientation": false},
            {"id": "e2", "source": "A", "target": "B", "edge_index": 2, "num_edge_siblings": 3, "flip_orientation": false}
        ]
    });
    let d = Diagram::from_json_value(graph, RenderConfig::with_scale(1.0)).unwrap();
    assert_eq!(d.edge_path("e1").unwrap(), "M 0 0 L 100 0");

    let (rx0, ry0, sweep0) = radii(d.edge_curve(0).unwrap()).unwrap();
    let (rx2, ry2, sweep2) = radii(d.edge_curve(2).unwrap()).unwrap();
    assert_eq!((rx0, ry0), (55.0, 1.5));
    assert_eq!((rx2, ry2), (55.0, 1.5));
    assert_ne!(sweep0, sweep2);
    assert_eq!(d.edge_path("e0").unwrap(), "M 0 0 A 55 1.5 0 0 0 100 0");
    assert_eq!(d.edge_path("e2").unwrap(), "M 0 0 A 55 1.5 0 0 1 100 0");
}

#[test]
fn derived_bundles_fan_consistently() {
    // same pair declared in both directions, no bundle metadata supplied
    let graph = json!({
        "nodes": [{"name": "1", "x": 0, "y": 0}, {"name": "2", "x": 0, "y": 60}],
        "links": [
            {"id": "a", "source": "1", "target": "2"},
            {"id": "b", "source": "2", "target": "1"}
        ]
    });
    let d = Diagram::from_json_value(graph, RenderConfig::default()).unwrap();
    let (_, ry_a, _) = radii(d.edge_curve(0).unwrap()).unwrap();
    let (_, ry_b, _) = radii(d.edge_curve(1).unwrap()).unwrap();
    assert_eq!(ry_a, ry_b);
    // b runs the other way, so its flip keeps it off a's side of the fan
    let a = d.edge_curve(0).unwrap().point_at_length(30.0);
    let b = d.edge_curve(1).unwrap().point_at_length(30.0);
    assert!(a.x * b.x < 0.0, "expected opposite sides: {:?} {:?}", a, b);
}

fn coord() -> impl Strategy<Value = f32> {
    (-5000i32..5000).prop_map(|v| v as f32 * 0.25)
}

proptest! {
    #[test]
    fn single_member_bundle_is_straight(
        sx in coord(), sy in coord(), tx in coord(), ty in coord(), scale in 0.0f32..100.0
    ) {
        let from = Vec2::new(sx, sy);
        let to = Vec2::new(tx, ty);
        let c = edge_curve(from, to, Bundle::SINGLE, scale);
        prop_assert_eq!(c, Curve::Line { from, to });
        prop_assert_eq!(c.to_svg(), format!("M {} {} L {} {}", from.x + 0.0, from.y + 0.0, to.x + 0.0, to.y + 0.0));
    }

    #[test]
    fn bundle_is_symmetric_about_center(
        k in 2u32..12, i_seed in any::<u32>(),
        sx in coord(), sy in coord(), tx in coord(), ty in coord(), scale in 0.5f32..80.0
    ) {
        let i = i_seed % k;
        let mirror = k - 1 - i;
        prop_assume!(2 * i + 1 != k);
        let from = Vec2::new(sx, sy);
        let to = Vec2::new(tx, ty);
        let a = edge_curve(from, to, Bundle { index: i, siblings: k, flip: false }, scale);
        let b = edge_curve(from, to, Bundle { index: mirror, siblings: k, flip: false }, scale);
        let (rxa, rya, sa) = radii(&a).unwrap();
        let (rxb, ryb, sb) = radii(&b).unwrap();
        prop_assert_eq!(rxa, rxb);
        prop_assert_eq!(rya, ryb);
        prop_assert_ne!(sa, sb);
    }

    #[test]
    fn flip_reverses_sibling_order(
        k in 1u32..12, i_seed in any::<u32>(),
        sx in coord(), sy in coord(), tx in coord(), ty in coord(), scale in 0.0f32..80.0
    ) {
        let i = i_seed % k;
        let from = Vec2::new(sx, sy);
        let to = Vec2::new(tx, ty);
        let flipped = edge_curve(from, to, Bundle { index: i, siblings: k, flip: true }, scale);
        let plain = edge_curve(from, to, Bundle { index: k - 1 - i, siblings: k, flip: false }, scale);
        prop_assert_eq!(flipped, plain);
    }

    #[test]
    fn edge_curves_are_deterministic(
        k in 1u32..8, i_seed in any::<u32>(), flip in any::<bool>(),
        sx in coord(), sy in coord(), tx in coord(), ty in coord()
    ) {
        let b = Bundle { index: i_seed % k, siblings: k, flip };
        let from = Vec2::new(sx, sy);
        let to = Vec2::new(tx, ty);
        prop_assert_eq!(edge_curve(from, to, b, 7.0).to_svg(), edge_curve(from, to, b, 7.0).to_svg());
    }
}

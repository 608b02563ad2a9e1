// tests/layout_packer.rs

use std::collections::HashMap;

use skillmap::dag::assign_layers;
use skillmap::layout::{compute_layout, pack, LayoutConfig};
use skillmap_test_utils::builders::{concepts, edges};

#[test]
fn diamond_uses_default_box_and_gap_sizes() {
    let cs = concepts(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);
    let es = edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]);

    let layout = compute_layout(&cs, &es, &LayoutConfig::default());

    let a = layout.get(1).unwrap();
    assert_eq!((a.layer, a.x, a.y), (0, 0.0, 0.0));

    // Two nodes: span = 2*192 + 48 = 432, centres at -120 and +120.
    let b = layout.get(2).unwrap();
    let c = layout.get(3).unwrap();
    assert_eq!((b.layer, b.x, b.y), (1, -120.0, 140.0));
    assert_eq!((c.layer, c.x, c.y), (1, 120.0, 140.0));

    let d = layout.get(4).unwrap();
    assert_eq!((d.layer, d.x, d.y), (2, 0.0, 280.0));

    assert_eq!(layout.depth(), 3);
    assert_eq!(layout.layer(1), vec![2, 3]);
}

#[test]
fn nodes_keep_concept_list_order_within_a_layer() {
    let cs = concepts(&[(9, "Z"), (4, "Y"), (7, "X")]);

    let layout = compute_layout(&cs, &[], &LayoutConfig::default());

    let ids: Vec<i64> = layout.nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![9, 4, 7]);
    assert_eq!(layout.layer(0), vec![9, 4, 7]);
    assert!(layout.get(9).unwrap().x < layout.get(4).unwrap().x);
    assert!(layout.get(4).unwrap().x < layout.get(7).unwrap().x);
}

#[test]
fn every_layer_is_centred_on_origin() {
    let cs = concepts(&[(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E"), (6, "F")]);
    let es = edges(&[(1, 2), (1, 3), (1, 4), (2, 5), (3, 5), (4, 6)]);

    let layout = compute_layout(&cs, &es, &LayoutConfig::default());

    let mut by_layer: HashMap<usize, Vec<f64>> = HashMap::new();
    for node in layout.nodes() {
        by_layer.entry(node.layer).or_default().push(node.x);
    }
    for (layer, xs) in by_layer {
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!(mean.abs() < 1e-9, "layer {layer} mean x = {mean}");
    }
}

#[test]
fn custom_dimensions_are_honoured() {
    let cfg = LayoutConfig {
        node_width: 100.0,
        node_height: 20.0,
        gap_x: 10.0,
        gap_y: 30.0,
    };
    let cs = concepts(&[(1, "A"), (2, "B"), (3, "C")]);
    let es = edges(&[(1, 2), (1, 3)]);

    let layout = compute_layout(&cs, &es, &cfg);

    // span = 2*100 + 10 = 210 -> centres at -55 and +55.
    assert_eq!(layout.get(2).unwrap().x, -55.0);
    assert_eq!(layout.get(3).unwrap().x, 55.0);
    assert_eq!(layout.get(2).unwrap().y, 50.0);
}

#[test]
fn repeated_layout_is_identical() {
    let cs = concepts(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);
    let es = edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
    let cfg = LayoutConfig::default();

    let first = compute_layout(&cs, &es, &cfg);
    let second = compute_layout(&cs, &es, &cfg);

    assert_eq!(first, second);
}

#[test]
fn missing_layer_falls_back_to_zero_and_duplicates_are_placed_once() {
    let cs = concepts(&[(1, "A"), (2, "B"), (1, "A again")]);
    let mut layers = assign_layers(&cs[..1], &[]);
    layers.remove(&2);

    let layout = pack(&layers, &cs, &LayoutConfig::default());

    assert_eq!(layout.len(), 2);
    assert_eq!(layout.get(2).unwrap().layer, 0);
    assert_eq!(layout.layer(0), vec![1, 2]);
}

#[test]
fn empty_input_gives_empty_layout() {
    let layout = compute_layout(&[], &[], &LayoutConfig::default());
    assert!(layout.is_empty());
    assert_eq!(layout.depth(), 0);
}

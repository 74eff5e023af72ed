#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn kind(arena: &NodeArena, id: NodeId) -> NodeKind {
    arena.get(id).unwrap().kind
}

fn literal(arena: &NodeArena, id: NodeId) -> f64 {
    match kind(arena, id) {
        NodeKind::Value(v) => v,
        other => panic!("expected literal, got {other:?}"),
    }
}

#[test]
fn test_constructors_set_kind_and_operands() {
    let mut arena = NodeArena::new();
    let ten = arena.value(10.0).unwrap();
    let fw = arena.forward(ten).unwrap();
    assert_eq!(kind(&arena, fw), NodeKind::Forward(ten));
    assert_eq!(arena.get(fw).unwrap().next, None);

    let x = arena.value(1.0).unwrap();
    let y = arena.value(2.0).unwrap();
    let pos = arena.position(x, y).unwrap();
    assert_eq!(kind(&arena, pos), NodeKind::Position { x, y });
    assert_eq!(arena.len(), 5);
}

#[test]
fn test_name_constructors_propagate_missing_entry() {
    let mut arena = NodeArena::new();
    let body = arena.block(None).unwrap();
    let value = arena.value(1.0).unwrap();
    let before = arena.len();

    assert_eq!(arena.name(None), None);
    assert_eq!(arena.call(None), None);
    assert_eq!(arena.set(None, value), None);
    assert_eq!(arena.proc(None, body), None);
    assert_eq!(arena.len(), before);

    let entry = EntryId::new(7);
    let name = arena.name(Some(entry)).unwrap();
    assert_eq!(kind(&arena, name), NodeKind::Name(entry));
}

#[test]
fn test_sequence_links_in_order() {
    let mut arena = NodeArena::new();
    let up = arena.up().unwrap();
    let down = arena.down().unwrap();
    let home = arena.home().unwrap();

    let first = arena.sequence([up, down, home]);
    assert_eq!(first, Some(up));
    assert_eq!(arena.get(up).unwrap().next, Some(down));
    assert_eq!(arena.get(down).unwrap().next, Some(home));
    assert_eq!(arena.get(home).unwrap().next, None);
}

#[test]
fn test_empty_sequence() {
    let mut arena = NodeArena::new();
    assert_eq!(arena.sequence(Vec::<NodeId>::new()), None);
}

#[test]
fn test_color_hex_splits_sixteen_bit_channels() {
    let mut arena = NodeArena::new();
    let color = arena.color_hex(0xFFFF_0000_8000).unwrap();
    let NodeKind::Color { r, g, b } = kind(&arena, color) else {
        panic!("expected color node");
    };
    assert!((literal(&arena, r) - 1.0).abs() < 1e-12);
    assert!(literal(&arena, g).abs() < 1e-12);
    assert!((literal(&arena, b) - 32768.0 / 65535.0).abs() < 1e-12);
}

#[test]
fn test_color_hex_does_not_mask_red() {
    let mut arena = NodeArena::new();
    let color = arena.color_hex(0x1_0000_0000_0000).unwrap();
    let NodeKind::Color { r, .. } = kind(&arena, color) else {
        panic!("expected color node");
    };
    assert!(literal(&arena, r) > 1.0);
}

#[test]
fn test_get_rejects_foreign_id() {
    let arena = NodeArena::new();
    assert!(arena.get(NodeId::new(3)).is_none());
    assert!(arena.is_empty());
}

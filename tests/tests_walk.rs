//! Walk Helper Tests
//!
//! The explicit traversals a consumer opts into when it needs a
//! transitive view, or when it cannot trust the graph it was handed.

mod helpers;

use std::sync::Arc;

use symgen::{Symbol, TypeKind, TypeSymbol, WalkError, base_chain, transitive_interfaces};

use crate::helpers::{FixtureType, PlainType};

fn names(symbols: &[&dyn TypeSymbol]) -> Vec<String> {
    symbols.iter().map(|s| s.name().to_string()).collect()
}

// ============================================================================
// Base chains
// ============================================================================

#[test]
fn base_chain_walks_to_the_root() {
    let root = FixtureType::named("Object", TypeKind::Class);
    let mid = FixtureType::named("Shape", TypeKind::Class);
    mid.set_base(root.clone());
    let leaf = FixtureType::named("Circle", TypeKind::Class);
    leaf.set_base(mid.clone());

    let chain: Vec<_> = base_chain(leaf.as_ref()).collect();
    assert_eq!(names(&chain), ["Shape", "Object"]);
}

#[test]
fn base_chain_of_a_baseless_symbol_is_empty() {
    let ty = PlainType::named("Widget", TypeKind::Class);
    assert_eq!(base_chain(ty.as_ref()).count(), 0);
}

#[test]
fn base_chain_truncates_a_cycle_instead_of_looping() {
    let a = FixtureType::named("A", TypeKind::Class);
    let b = FixtureType::named("B", TypeKind::Class);
    a.set_base(b.clone());
    b.set_base(a.clone());

    let chain: Vec<_> = base_chain(a.as_ref()).collect();
    assert_eq!(names(&chain), ["B"]);
}

// ============================================================================
// Transitive interface closure
// ============================================================================

#[test]
fn closure_of_no_interfaces_is_empty() {
    let ty = PlainType::named("Widget", TypeKind::Class);
    assert_eq!(transitive_interfaces(ty.as_ref()).unwrap().len(), 0);
}

#[test]
fn closure_follows_interface_bases_depth_first() {
    let grand = FixtureType::named("IGrand", TypeKind::Interface);
    let left = FixtureType::named("ILeft", TypeKind::Interface);
    left.set_interfaces(vec![grand.clone() as Arc<dyn TypeSymbol>]);
    let right = FixtureType::named("IRight", TypeKind::Interface);

    let ty = FixtureType::named("Widget", TypeKind::Class);
    ty.set_interfaces(vec![
        left.clone() as Arc<dyn TypeSymbol>,
        right.clone() as Arc<dyn TypeSymbol>,
    ]);

    let closure = transitive_interfaces(ty.as_ref()).unwrap();
    assert_eq!(names(&closure), ["ILeft", "IGrand", "IRight"]);
}

#[test]
fn closure_reports_a_diamond_once() {
    let shared = FixtureType::named("IShared", TypeKind::Interface);
    let left = FixtureType::named("ILeft", TypeKind::Interface);
    left.set_interfaces(vec![shared.clone() as Arc<dyn TypeSymbol>]);
    let right = FixtureType::named("IRight", TypeKind::Interface);
    right.set_interfaces(vec![shared.clone() as Arc<dyn TypeSymbol>]);

    let ty = FixtureType::named("Widget", TypeKind::Class);
    ty.set_interfaces(vec![
        left.clone() as Arc<dyn TypeSymbol>,
        right.clone() as Arc<dyn TypeSymbol>,
    ]);

    let closure = transitive_interfaces(ty.as_ref()).unwrap();
    assert_eq!(names(&closure), ["ILeft", "IShared", "IRight"]);
}

#[test]
fn closure_rejects_a_cyclic_interface_graph() {
    let a = FixtureType::named("IA", TypeKind::Interface);
    let b = FixtureType::named("IB", TypeKind::Interface);
    a.set_interfaces(vec![b.clone() as Arc<dyn TypeSymbol>]);
    b.set_interfaces(vec![a.clone() as Arc<dyn TypeSymbol>]);

    let ty = FixtureType::named("Widget", TypeKind::Class);
    ty.set_interfaces(vec![a.clone() as Arc<dyn TypeSymbol>]);

    let err = transitive_interfaces(ty.as_ref()).unwrap_err();
    assert_eq!(err, WalkError::CyclicInterfaceGraph("IA".into()));
}

//! Graph-walk helpers — explicit, cycle-guarded traversals.
//!
//! The contract layer deliberately answers transitive questions with
//! "empty" (see [`TypeSymbol::all_interfaces`]) and trusts callers to
//! build acyclic graphs. These helpers are the explicit opt-in for
//! consumers that want a transitive view, or that cannot trust the
//! graph they were handed.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;

use crate::symbols::TypeSymbol;

/// Errors reported by the walk helpers.
///
/// The contract layer itself never raises; only these helpers do, and
/// only for malformed graphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The declared interface graph reaches a node from itself.
    #[error("interface graph contains a cycle through `{0}`")]
    CyclicInterfaceGraph(SmolStr),
}

/// Iterate the `base_type` chain starting at (and excluding) `ty`.
///
/// The walk is guarded by instance identity: a malformed chain that
/// revisits a node ends the iteration instead of looping forever. The
/// truncated prefix is still useful, so a revisit is traced, not an
/// error.
pub fn base_chain(ty: &dyn TypeSymbol) -> BaseChain<'_> {
    let mut seen = FxHashSet::default();
    seen.insert(data_ptr(ty));
    BaseChain {
        next: ty.base_type(),
        seen,
    }
}

/// Iterator over a base-type chain. See [`base_chain`].
pub struct BaseChain<'a> {
    next: Option<&'a dyn TypeSymbol>,
    seen: FxHashSet<usize>,
}

impl<'a> Iterator for BaseChain<'a> {
    type Item = &'a dyn TypeSymbol;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next.take()?;
        if !self.seen.insert(data_ptr(cur)) {
            tracing::trace!(name = %cur.name(), "base chain revisits a node, stopping walk");
            return None;
        }
        self.next = cur.base_type();
        Some(cur)
    }
}

/// Compute the transitive closure of `ty`'s declared interfaces, in
/// first-encounter (depth-first, declaration) order.
///
/// Interfaces reachable along more than one path (diamonds) appear
/// once. An interface reachable from itself is a malformed graph and
/// reports [`WalkError::CyclicInterfaceGraph`] — unlike a truncated
/// base chain, a silently truncated closure would be indistinguishable
/// from a complete one.
pub fn transitive_interfaces(
    ty: &dyn TypeSymbol,
) -> Result<Vec<&dyn TypeSymbol>, WalkError> {
    let mut out = Vec::new();
    let mut seen = FxHashSet::default();
    let mut on_path = FxHashSet::default();
    for iface in ty.interfaces() {
        visit(iface.as_ref(), &mut out, &mut seen, &mut on_path)?;
    }
    Ok(out)
}

fn visit<'a>(
    iface: &'a dyn TypeSymbol,
    out: &mut Vec<&'a dyn TypeSymbol>,
    seen: &mut FxHashSet<usize>,
    on_path: &mut FxHashSet<usize>,
) -> Result<(), WalkError> {
    let key = data_ptr(iface);
    if on_path.contains(&key) {
        tracing::trace!(name = %iface.name(), "interface graph revisits a node on the current path");
        return Err(WalkError::CyclicInterfaceGraph(iface.name().into()));
    }
    if !seen.insert(key) {
        // Reached along a second path; already collected.
        return Ok(());
    }
    out.push(iface);
    on_path.insert(key);
    for next in iface.interfaces() {
        visit(next.as_ref(), out, seen, on_path)?;
    }
    on_path.remove(&key);
    Ok(())
}

/// Instance identity of a symbol, independent of its vtable.
fn data_ptr(ty: &dyn TypeSymbol) -> usize {
    ty as *const dyn TypeSymbol as *const () as usize
}

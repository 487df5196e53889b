//! Lineage resolver — the root-first ancestor chain of a member

use crate::error::{ServerError, ServerResult};
use crate::forest::ForestIndex;
use crate::traits::Member;

/// Resolve the ancestor chain of `id`, ordered root first and inclusive of
/// the member itself. A root's chain is just the root.
///
/// The upward walk is bounded by the population size; exceeding the bound
/// (or hitting a dangling parent reference) means a prior invariant breach
/// and fails with `StructuralCorruption`.
pub fn lineage<'a>(index: &'a ForestIndex, id: i64) -> ServerResult<Vec<&'a Member>> {
    let mut cur = index.get(id).ok_or(ServerError::NotFound(id))?;

    let mut chain = vec![cur];
    while let Some(parent_id) = cur.parent_id {
        if chain.len() >= index.len() {
            return Err(corruption(format!(
                "ancestor walk from member {id} exceeded population size {}",
                index.len()
            )));
        }
        cur = index.get(parent_id).ok_or_else(|| {
            corruption(format!(
                "member {} references missing parent {parent_id}",
                cur.id
            ))
        })?;
        chain.push(cur);
    }

    chain.reverse();
    Ok(chain)
}

fn corruption(msg: String) -> ServerError {
    tracing::error!("{msg}");
    ServerError::StructuralCorruption(msg)
}

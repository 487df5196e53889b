//! Population statistics, recomputed per call
//!
//! Nothing here is maintained incrementally; the figures always reflect the
//! index snapshot they are computed from.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ServerError, ServerResult};
use crate::forest::ForestIndex;

/// Summary figures over the whole forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total: u64,
    pub living: u64,
    pub deceased: u64,
    /// Maximum lineage-chain length across all members; a root counts as
    /// generation 1, an empty forest has 0 generations
    pub generations: u32,
}

/// Compute stats over an index snapshot
pub fn compute(index: &ForestIndex) -> ServerResult<TreeStats> {
    let mut living = 0u64;
    for id in index.ids() {
        if index.get(id).is_some_and(|m| m.is_alive) {
            living += 1;
        }
    }
    let total = index.len() as u64;

    let mut depths: HashMap<i64, u32> = HashMap::with_capacity(index.len());
    let mut generations = 0u32;
    for id in index.ids() {
        generations = generations.max(depth_of(index, id, &mut depths)?);
    }

    Ok(TreeStats {
        total,
        living,
        deceased: total - living,
        generations,
    })
}

/// Generation depth of one member, memoized across calls
///
/// Walks unresolved ancestors onto a stack, then unwinds assigning depths.
/// The walk shares the lineage resolver's bound: more steps than members
/// means a cycle.
fn depth_of(
    index: &ForestIndex,
    id: i64,
    depths: &mut HashMap<i64, u32>,
) -> ServerResult<u32> {
    let mut pending: Vec<i64> = Vec::new();
    let mut cur = id;

    let mut depth = loop {
        if let Some(&known) = depths.get(&cur) {
            break known;
        }
        if pending.len() > index.len() {
            let msg = format!("generation walk from member {id} exceeded population size");
            tracing::error!("{msg}");
            return Err(ServerError::StructuralCorruption(msg));
        }
        let member = index.get(cur).ok_or_else(|| {
            let msg = format!("member {cur} missing during generation walk");
            tracing::error!("{msg}");
            ServerError::StructuralCorruption(msg)
        })?;
        pending.push(cur);
        match member.parent_id {
            None => break 0,
            Some(parent) => cur = parent,
        }
    };

    for member_id in pending.into_iter().rev() {
        depth += 1;
        depths.insert(member_id, depth);
    }

    depths
        .get(&id)
        .copied()
        .ok_or_else(|| ServerError::Internal("generation memo missing resolved member".into()))
}

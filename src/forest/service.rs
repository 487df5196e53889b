//! Query façade and mutation entry point over the record store
//!
//! Reads build a fresh index snapshot from one full scan; there is no
//! long-lived cross-request state beyond the store itself. Mutations are
//! serialized by a single global write lock so every validate-then-commit
//! sequence sees a consistent forest; interleaving two re-parent
//! validations could otherwise admit a cycle neither would catch alone.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ServerError, ServerResult};
use crate::forest::{guard, lineage, search, stats, ForestIndex, TreeStats};
use crate::traits::{Member, MemberPatch, MemberStore, NewMember};

/// Default cap for the roots listing
pub const DEFAULT_ROOTS_LIMIT: usize = 20;

/// Default cap for the members listing view
pub const DEFAULT_LIST_LIMIT: usize = 500;

pub struct FamilyService {
    store: Arc<dyn MemberStore>,
    write_lock: Mutex<()>,
}

impl FamilyService {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn snapshot(&self) -> ServerResult<ForestIndex> {
        Ok(ForestIndex::build(self.store.list_all()?))
    }

    fn write_guard(&self) -> ServerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| ServerError::Internal("write lock poisoned".into()))
    }

    // ========== Queries ==========

    pub fn member(&self, id: i64) -> ServerResult<Member> {
        self.store.get(id)
    }

    /// A member together with its root-first ancestor chain
    pub fn person_with_lineage(&self, id: i64) -> ServerResult<(Member, Vec<Member>)> {
        let index = self.snapshot()?;
        let person = index.get(id).cloned().ok_or(ServerError::NotFound(id))?;
        let chain = lineage::lineage(&index, id)?
            .into_iter()
            .cloned()
            .collect();
        Ok((person, chain))
    }

    /// Children of an existing member, in creation order
    pub fn children(&self, id: i64) -> ServerResult<Vec<Member>> {
        let index = self.snapshot()?;
        if !index.contains(id) {
            return Err(ServerError::NotFound(id));
        }
        Ok(index.children_of(id).into_iter().cloned().collect())
    }

    /// Roots in creation order, capped at `limit`
    pub fn roots(&self, limit: usize) -> ServerResult<Vec<Member>> {
        let index = self.snapshot()?;
        Ok(index
            .roots()
            .into_iter()
            .take(limit)
            .cloned()
            .collect())
    }

    /// Listing view: members by name, then id, capped at `limit`
    pub fn list_members(&self, limit: usize) -> ServerResult<Vec<Member>> {
        let mut members = self.store.list_all()?;
        members.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        members.truncate(limit);
        Ok(members)
    }

    pub fn search(&self, query: &str, limit: usize) -> ServerResult<Vec<Member>> {
        let members = self.store.list_all()?;
        Ok(search::search(&members, query, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn stats(&self) -> ServerResult<TreeStats> {
        stats::compute(&self.snapshot()?)
    }

    // ========== Mutations (validate under the write lock, then commit) ==========

    pub fn create(&self, new: NewMember) -> ServerResult<Member> {
        let _guard = self.write_guard()?;
        let new = guard::validate_new(&self.snapshot()?, new)?;
        let member = self.store.insert(&new)?;
        tracing::info!(id = member.id, "member created");
        Ok(member)
    }

    pub fn update(&self, id: i64, patch: MemberPatch) -> ServerResult<Member> {
        let _guard = self.write_guard()?;
        let index = self.snapshot()?;
        let current = index.get(id).cloned().ok_or(ServerError::NotFound(id))?;
        let updated = guard::apply_patch(&index, &current, patch)?;
        let member = self.store.update(&updated)?;
        tracing::info!(id, "member updated");
        Ok(member)
    }

    pub fn delete(&self, id: i64) -> ServerResult<()> {
        let _guard = self.write_guard()?;
        guard::validate_delete(&self.snapshot()?, id)?;
        self.store.delete(id)?;
        tracing::info!(id, "member deleted");
        Ok(())
    }

    /// Point update of a member's photo reference
    pub fn set_image(&self, id: i64, reference: Option<&str>) -> ServerResult<Member> {
        let _guard = self.write_guard()?;
        self.store.set_image_url(id, reference)
    }
}

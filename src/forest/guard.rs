//! Mutation guard — invariant checks for create, edit, and delete
//!
//! Every structural change is validated against an index snapshot before
//! anything reaches the record store. The checks here are pure; the service
//! layer serializes them with the commit under one write lock.

use crate::error::{ServerError, ServerResult};
use crate::forest::ForestIndex;
use crate::traits::{Member, MemberPatch, NewMember};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 120;
pub const BRANCH_MAX_CHARS: usize = 80;
pub const YEAR_MIN: i32 = 1300;
pub const YEAR_MAX: i32 = 2100;
pub const EMAIL_MAX_CHARS: usize = 120;
pub const PHONE_MAX_CHARS: usize = 30;

/// Validate a new member and normalize its fields.
///
/// The parent, when given, must already exist. Self-parenting cannot arise
/// here since the new id is not assigned yet.
pub fn validate_new(index: &ForestIndex, mut new: NewMember) -> ServerResult<NewMember> {
    new.full_name = validate_name(&new.full_name)?;
    validate_optional_len("branch_name", new.branch_name.as_deref(), BRANCH_MAX_CHARS)?;
    validate_year("birth_year", new.birth_year)?;
    validate_year("death_year", new.death_year)?;
    validate_optional_len("email", new.email.as_deref(), EMAIL_MAX_CHARS)?;
    validate_optional_len("phone", new.phone.as_deref(), PHONE_MAX_CHARS)?;

    if let Some(parent_id) = new.parent_id {
        if !index.contains(parent_id) {
            return Err(ServerError::ParentNotFound(parent_id));
        }
    }

    Ok(new)
}

/// Validate a patch against the current member and produce the fully
/// updated record. The store is untouched when any check fails.
pub fn apply_patch(
    index: &ForestIndex,
    current: &Member,
    patch: MemberPatch,
) -> ServerResult<Member> {
    let mut updated = current.clone();

    if let Some(name) = patch.full_name {
        updated.full_name = validate_name(&name)?;
    }
    if let Some(branch) = patch.branch_name {
        validate_optional_len("branch_name", branch.as_deref(), BRANCH_MAX_CHARS)?;
        updated.branch_name = branch;
    }
    if let Some(gender) = patch.gender {
        updated.gender = gender;
    }
    if let Some(year) = patch.birth_year {
        validate_year("birth_year", year)?;
        updated.birth_year = year;
    }
    if let Some(year) = patch.death_year {
        validate_year("death_year", year)?;
        updated.death_year = year;
    }
    if let Some(email) = patch.email {
        validate_optional_len("email", email.as_deref(), EMAIL_MAX_CHARS)?;
        updated.email = email;
    }
    if let Some(phone) = patch.phone {
        validate_optional_len("phone", phone.as_deref(), PHONE_MAX_CHARS)?;
        updated.phone = phone;
    }
    if let Some(alive) = patch.is_alive {
        updated.is_alive = alive;
    }
    if let Some(new_parent) = patch.parent_id {
        check_reparent(index, current.id, new_parent)?;
        updated.parent_id = new_parent;
    }

    Ok(updated)
}

/// Delete policy: a member with children cannot be deleted. Callers must
/// re-parent or remove descendants first.
pub fn validate_delete(index: &ForestIndex, id: i64) -> ServerResult<()> {
    if !index.contains(id) {
        return Err(ServerError::NotFound(id));
    }
    let children = index.children_of(id).len();
    if children > 0 {
        return Err(ServerError::HasDependents { id, children });
    }
    Ok(())
}

/// A re-parent is valid when the new parent exists, is not the member
/// itself, and is not a descendant of the member. The descendant check
/// walks upward from the new parent; reaching the member means the edge
/// would close a cycle.
fn check_reparent(index: &ForestIndex, id: i64, new_parent: Option<i64>) -> ServerResult<()> {
    let Some(parent_id) = new_parent else {
        return Ok(());
    };
    if !index.contains(parent_id) {
        return Err(ServerError::ParentNotFound(parent_id));
    }

    let mut steps = 0usize;
    let mut cur = parent_id;
    loop {
        if cur == id {
            return Err(ServerError::CycleDetected { member: id, parent: parent_id });
        }
        steps += 1;
        if steps > index.len() {
            let msg = format!("ancestor walk from member {parent_id} exceeded population size");
            tracing::error!("{msg}");
            return Err(ServerError::StructuralCorruption(msg));
        }
        let member = index.get(cur).ok_or_else(|| {
            let msg = format!("member {cur} missing during ancestor walk");
            tracing::error!("{msg}");
            ServerError::StructuralCorruption(msg)
        })?;
        match member.parent_id {
            None => return Ok(()),
            Some(parent) => cur = parent,
        }
    }
}

fn validate_name(raw: &str) -> ServerResult<String> {
    let name = raw.trim();
    let chars = name.chars().count();
    if chars < NAME_MIN_CHARS || chars > NAME_MAX_CHARS {
        return Err(ServerError::Validation(format!(
            "full_name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_optional_len(field: &str, value: Option<&str>, max: usize) -> ServerResult<()> {
    if let Some(v) = value {
        if v.chars().count() > max {
            return Err(ServerError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(())
}

fn validate_year(field: &str, value: Option<i32>) -> ServerResult<()> {
    if let Some(y) = value {
        if !(YEAR_MIN..=YEAR_MAX).contains(&y) {
            return Err(ServerError::Validation(format!(
                "{field} must be between {YEAR_MIN} and {YEAR_MAX}"
            )));
        }
    }
    Ok(())
}

// File: src/storage/sqlite/convert.rs

use chrono::DateTime;
use rusqlite::Row;

use crate::traits::{Gender, Member};

/// Column list matching `member_from_row`'s positional reads
pub(crate) const MEMBER_COLUMNS: &str =
    "id, full_name, branch_name, parent_id, image_url, gender, birth_year, \
     death_year, email, phone, is_alive, created_at";

/// Map a row selected with `MEMBER_COLUMNS` into a Member
///
/// Unrecognized gender text reads as unspecified rather than failing the
/// whole row.
pub(crate) fn member_from_row(row: &Row<'_>) -> rusqlite::Result<Member> {
    let gender: Option<String> = row.get(5)?;
    let created_nanos: i64 = row.get(11)?;

    Ok(Member {
        id: row.get(0)?,
        full_name: row.get(1)?,
        branch_name: row.get(2)?,
        parent_id: row.get(3)?,
        image_url: row.get(4)?,
        gender: gender.as_deref().and_then(Gender::parse),
        birth_year: row.get(6)?,
        death_year: row.get(7)?,
        email: row.get(8)?,
        phone: row.get(9)?,
        is_alive: row.get(10)?,
        created_at: DateTime::from_timestamp_nanos(created_nanos),
    })
}

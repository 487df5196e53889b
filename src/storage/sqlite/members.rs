// File: src/storage/sqlite/members.rs

use rusqlite::{params, Connection};

use super::convert::{member_from_row, MEMBER_COLUMNS};
use super::store::SqliteStore;
use crate::error::{ServerResult, StorageError};
use crate::traits::{Member, NewMember};

impl SqliteStore {
    pub(crate) fn get_impl(&self, id: i64) -> ServerResult<Member> {
        let conn = self.get_conn()?;
        get_by_id(&conn, id)
    }

    pub(crate) fn list_all_impl(&self) -> ServerResult<Vec<Member>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY id ASC"
        ))?;
        let members = stmt
            .query_map([], member_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(members)
    }

    pub(crate) fn insert_impl(&self, new: &NewMember) -> ServerResult<Member> {
        let conn = self.get_conn()?;
        let created_at = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0);

        conn.execute(
            "INSERT INTO members (full_name, branch_name, parent_id, gender, birth_year, \
             death_year, email, phone, is_alive, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                new.full_name,
                new.branch_name,
                new.parent_id,
                new.gender.map(|g| g.as_str()),
                new.birth_year,
                new.death_year,
                new.email,
                new.phone,
                new.is_alive,
                created_at,
            ],
        )?;

        let id = conn.last_insert_rowid();
        get_by_id(&conn, id)
    }

    pub(crate) fn update_impl(&self, member: &Member) -> ServerResult<Member> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE members SET full_name = ?1, branch_name = ?2, parent_id = ?3, \
             image_url = ?4, gender = ?5, birth_year = ?6, death_year = ?7, \
             email = ?8, phone = ?9, is_alive = ?10 WHERE id = ?11",
            params![
                member.full_name,
                member.branch_name,
                member.parent_id,
                member.image_url,
                member.gender.map(|g| g.as_str()),
                member.birth_year,
                member.death_year,
                member.email,
                member.phone,
                member.is_alive,
                member.id,
            ],
        )?;

        if changed == 0 {
            return Err(StorageError::NotFound(member.id).into());
        }
        get_by_id(&conn, member.id)
    }

    pub(crate) fn delete_impl(&self, id: i64) -> ServerResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute("DELETE FROM members WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StorageError::NotFound(id).into());
        }
        Ok(())
    }

    pub(crate) fn set_image_url_impl(&self, id: i64, url: Option<&str>) -> ServerResult<Member> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE members SET image_url = ?1 WHERE id = ?2",
            params![url, id],
        )?;
        if changed == 0 {
            return Err(StorageError::NotFound(id).into());
        }
        get_by_id(&conn, id)
    }
}

fn get_by_id(conn: &Connection, id: i64) -> ServerResult<Member> {
    conn.query_row(
        &format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?1"),
        params![id],
        member_from_row,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => StorageError::NotFound(id).into(),
        other => other.into(),
    })
}

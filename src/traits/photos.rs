//! Photo blob store trait definition

use crate::error::ServerResult;

/// Opaque blob store for member photos
///
/// Returns a reference string (e.g. `/uploads/12_3fa9c1d2.jpg`) that the
/// record store keeps in `image_url`. The engine never inspects the
/// reference beyond passing it back for removal.
pub trait PhotoStore: Send + Sync {
    /// Store photo bytes for a member and return the reference string.
    /// `ext` includes the leading dot (".jpg").
    fn store(&self, member_id: i64, ext: &str, bytes: &[u8]) -> ServerResult<String>;

    /// Remove a previously stored photo. Removing a reference that no
    /// longer resolves is not an error.
    fn remove(&self, reference: &str) -> ServerResult<()>;
}

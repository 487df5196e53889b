//! Trait contracts for the record store and the photo blob store

pub mod photos;
pub mod store;

pub use photos::PhotoStore;
pub use store::{Gender, Member, MemberPatch, MemberStore, NewMember};

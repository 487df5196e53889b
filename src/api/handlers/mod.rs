//! HTTP request handlers

pub mod auth;
pub mod health;
mod helpers;
pub mod members;
pub mod person;
pub mod photo;
pub mod search;
pub mod stats;

pub use auth::login;
pub use health::health_check;
pub use members::{create_member, delete_member, list_members, update_member};
pub use person::{get_children, get_person, get_roots};
pub use photo::upload_photo;
pub use search::search_members;
pub use stats::get_stats;

//! API endpoint modules organized by category.
//!
//! Each module adds typed methods for a group of related endpoints to
//! `ApiClient`.

pub mod admin;
pub mod library_elements;
pub mod teams;
pub mod users;

pub use users::UserSearch;

//! Entity model definitions.

pub mod auth_token;
pub mod library_element;
pub mod status;
pub mod team;
pub mod user;

//! Request/response bodies for the HTTP layer

pub mod auth;
pub mod profile;

//! Outbound adapters implementing the driven ports.
//!
//! - **auth**: bearer token verification with `jsonwebtoken`
//! - **persistence**: PostgreSQL drink storage with Diesel

pub mod auth;
pub mod persistence;

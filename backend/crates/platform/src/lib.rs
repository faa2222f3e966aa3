//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, salted, configurable cost)
//! - Signed token issuance and verification (HS256 JWT)

pub mod password;
pub mod token;

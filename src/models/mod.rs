//! Entity records for the adoption site.
//!
//! Each entity maps to one SQLite table via `sqlx::FromRow` and serializes
//! as JSON with the field casing the frontend expects (`createdAt`,
//! `updatedAt`). The `Resource` impls are the declarative routing table:
//! table name, editable columns, upload flag, and response wording.

pub mod donation;
pub mod pet;
pub mod volunteer;

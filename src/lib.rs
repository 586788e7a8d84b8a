//! REST backend for the adoption charity site: donations, volunteers, and
//! pets over SQLite, with image upload for donation and pet records.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

//! API Module
//!
//! HTTP admin surface over the shared cache.
//!
//! # Endpoints
//! - `PUT /set` - Store a JSON value
//! - `GET /get/:key` - Retrieve a fresh value
//! - `DELETE /del/:key` - Delete a key
//! - `POST /clear` - Remove every entry
//! - `GET /keys` - List indexed keys
//! - `GET /describe/:key` - Entry age and TTL without evicting it
//! - `POST /invalidate/:resource_type` - Apply the dependency table
//! - `POST /invalidate/:resource_type/:id` - Drop one per-entity entry
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

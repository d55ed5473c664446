//! Request and Response models for the admin API
//!
//! DTOs serialized to and from HTTP bodies.

pub mod requests;
pub mod responses;

pub use requests::{SetRequest, MAX_KEY_LENGTH};
pub use responses::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, InvalidateResponse, KeysResponse,
    SetResponse, StatsResponse,
};

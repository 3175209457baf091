//! HTTP REST API
//!
//! - `common`: response envelope, error mapping, validated JSON extractor
//! - `middleware`: bearer token authentication
//! - `modules`: one handler module per resource
//! - `frontend`: SPA hosting with `index.html` fallback
//! - `router`: route table and OpenAPI document

pub mod common;
pub mod frontend;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;


pub use router::create_api_router;
pub use state::ApiState;

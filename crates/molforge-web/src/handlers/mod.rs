//! HTTP handlers for all API routes.

pub mod analysis;
pub mod design;
pub mod system;

//! Browser adapters for the registration core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts the multipart register request via `fetch`, and `object_url`
//! mints preview URLs for picked image files.

pub mod api;
pub mod object_url;

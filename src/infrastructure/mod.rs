//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - HTTP implementations of the domain ports (marketplace REST API)
//! - Local key/value storage (tokens and language code)

pub mod http;
pub mod storage;

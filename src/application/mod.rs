//! Application Layer
//!
//! Services and data transfer objects. This layer sits between the pages
//! and the API ports defined in the domain layer.

pub mod services;
pub mod dto;

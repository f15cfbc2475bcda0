//! Presentation Layer
//!
//! Terminal pages, route guarding, page scopes and the post-item wizard.

pub mod cli;
pub mod guard;
pub mod images;
pub mod navigator;
pub mod scope;
pub mod wizard;

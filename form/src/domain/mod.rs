//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Application model and submission outcomes
//! - `validation`: The form schema rules
//! - `ports`: Trait definitions for the record store and the presentation layer

pub mod entities;
pub mod ports;
pub mod validation;

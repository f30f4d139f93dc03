//! Product Details UI Module
//!
//! Simplified MVVM pattern:
//! - view_model.rs: form state, conversions to API payloads, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::{ProductDetailsViewModel, SaveOutcome};

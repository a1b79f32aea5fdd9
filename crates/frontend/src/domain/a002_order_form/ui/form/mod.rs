//! Switchboard order form
//!
//! - model.rs: submit request to the packet generator
//! - view_model.rs: form state and commands
//! - view.rs: page component
//! - section_card.rs / asset_preview.rs: per-section pieces

mod asset_preview;
mod model;
mod section_card;
mod view;
mod view_model;

pub use view::OrderForm;
pub use view_model::OrderFormViewModel;

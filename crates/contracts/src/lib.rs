//! Shared types and pure rules for the switchboard order form.
//!
//! Nothing here touches the browser: the frontend binds these to DOM events.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;

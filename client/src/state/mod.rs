//! View-state for the page controllers.
//!
//! DESIGN
//! ======
//! Each page owns a plain state struct held in an `RwSignal`; the markup is
//! a pure projection of that state. Anything with logic worth testing lives
//! here rather than in the components.

pub mod auth;
pub mod filters;
pub mod queue;
pub mod registered;
pub mod requests;
pub mod walkin;

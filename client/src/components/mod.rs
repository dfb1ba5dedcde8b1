//! Shared UI components.

pub mod nav;

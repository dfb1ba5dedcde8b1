//! Page components, one per route.

pub mod badge;
pub mod booth;
pub mod dashboard;
pub mod login;
pub mod registered;
pub mod walkin;

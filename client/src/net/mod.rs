//! Network helpers: REST calls and the booth polling loop.

pub mod api;
pub mod poll;

//! Flutter-facing bridge crate for the dashboard core.

pub mod api;

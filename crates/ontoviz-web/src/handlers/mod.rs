//! HTTP handlers for all web routes.

pub mod favicon;
pub mod graph;
pub mod index;

//! Sketchmaker
//!
//! Turns photographs into line drawings with a live browser preview.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;

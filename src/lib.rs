//! graphIQ - Bar chart studio with PNG/EPS/PDF export
//!
//! The editor state lives in [`data`], is projected into a drawable scene by
//! [`charts`], and leaves the application through [`export`].

pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod gui;
pub mod routes;
pub mod telemetry;
pub mod viewport;

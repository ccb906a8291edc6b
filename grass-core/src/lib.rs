//! Core simulation for an interactive field of grass blades.
//!
//! Main components:
//! - [`blade`] — a single blade simulated as a damped spring.
//! - [`factory`] — builds blades with randomized height and color.
//! - [`scene`] — owns the blades and handles frames and clicks.
//! - [`config`] — physics constants and scene layout.
//! - [`canvas`] — the drawing primitives a rendering backend provides.
//! - [`color`] — HSB and RGB colors.
//! - [`spline`] — curve conversion and sampling helpers.
//! - [`error`] — configuration errors.
//! - [`types`] — shared type aliases and IDs.

pub mod blade;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod factory;
pub mod scene;
pub mod spline;
pub mod types;

//! Placeholder image service.
//!
//! `GET /generate` renders a rounded, colored rectangle labelled with its own
//! size and returns it as a base64-encoded PNG in a plain-text body.
//!
//! # Limits
//!
//! Widths and heights above [`params::MAX_SIDE`] are not rejected. The request
//! is treated as malformed and renders at [`params::FALLBACK_DIMENSIONS`].

pub mod config;
pub mod error;
pub mod palette;
pub mod params;
pub mod render;
pub mod server;

pub use error::ServerError;
pub use palette::PaletteColor;
pub use params::RenderRequest;
pub use render::{LabelPolicy, Renderer};
pub use server::{router, serve};

//! PDF output for a collected set of files.
//!
//! Rendering happens in two steps. [`rendering`] lays every line out onto pages of a
//! [`canvas::Canvas`] using the fixed [`config::Geometry`]; the canvas is then serialized
//! with `pdf-writer` and written to disk in one go.

mod canvas;
mod config;
mod fonts;
mod rendering;
mod units;

pub use config::{RenderStats, PDF};

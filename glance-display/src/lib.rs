//! Rendering backend abstraction for Glance status widgets
//!
//! This crate provides:
//! - `Surface` trait for the primitive draw operations a status frame is
//!   composed from (rectangle fill, line, aligned text, battery glyph)
//! - `Canvas`, a reference monochrome implementation backed by a square
//!   working buffer with a rotate-into-destination commit
//! - The output-status symbol codepoints and their fallback bitmaps
//!
//! # Architecture
//!
//! The frame composer in `glance-core` only ever talks to the `Surface`
//! trait. Hardware display modules implement it on top of their own frame
//! buffer and flush path; `Canvas` exists for displays that want a ready
//! made buffer and for host-side tests.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod surface;
pub mod symbols;

// Re-export key types
pub use canvas::{Canvas, Rotation};
pub use surface::{Color, DisplayError, Surface, TextAlign, CANVAS_SIZE};

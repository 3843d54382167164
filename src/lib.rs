//! Three-patch horizontal image slicing for resizable UI chrome.
//!
//! Partitions a source image into left / center / right bands and computes
//! the blit rectangles that render it into an arbitrary target extent: the
//! side bands keep their original proportions while the center band absorbs
//! all horizontal stretching or cropping — the classic technique behind
//! resizable chat bubbles, borders, and panels.
//!
//! Pure geometry — no pixel operations, no allocations in the core, `no_std`
//! compatible.
//!
//! # Modules
//!
//! - [`slice`] — band partition, regime selection, blit-rect computation
//! - [`sizing`] — target-size resolution from layout bounds and pixel ratio
//! - [`view`] — caller-owned holder wiring acquisition, sizing, rasterizer
//! - [`svg`] — SVG visualization of computed layouts (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenslice::{Size, Slicing};
//!
//! let ops = Slicing::default().compute(Size::new(100.0, 40.0), Size::new(300.0, 40.0));
//!
//! // Sides stay 25 px wide; the center stretches to fill the remaining 250.
//! assert_eq!(ops.len(), 3);
//! assert_eq!(ops.as_slice()[1].dst.width, 250.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod sizing;
pub mod slice;
#[cfg(feature = "svg")]
pub mod svg;
pub mod view;

// Re-exports: core types from the slice module
pub use sizing::{Bounds, resolve_target};
pub use slice::{
    Bands, BlitOp, BlitOps, DEFAULT_CENTER_RATIO, Rect, Regime, Size, SliceError, Slicing,
};
pub use view::{Blitter, Raster, SliceView};

//! Target-size resolution from layout bounds and device-pixel ratio.
//!
//! Thin, host-facing arithmetic: pick the logical extent an image should
//! occupy (caller-fixed size, layout bounds, or the raster's intrinsic size
//! on unbounded axes), then convert to physical pixels for the compositor.

use crate::slice::Size;

/// Per-axis layout bounds in logical pixels.
///
/// `f64::INFINITY` as a max means the axis is unbounded and the raster's
/// intrinsic size decides.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Bounds {
    /// No constraints on either axis.
    pub const UNBOUNDED: Self = Self {
        min_width: 0.0,
        max_width: f64::INFINITY,
        min_height: 0.0,
        max_height: f64::INFINITY,
    };

    /// Bounds that admit exactly one size.
    pub const fn tight(width: f64, height: f64) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Bounds from zero up to the given maxima.
    pub const fn loose(max_width: f64, max_height: f64) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Whether the width axis has a finite upper bound.
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Whether the height axis has a finite upper bound.
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Clamp a size into these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp_axis(size.width, self.min_width, self.max_width),
            clamp_axis(size.height, self.min_height, self.max_height),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Resolve the physical target extent for painting a raster.
///
/// Per axis, in order: a caller-requested size wins; otherwise a bounded
/// axis resolves to its maximum; otherwise the raster's intrinsic size (its
/// pixel dimensions taken as logical units). The result is constrained to
/// `bounds`, then scaled by `device_pixel_ratio` into physical pixels.
///
/// A non-positive or non-finite pixel ratio resolves to the zero extent —
/// composition downstream treats that as "nothing to paint".
pub fn resolve_target(
    intrinsic: Size,
    requested_width: Option<f64>,
    requested_height: Option<f64>,
    bounds: Bounds,
    device_pixel_ratio: f64,
) -> Size {
    if !(device_pixel_ratio > 0.0) || !device_pixel_ratio.is_finite() {
        return Size::ZERO;
    }
    let logical = Size::new(
        resolve_axis(
            requested_width,
            bounds.min_width,
            bounds.max_width,
            intrinsic.width,
        ),
        resolve_axis(
            requested_height,
            bounds.min_height,
            bounds.max_height,
            intrinsic.height,
        ),
    );
    Size::new(
        logical.width * device_pixel_ratio,
        logical.height * device_pixel_ratio,
    )
}

fn resolve_axis(requested: Option<f64>, min: f64, max: f64, intrinsic: f64) -> f64 {
    let v = match requested {
        Some(v) => v,
        None if max.is_finite() => max,
        None => intrinsic,
    };
    clamp_axis(v, min, max)
}

/// Clamp without assuming `min <= max` (malformed bounds collapse to `min`).
fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    v.min(max).max(min)
}

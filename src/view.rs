//! Caller-owned adapter around the pure compositor.
//!
//! The host framework's widget maps onto a plain data holder: it keeps the
//! current raster handle, the requested logical size, and the device-pixel
//! ratio, and re-runs sizing + composition from scratch on every paint.
//! There is no caching and no incremental update path — when the image or
//! target changes, the next paint replaces whatever was drawn before.

use crate::sizing::{Bounds, resolve_target};
use crate::slice::{BlitOp, BlitOps, Size, Slicing};

/// A decoded source image: pixel dimensions plus an opaque handle.
///
/// The compositor only reads the dimensions; the handle is passed through
/// untouched to the rasterizer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Raster<H> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data handle, opaque to this crate.
    pub handle: H,
}

impl<H> Raster<H> {
    /// Create a raster from its dimensions and handle.
    pub const fn new(width: u32, height: u32, handle: H) -> Self {
        Self {
            width,
            height,
            handle,
        }
    }

    /// Dimensions as a geometry extent.
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Rasterizer seam: executes one filtered image blit per op.
///
/// Implementations draw onto a canvas scaled back to logical units by the
/// inverse of the device-pixel ratio; ops arrive in emission order.
pub trait Blitter<H> {
    fn blit(&mut self, image: &H, op: BlitOp);
}

/// Holder wiring image acquisition, sizing, and the rasterizer together.
///
/// "No image yet" is a valid state: [`ops`](Self::ops) is empty and
/// [`paint`](Self::paint) draws nothing until a raster arrives.
#[derive(Clone, Debug)]
pub struct SliceView<H> {
    slicing: Slicing,
    raster: Option<Raster<H>>,
    requested_width: Option<f64>,
    requested_height: Option<f64>,
    device_pixel_ratio: f64,
}

impl<H> SliceView<H> {
    /// Create an empty view with the given slicing configuration.
    pub fn new(slicing: Slicing) -> Self {
        Self {
            slicing,
            raster: None,
            requested_width: None,
            requested_height: None,
            device_pixel_ratio: 1.0,
        }
    }

    /// The slicing configuration.
    pub fn slicing(&self) -> Slicing {
        self.slicing
    }

    /// The current raster, if one has resolved.
    pub fn image(&self) -> Option<&Raster<H>> {
        self.raster.as_ref()
    }

    /// Install a resolved raster, replacing any previous one.
    pub fn set_image(&mut self, raster: Raster<H>) {
        self.raster = Some(raster);
    }

    /// Drop the current raster (decode failed, source changed).
    pub fn clear_image(&mut self) {
        self.raster = None;
    }

    /// Fix the requested logical size per axis. `None` leaves the axis to
    /// layout-driven sizing.
    pub fn set_target(&mut self, width: Option<f64>, height: Option<f64>) {
        self.requested_width = width;
        self.requested_height = height;
    }

    /// Set the logical→physical conversion factor (default 1.0).
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = ratio;
    }

    /// Resolve the physical target extent for the given layout bounds.
    pub fn layout(&self, bounds: Bounds) -> Size {
        let intrinsic = self.raster.as_ref().map_or(Size::ZERO, Raster::size);
        resolve_target(
            intrinsic,
            self.requested_width,
            self.requested_height,
            bounds,
            self.device_pixel_ratio,
        )
    }

    /// Compute the blit sequence for the given layout bounds.
    ///
    /// Empty when no raster has resolved or the resolved target is
    /// degenerate.
    pub fn ops(&self, bounds: Bounds) -> BlitOps {
        match &self.raster {
            None => BlitOps::new(),
            Some(raster) => self.slicing.compute(raster.size(), self.layout(bounds)),
        }
    }

    /// Compute and hand every op to the rasterizer, in order.
    pub fn paint<B: Blitter<H>>(&self, bounds: Bounds, blitter: &mut B) {
        let Some(raster) = &self.raster else {
            return;
        };
        for op in &self.ops(bounds) {
            blitter.blit(&raster.handle, *op);
        }
    }
}

impl<H> Default for SliceView<H> {
    fn default() -> Self {
        Self::new(Slicing::default())
    }
}

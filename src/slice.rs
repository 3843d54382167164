//! Three-patch band partition and blit-rect computation.
//!
//! Splits a source image into left / center / right bands and computes the
//! ordered source→destination rectangle pairs that render it into an
//! arbitrary target extent: the side bands keep their uniformly scaled
//! proportions while the center band absorbs all horizontal stretching or
//! cropping. Pure geometry — no pixel operations, no allocations, `no_std`
//! compatible.
//!
//! # Example
//!
//! ```
//! use zenslice::{Size, Slicing};
//!
//! let slicing = Slicing::new(0.5).unwrap();
//! let ops = slicing.compute(Size::new(100.0, 40.0), Size::new(300.0, 40.0));
//!
//! // Side bands keep their 25 px width; the center stretches to 250 px.
//! assert_eq!(ops.len(), 3);
//! assert_eq!(ops.as_slice()[0].dst.width, 25.0);
//! assert_eq!(ops.as_slice()[1].dst.width, 250.0);
//! ```

/// Default center-band ratio: half the source width stretches.
pub const DEFAULT_CENTER_RATIO: f64 = 0.5;

/// Geometry tolerance. Extents at or below this are treated as empty, so
/// floating-point dust never becomes a sliver draw.
const EPS: f64 = 1e-9;

/// Width × height extent in pixels.
///
/// Used for both source rasters and target rectangles. Target extents are
/// physical device pixels at the compositor boundary; non-positive extents
/// are valid inputs meaning "nothing to paint".
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Zero extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether this extent encloses no area. NaN extents count as empty.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Zero rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether this rect encloses no area (within the geometry tolerance).
    pub fn is_empty(&self) -> bool {
        !(self.width > EPS && self.height > EPS)
    }

    /// Field-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Rect, tol: f64) -> bool {
        fabs(self.x - other.x) <= tol
            && fabs(self.y - other.y) <= tol
            && fabs(self.width - other.width) <= tol
            && fabs(self.height - other.height) <= tol
    }
}

/// One source-to-destination image copy instruction for the rasterizer.
///
/// The rasterizer performs one filtered blit per op, in emission order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BlitOp {
    /// Region of the source image to read.
    pub src: Rect,
    /// Region of the target to cover.
    pub dst: Rect,
}

impl BlitOp {
    /// Create a new op.
    pub const fn new(src: Rect, dst: Rect) -> Self {
        Self { src, dst }
    }
}

/// Ordered blit sequence. Holds at most four ops inline — no allocation.
///
/// Ops are emitted left-to-right in destination order; zero-area ops are
/// skipped rather than stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlitOps {
    ops: [BlitOp; 4],
    len: u8,
}

impl BlitOps {
    /// Empty sequence.
    pub const fn new() -> Self {
        Self {
            ops: [BlitOp::new(Rect::ZERO, Rect::ZERO); 4],
            len: 0,
        }
    }

    /// Number of ops in the sequence.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the sequence holds no ops.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The ops, in emission order.
    pub fn as_slice(&self) -> &[BlitOp] {
        &self.ops[..self.len as usize]
    }

    /// Iterate over the ops in emission order.
    pub fn iter(&self) -> core::slice::Iter<'_, BlitOp> {
        self.as_slice().iter()
    }

    /// Append an op, dropping it when either rect is empty.
    fn push(&mut self, op: BlitOp) {
        if op.src.is_empty() || op.dst.is_empty() {
            return;
        }
        self.ops[self.len as usize] = op;
        self.len += 1;
    }
}

impl Default for BlitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BlitOps {
    type Item = &'a BlitOp;
    type IntoIter = core::slice::Iter<'a, BlitOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Band widths of the three-patch partition, in source pixels.
///
/// `left` and `right` are always equal; the partition tiles the source
/// width exactly (`left + center + right == source_width` up to f64
/// rounding).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bands {
    /// Left side band width.
    pub left: f64,
    /// Center (stretch) band width.
    pub center: f64,
    /// Right side band width.
    pub right: f64,
}

impl Bands {
    /// Partition `source_width` by `center_ratio` (must be in `[0, 1)`).
    pub fn of(source_width: f64, center_ratio: f64) -> Self {
        let side = source_width * (1.0 - center_ratio) / 2.0;
        Self {
            left: side,
            center: source_width * center_ratio,
            right: side,
        }
    }

    /// Total width of the partition.
    pub fn total(&self) -> f64 {
        self.left + self.center + self.right
    }

    /// The same bands scaled uniformly by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            left: self.left * k,
            center: self.center * k,
            right: self.right * k,
        }
    }
}

/// The three mutually exclusive geometric cases, selected by comparing the
/// target width against the natural and minimum widths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Target at least as wide as the uniformly scaled image: sides are
    /// painted rigid, all extra width goes to the center band.
    Stretch,
    /// Target narrower than the natural width but wide enough for both
    /// sides: the center band is kept as two halves and cropped
    /// symmetrically from their inner edges.
    CropCenter,
    /// Target too narrow even for the sides: the center vanishes and the
    /// sides shrink uniformly, pulling the height down with them.
    Collapse,
}

/// Slicing configuration error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// Center ratio outside `[0, 1)` or not finite.
    CenterRatioOutOfRange,
}

/// Three-patch slicing configuration.
///
/// Holds the validated center-band ratio and computes blit sequences for
/// arbitrary source/target extents.
///
/// # Example
///
/// ```
/// use zenslice::{Regime, Size, Slicing};
///
/// let slicing = Slicing::new(0.5).unwrap();
/// let source = Size::new(100.0, 40.0);
///
/// // Narrower than both side bands: the image collapses and shrinks.
/// let target = Size::new(20.0, 40.0);
/// assert_eq!(slicing.regime(source, target), Some(Regime::Collapse));
/// assert_eq!(slicing.compute(source, target).len(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slicing {
    center_ratio: f64,
}

impl Default for Slicing {
    fn default() -> Self {
        Self {
            center_ratio: DEFAULT_CENTER_RATIO,
        }
    }
}

impl Slicing {
    /// Create a configuration with the given center-band ratio.
    ///
    /// The ratio is the fraction of the source width that stretches; it must
    /// be in `[0, 1)`. A ratio of exactly `1.0` would eliminate the side
    /// bands entirely and is rejected.
    pub fn new(center_ratio: f64) -> Result<Self, SliceError> {
        if !(center_ratio >= 0.0 && center_ratio < 1.0) {
            return Err(SliceError::CenterRatioOutOfRange);
        }
        Ok(Self { center_ratio })
    }

    /// The configured center-band ratio.
    pub fn center_ratio(&self) -> f64 {
        self.center_ratio
    }

    /// Partition a source width into bands under this configuration.
    pub fn bands(&self, source_width: f64) -> Bands {
        Bands::of(source_width, self.center_ratio)
    }

    /// Width the whole image would occupy if scaled uniformly to
    /// `target_height`. Zero for degenerate inputs.
    pub fn natural_width(&self, source: Size, target_height: f64) -> f64 {
        if source.is_empty() || !(target_height > 0.0) {
            return 0.0;
        }
        let kh = target_height / source.height;
        self.bands(source.width).scaled(kh).total()
    }

    /// Minimum width at which both side bands still render at their
    /// uniformly scaled size (the center fully removed). Zero for
    /// degenerate inputs.
    pub fn min_width(&self, source: Size, target_height: f64) -> f64 {
        if source.is_empty() || !(target_height > 0.0) {
            return 0.0;
        }
        let kh = target_height / source.height;
        let scaled = self.bands(source.width).scaled(kh);
        scaled.left + scaled.right
    }

    /// Which geometric case a given source/target pairing selects.
    ///
    /// `None` for degenerate inputs — the same guard that makes
    /// [`compute`](Self::compute) emit nothing.
    pub fn regime(&self, source: Size, target: Size) -> Option<Regime> {
        if source.is_empty() || target.is_empty() || self.center_ratio >= 1.0 {
            return None;
        }
        let kh = target.height / source.height;
        let scaled = self.bands(source.width).scaled(kh);
        let natural_width = scaled.total();
        let min_width = scaled.left + scaled.right;
        Some(if target.width >= natural_width {
            Regime::Stretch
        } else if target.width >= min_width {
            Regime::CropCenter
        } else {
            Regime::Collapse
        })
    }

    /// Compute the blit sequence rendering `source` into `target`.
    ///
    /// Degenerate inputs (empty source or target, or an out-of-range ratio)
    /// produce an empty sequence — "nothing to paint", not an error. Past
    /// that guard every step is total: all intermediate values are clamped
    /// and the emitted rects are never negative.
    ///
    /// Destination rects are emitted left-to-right in source band order and
    /// never overlap; in [`Stretch`](Regime::Stretch) and
    /// [`CropCenter`](Regime::CropCenter) they tile the target width
    /// exactly (up to f64 rounding).
    pub fn compute(&self, source: Size, target: Size) -> BlitOps {
        let mut ops = BlitOps::new();
        let Some(regime) = self.regime(source, target) else {
            return ops;
        };

        // Vertical scale governs heights and is the default width scale.
        let kh = target.height / source.height;
        let bands = self.bands(source.width);
        let scaled = bands.scaled(kh);
        let min_width = scaled.left + scaled.right;

        // Band source rects span the full source height.
        let src_left = Rect::new(0.0, 0.0, bands.left, source.height);
        let src_center = Rect::new(bands.left, 0.0, bands.center, source.height);
        let src_right = Rect::new(bands.left + bands.center, 0.0, bands.right, source.height);

        match regime {
            Regime::Stretch => {
                ops.push(BlitOp::new(
                    src_left,
                    Rect::new(0.0, 0.0, scaled.left, target.height),
                ));
                ops.push(BlitOp::new(
                    src_center,
                    Rect::new(scaled.left, 0.0, target.width - min_width, target.height),
                ));
                ops.push(BlitOp::new(
                    src_right,
                    Rect::new(target.width - scaled.right, 0.0, scaled.right, target.height),
                ));
            }

            Regime::CropCenter => {
                // Keep two half-center slices adjoining the sides; the cut
                // is a symmetric strip from the middle of the center band.
                let dst_center = (target.width - min_width).clamp(0.0, scaled.center);
                let cut_src = (scaled.center - dst_center) / kh;
                let half_keep = ((bands.center - cut_src) / 2.0).clamp(0.0, bands.center / 2.0);

                ops.push(BlitOp::new(
                    src_left,
                    Rect::new(0.0, 0.0, scaled.left, target.height),
                ));
                if dst_center > EPS && half_keep > EPS {
                    ops.push(BlitOp::new(
                        Rect::new(bands.left, 0.0, half_keep, source.height),
                        Rect::new(scaled.left, 0.0, dst_center / 2.0, target.height),
                    ));
                    ops.push(BlitOp::new(
                        Rect::new(
                            bands.left + bands.center - half_keep,
                            0.0,
                            half_keep,
                            source.height,
                        ),
                        Rect::new(
                            scaled.left + dst_center / 2.0,
                            0.0,
                            dst_center / 2.0,
                            target.height,
                        ),
                    ));
                }
                ops.push(BlitOp::new(
                    src_right,
                    Rect::new(target.width - scaled.right, 0.0, scaled.right, target.height),
                ));
            }

            Regime::Collapse => {
                // Sides shrink by a second uniform factor; height follows,
                // and the shorter result centers vertically in the target.
                let kw = target.width / min_width;
                let final_height = target.height * kw;
                let y = (target.height - final_height) / 2.0;
                ops.push(BlitOp::new(
                    src_left,
                    Rect::new(0.0, y, scaled.left * kw, final_height),
                ));
                ops.push(BlitOp::new(
                    src_right,
                    Rect::new(scaled.left * kw, y, scaled.right * kw, final_height),
                ));
            }
        }

        ops
    }
}

// ============================================================================
// Internal geometry
// ============================================================================

/// `f64::abs` via num-traits so the same code builds without `std`.
#[inline]
fn fabs(v: f64) -> f64 {
    num_traits::Float::abs(v)
}

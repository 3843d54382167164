//! Pixel-simulation validation of computed blit sequences.
//!
//! Every pixel in the source stores its (x, y) origin coordinates, making
//! any geometric error immediately detectable — wrong band, wrong scale,
//! wrong placement, and double writes all show up as mismatched coordinates
//! or a failed write count.
//!
//! The computed ops are rasterized nearest-neighbor onto a canvas and the
//! result is checked for provenance (which source band fed each canvas
//! pixel), coverage, and determinism.

use zenslice::{BlitOps, Size, Slicing};

// ---- Pixel simulation ----

/// A pixel that remembers where it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pixel {
    /// Source pixel at (x, y) in the original image.
    Source(u32, u32),
    /// Never written.
    Fill,
}

/// A pixel buffer for geometric validation.
#[derive(Clone, Debug, PartialEq)]
struct Grid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Grid {
    /// Source image: pixel at (x,y) stores Source(x,y).
    fn source(w: u32, h: u32) -> Self {
        let pixels = (0..h)
            .flat_map(|y| (0..w).map(move |x| Pixel::Source(x, y)))
            .collect();
        Self {
            width: w,
            height: h,
            pixels,
        }
    }

    fn get(&self, x: u32, y: u32) -> Pixel {
        assert!(
            x < self.width && y < self.height,
            "({x},{y}) out of bounds {}x{}",
            self.width,
            self.height
        );
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Rasterize ops nearest-neighbor onto a canvas of the given size.
///
/// A destination pixel is covered when its center lies inside an op's dst
/// rect; the sampled source pixel is the floor of the mapped-back center.
/// Panics when any canvas pixel is written more than once — destination
/// rects must never overlap.
fn rasterize(source: &Grid, ops: &BlitOps, canvas_w: u32, canvas_h: u32) -> Grid {
    let mut pixels = vec![Pixel::Fill; (canvas_w * canvas_h) as usize];
    let mut writes = vec![0u32; (canvas_w * canvas_h) as usize];

    for op in ops {
        for dy in 0..canvas_h {
            let cy = dy as f64 + 0.5;
            if cy < op.dst.y || cy >= op.dst.bottom() {
                continue;
            }
            let fy = op.src.y + (cy - op.dst.y) * op.src.height / op.dst.height;
            let sy = (fy.floor() as u32).min(source.height - 1);
            for dx in 0..canvas_w {
                let cx = dx as f64 + 0.5;
                if cx < op.dst.x || cx >= op.dst.right() {
                    continue;
                }
                let fx = op.src.x + (cx - op.dst.x) * op.src.width / op.dst.width;
                let sx = (fx.floor() as u32).min(source.width - 1);

                let idx = (dy * canvas_w + dx) as usize;
                writes[idx] += 1;
                assert!(
                    writes[idx] == 1,
                    "canvas pixel ({dx},{dy}) written {} times",
                    writes[idx]
                );
                pixels[idx] = source.get(sx, sy);
            }
        }
    }

    Grid {
        width: canvas_w,
        height: canvas_h,
        pixels,
    }
}

fn compute(target_w: f64, target_h: f64) -> BlitOps {
    Slicing::new(0.5)
        .unwrap()
        .compute(Size::new(100.0, 40.0), Size::new(target_w, target_h))
}

// ---- Provenance ----

#[test]
fn stretch_sides_render_identity() {
    // 100×40 into 300×40 at kh = 1: the side bands copy through unscaled.
    let source = Grid::source(100, 40);
    let canvas = rasterize(&source, &compute(300.0, 40.0), 300, 40);

    for y in 0..40 {
        for x in 0..25 {
            assert_eq!(canvas.get(x, y), Pixel::Source(x, y), "left band ({x},{y})");
        }
        for x in 275..300 {
            assert_eq!(
                canvas.get(x, y),
                Pixel::Source(x - 200, y),
                "right band ({x},{y})"
            );
        }
    }
}

#[test]
fn stretch_center_samples_only_the_center_band() {
    let source = Grid::source(100, 40);
    let canvas = rasterize(&source, &compute(300.0, 40.0), 300, 40);

    for y in 0..40 {
        for x in 25..275 {
            let Pixel::Source(sx, sy) = canvas.get(x, y) else {
                panic!("unfilled center pixel ({x},{y})");
            };
            assert!(
                (25..75).contains(&sx),
                "center pixel ({x},{y}) sampled source x {sx}"
            );
            assert_eq!(sy, y);
        }
    }
}

#[test]
fn stretch_covers_every_canvas_pixel() {
    let source = Grid::source(100, 40);
    let canvas = rasterize(&source, &compute(300.0, 40.0), 300, 40);
    assert!(canvas.pixels.iter().all(|p| *p != Pixel::Fill));
}

#[test]
fn crop_discards_only_the_middle_strip() {
    // 100×40 into 80×40: a 20 px strip from the middle of the center band
    // disappears; everything else copies through at scale 1.
    let source = Grid::source(100, 40);
    let canvas = rasterize(&source, &compute(80.0, 40.0), 80, 40);

    for y in 0..40 {
        for x in 0..40 {
            assert_eq!(canvas.get(x, y), Pixel::Source(x, y), "kept left ({x},{y})");
        }
        for x in 40..80 {
            assert_eq!(
                canvas.get(x, y),
                Pixel::Source(x + 20, y),
                "kept right ({x},{y})"
            );
        }
    }
    // The cut strip never appears.
    for p in &canvas.pixels {
        if let Pixel::Source(sx, _) = p {
            assert!(!(40..60).contains(sx), "cut source column {sx} leaked");
        }
    }
}

#[test]
fn collapse_centers_vertically_between_fill_margins() {
    // 100×40 into 20×40: bands shrink to 10 px each, height to 16,
    // centered with 12-row margins above and below.
    let source = Grid::source(100, 40);
    let canvas = rasterize(&source, &compute(20.0, 40.0), 20, 40);

    for y in 0..40 {
        for x in 0..20 {
            let p = canvas.get(x, y);
            if !(12..28).contains(&y) {
                assert_eq!(p, Pixel::Fill, "margin pixel ({x},{y}) was painted");
                continue;
            }
            let Pixel::Source(sx, _) = p else {
                panic!("band pixel ({x},{y}) unpainted");
            };
            if x < 10 {
                assert!(sx < 25, "left collapse pixel ({x},{y}) from source x {sx}");
            } else {
                assert!(sx >= 75, "right collapse pixel ({x},{y}) from source x {sx}");
            }
        }
    }
}

// ---- Coverage and determinism ----

#[test]
fn no_gaps_or_overlaps_across_regimes() {
    let source = Grid::source(100, 40);
    for w in [50u32, 55, 64, 80, 99, 100, 101, 150, 300] {
        // rasterize() itself rejects double writes.
        let canvas = rasterize(&source, &compute(w as f64, 40.0), w, 40);
        assert!(
            canvas.pixels.iter().all(|p| *p != Pixel::Fill),
            "gap at width {w}"
        );
    }
    for w in [4u32, 10, 20, 35, 49] {
        rasterize(&source, &compute(w as f64, 40.0), w, 40);
    }
}

#[test]
fn repeated_composition_is_deterministic() {
    let source = Grid::source(100, 40);
    for w in [20.0, 50.0, 80.0, 300.0] {
        let a = compute(w, 40.0);
        let b = compute(w, 40.0);
        assert_eq!(a, b, "ops differ at width {w}");
        let ca = rasterize(&source, &a, w as u32, 40);
        let cb = rasterize(&source, &b, w as u32, 40);
        assert_eq!(ca, cb, "canvases differ at width {w}");
    }
}

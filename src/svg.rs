//! SVG visualization of a computed three-patch layout.
//!
//! Renders two annotated panels — the source band partition and the target
//! blit geometry — for debugging and documentation. Not part of the paint
//! path.
//!
//! # Example
//!
//! ```
//! use zenslice::{Size, Slicing, svg::render_slice_svg};
//!
//! let svg = render_slice_svg(
//!     Size::new(100.0, 40.0),
//!     Size::new(300.0, 40.0),
//!     &Slicing::default(),
//! );
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::slice::{Rect, Regime, Size, Slicing};

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 320.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 160.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 48.0;
/// Horizontal margin.
const MARGIN_X: f64 = 40.0;
/// Top margin for the first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label text area above each panel.
const LABEL_H: f64 = 22.0;

const SIDE_FILL: &str = "#cfe3f5";
const CENTER_FILL: &str = "#f5d9cf";
const OUTLINE: &str = "#444444";

/// One annotated panel: an outer box with tinted content rects inside.
struct Panel {
    label: String,
    annotation: String,
    outer: Size,
    rects: Vec<(Rect, &'static str)>,
}

/// Render a complete SVG document for the given source/target pairing.
///
/// The first panel shows the source with its band partition; the second
/// shows the target with the computed destination rects, labeled with the
/// active regime. Degenerate inputs produce a single-panel document noting
/// that nothing would be painted.
pub fn render_slice_svg(source: Size, target: Size, slicing: &Slicing) -> String {
    match slicing.regime(source, target) {
        Some(regime) => render_panels(&build_panels(source, target, slicing, regime)),
        None => empty_document(),
    }
}

fn build_panels(source: Size, target: Size, slicing: &Slicing, regime: Regime) -> Vec<Panel> {
    let bands = slicing.bands(source.width);
    let ops = slicing.compute(source, target);

    let mut panels = Vec::new();

    // Panel 1: source partition.
    panels.push(Panel {
        label: format!("Source  {}×{}", fmt(source.width), fmt(source.height)),
        annotation: format!("center ratio {}", slicing.center_ratio()),
        outer: source,
        rects: alloc::vec![
            (Rect::new(0.0, 0.0, bands.left, source.height), SIDE_FILL),
            (
                Rect::new(bands.left, 0.0, bands.center, source.height),
                CENTER_FILL
            ),
            (
                Rect::new(bands.left + bands.center, 0.0, bands.right, source.height),
                SIDE_FILL
            ),
        ],
    });

    // Panel 2: target destinations. Sides first and last, center between.
    let n = ops.len();
    let rects = ops
        .iter()
        .enumerate()
        .map(|(i, op)| {
            let fill = if i == 0 || i == n - 1 {
                SIDE_FILL
            } else {
                CENTER_FILL
            };
            (op.dst, fill)
        })
        .collect();
    panels.push(Panel {
        label: format!("Target  {}×{}", fmt(target.width), fmt(target.height)),
        annotation: format!("{} ({n} ops)", regime_name(regime)),
        outer: target,
        rects,
    });

    panels
}

fn regime_name(regime: Regime) -> &'static str {
    match regime {
        Regime::Stretch => "stretch",
        Regime::CropCenter => "center crop",
        Regime::Collapse => "collapse",
    }
}

fn render_panels(panels: &[Panel]) -> String {
    // First pass: panel scales and total document extent.
    let mut y = MARGIN_TOP;
    let mut placed = Vec::new();
    let mut doc_w = 0.0f64;
    for panel in panels {
        let scale = (MAX_PANEL_W / panel.outer.width).min(MAX_PANEL_H / panel.outer.height);
        let w = panel.outer.width * scale;
        let h = panel.outer.height * scale;
        y += LABEL_H;
        placed.push((y, scale));
        y += h + PANEL_GAP;
        doc_w = doc_w.max(w);
    }
    let doc_w = doc_w + 2.0 * MARGIN_X + 140.0;
    let doc_h = y - PANEL_GAP + MARGIN_TOP;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"0 0 {} {}\" font-family=\"monospace\" font-size=\"12\">\n",
        fmt(doc_w),
        fmt(doc_h),
        fmt(doc_w),
        fmt(doc_h),
    ));

    for (panel, &(top, scale)) in panels.iter().zip(&placed) {
        let w = panel.outer.width * scale;
        let h = panel.outer.height * scale;

        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\">{}</text>\n",
            fmt(MARGIN_X),
            fmt(top - 6.0),
            panel.label,
        ));
        if !panel.annotation.is_empty() {
            out.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" fill=\"#888888\">{}</text>\n",
                fmt(MARGIN_X + w + 10.0),
                fmt(top + 12.0),
                panel.annotation,
            ));
        }

        for (rect, fill) in &panel.rects {
            out.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                 fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
                fmt(MARGIN_X + rect.x * scale),
                fmt(top + rect.y * scale),
                fmt(rect.width * scale),
                fmt(rect.height * scale),
                fill,
                OUTLINE,
            ));
        }

        // Outer box drawn last so band seams stay visible.
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            fmt(MARGIN_X),
            fmt(top),
            fmt(w),
            fmt(h),
            OUTLINE,
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn empty_document() -> String {
    String::from(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"240\" height=\"48\" \
         font-family=\"monospace\" font-size=\"12\">\n  \
         <text x=\"16\" y=\"28\">nothing to paint</text>\n</svg>\n",
    )
}

fn fmt(v: f64) -> String {
    format!("{v:.1}")
}

//! SVG export for placed layouts.
//!
//! Room rectangles are emitted in layout coordinates multiplied by `scale`,
//! with no extra offset; the padding lives in the `viewBox` instead, which
//! keeps `rect` attributes an exact scaled copy of the Layout. Rect
//! attributes use shortest round-trip float formatting; only labels and the
//! document frame are rounded.

use crate::layout::{Layout, RoomInstance};

pub const SVG_MIME_TYPE: &str = "image/svg+xml";
pub const SVG_FILE_NAME: &str = "floorplan.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Display units per meter.
    pub scale: f64,
    /// Blank border around the drawing, in display units.
    pub padding: f64,
    /// Offset of the label from the rectangle's top-left corner.
    pub label_inset: f64,
    pub font_size: f64,
    /// Adds a `"4m x 5m"` line under each label.
    pub show_dimensions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 40.0,
            padding: 10.0,
            label_inset: 5.0,
            font_size: 14.0,
            show_dimensions: true,
        }
    }
}

/// Renders a layout to a standalone SVG document.
pub fn render_svg(layout: &Layout, options: &RenderOptions) -> String {
    let bounds = layout.bounds();
    let pad = options.padding;
    let width = bounds.width * options.scale + 2.0 * pad;
    let height = bounds.height * options.scale + 2.0 * pad;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{vx} {vy} {w} {h}">
"#,
        w = num(width),
        h = num(height),
        vx = num(-pad),
        vy = num(-pad),
    ));

    for room in layout.iter() {
        push_room(&mut svg, room, options);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_room(svg: &mut String, room: &RoomInstance, options: &RenderOptions) {
    let s = options.scale;
    let x = room.x * s;
    let y = room.y * s;

    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"lightblue\" stroke=\"black\" stroke-width=\"2\"/>\n",
        x,
        y,
        room.width * s,
        room.height * s,
    ));

    let label_x = x + options.label_inset;
    let label_y = y + options.label_inset + options.font_size;
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"black\">{}</text>\n",
        num(label_x),
        num(label_y),
        num(options.font_size),
        escape_xml(&display_label(&room.name)),
    ));

    if options.show_dimensions {
        let small = (options.font_size * 0.8).round();
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"dimgray\">{}m x {}m</text>\n",
            num(label_x),
            num(label_y + small + 2.0),
            num(small),
            num(room.width),
            num(room.height),
        ));
    }
}

/// `"living_room"` → `"Living Room"`. Already-spaced names keep their words.
pub fn display_label(name: &str) -> String {
    name.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats to at most two decimals without trailing zeros.
fn num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    // avoid "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{place, PlacementOptions, RoomCatalog, RoomSize, RoomSpec};

    /// Pulls `(x, y, width, height)` out of every `<rect>` element.
    fn rect_bounds(svg: &str) -> Vec<(f64, f64, f64, f64)> {
        svg.lines()
            .filter(|l| l.trim_start().starts_with("<rect"))
            .map(|l| {
                (
                    attr(l, "x"),
                    attr(l, "y"),
                    attr(l, "width"),
                    attr(l, "height"),
                )
            })
            .collect()
    }

    fn attr(line: &str, name: &str) -> f64 {
        let needle = format!(" {name}=\"");
        let start = line.find(&needle).unwrap() + needle.len();
        let end = start + line[start..].find('"').unwrap();
        line[start..end].parse().unwrap()
    }

    fn reference_layout() -> Layout {
        let rooms: Vec<RoomSpec> = ["living_room", "bedroom", "bedroom", "kitchen", "bathroom"]
            .into_iter()
            .map(RoomSpec::from)
            .collect();
        place(&rooms, &PlacementOptions::default(), &RoomCatalog::standard())
    }

    #[test]
    fn test_rect_bounds_round_trip_through_scale() {
        let layout = reference_layout();
        for scale in [40.0, 60.0] {
            let options = RenderOptions {
                scale,
                ..RenderOptions::default()
            };
            let rects = rect_bounds(&render_svg(&layout, &options));
            assert_eq!(rects.len(), layout.len());
            for ((x, y, w, h), room) in rects.into_iter().zip(layout.iter()) {
                assert!((x / scale - room.x).abs() < 1e-9);
                assert!((y / scale - room.y).abs() < 1e-9);
                assert!((w / scale - room.width).abs() < 1e-9);
                assert!((h / scale - room.height).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_rect_bounds_round_trip_fractional_size_and_scale() {
        let layout = Layout {
            rooms: vec![
                RoomInstance::new("Study", 0.0, 0.0, RoomSize::new(3.3333, 2.0)),
                RoomInstance::new("Nook", 4.3333, 0.0, RoomSize::new(1.1, 2.75)),
            ],
        };
        let scale = 37.5;
        let options = RenderOptions {
            scale,
            ..RenderOptions::default()
        };
        let svg = render_svg(&layout, &options);
        // two-decimal rounding would have written width="125"
        assert!(!svg.contains(r#"<rect x="0" y="0" width="125""#), "{svg}");

        let rects = rect_bounds(&svg);
        assert_eq!(rects.len(), 2);
        for ((x, y, w, h), room) in rects.into_iter().zip(layout.iter()) {
            assert_eq!(x, room.x * scale);
            assert_eq!(y, room.y * scale);
            assert_eq!(w, room.width * scale);
            assert_eq!(h, room.height * scale);
            assert!((w / scale - room.width).abs() < 1e-12);
            assert!((x / scale - room.x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_label_is_inset_from_corner() {
        let layout = Layout {
            rooms: vec![RoomInstance::new("kitchen", 1.0, 2.0, RoomSize::new(3.0, 3.0))],
        };
        let svg = render_svg(&layout, &RenderOptions::default());
        assert!(svg.contains(r#"<text x="45" y="99""#), "{svg}");
        assert!(svg.contains(">Kitchen</text>"));
        assert!(svg.contains(">3m x 3m</text>"));
    }

    #[test]
    fn test_document_size_covers_bounds_plus_padding() {
        let svg = render_svg(&reference_layout(), &RenderOptions::default());
        // bounds 12 x 9 m at 40 units/m, 10 units of padding each side
        assert!(svg.contains(r#"width="500" height="380" viewBox="-10 -10 500 380""#), "{svg}");
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_dimensions_can_be_hidden() {
        let options = RenderOptions {
            show_dimensions: false,
            ..RenderOptions::default()
        };
        let svg = render_svg(&reference_layout(), &options);
        assert!(!svg.contains("m x "));
    }

    #[test]
    fn test_names_are_escaped() {
        let layout = Layout {
            rooms: vec![RoomInstance::new("Tom & Jerry's <den>", 0.0, 0.0, RoomSize::new(3.0, 3.0))],
        };
        let svg = render_svg(&layout, &RenderOptions::default());
        assert!(svg.contains("Tom &amp; Jerry&apos;s &lt;den&gt;"));
    }

    #[test]
    fn test_empty_layout_renders_empty_document() {
        let svg = render_svg(&Layout::default(), &RenderOptions::default());
        assert!(!svg.contains("<rect"));
        assert!(svg.contains(r#"width="20" height="20""#));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("living_room"), "Living Room");
        assert_eq!(display_label("Bedroom 1"), "Bedroom 1");
        assert_eq!(display_label("dining"), "Dining");
    }

    #[test]
    fn test_num_trims_float_noise() {
        assert_eq!(num(0.1 + 0.2), "0.3");
        assert_eq!(num(100.0), "100");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(2.5), "2.5");
    }
}

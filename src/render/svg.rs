//! Standalone SVG export.
//!
//! The document has no external references, so it can be saved as a file,
//! copied as text or embedded through a data URI.

use crate::render::scene::{Element, Group, Layer, Line, Paint, Rect, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize `scene` as a complete SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let width = fmt_num(scene.width);
    let height = fmt_num(scene.height);
    let mut out = format!(
        r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_NS, width, height, width, height
    );
    out.push('\n');
    for layer in &scene.layers {
        write_layer(&mut out, layer);
    }
    out.push_str("</svg>\n");
    out
}

/// `data:` URI for the given SVG text.
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(svg))
}

fn write_layer(out: &mut String, layer: &Layer) {
    out.push_str(&format!(r#"  <g class="{}">"#, layer.kind.class()));
    out.push('\n');
    for element in &layer.elements {
        write_element(out, element, 2);
    }
    out.push_str("  </g>\n");
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    match element {
        Element::Rect(rect) => {
            out.push_str(&indent);
            write_rect(out, rect);
        }
        Element::Line(line) => {
            out.push_str(&indent);
            write_line(out, line);
        }
        Element::Group(group) => write_group(out, group, depth),
    }
    out.push('\n');
}

fn write_rect(out: &mut String, rect: &Rect) {
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height)
    ));
    if let Some(radius) = rect.corner_radius {
        let radius = fmt_num(radius);
        out.push_str(&format!(r#" rx="{}" ry="{}""#, radius, radius));
    }
    write_paint(out, &rect.paint);
    out.push_str(&format!(r#" class="{}""#, escape_attr(&rect.class)));
    if let Some(cell) = rect.owner {
        out.push_str(&format!(r#" data-row="{}" data-col="{}""#, cell.row, cell.col));
        if rect.interactive {
            out.push_str(&format!(
                r#" tabindex="0" role="button" aria-label="Square at row {}, column {}""#,
                cell.row + 1,
                cell.col + 1
            ));
        }
    }
    if !rect.interactive {
        out.push_str(r#" pointer-events="none""#);
    }
    out.push_str("/>");
}

fn write_line(out: &mut String, line: &Line) {
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2)
    ));
    write_paint(out, &line.paint);
    if line.round_cap {
        out.push_str(r#" stroke-linecap="round""#);
    }
    out.push_str("/>");
}

fn write_group(out: &mut String, group: &Group, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(r#"{}<g class="{}""#, indent, escape_attr(&group.class)));
    if let Some(cell) = group.owner {
        out.push_str(&format!(r#" data-row="{}" data-col="{}""#, cell.row, cell.col));
    }
    out.push_str(" pointer-events=\"none\">\n");
    for child in &group.children {
        write_element(out, child, depth + 1);
    }
    out.push_str(&format!("{}</g>", indent));
}

fn write_paint(out: &mut String, paint: &Paint) {
    match &paint.fill {
        Some(fill) => out.push_str(&format!(r#" fill="{}""#, escape_attr(fill))),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &paint.stroke {
        out.push_str(&format!(r#" stroke="{}""#, escape_attr(stroke)));
    }
    if let Some(width) = paint.stroke_width {
        out.push_str(&format!(r#" stroke-width="{}""#, width));
    }
    if let Some(opacity) = paint.opacity {
        out.push_str(&format!(r#" opacity="{}""#, fmt_num(opacity)));
    }
}

/// Integers without a trailing `.0`, everything else with at most two decimals.
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

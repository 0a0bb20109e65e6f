//! SVG emission for a computed [`SchematicLayout`].
//!
//! The output is deterministic: rendering the same layout twice yields identical bytes.

use crate::model::{BusLayout, KeyUnitLayout, SchematicLayout};
use std::fmt::Write as _;

const STROKE: &str = "black";
const STROKE_WIDTH: f64 = 1.5;
const BUS_STROKE_WIDTH: f64 = 2.0;
const TAP_STROKE_WIDTH: f64 = 1.2;
const FONT_SIZE: u32 = 10;
const BUS_FONT_SIZE: u32 = 11;
const TAP_DOT_RADIUS: &str = "2.5";
const TERMINAL_DOT_RADIUS: &str = "2";

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Document `<title>`; defaults to `"<N>-Key Organ Switch Matrix Schematic"`.
    pub title: Option<String>,
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Integral-looking numbers (`20`, `255`), used for layout constants and vertical positions.
fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

/// Always carries a fractional part (`45.0`, `2.0`), used for positions derived from key
/// centers and for stroke widths.
fn fmt_decimal(v: f64) -> String {
    if !v.is_finite() {
        return "0.0".to_string();
    }
    format!("{v:?}")
}

fn render_bus(out: &mut String, bus: &BusLayout) {
    let _ = writeln!(
        out,
        r#"    <line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{color}" stroke-width="{sw}"/>"#,
        x1 = fmt(bus.x1),
        x2 = fmt_decimal(bus.x2),
        y = fmt(bus.y),
        color = bus.color,
        sw = fmt_decimal(BUS_STROKE_WIDTH),
    );
    let _ = writeln!(
        out,
        r#"    <text x="{x}" y="{y}" text-anchor="end" font-family="monospace" font-size="{BUS_FONT_SIZE}" fill="{color}" font-weight="bold">{label}</text>"#,
        x = fmt(bus.label_x),
        y = fmt(bus.label_y),
        color = bus.color,
        label = escape_xml(&bus.label),
    );
}

fn render_vertical(out: &mut String, x: &str, y1: f64, y2: f64, color: &str, width: f64) {
    let _ = writeln!(
        out,
        r#"    <line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="{sw}"/>"#,
        y1 = fmt(y1),
        y2 = fmt(y2),
        sw = fmt_decimal(width),
    );
}

fn render_dot(out: &mut String, x: &str, y: f64, r: &str, fill: &str) {
    let _ = writeln!(
        out,
        r#"    <circle cx="{x}" cy="{y}" r="{r}" fill="{fill}"/>"#,
        y = fmt(y),
    );
}

fn render_key_unit(out: &mut String, unit: &KeyUnitLayout) {
    let name = escape_xml(&unit.note);
    let x = fmt_decimal(unit.cx);
    let sw = fmt_decimal(STROKE_WIDTH);

    let _ = writeln!(
        out,
        r#"  <g id="key-{n}-{name}" inkscape:label="{name}">"#,
        n = unit.index + 1,
    );
    let _ = writeln!(
        out,
        r#"    <text x="{x}" y="{y}" text-anchor="middle" font-family="monospace" font-size="{FONT_SIZE}" fill="{STROKE}">{name}</text>"#,
        y = fmt(unit.label_y),
    );

    // Input tap: dot on the bus, then down into the unit.
    render_dot(
        out,
        &x,
        unit.input_tap.y1,
        TAP_DOT_RADIUS,
        &unit.input_color,
    );
    render_vertical(
        out,
        &x,
        unit.input_tap.y1,
        unit.input_tap.y2,
        &unit.input_color,
        TAP_STROKE_WIDTH,
    );
    render_vertical(
        out,
        &x,
        unit.wire_in.y1,
        unit.wire_in.y2,
        &unit.input_color,
        STROKE_WIDTH,
    );

    // Switch, drawn open.
    render_dot(out, &x, unit.switch.top_y, TERMINAL_DOT_RADIUS, STROKE);
    render_dot(out, &x, unit.switch.bottom_y, TERMINAL_DOT_RADIUS, STROKE);
    let _ = writeln!(
        out,
        r#"    <line x1="{x}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{STROKE}" stroke-width="{sw}"/>"#,
        y1 = fmt(unit.switch.top_y),
        x2 = fmt_decimal(unit.switch.arm_x),
        y2 = fmt(unit.switch.arm_y),
    );

    render_vertical(
        out,
        &x,
        unit.wire_mid.y1,
        unit.wire_mid.y2,
        STROKE,
        STROKE_WIDTH,
    );

    // Diode: apex at the cathode bar.
    let d = &unit.diode;
    let _ = writeln!(
        out,
        r#"    <polygon points="{x},{bar} {left},{top} {right},{top}" fill="none" stroke="{STROKE}" stroke-width="{sw}"/>"#,
        bar = fmt(d.bar_y),
        top = fmt(d.top_y),
        left = fmt_decimal(d.left_x),
        right = fmt_decimal(d.right_x),
    );
    let _ = writeln!(
        out,
        r#"    <line x1="{left}" y1="{bar}" x2="{right}" y2="{bar}" stroke="{STROKE}" stroke-width="{sw}"/>"#,
        bar = fmt(d.bar_y),
        left = fmt_decimal(d.left_x),
        right = fmt_decimal(d.right_x),
    );

    render_vertical(
        out,
        &x,
        unit.output_tap.y1,
        unit.output_tap.y2,
        &unit.output_color,
        TAP_STROKE_WIDTH,
    );
    render_dot(
        out,
        &x,
        unit.output_tap.y2,
        TAP_DOT_RADIUS,
        &unit.output_color,
    );

    out.push_str("  </g>\n");
}

pub fn render_schematic_svg(layout: &SchematicLayout, options: &SvgRenderOptions) -> String {
    let w = fmt(layout.width);
    let h = fmt(layout.height);
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("{}-Key Organ Switch Matrix Schematic", layout.key_count));

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
    );
    let _ = writeln!(&mut out, "  <title>{}</title>", escape_xml(&title));
    let _ = writeln!(
        &mut out,
        r#"  <rect width="{w}" height="{h}" fill="white"/>"#
    );

    out.push_str(r#"  <g id="input-bus-lines" inkscape:label="Input Bus Lines">"#);
    out.push('\n');
    for bus in &layout.input_buses {
        render_bus(&mut out, bus);
    }
    out.push_str("  </g>\n");

    for unit in &layout.units {
        render_key_unit(&mut out, unit);
    }

    out.push_str(r#"  <g id="output-bus-lines" inkscape:label="Output Bus Lines">"#);
    out.push('\n');
    for bus in &layout.output_buses {
        render_bus(&mut out, bus);
    }
    out.push_str("  </g>\n");

    out.push_str("</svg>");
    out
}

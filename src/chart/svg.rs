//! Minimal SVG canvas used by the chart builders.
//!
//! One user unit is 1/100 inch, so an 8×4 inch figure is 800×400 units and
//! the rasterizer scales by `dpi / 100`.

use std::fmt::Write;

pub const UNITS_PER_INCH: f64 = 100.0;

const FONT_FAMILY: &str = "Helvetica, Arial, 'DejaVu Sans', 'Liberation Sans', sans-serif";

#[derive(Clone, Copy)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

pub struct Svg {
    buf: String,
    width: f64,
    height: f64,
}

impl Svg {
    /// New canvas with an opaque white background.
    pub fn new(width: f64, height: f64) -> Self {
        let mut buf = String::new();
        let _ = writeln!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(
            buf,
            r##"<rect x="0" y="0" width="{width}" height="{height}" fill="#ffffff"/>"##
        );
        Self { buf, width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = writeln!(
            self.buf,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}"/>"#
        );
    }

    pub fn frame(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let _ = writeln!(
            self.buf,
            r##"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="none" stroke="#000000" stroke-width="1"/>"##
        );
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
        let _ = writeln!(
            self.buf,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{stroke}" stroke-width="{width}"/>"#,
            from.0, from.1, to.0, to.1
        );
    }

    pub fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
        let _ = writeln!(
            self.buf,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{stroke}" stroke-width="{width}" stroke-dasharray="6,4"/>"#,
            from.0, from.1, to.0, to.1
        );
    }

    pub fn grid_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let _ = writeln!(
            self.buf,
            r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#b0b0b0" stroke-width="0.8" stroke-opacity="0.3"/>"##,
            from.0, from.1, to.0, to.1
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.buf,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}"/>"#
        );
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, content: &str) {
        let _ = writeln!(
            self.buf,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{size}" text-anchor="{}" fill="black">{}</text>"#,
            anchor.as_str(),
            escape(content)
        );
    }

    /// Text rotated 90° counter-clockwise around its anchor point.
    pub fn vertical_text(&mut self, x: f64, y: f64, size: f64, content: &str) {
        let _ = writeln!(
            self.buf,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{size}" text-anchor="middle" fill="black" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            escape(content)
        );
    }

    pub fn finish(mut self) -> String {
        let _ = writeln!(self.buf, "</svg>");
        self.buf
    }
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Round tick step (1, 2, 2.5 or 5 times a power of ten).
fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let raw = span / max_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;

    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions covering `[min, max]`, plus the step used.
pub fn ticks(min: f64, max: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return (vec![min], 1.0);
    }

    let step = nice_step(span, max_ticks);
    let eps = step * 1e-9;
    let mut v = (min / step).ceil() * step;
    let mut out = Vec::new();

    while v <= max + eps {
        out.push(v);
        v += step;
    }
    (out, step)
}

/// Label text with just enough decimals for the tick step.
pub fn tick_label(v: f64, step: f64) -> String {
    let mut decimals = (-step.log10().floor()).max(0.0) as usize;
    if ((step / 10f64.powi(-(decimals as i32))) - 2.5).abs() < 1e-9 {
        decimals += 1;
    }
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    format!("{v:.decimals$}")
}

//! Overview charts: FL bar chart and site location scatter.
//!
//! Charts are built as SVG and rasterized to PNG at a fixed DPI. Rendering
//! reads the table only; the same table always yields the same bytes.

mod raster;
pub mod svg;

use crate::core::classifier::SAFE_FROM;
use crate::errors::AppResult;
use crate::models::SiteTable;
use raster::svg_to_png;
use svg::{Anchor, Svg, UNITS_PER_INCH, tick_label, ticks};

pub const DEFAULT_DPI: u32 = 200;

pub const ALERT_COLOR: &str = "#d62728";
pub const SAFE_COLOR: &str = "#2ca02c";
pub const POINT_COLOR: &str = "#1f77b4";
pub const NO_COORDINATES_TEXT: &str = "No coordinates provided";

pub const FL_BAR_FILE: &str = "fl_bar.png";
pub const LOCATIONS_FILE: &str = "locations.png";

/// A rendered chart: PNG bytes plus pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ChartImage {
    /// Height / width, used to size the image on the page.
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }
}

// Plot-area margins in canvas units (1/100 inch).
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;

const TITLE_SIZE: f64 = 17.0;
const LABEL_SIZE: f64 = 14.0;
const TICK_SIZE: f64 = 12.0;

struct PlotArea {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl PlotArea {
    fn inside(svg: &Svg) -> Self {
        Self {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            w: svg.width() - MARGIN_LEFT - MARGIN_RIGHT,
            h: svg.height() - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn bottom(&self) -> f64 {
        self.y + self.h
    }

    fn right(&self) -> f64 {
        self.x + self.w
    }
}

fn decorate(svg: &mut Svg, area: &PlotArea, title: &str, x_label: &str, y_label: &str) {
    let h = svg.height();
    svg.frame(area.x, area.y, area.w, area.h);
    svg.text(area.x + area.w / 2.0, MARGIN_TOP - 14.0, TITLE_SIZE, Anchor::Middle, title);
    svg.text(area.x + area.w / 2.0, h - 12.0, LABEL_SIZE, Anchor::Middle, x_label);
    svg.vertical_text(18.0, area.y + area.h / 2.0, LABEL_SIZE, y_label);
}

/// Chart builder bound to an output resolution.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer {
    dpi: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

impl ChartRenderer {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// FL per site, red below 1.0 and green from 1.0 up, with a dashed
    /// reference line at 1.0.
    pub fn fl_bar(&self, table: &SiteTable) -> AppResult<ChartImage> {
        svg_to_png(&fl_bar_svg(table), self.dpi)
    }

    /// Site coordinates as a labelled scatter, or a text-only placeholder
    /// when the table has no coordinate columns.
    pub fn location_scatter(&self, table: &SiteTable) -> AppResult<ChartImage> {
        svg_to_png(&location_svg(table), self.dpi)
    }
}

pub fn render_fl_bar(table: &SiteTable) -> AppResult<ChartImage> {
    ChartRenderer::default().fl_bar(table)
}

pub fn render_location_scatter(table: &SiteTable) -> AppResult<ChartImage> {
    ChartRenderer::default().location_scatter(table)
}

/// Upper y bound: at least 1.2, otherwise tallest bar plus 0.1.
pub fn fl_axis_max(table: &SiteTable) -> f64 {
    table
        .records()
        .iter()
        .filter_map(|r| r.fl())
        .filter(|v| v.is_finite())
        .fold(1.2, |acc, v| acc.max(v + 0.1))
}

/// SVG source of the FL bar chart.
pub fn fl_bar_svg(table: &SiteTable) -> String {
    let mut svg = Svg::new(8.0 * UNITS_PER_INCH, 4.0 * UNITS_PER_INCH);
    let area = PlotArea::inside(&svg);

    let y_max = fl_axis_max(table);
    let to_y = |v: f64| area.bottom() - (v.clamp(0.0, y_max) / y_max) * area.h;

    let (y_ticks, step) = ticks(0.0, y_max, 6);
    for t in &y_ticks {
        let y = to_y(*t);
        svg.line((area.x - 5.0, y), (area.x, y), "#000000", 1.0);
        svg.text(area.x - 8.0, y + 4.0, TICK_SIZE, Anchor::End, &tick_label(*t, step));
    }

    let records = table.records();
    let slot = area.w / records.len().max(1) as f64;
    let bar_w = slot * 0.8;

    for (i, rec) in records.iter().enumerate() {
        let center = area.x + slot * (i as f64 + 0.5);

        if let Some(fl) = rec.fl().filter(|v| v.is_finite()) {
            let color = if fl < SAFE_FROM { ALERT_COLOR } else { SAFE_COLOR };
            let top = to_y(fl);
            svg.rect(center - bar_w / 2.0, top, bar_w, area.bottom() - top, color);
        }

        svg.line((center, area.bottom()), (center, area.bottom() + 5.0), "#000000", 1.0);
        svg.text(center, area.bottom() + 20.0, TICK_SIZE, Anchor::Middle, rec.id());
    }

    let ref_y = to_y(SAFE_FROM);
    svg.dashed_line((area.x, ref_y), (area.right(), ref_y), "#808080", 1.0);

    decorate(&mut svg, &area, "FL value by site", "Site ID", "FL");
    svg.finish()
}

/// SVG source of the location chart (scatter or placeholder).
pub fn location_svg(table: &SiteTable) -> String {
    if table.has_coordinates() {
        scatter_svg(table)
    } else {
        placeholder_svg()
    }
}

/// Data bounds padded by 5% on each side; degenerate spans get a fixed pad.
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (lo.abs() * 0.001).max(0.001)
    };
    (lo - pad, hi + pad)
}

fn scatter_svg(table: &SiteTable) -> String {
    let mut svg = Svg::new(6.0 * UNITS_PER_INCH, 6.0 * UNITS_PER_INCH);
    let area = PlotArea::inside(&svg);

    let points: Vec<(&str, f64, f64)> = table
        .records()
        .iter()
        .filter_map(|r| match (r.lon(), r.lat()) {
            (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite() => {
                Some((r.id(), lon, lat))
            }
            _ => None,
        })
        .collect();

    let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.1));
    let (y_min, y_max) = padded_bounds(points.iter().map(|p| p.2));
    let to_x = |v: f64| area.x + (v - x_min) / (x_max - x_min) * area.w;
    let to_y = |v: f64| area.bottom() - (v - y_min) / (y_max - y_min) * area.h;

    let (x_ticks, x_step) = ticks(x_min, x_max, 4);
    for t in &x_ticks {
        let x = to_x(*t);
        svg.grid_line((x, area.y), (x, area.bottom()));
        svg.line((x, area.bottom()), (x, area.bottom() + 5.0), "#000000", 1.0);
        svg.text(x, area.bottom() + 20.0, TICK_SIZE, Anchor::Middle, &tick_label(*t, x_step));
    }

    let (y_ticks, y_step) = ticks(y_min, y_max, 6);
    for t in &y_ticks {
        let y = to_y(*t);
        svg.grid_line((area.x, y), (area.right(), y));
        svg.line((area.x - 5.0, y), (area.x, y), "#000000", 1.0);
        svg.text(area.x - 8.0, y + 4.0, TICK_SIZE, Anchor::End, &tick_label(*t, y_step));
    }

    for (id, lon, lat) in &points {
        let (x, y) = (to_x(*lon), to_y(*lat));
        svg.circle(x, y, 4.0, POINT_COLOR);
        svg.text(x + 4.0, y - 4.0, 11.0, Anchor::Start, id);
    }

    decorate(&mut svg, &area, "Site locations (scatter)", "Longitude", "Latitude");
    svg.finish()
}

fn placeholder_svg() -> String {
    let mut svg = Svg::new(6.0 * UNITS_PER_INCH, 4.0 * UNITS_PER_INCH);
    let (w, h) = (svg.width(), svg.height());
    svg.text(w / 2.0, h / 2.0 + 7.0, 20.0, Anchor::Middle, NO_COORDINATES_TEXT);
    svg.finish()
}

//! Booklet assembly: cover, table of contents, overview charts and one
//! detail page per site, in that order.

use crate::chart::{ChartImage, ChartRenderer};
use crate::errors::{AppError, AppResult};
use crate::export::pdf::{Align, DocInfo, FontStyle, MM, PdfManager};
use crate::models::{SiteRecord, SiteTable};
use crate::utils::formatting::format_optional;

pub const REPORT_TITLE: &str = "Liquefaction Risk Evaluation Report";

/// Front-matter values shown on the cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletMeta {
    pub project: String,
    pub author: String,
    /// Free text, not validated as a calendar date.
    pub date: String,
}

/// A finished booklet: the PDF bytes and the number of pages in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booklet {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// One TOC line per record, in table order.
pub fn toc_lines(table: &SiteTable) -> Vec<String> {
    table
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. {} - {} - FL={}",
                i + 1,
                r.id(),
                r.ground_type(),
                format_optional(r.fl())
            )
        })
        .collect()
}

/// Build the booklet with charts at the default resolution.
pub fn build_booklet(table: &SiteTable, meta: &BookletMeta) -> AppResult<Booklet> {
    build_booklet_with(table, meta, &ChartRenderer::default())
}

/// Build the booklet, rendering both charts with `renderer`.
///
/// An empty table is rejected before any chart or page is produced.
pub fn build_booklet_with(
    table: &SiteTable,
    meta: &BookletMeta,
    renderer: &ChartRenderer,
) -> AppResult<Booklet> {
    if table.is_empty() {
        return Err(AppError::EmptyTable);
    }

    let bar = renderer.fl_bar(table)?;
    let locations = renderer.location_scatter(table)?;

    let mut pdf = PdfManager::new();

    add_cover(&mut pdf, meta);
    add_toc(&mut pdf, table);
    add_overview_charts(&mut pdf, &bar, &locations)?;
    add_site_pages(&mut pdf, table);

    let info = DocInfo {
        title: REPORT_TITLE,
        author: &meta.author,
        subject: &meta.project,
    };
    let page_count = pdf.page_count();
    Ok(Booklet {
        bytes: pdf.finish(&info),
        page_count,
    })
}

fn add_cover(pdf: &mut PdfManager, meta: &BookletMeta) {
    pdf.add_page();
    pdf.set_font(FontStyle::Bold, 24.0);
    pdf.ln(40.0 * MM);
    pdf.cell(12.0 * MM, REPORT_TITLE, Align::Center);

    pdf.set_font(FontStyle::Regular, 16.0);
    pdf.ln(4.0 * MM);
    pdf.cell(10.0 * MM, &meta.project, Align::Center);
    pdf.ln(10.0 * MM);

    pdf.set_font(FontStyle::Regular, 12.0);
    pdf.cell(8.0 * MM, &format!("Prepared by: {}", meta.author), Align::Center);
    pdf.cell(8.0 * MM, &format!("Date: {}", meta.date), Align::Center);
}

fn add_toc(pdf: &mut PdfManager, table: &SiteTable) {
    pdf.add_page();
    pdf.bookmark("Table of Contents");
    pdf.set_font(FontStyle::Bold, 16.0);
    pdf.cell(10.0 * MM, "Table of Contents", Align::Left);
    pdf.ln(2.0 * MM);

    pdf.set_font(FontStyle::Regular, 12.0);
    for line in toc_lines(table) {
        pdf.cell(8.0 * MM, &line, Align::Left);
    }
}

fn add_overview_charts(
    pdf: &mut PdfManager,
    bar: &ChartImage,
    locations: &ChartImage,
) -> AppResult<()> {
    pdf.add_page();
    pdf.bookmark("Overview");
    pdf.set_font(FontStyle::Bold, 14.0);
    pdf.cell(8.0 * MM, "Overview", Align::Left);
    pdf.ln(2.0 * MM);

    let top = pdf.get_y();
    pdf.image("Im1", bar, 10.0 * MM, top, 90.0 * MM)?;
    pdf.image("Im2", locations, 110.0 * MM, top, 90.0 * MM)?;
    pdf.ln(100.0 * MM);
    Ok(())
}

fn add_site_page(pdf: &mut PdfManager, rec: &SiteRecord, has_coordinates: bool) {
    pdf.add_page();
    pdf.bookmark(&format!("Site {}", rec.id()));

    pdf.set_font(FontStyle::Bold, 14.0);
    pdf.cell(8.0 * MM, &format!("Site ID: {}", rec.id()), Align::Left);

    pdf.set_font(FontStyle::Regular, 12.0);
    if has_coordinates {
        let coords = format!(
            "Coordinates: {}, {}",
            format_optional(rec.lat()),
            format_optional(rec.lon())
        );
        pdf.cell(7.0 * MM, &coords, Align::Left);
    }
    pdf.cell(7.0 * MM, &format!("Ground Type: {}", rec.ground_type()), Align::Left);
    pdf.cell(
        7.0 * MM,
        &format!("Corrected FL Value: {}", format_optional(rec.fl())),
        Align::Left,
    );
    pdf.cell(7.0 * MM, &format!("Risk Level: {}", rec.risk_level()), Align::Left);
    pdf.multi_cell(
        7.0 * MM,
        &format!("Design Recommendation: {}", rec.suggestion()),
    );
    pdf.ln(2.0 * MM);

    if let Some(note) = rec.note() {
        pdf.set_font(FontStyle::Italic, 11.0);
        pdf.multi_cell(6.0 * MM, &format!("Remarks: {note}"));
    }
}

fn add_site_pages(pdf: &mut PdfManager, table: &SiteTable) {
    for rec in table.records() {
        add_site_page(pdf, rec, table.has_coordinates());
    }
}

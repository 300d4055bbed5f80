//! Flowing-layout PDF writer on top of `pdf-writer`.
//!
//! Pages are A4 portrait. Text is placed in fixed-height lines from a top-down
//! cursor; a line that would cross the bottom margin starts a new page. Every
//! page gets a centered "Page N" footer when it is closed.

use crate::chart::ChartImage;
use crate::errors::{AppError, AppResult};
use crate::export::metrics::{encode_win_ansi, text_width};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};
use std::io::{Cursor, Write};
use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

const A4_WIDTH: f32 = 210.0 * MM;
const A4_HEIGHT: f32 = 297.0 * MM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    fn resource(self) -> Name<'static> {
        match self {
            FontStyle::Regular => Name(b"F1"),
            FontStyle::Bold => Name(b"F2"),
            FontStyle::Italic => Name(b"F3"),
        }
    }

    fn base_font(self) -> Name<'static> {
        match self {
            FontStyle::Regular => Name(b"Helvetica"),
            FontStyle::Bold => Name(b"Helvetica-Bold"),
            FontStyle::Italic => Name(b"Helvetica-Oblique"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Document information dictionary values.
pub struct DocInfo<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub subject: &'a str,
}

struct PageBuf {
    page_id: Ref,
    content_id: Ref,
    content: Content,
}

struct ImageRes {
    name: String,
    id: Ref,
}

struct Bookmark {
    title: String,
    page: usize,
    top: f32,
}

/// Word fragment measured in points for first-fit wrapping.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    width: f64,
    space: f64,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.space
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    info_id: Ref,
    font_ids: [(FontStyle, Ref); 3],

    pages: Vec<PageBuf>,
    page_open: bool,
    images: Vec<ImageRes>,
    bookmarks: Vec<Bookmark>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    bottom_margin: f32,

    /// Distance of the cursor from the top edge of the page.
    y: f32,
    style: FontStyle,
    font_size: f32,

    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // Fixed object ids; pages, streams and images are allocated on demand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let info_id = Ref::new(3);
        let font_ids = [
            (FontStyle::Regular, Ref::new(4)),
            (FontStyle::Bold, Ref::new(5)),
            (FontStyle::Italic, Ref::new(6)),
        ];
        let next_id = 7;

        for (style, id) in font_ids {
            pdf.type1_font(id)
                .base_font(style.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        Self {
            pdf,
            catalog_id,
            pages_id,
            info_id,
            font_ids,

            pages: Vec::new(),
            page_open: false,
            images: Vec::new(),
            bookmarks: Vec::new(),

            page_w: A4_WIDTH,
            page_h: A4_HEIGHT,
            margin: 10.0 * MM,
            bottom_margin: 15.0 * MM,

            y: 10.0 * MM,
            style: FontStyle::Regular,
            font_size: 12.0,

            next_id,
        }
    }

    /// Allocate the next free object id
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Width available between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn get_y(&self) -> f32 {
        self.y
    }

    pub fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.font_size = size;
    }

    /// Close the current page (if any) and start a new one.
    pub fn add_page(&mut self) {
        self.close_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.pages.push(PageBuf {
            page_id,
            content_id,
            content: Content::new(),
        });
        self.page_open = true;
        self.y = self.margin;
    }

    fn close_page(&mut self) {
        if self.page_open {
            self.draw_footer();
            self.page_open = false;
        }
    }

    fn content(&mut self) -> &mut Content {
        if !self.page_open {
            self.add_page();
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last].content
    }

    fn draw_text(&mut self, x: f32, baseline_from_top: f32, text: &str) {
        let font = self.style.resource();
        let size = self.font_size;
        let y = self.page_h - baseline_from_top;
        let bytes = encode_win_ansi(text);

        let content = self.content();
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_footer(&mut self) {
        let label = format!("Page {}", self.pages.len());
        let size = 9.0;
        let x = (self.page_w - text_width(&label, FontStyle::Regular, size)) / 2.0;
        let cell_top = self.page_h - 15.0 * MM;
        let y = self.page_h - (cell_top + 5.0 * MM + size * 0.3);
        let bytes = encode_win_ansi(&label);

        let content = self.content();
        content.save_state();
        content.set_fill_gray(120.0 / 255.0);
        content.begin_text();
        content.set_font(FontStyle::Regular.resource(), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
        content.restore_state();
    }

    /// Start a new page when a block of height `h` would cross the bottom margin.
    fn break_if_needed(&mut self, h: f32) {
        if !self.page_open || self.y + h > self.page_h - self.bottom_margin {
            self.add_page();
        }
    }

    /// One line of text in a cell of height `h` spanning the content width;
    /// moves the cursor to the next line.
    pub fn cell(&mut self, h: f32, text: &str, align: Align) {
        self.break_if_needed(h);

        let x = match align {
            Align::Left => self.margin,
            Align::Center => {
                let w = text_width(text, self.style, self.font_size);
                self.margin + (self.content_width() - w).max(0.0) / 2.0
            }
        };
        let baseline = self.y + h / 2.0 + self.font_size * 0.3;
        self.draw_text(x, baseline, text);
        self.y += h;
    }

    /// Text wrapped to the content width, one cell of height `h` per line.
    pub fn multi_cell(&mut self, h: f32, text: &str) {
        for line in self.wrap(text) {
            self.cell(h, &line, Align::Left);
        }
    }

    /// Split `text` into lines that fit the content width with the current font.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let max = self.content_width() as f64;
        let space = text_width(" ", self.style, self.font_size) as f64;
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let words: Vec<Word> = paragraph
                .split_whitespace()
                .flat_map(|w| self.split_to_fit(w, max))
                .map(|w| Word {
                    text: w,
                    width: text_width(w, self.style, self.font_size) as f64,
                    space,
                })
                .collect();

            if words.is_empty() {
                lines.push(String::new());
                continue;
            }

            for line in wrap_first_fit(&words, &[max]) {
                let joined: Vec<&str> = line.iter().map(|w| w.text).collect();
                lines.push(joined.join(" "));
            }
        }
        lines
    }

    /// Break a word wider than `max` into character runs that each fit.
    fn split_to_fit<'a>(&self, word: &'a str, max: f64) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut start = 0;
        let mut width = 0.0;

        for (i, c) in word.char_indices() {
            let w = text_width(&word[i..i + c.len_utf8()], self.style, self.font_size) as f64;
            if width + w > max && i > start {
                parts.push(&word[start..i]);
                start = i;
                width = 0.0;
            }
            width += w;
        }
        parts.push(&word[start..]);
        parts
    }

    /// Vertical gap without a page-break check.
    pub fn ln(&mut self, h: f32) {
        self.y += h;
    }

    /// Place a chart image with its top-left corner at (`x`, `top`) and width `w`;
    /// the height follows the image aspect ratio.
    pub fn image(&mut self, key: &str, img: &ChartImage, x: f32, top: f32, w: f32) -> AppResult<()> {
        if !self.images.iter().any(|i| i.name == key) {
            self.register_image(key, img)?;
        }
        let name = key.as_bytes();

        let h = w * img.aspect();
        let bottom = self.page_h - top - h;

        let content = self.content();
        content.save_state();
        content.transform([w, 0.0, 0.0, h, x, bottom]);
        content.x_object(Name(name));
        content.restore_state();
        Ok(())
    }

    fn register_image(&mut self, key: &str, img: &ChartImage) -> AppResult<()> {
        let (width, height, rgb) = decode_png_rgb(&img.png)?;
        let data = deflate(&rgb)?;

        let id = self.fresh_ref();
        let mut image = self.pdf.image_xobject(id, &data);
        image.filter(Filter::FlateDecode);
        image.width(width as i32);
        image.height(height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        drop(image);

        self.images.push(ImageRes {
            name: key.to_string(),
            id,
        });
        Ok(())
    }

    /// Outline entry pointing at the current cursor position.
    pub fn bookmark(&mut self, title: &str) {
        if !self.page_open {
            self.add_page();
        }
        self.bookmarks.push(Bookmark {
            title: title.to_string(),
            page: self.pages.len() - 1,
            top: self.y,
        });
    }

    fn write_outline(&mut self) -> Option<Ref> {
        if self.bookmarks.is_empty() {
            return None;
        }

        let outline_id = self.fresh_ref();
        let item_ids: Vec<Ref> = (0..self.bookmarks.len()).map(|_| self.fresh_ref()).collect();
        let first = item_ids[0];
        let last = item_ids[item_ids.len() - 1];

        self.pdf
            .outline(outline_id)
            .first(first)
            .last(last)
            .count(item_ids.len() as i32);

        for (i, mark) in self.bookmarks.iter().enumerate() {
            let mut item = self.pdf.outline_item(item_ids[i]);
            item.parent(outline_id).title(TextStr(&mark.title));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if i + 1 < item_ids.len() {
                item.next(item_ids[i + 1]);
            }
            item.dest()
                .page(self.pages[mark.page].page_id)
                .xyz(0.0, self.page_h - mark.top, None);
        }

        Some(outline_id)
    }

    /// Close the last page and serialize the whole document.
    pub fn finish(mut self, info: &DocInfo) -> Vec<u8> {
        self.close_page();

        let outline_id = self.write_outline();

        let page_refs: Vec<Ref> = self.pages.iter().map(|p| p.page_id).collect();
        for buf in std::mem::take(&mut self.pages) {
            {
                let mut page = self.pdf.page(buf.page_id);
                page.parent(self.pages_id)
                    .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                    .contents(buf.content_id);

                let mut resources = page.resources();
                {
                    let mut fonts = resources.fonts();
                    for (style, id) in self.font_ids {
                        fonts.pair(style.resource(), id);
                    }
                }
                let mut x_objects = resources.x_objects();
                for img in &self.images {
                    x_objects.pair(Name(img.name.as_bytes()), img.id);
                }
            }
            self.pdf.stream(buf.content_id, &buf.content.finish());
        }

        self.pdf
            .pages(self.pages_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        {
            let mut catalog = self.pdf.catalog(self.catalog_id);
            catalog.pages(self.pages_id);
            if let Some(id) = outline_id {
                catalog.outlines(id);
            }
        }

        self.pdf
            .document_info(self.info_id)
            .title(TextStr(info.title))
            .author(TextStr(info.author))
            .subject(TextStr(info.subject))
            .creator(TextStr(concat!("liqbook ", env!("CARGO_PKG_VERSION"))));

        self.pdf.finish()
    }
}

/// Decode PNG bytes into packed 8-bit RGB.
fn decode_png_rgb(bytes: &[u8]) -> AppResult<(u32, u32, Vec<u8>)> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::Image(format!("PNG decode error: {e}")))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::Image(format!("PNG decode error: {e}")))?;
    let data = &buf[..frame.buffer_size()];

    let rgb = match frame.color_type {
        png::ColorType::Rgb => data.to_vec(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(AppError::Image("unexpanded indexed PNG".into()));
        }
    };

    Ok((frame.width, frame.height, rgb))
}

fn deflate(data: &[u8]) -> AppResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data)?;
    Ok(enc.finish()?)
}

use liqbook::export::metrics::text_width;
use liqbook::export::pdf::{FontStyle, PdfManager};

fn assert_lines_fit(pdf: &PdfManager, lines: &[String], style: FontStyle, size: f32) {
    for line in lines {
        let w = text_width(line, style, size);
        assert!(
            w <= pdf.content_width() + 1e-3,
            "line '{line}' is {w}pt wide, content width {}pt",
            pdf.content_width()
        );
    }
}

#[test]
fn test_overlong_word_is_broken_to_fit() {
    let mut pdf = PdfManager::new();
    pdf.set_font(FontStyle::Italic, 11.0);

    let lines = pdf.wrap(&format!("Remarks: {}", "x".repeat(200)));

    assert!(lines.len() > 1);
    assert_lines_fit(&pdf, &lines, FontStyle::Italic, 11.0);
    assert_eq!(lines.concat().matches('x').count(), 200);
    assert_eq!(lines[0], "Remarks:");
}

#[test]
fn test_wrapped_text_keeps_word_order() {
    let mut pdf = PdfManager::new();
    pdf.set_font(FontStyle::Regular, 12.0);

    let text = "Design Recommendation: Pile foundation + Ground improvement ".repeat(6);
    let lines = pdf.wrap(&text);

    assert!(lines.len() > 1);
    assert_lines_fit(&pdf, &lines, FontStyle::Regular, 12.0);
    assert_eq!(lines.join(" "), text.trim_end());
}

#[test]
fn test_non_ascii_word_is_broken_to_fit() {
    let mut pdf = PdfManager::new();
    pdf.set_font(FontStyle::Bold, 14.0);

    let lines = pdf.wrap(&"Ü".repeat(80));

    assert!(lines.len() > 1);
    assert_lines_fit(&pdf, &lines, FontStyle::Bold, 14.0);
    assert_eq!(lines.concat().chars().count(), 80);
}

#[test]
fn test_latin1_widths() {
    // AE ligature is a full em wide, u-umlaut matches the bold 'u'
    assert!((text_width("Æ", FontStyle::Regular, 10.0) - 10.0).abs() < 1e-4);
    assert!((text_width("ü", FontStyle::Bold, 10.0) - 6.11).abs() < 1e-4);
    assert_eq!(
        text_width("é", FontStyle::Regular, 12.0),
        text_width("e", FontStyle::Regular, 12.0)
    );
    assert_eq!(
        text_width("ñ", FontStyle::Italic, 12.0),
        text_width("n", FontStyle::Italic, 12.0)
    );
}

mod common;
use common::{SITES_NO_COORDS, SITES_WITH_COORDS, table_from};
use liqbook::chart::{
    ALERT_COLOR, ChartRenderer, NO_COORDINATES_TEXT, SAFE_COLOR, fl_axis_max, fl_bar_svg,
    location_svg, render_fl_bar, render_location_scatter,
};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_axis_max_has_headroom() {
    assert_eq!(fl_axis_max(&table_from(SITES_NO_COORDS)), 1.2);

    let tall = table_from("id,FL,groundType\nA,2.0,Medium\nB,0.3,Medium\n");
    assert!((fl_axis_max(&tall) - 2.1).abs() < 1e-9);
}

#[test]
fn test_bar_colors_follow_threshold() {
    let svg = fl_bar_svg(&table_from(SITES_WITH_COORDS));

    // B01 and B02 are below 1.0, B03 and B04 at or above
    assert_eq!(svg.matches(ALERT_COLOR).count(), 2);
    assert_eq!(svg.matches(SAFE_COLOR).count(), 2);
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains(">FL value by site<"));
}

#[test]
fn test_bar_labels_in_table_order() {
    let svg = fl_bar_svg(&table_from(SITES_WITH_COORDS));

    let positions: Vec<usize> = ["B01", "B02", "B03", "B04"]
        .iter()
        .map(|id| svg.find(&format!(">{id}<")).expect("label present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_missing_fl_draws_no_bar() {
    // C02 has no FL: only two bars
    let svg = fl_bar_svg(&table_from(SITES_NO_COORDS));
    assert_eq!(svg.matches(ALERT_COLOR).count(), 1);
    assert_eq!(svg.matches(SAFE_COLOR).count(), 1);
    assert!(svg.contains(">C02<"));
}

#[test]
fn test_placeholder_without_coordinates() {
    let svg = location_svg(&table_from(SITES_NO_COORDS));

    assert!(svg.contains(NO_COORDINATES_TEXT));
    assert!(!svg.contains("<line"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_scatter_with_coordinates() {
    let svg = location_svg(&table_from(SITES_WITH_COORDS));

    assert!(!svg.contains(NO_COORDINATES_TEXT));
    assert_eq!(svg.matches("<circle").count(), 4);
    assert!(svg.contains(">B03<"));
    assert!(svg.contains(">Longitude<"));
}

#[test]
fn test_png_output_size_and_signature() {
    let table = table_from(SITES_WITH_COORDS);

    let bar = render_fl_bar(&table).expect("bar chart");
    assert_eq!(&bar.png[..8], &PNG_SIGNATURE);
    assert_eq!((bar.width, bar.height), (1600, 800));

    let scatter = render_location_scatter(&table).expect("scatter");
    assert_eq!((scatter.width, scatter.height), (1200, 1200));

    let placeholder =
        render_location_scatter(&table_from(SITES_NO_COORDS)).expect("placeholder");
    assert_eq!((placeholder.width, placeholder.height), (1200, 800));
    assert_ne!(placeholder.png, scatter.png);
}

#[test]
fn test_rendering_is_deterministic() {
    let table = table_from(SITES_WITH_COORDS);
    let renderer = ChartRenderer::new(72);

    let a = renderer.fl_bar(&table).expect("first");
    let b = renderer.fl_bar(&table).expect("second");
    assert_eq!(a, b);
    assert_eq!((a.width, a.height), (576, 288));
}

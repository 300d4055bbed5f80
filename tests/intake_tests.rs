mod common;
use common::{SITES_NO_COORDS, SITES_WITH_COORDS, table_from};
use liqbook::core::intake::{load_csv, parse_number, sample_table};
use liqbook::models::RiskLevel;

#[test]
fn test_load_with_coordinates_and_notes() {
    let table = table_from(SITES_WITH_COORDS);

    assert_eq!(table.len(), 4);
    assert!(table.has_coordinates());

    let ids: Vec<&str> = table.records().iter().map(|r| r.id()).collect();
    assert_eq!(ids, ["B01", "B02", "B03", "B04"]);

    let b01 = &table.records()[0];
    assert_eq!(b01.fl(), Some(0.60));
    assert_eq!(b01.lat(), Some(35.70));
    assert_eq!(b01.lon(), Some(139.70));
    assert_eq!(b01.note(), Some("Near river bank"));
    assert_eq!(b01.risk_level(), RiskLevel::High);

    // empty and whitespace-only notes are absent
    assert_eq!(table.records()[1].note(), None);
    assert_eq!(table.records()[2].note(), None);
    assert_eq!(table.records()[2].suggestion(), "Raft foundation + Monitoring");
}

#[test]
fn test_unparseable_fl_becomes_missing() {
    let table = table_from(SITES_NO_COORDS);

    assert!(!table.has_coordinates());
    let c02 = &table.records()[1];
    assert_eq!(c02.fl(), None);
    assert_eq!(c02.risk_level(), RiskLevel::Unknown);
    assert_eq!(c02.suggestion(), "Review required");

    assert_eq!(table.records()[2].risk_level(), RiskLevel::Low);
}

#[test]
fn test_missing_required_columns_are_filled() {
    let table = table_from("id,note\nX1,hello\n");

    let rec = &table.records()[0];
    assert_eq!(rec.id(), "X1");
    assert_eq!(rec.fl(), None);
    assert_eq!(rec.ground_type(), "");
    assert_eq!(rec.note(), Some("hello"));
}

#[test]
fn test_half_coordinate_pair_is_ignored() {
    let table = table_from("id,FL,groundType,lat\nA,1.1,Medium,35.0\n");

    assert!(!table.has_coordinates());
    assert_eq!(table.records()[0].lat(), None);
}

#[test]
fn test_snake_case_ground_type_alias() {
    let table = table_from("id,FL,ground_type\nA,1.4,Soft ground\n");

    assert_eq!(table.records()[0].ground_type(), "Soft ground");
    assert_eq!(table.records()[0].suggestion(), "Raft foundation + Monitoring");
}

#[test]
fn test_headers_are_case_sensitive() {
    let table = table_from("ID,fl,groundType\nA,0.5,Medium\n");

    assert_eq!(table.records()[0].id(), "");
    assert_eq!(table.records()[0].fl(), None);
}

#[test]
fn test_input_derived_columns_are_ignored() {
    let table = table_from("id,FL,groundType,riskLevel,suggestion\nA,0.5,Medium,Low,Nothing\n");

    assert_eq!(table.records()[0].risk_level(), RiskLevel::High);
    assert_eq!(
        table.records()[0].suggestion(),
        "Pile foundation + Ground improvement"
    );
}

#[test]
fn test_ragged_rows_are_tolerated() {
    let table = load_csv("id,FL,groundType,note\nA,0.8\nB,1.2,Medium,ok\n".as_bytes())
        .expect("ragged csv");

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].ground_type(), "");
    assert_eq!(table.records()[1].note(), Some("ok"));
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number(" 0.81 "), Some(0.81));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("nan"), None);
    assert_eq!(parse_number("n/a"), None);
}

#[test]
fn test_sample_table() {
    let table = sample_table();

    assert_eq!(table.len(), 3);
    assert!(table.has_coordinates());

    let levels: Vec<RiskLevel> = table.records().iter().map(|r| r.risk_level()).collect();
    assert_eq!(
        levels,
        [RiskLevel::Moderate, RiskLevel::Low, RiskLevel::Moderate]
    );
    assert_eq!(table.records()[1].suggestion(), "Spread/Strip foundation");
}

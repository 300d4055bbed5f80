use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date as `YYYY-MM-DD`, the default report date.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

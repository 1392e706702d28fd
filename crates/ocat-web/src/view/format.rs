use jiff::civil::Date;

/// Background colour of a risk cell. Unknown levels render white.
pub fn risk_color(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "low" => "lightgreen",
        "medium" => "orange",
        "high" => "red",
        _ => "white",
    }
}

/// `YYYY-MM-DD`, or an empty string when there is no date.
pub fn format_date(date: Option<Date>) -> String {
    date.map(|d| d.strftime("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

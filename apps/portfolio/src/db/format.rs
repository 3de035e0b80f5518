use chrono::Month;

/// Maps `YYYY-MM` to `Mon YYYY`. Empty input stays empty; anything that does
/// not carry a positive year and a month in 1..=12 is returned unchanged.
pub fn format_month(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }

    let mut parts = iso.split('-');
    let year = parts.next().and_then(|y| y.trim().parse::<u32>().ok());
    let month = parts
        .next()
        .and_then(|m| m.trim().parse::<u8>().ok())
        .and_then(|m| Month::try_from(m).ok());

    match (year, month) {
        (Some(y), Some(m)) if y > 0 => format!("{} {}", &m.name()[..3], y),
        _ => iso.to_string(),
    }
}

/// `Jan 2023 — Jun 2023`, or `Jan 2023 — Present` when there is no end.
pub fn format_range(start: Option<&str>, end: Option<&str>) -> String {
    let s = format_month(start.unwrap_or(""));
    let e = match end.filter(|e| !e.is_empty()) {
        Some(end) => format_month(end),
        None => "Present".to_string(),
    };
    format!("{s} — {e}")
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `escape_html` for optional fields; `None` renders as nothing.
pub fn escape_opt(s: Option<&str>) -> String {
    s.map(escape_html).unwrap_or_default()
}

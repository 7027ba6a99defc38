use chrono::{DateTime, Utc};

/// Format an amount in cents, e.g. `1234567, "USD"` -> `$12,345.67`.
/// Whole amounts drop the decimals (`$50`). Unknown currencies are prefixed
/// with their code.
pub fn amount(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = group_thousands(abs / 100);
    let fraction = abs % 100;
    let number = if fraction == 0 { whole } else { format!("{whole}.{fraction:02}") };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{} {number}", currency.to_uppercase()),
    }
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_uppercase().as_str() {
        "USD" | "CAD" | "AUD" | "NZD" | "MXN" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"month"` -> `"/month"`; anything else (or nothing) renders nothing.
pub fn interval_suffix(interval: Option<&str>) -> String {
    match interval {
        Some("month") => "/month".to_string(),
        Some("year") => "/year".to_string(),
        _ => String::new(),
    }
}

/// Calendar date without time of day, e.g. `Mar 2, 2018`.
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

pub fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Cut `text` to at most `max` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Uppercased first letter, used when there is no avatar image.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

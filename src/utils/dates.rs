use chrono::NaiveDate;

const DEFAULT_YEAR: i32 = 1970;
const DEFAULT_MONTH: i32 = 1;

/// Leading integer of `part`, ignoring surrounding whitespace ("2024abc" -> 2024).
fn leading_int(part: &str) -> Option<i32> {
    let part = part.trim();
    let digits = part
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '+' || *c == '-')))
        .map(|(_, c)| c)
        .collect::<String>();
    digits.parse().ok()
}

fn is_present(token: Option<&str>) -> bool {
    match token.map(str::trim) {
        None | Some("") => true,
        Some(t) => t.eq_ignore_ascii_case("present"),
    }
}

/// `"YYYY-MM"` -> `"Mon YYYY"`; absent or `present` -> `"Present"`.
///
/// Never fails: a missing, zero or non-numeric year becomes 1970 and a
/// missing, zero or non-numeric month becomes January. Months past 12 roll
/// over into the following year.
pub fn format_date(token: Option<&str>) -> String {
    if is_present(token) {
        return "Present".to_string();
    }
    let token = token.unwrap_or_default();
    let mut parts = token.split('-');

    let year = parts
        .next()
        .and_then(leading_int)
        .filter(|y| *y != 0)
        .unwrap_or(DEFAULT_YEAR);
    let month = parts
        .next()
        .and_then(leading_int)
        .filter(|m| *m != 0)
        .unwrap_or(DEFAULT_MONTH);

    let months = year as i64 * 12 + (month as i64 - 1);
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));

    match i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month0 as u32 + 1, 1))
    {
        Some(date) => date.format("%b %Y").to_string(),
        None => {
            tracing::debug!("Date token '{}' out of range, using default", token);
            NaiveDate::from_ymd_opt(DEFAULT_YEAR, 1, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default()
        }
    }
}

/// `"Mar 2024 – Present"`
pub fn format_range(start: Option<&str>, end: Option<&str>) -> String {
    format!("{} – {}", format_date(start), format_date(end))
}

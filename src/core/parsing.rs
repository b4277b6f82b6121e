//! Free-text numeric parsing shared by filtering and sorting.
//!
//! Catalog records carry human-written values such as "8 years" or
//! "< 2 hours". Both the predicate evaluator and the sort engine read them
//! through these functions so bucketing and ordering never disagree.

/// Length of the number at the start of `text`, accepting a decimal fraction
fn number_len(text: &str) -> usize {
    let mut seen_dot = false;
    text.char_indices()
        .find(|&(i, c)| {
            if c.is_ascii_digit() {
                return false;
            }
            let fraction = c == '.'
                && !seen_dot
                && text[i + 1..].starts_with(|n: char| n.is_ascii_digit());
            seen_dot |= fraction;
            !fraction
        })
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Every number in `text` paired with the lowercased word right after it
///
/// "10+ years" gives `(10, "years")`; "5. Mostly" gives `(5, "")`.
fn quantities(text: &str) -> Vec<(f64, String)> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let tail = &rest[start..];
        let len = number_len(tail);
        let Ok(value) = tail[..len].parse::<f64>() else {
            break;
        };

        let unit: String = tail[len..]
            .trim_start_matches(|c: char| c.is_whitespace() || c == '+')
            .chars()
            .take_while(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();

        found.push((value, unit));
        rest = &tail[len..];
    }

    found
}

/// Sum the number-and-unit pairs of `text`, scaled by `factor`
///
/// The first number always counts, in the default unit when its word is
/// not recognized. Later numbers count only with a recognized unit, so
/// "5 years 6 months" sums but "8 years, 3 at one agency" does not.
fn total_in_units(text: &str, factor: impl Fn(&str) -> Option<f64>) -> Option<f64> {
    let mut pairs = quantities(text).into_iter();
    let (first, unit) = pairs.next()?;

    let mut total = first * factor(&unit).unwrap_or(1.0);
    for (value, unit) in pairs {
        if let Some(scale) = factor(&unit) {
            total += value * scale;
        }
    }

    total.is_finite().then_some(total)
}

fn years_factor(unit: &str) -> Option<f64> {
    if unit.starts_with("mo") {
        Some(1.0 / 12.0)
    } else if unit.starts_with('y') {
        Some(1.0)
    } else {
        None
    }
}

fn hours_factor(unit: &str) -> Option<f64> {
    if unit.starts_with("min") {
        Some(1.0 / 60.0)
    } else if unit.starts_with('h') {
        Some(1.0)
    } else if unit.starts_with('d') {
        Some(24.0)
    } else if unit.starts_with('w') {
        Some(24.0 * 7.0)
    } else {
        None
    }
}

/// Parse an experience description into whole years
///
/// "8 years", "10+ years" and "3" all parse; "18 months" is 1 year and
/// "5 years 6 months" is 5. Fractions are truncated. Anything without a
/// number yields 0.
#[inline]
pub fn parse_experience_years(text: &str) -> u32 {
    match total_in_units(text, years_factor) {
        Some(years) if years >= 0.0 => years as u32,
        _ => 0,
    }
}

/// Parse a response-time description into hours
///
/// Each number takes the unit written right after it: minutes, hours,
/// days and weeks convert ("1 hour 30 minutes" is 1.5); a bare number is
/// taken as hours. Returns `None` when no number is present, which callers
/// treat as infinitely slow.
#[inline]
pub fn parse_response_time_hours(text: &str) -> Option<f64> {
    total_in_units(text, hours_factor)
}

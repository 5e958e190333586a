use crate::errors::{AppError, AppResult};
use crate::models::bucket::MonthBucket;

pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

/// Parse a month selection like `1,2,7-9` into calendar-ordered, deduplicated
/// month numbers. An empty spec is a valid empty selection, distinct from an
/// invalid one.
pub fn parse_months(spec: &str) -> AppResult<Vec<u32>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    let mut months = Vec::new();

    for token in spec.split(',') {
        let token = token.trim();
        if let Some((lo, hi)) = token.split_once('-') {
            let lo = parse_month_number(lo.trim(), spec)?;
            let hi = parse_month_number(hi.trim(), spec)?;
            if lo > hi {
                return Err(AppError::InvalidMonth(spec.to_string()));
            }
            months.extend(lo..=hi);
        } else {
            months.push(parse_month_number(token, spec)?);
        }
    }

    // Calendar order, regardless of how the spec listed them
    months.sort_unstable();
    months.dedup();
    Ok(months)
}

fn parse_month_number(token: &str, spec: &str) -> AppResult<u32> {
    match token.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => Ok(m),
        _ => Err(AppError::InvalidMonth(spec.to_string())),
    }
}

/// One bucket per selected month of the given year, in calendar order.
pub fn buckets_for(year: i32, months: &[u32]) -> Vec<MonthBucket> {
    months.iter().map(|&m| MonthBucket::new(year, m)).collect()
}

pub fn all_months() -> Vec<u32> {
    (1..=12).collect()
}

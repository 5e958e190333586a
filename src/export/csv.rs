use crate::errors::{AppError, AppResult};
use crate::models::bucket::Report;
use crate::utils::formatting::{fmt2, fmt2_opt};
use csv::Writer;
use std::path::Path;

/// Write the per-month rows plus a final TOTAL row. Weekend-day columns are
/// only emitted when the report carries tallies.
pub fn write_csv(
    path: &Path,
    report: &Report,
    party_a_name: &str,
    party_b_name: &str,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    let with_tally = report.totals.party_a_weekend_days.is_some();

    let mut header = vec![
        "month".to_string(),
        "year".to_string(),
        format!("{party_a_name} weighted"),
        format!("{party_b_name} weighted"),
    ];
    if with_tally {
        header.push(format!("{party_a_name} weekend days"));
        header.push(format!("{party_b_name} weekend days"));
    }
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in &report.rows {
        let mut record = vec![
            row.bucket.label.clone(),
            row.bucket.year.to_string(),
            fmt2(row.party_a_weighted),
            fmt2(row.party_b_weighted),
        ];
        if with_tally {
            record.push(fmt2_opt(row.party_a_weekend_days));
            record.push(fmt2_opt(row.party_b_weekend_days));
        }
        wtr.write_record(&record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let mut total = vec![
        "TOTAL".to_string(),
        String::new(),
        fmt2(report.totals.party_a_weighted),
        fmt2(report.totals.party_b_weighted),
    ];
    if with_tally {
        total.push(fmt2_opt(report.totals.party_a_weekend_days));
        total.push(fmt2_opt(report.totals.party_b_weekend_days));
    }
    wtr.write_record(&total)
        .map_err(|e| AppError::Export(e.to_string()))?;

    wtr.flush()?;
    Ok(())
}

use crate::cli::commands::{RunSettings, resolve_settings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::compute_report;
use crate::errors::AppResult;
use crate::ics;
use crate::models::bucket::Report;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::{fmt2, fmt2_opt};
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { args } = cmd {
        let settings = resolve_settings(args, cfg)?;

        if settings.buckets.is_empty() {
            warning("No months selected; nothing to report.");
            return Ok(());
        }

        let raw = ics::load_events(Path::new(&args.file))?;
        let events = settings.classifier.split(&raw);

        if events.party_a.is_empty() && events.party_b.is_empty() {
            info("No events matched either party's pattern.");
        }

        let report = compute_report(&events, &settings.buckets, &settings.opts);
        print_report(&report, &settings);
    }
    Ok(())
}

fn print_report(report: &Report, settings: &RunSettings) {
    let with_tally = settings.opts.weekend_tally;
    let a = &settings.party_a_name;
    let b = &settings.party_b_name;

    let mut columns = vec![
        Column::new("Month", 10),
        Column::new(&format!("{a} (weighted)"), 14),
        Column::new(&format!("{b} (weighted)"), 14),
    ];
    if with_tally {
        columns.push(Column::new(&format!("{a} (weekend)"), 13));
        columns.push(Column::new(&format!("{b} (weekend)"), 13));
    }

    let mut table = Table::new(columns);
    for row in &report.rows {
        let mut cells = vec![
            row.bucket.label.clone(),
            fmt2(row.party_a_weighted),
            fmt2(row.party_b_weighted),
        ];
        if with_tally {
            cells.push(fmt2_opt(row.party_a_weekend_days));
            cells.push(fmt2_opt(row.party_b_weekend_days));
        }
        table.add_row(cells);
    }

    let mut total = vec![
        "TOTAL".to_string(),
        fmt2(report.totals.party_a_weighted),
        fmt2(report.totals.party_b_weighted),
    ];
    if with_tally {
        total.push(fmt2_opt(report.totals.party_a_weekend_days));
        total.push(fmt2_opt(report.totals.party_b_weekend_days));
    }
    table.add_row(total);

    if let Some(year) = report.rows.first().map(|r| r.bucket.year) {
        println!("\nResults for {}\n", year);
    }
    print!("{}", table.render());

    println!();
    println!(
        "Total {}: {} | Total {}: {}",
        a,
        fmt2(report.totals.party_a_weighted),
        b,
        fmt2(report.totals.party_b_weighted),
    );
}

pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::cli::parser::ReportArgs;
use crate::config::Config;
use crate::core::aggregate::ReportOptions;
use crate::core::classifier::Classifier;
use crate::errors::AppResult;
use crate::models::bucket::MonthBucket;
use crate::models::weights::WeightConfig;
use crate::utils::date;

/// Everything a report run needs, resolved from config plus CLI overrides.
pub(crate) struct RunSettings {
    pub classifier: Classifier,
    pub buckets: Vec<MonthBucket>,
    pub opts: ReportOptions,
    pub party_a_name: String,
    pub party_b_name: String,
}

pub(crate) fn resolve_settings(args: &ReportArgs, cfg: &Config) -> AppResult<RunSettings> {
    let pattern_a = args.pattern_a.as_deref().unwrap_or(&cfg.party_a_pattern);
    let pattern_b = args.pattern_b.as_deref().unwrap_or(&cfg.party_b_pattern);
    let classifier = Classifier::new(pattern_a, pattern_b)?;

    let weights = WeightConfig {
        weekday: args.weekday_weight.unwrap_or(cfg.weekday_weight),
        weekend: args.weekend_weight.unwrap_or(cfg.weekend_weight),
    };
    weights.validate()?;

    let year = args.year.unwrap_or_else(date::current_year);
    let months = match &args.months {
        Some(spec) => date::parse_months(spec)?,
        None => date::all_months(),
    };

    Ok(RunSettings {
        classifier,
        buckets: date::buckets_for(year, &months),
        opts: ReportOptions {
            weights,
            mode: args.mode.unwrap_or(cfg.mode),
            weekend_tally: args.weekend_days || cfg.weekend_tally,
        },
        party_a_name: cfg.party_a_name.clone(),
        party_b_name: cfg.party_b_name.clone(),
    })
}

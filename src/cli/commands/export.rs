use crate::cli::commands::resolve_settings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::compute_report;
use crate::errors::AppResult;
use crate::export::write_report;
use crate::ics;
use crate::ui::messages::warning;
use std::path::Path;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        args,
        format,
        out,
        force,
    } = cmd
    {
        let settings = resolve_settings(args, cfg)?;

        if settings.buckets.is_empty() {
            warning("No months selected; nothing to export.");
            return Ok(());
        }

        let raw = ics::load_events(Path::new(&args.file))?;
        let events = settings.classifier.split(&raw);
        let report = compute_report(&events, &settings.buckets, &settings.opts);

        write_report(
            *format,
            Path::new(out),
            &report,
            &settings.party_a_name,
            &settings.party_b_name,
            *force,
        )?;
    }
    Ok(())
}

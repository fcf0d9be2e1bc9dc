use crate::cli::commands::tables::render_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { tables, json } = cmd {
        let analysis = Core::analyze_files(cfg)?;

        if *json {
            let out = serde_json::to_string_pretty(&analysis)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if *tables {
            println!("{}", render_report(&analysis));
        }

        println!(
            "best hour: {}, worst hour: {}",
            analysis.best_hour, analysis.worst_hour
        );
    }
    Ok(())
}

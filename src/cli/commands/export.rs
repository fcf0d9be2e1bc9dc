use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let analysis = Core::analyze_files(cfg)?;
        ExportLogic::export(&analysis, *format, file, *force)?;
    }
    Ok(())
}

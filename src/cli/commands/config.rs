use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use crate::utils::formatting::bold;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            if path.exists() {
                warning(format!(
                    "Configuration file already exists: {}",
                    path.display()
                ));
            } else {
                Config::default().save(path)?;
                success(format!("Config file: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("{}", bold(&format!("📄 Current configuration ({}):", path.display())));
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {} (run `config --init` first)",
                    path.display()
                )));
            }
            edit(path, editor.as_deref());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) {
    // Default editor basato sulla piattaforma
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or(&default_editor);

    match Command::new(editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                )),
                Ok(_) | Err(_) => error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                )),
            }
        }
    }
}

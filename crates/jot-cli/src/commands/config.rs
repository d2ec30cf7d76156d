//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use jot_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "log_file": config.log_file,
                    "files": {
                        "notes": config.notes_path(),
                        "todos": config.todos_path(),
                        "ideas": config.ideas_path()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir: {}", config.data_dir.display());
            println!(
                "  log_file: {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => {
            if value.is_empty() {
                bail!("data_dir cannot be empty");
            }
            config.data_dir = value.into();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, log_file",
                key
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_known_keys() {
        let mut config = Config::with_data_dir("/old");

        apply(&mut config, "data_dir", "/new").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/new"));

        apply(&mut config, "log_file", "/tmp/jot.log").unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/jot.log")));

        apply(&mut config, "log_file", "none").unwrap();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_apply_rejects_unknown_key() {
        let mut config = Config::with_data_dir("/old");
        let err = apply(&mut config, "color", "on").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }

    #[test]
    fn test_apply_rejects_empty_data_dir() {
        let mut config = Config::with_data_dir("/old");
        assert!(apply(&mut config, "data_dir", "").is_err());
        assert_eq!(config.data_dir, PathBuf::from("/old"));
    }

    #[test]
    fn test_set_writes_given_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jot").join("config.toml");
        let output = Output::new(OutputFormat::Quiet);

        set(
            "log_file".to_string(),
            "/tmp/jot-test.log".to_string(),
            Some(&path),
            &output,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("log_file"));
        assert!(content.contains("/tmp/jot-test.log"));
    }
}

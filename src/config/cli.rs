use crate::config::history_file::load_history_csv;
use crate::config::toml_config::{TomlConfig, OUTPUT_FORMATS};
use crate::domain::model::{HistoryEntry, Voyage};
use crate::domain::ports::RatingInputProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_required_field, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "voyage-rating")]
#[command(about = "Grade a voyage (A or B) from its risk and the captain's past voyages")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Trade zone of the voyage (e.g. china, east-indies, west-indies)
    #[arg(long)]
    pub zone: Option<String>,

    /// Length of the voyage
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// CSV file with the captain's past voyages (zone,profit)
    #[arg(long)]
    pub history: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Print every factor that went into the grade
    #[arg(long)]
    pub explain: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) -> Result<()> {
        if let Some(zone) = &self.zone {
            config.voyage.zone = zone.clone();
            tracing::info!("🔧 Voyage zone overridden to: {}", zone);
        }
        if let Some(length) = self.length {
            config.voyage.length = length;
            tracing::info!("🔧 Voyage length overridden to: {}", length);
        }
        if let Some(history) = &self.history {
            // 命令列路徑以目前工作目錄為準，不跟著設定檔目錄走
            let path = std::env::current_dir()?.join(history);
            tracing::info!("🔧 History file overridden to: {}", path.display());
            config.set_history_file(path.to_string_lossy());
        }
        if self.format.is_some() || self.explain {
            let output = config.output.get_or_insert_with(Default::default);
            if let Some(format) = &self.format {
                output.format = Some(format.clone());
            }
            if self.explain {
                output.explain = Some(true);
            }
        }
        Ok(())
    }

    pub fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }
}

impl RatingInputProvider for CliConfig {
    fn voyage(&self) -> Result<Voyage> {
        let zone = validate_required_field("voyage.zone", &self.zone)?;
        let length = validate_required_field("voyage.length", &self.length)?;
        Ok(Voyage::new(zone.clone(), *length))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>> {
        match &self.history {
            Some(path) => load_history_csv(path),
            None => Ok(Vec::new()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validate_one_of("format", format, &OUTPUT_FORMATS)?;
        }
        if let Some(history) = &self.history {
            validate_non_empty_string("history", history)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RatingError;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::parse_from([
            "voyage-rating",
            "--zone",
            "china",
            "--length",
            "10",
            "--format",
            "json",
            "--explain",
        ]);

        assert_eq!(config.voyage().unwrap(), Voyage::new("china", 10));
        assert!(config.history().unwrap().is_empty());
        assert_eq!(config.output_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_length_reaches_validation() {
        let config =
            CliConfig::parse_from(["voyage-rating", "--zone", "west", "--length", "-1"]);
        assert_eq!(config.length, Some(-1));
    }

    #[test]
    fn test_missing_zone() {
        let config = CliConfig::parse_from(["voyage-rating", "--length", "4"]);
        assert!(matches!(
            config.voyage(),
            Err(RatingError::MissingInput { ref field }) if field == "voyage.zone"
        ));
    }

    #[test]
    fn test_unsupported_format() {
        let config = CliConfig::parse_from(["voyage-rating", "--format", "xml"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut toml =
            TomlConfig::from_toml_str("[voyage]\nzone = \"west\"\nlength = 3\n").unwrap();
        let cli = CliConfig::parse_from([
            "voyage-rating",
            "--length",
            "12",
            "--explain",
        ]);

        cli.apply_overrides(&mut toml).unwrap();

        assert_eq!(toml.voyage, Voyage::new("west", 12));
        assert!(toml.explain());
        assert_eq!(toml.output_format(), "text");
    }

    #[test]
    fn test_history_override_is_relative_to_working_directory() {
        let config_dir = tempfile::TempDir::new().unwrap();
        let config_path = config_dir.path().join("voyage.toml");
        std::fs::write(&config_path, "[voyage]\nzone = \"china\"\nlength = 10\n").unwrap();

        // 相對於目前工作目錄的紀錄檔
        let history_dir = tempfile::TempDir::new_in(".").unwrap();
        std::fs::write(history_dir.path().join("captain.csv"), "zone,profit\nchina,-2\n").unwrap();
        let cwd = std::env::current_dir().unwrap();
        let history_path = history_dir
            .path()
            .strip_prefix(&cwd)
            .unwrap_or(history_dir.path())
            .join("captain.csv");
        assert!(history_path.is_relative());

        let mut toml = TomlConfig::from_file(&config_path).unwrap();
        let cli = CliConfig::parse_from([
            "voyage-rating",
            "--history",
            history_path.to_str().unwrap(),
        ]);
        cli.apply_overrides(&mut toml).unwrap();

        assert!(toml.history_file_path().unwrap().is_absolute());
        let history = toml.history().unwrap();
        assert_eq!(history, vec![HistoryEntry::new("china", -2.0)]);
    }
}

pub mod cli;
pub mod file;

use crate::utils::error::Result;
use self::cli::CliConfig;
use self::file::FileConfig;
use std::path::PathBuf;

/// Effective settings after merging the CLI over the optional config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self {
            data_dir: cli
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            verbose: cli.verbose || file.verbose.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::cli::Command;
    use super::*;

    fn cli() -> CliConfig {
        CliConfig {
            data_dir: None,
            config: None,
            verbose: false,
            username: None,
            password: None,
            command: Command::ListAnimals,
        }
    }

    #[test]
    fn defaults_to_working_directory() {
        let settings = Settings::resolve(&cli()).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("."));
        assert!(!settings.verbose);
    }

    #[test]
    fn cli_flag_wins() {
        let mut cli = cli();
        cli.data_dir = Some(PathBuf::from("/tmp/clinic"));
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/clinic"));
    }
}

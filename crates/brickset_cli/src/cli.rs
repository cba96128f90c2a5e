use clap::Parser;
use std::path::PathBuf;

/// Runs the example catalogue queries and prints each result.
#[derive(Debug, Parser)]
#[clap(name = "brickset", version)]
pub struct CommandLine {
    /// Load sets from this JSON file instead of the bundled catalogue.
    #[clap(long)]
    pub data: Option<PathBuf>,
    /// Theme substring for the theme count.
    #[clap(long, default_value = "Duplo")]
    pub theme: String,
    /// Name substring for the name count.
    #[clap(long, default_value = "b")]
    pub name_contains: String,
    /// Print names longer than this many characters.
    #[clap(long, default_value_t = 50, allow_negative_numbers = true)]
    pub name_longer_than: i64,
    /// Print the names of this many leading sets.
    #[clap(long, default_value_t = 3, allow_negative_numbers = true)]
    pub first: i64,
    /// Absolute directory for rolling log files; logging stays off without it.
    #[clap(long)]
    pub log_dir: Option<String>,
    /// trace|debug|info|warn|error; defaults by build mode.
    #[clap(long, requires = "log_dir")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::CommandLine;
    use clap::Parser;

    #[test]
    fn defaults_match_example_queries() {
        let args = CommandLine::try_parse_from(["brickset"]).unwrap();

        assert_eq!(args.data, None);
        assert_eq!(args.theme, "Duplo");
        assert_eq!(args.name_contains, "b");
        assert_eq!(args.name_longer_than, 50);
        assert_eq!(args.first, 3);
        assert_eq!(args.log_dir, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = CommandLine::try_parse_from([
            "brickset",
            "--data",
            "/tmp/sets.json",
            "--theme",
            "City",
            "--first",
            "-1",
        ])
        .unwrap();

        assert_eq!(args.data.unwrap().to_str(), Some("/tmp/sets.json"));
        assert_eq!(args.theme, "City");
        assert_eq!(args.first, -1);
    }

    #[test]
    fn log_level_requires_log_dir() {
        let err = CommandLine::try_parse_from(["brickset", "--log-level", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let args = CommandLine::try_parse_from([
            "brickset",
            "--log-dir",
            "/tmp/brickset-logs",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}

use clap::Parser;
use std::path::PathBuf;

/// Rename photos in a listing to <City><number>.<ext>, numbered by capture time within each city.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The listing to rename, one `name.ext, City, yyyy-mm-dd hh:mm:ss` per line. Reads stdin when absent or `-`
    pub input: Option<PathBuf>,
    /// Rename every listing file matching this glob pattern instead
    #[clap(short, long, conflicts_with = "input")]
    pub pattern: Option<String>,
    /// Print `original -> new` for each photo
    #[clap(short, long, default_value_t = false)]
    pub mapping: bool,
    /// Log debug output
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
    /// Only log errors
    #[clap(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.pattern.is_none() && self.input.as_ref().map_or(true, |p| p.as_os_str() == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_read_stdin() {
        let cli = Cli::parse_from(["photorename"]);
        assert!(cli.reads_stdin());
        assert!(!cli.mapping);
        assert!(Cli::parse_from(["photorename", "-"]).reads_stdin());
    }

    #[test]
    fn test_pattern_and_mapping() {
        let cli = Cli::parse_from(["photorename", "-m", "--pattern", "lists/*.txt"]);
        assert!(!cli.reads_stdin());
        assert!(cli.mapping);
        assert_eq!(cli.pattern.as_deref(), Some("lists/*.txt"));
    }

    #[test]
    fn test_pattern_conflicts_with_input() {
        assert!(Cli::try_parse_from(["photorename", "a.txt", "-p", "*.txt"]).is_err());
    }
}

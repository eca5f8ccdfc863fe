//! Runner configuration, read from the command line and environment.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "household-tree", about = "Build a household family tree from a member snapshot")]
pub struct RunConfig {
    /// Snapshot JSON: an object with `members`, or a bare member array
    pub input: PathBuf,

    /// Indent the exported tree
    #[arg(long)]
    pub pretty: bool,

    /// Exit with an error when the household has anomalies
    #[arg(long)]
    pub audit: bool,

    /// trace, debug, info, warn or error
    #[arg(long, env = "HOUSEHOLD_LOG", default_value = "info")]
    pub log_level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::try_parse_from(["household-tree", "members.json"]).unwrap();
        assert_eq!(config.input, PathBuf::from("members.json"));
        assert!(!config.pretty);
        assert!(!config.audit);
    }

    #[test]
    fn test_flags() {
        let config = RunConfig::try_parse_from([
            "household-tree",
            "--pretty",
            "--audit",
            "--log-level",
            "debug",
            "hh.json",
        ])
        .unwrap();
        assert!(config.pretty);
        assert!(config.audit);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_input_required() {
        assert!(RunConfig::try_parse_from(["household-tree"]).is_err());
    }
}

use std::path::PathBuf;

use clap::Parser;

/// Command-line and environment configuration.
///
/// The API base URL is injected here rather than read from a global so the
/// client can be pointed at a mock endpoint in tests and at a deployed
/// origin in production.
#[derive(Parser, Clone, Debug)]
#[command(name = "pl-explorer", version, about)]
pub struct Args {
    /// Base URL of the player explorer API.
    #[arg(long, env = "PL_EXPLORER_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Players fetched per page.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,

    /// Append logs to this file (the terminal itself is taken over by the
    /// TUI). Logging is disabled when unset.
    #[arg(long, env = "PL_EXPLORER_LOG")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_development_setup() {
        let args = Args::parse_from(["pl-explorer"]);
        assert_eq!(args.api_url, "http://localhost:8000");
        assert_eq!(args.limit, 20);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn limit_is_bounded() {
        assert!(Args::try_parse_from(["pl-explorer", "--limit", "0"]).is_err());
        assert!(Args::try_parse_from(["pl-explorer", "--limit", "101"]).is_err());
        let args = Args::parse_from(["pl-explorer", "--limit", "50"]);
        assert_eq!(args.limit, 50);
    }
}

//! Command-line arguments.

use clap::Parser;
use log::LevelFilter;

/// Browse artworks page by page and build a selection that survives navigation.
#[derive(Debug, Parser)]
#[command(name = "gallery", version)]
pub struct Args {
    /// Base URL of the artworks API.
    #[arg(long, env = "GALLERY_BASE_URL", default_value = gallery_lib::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Records per page.
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Page to open first.
    #[arg(long = "page", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub start_page: u32,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Log level written to the log file (off, error, warn, info, debug, trace).
    #[arg(long, env = "GALLERY_LOG", default_value = "info")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "gallery",
            "--base-url",
            "http://localhost:1/api/v1",
            "--page-size",
            "25",
            "--page",
            "3",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.base_url, "http://localhost:1/api/v1");
        assert_eq!(args.page_size, 25);
        assert_eq!(args.start_page, 3);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(Args::try_parse_from(["gallery", "--page-size", "0"]).is_err());
    }
}

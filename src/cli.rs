//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Fetch representative artwork images for textbook references.
///
/// Artfetch takes one line of `textbook(artwork,artwork)` input, searches
/// Wikimedia Commons for each artwork, and saves the best matching image
/// under the output folder as `{textbook}_{artwork}.jpg`.
#[derive(Parser, Debug)]
#[command(name = "artfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Query line, e.g. "textbook1(Mona Lisa Vinci,Fountaine Duchamp)".
    /// When omitted, one line is read from stdin.
    pub query: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["artfetch"]).unwrap();
        assert!(args.query.is_none());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_positional_query() {
        let args = Args::try_parse_from(["artfetch", "tb1(Mona Lisa)"]).unwrap();
        assert_eq!(args.query.as_deref(), Some("tb1(Mona Lisa)"));
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["artfetch", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag_sets_quiet() {
        let args = Args::try_parse_from(["artfetch", "--quiet"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        // --help causes early exit, so we check it returns an error with Help kind
        let result = Args::try_parse_from(["artfetch", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}

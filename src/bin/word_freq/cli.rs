use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "word-freq",
    about = "Count the words in a file, then query the counts interactively",
    version
)]
pub(crate) struct Cli {
    /// Text file to count the whitespace separated words of
    pub(crate) file: PathBuf,

    /// Maximum number of distinct words to store
    #[arg(long)]
    pub(crate) node_limit: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub(crate) quiet: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse() {
        let cli = Cli::try_parse_from(["word-freq", "--node-limit", "42", "-v", "words.txt"]).unwrap();

        assert_eq!(cli.file, PathBuf::from("words.txt"));
        assert_eq!(cli.node_limit, Some(42));
        assert!(cli.verbose);
        assert!(!cli.quiet);

        assert!(Cli::try_parse_from(["word-freq", "-v", "-q", "words.txt"]).is_err());
        assert!(Cli::try_parse_from(["word-freq"]).is_err());
    }
}

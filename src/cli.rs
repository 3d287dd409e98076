use std::path::PathBuf;

use clap::Parser;

/// Fetch and print a snapshot of a Gmail account: profile, labels, and the
/// most recent messages.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the OAuth 2.0 client credentials downloaded from the Google
    /// Cloud Console.
    #[clap(long, default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Path where OAuth tokens are cached between runs.
    #[clap(long, default_value = "tokencache.json")]
    pub token_cache: PathBuf,

    /// How many recent messages to fetch.
    #[clap(long, default_value_t = 10)]
    pub max_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gmfetch"]).unwrap();
        assert_eq!(cli.credentials, PathBuf::from("credentials.json"));
        assert_eq!(cli.token_cache, PathBuf::from("tokencache.json"));
        assert_eq!(cli.max_results, 10);
    }

    #[test]
    fn test_path_overrides() {
        let cli = Cli::try_parse_from([
            "gmfetch",
            "--credentials",
            "/etc/gmfetch/secret.json",
            "--token-cache",
            "/tmp/cache.json",
            "--max-results",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.credentials, PathBuf::from("/etc/gmfetch/secret.json"));
        assert_eq!(cli.token_cache, PathBuf::from("/tmp/cache.json"));
        assert_eq!(cli.max_results, 3);
    }
}

//! Smoke-test harness
//!
//! Constructs a client from a token passed on the command line and issues
//! one `read_user` call. A classified API failure is logged and tolerated;
//! only a missing token or a bad configuration is fatal.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vimeo_client::{Credentials, VimeoClient};

struct Args {
    token: Option<String>,
    log_level: Option<String>,
    logger_enabled: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Args {
    let mut args = Args {
        token: None,
        log_level: None,
        logger_enabled: false,
    };

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--token" => args.token = argv.next(),
            "--log-level" => {
                args.log_level = argv.next();
                args.logger_enabled = true;
            }
            "--logger-enabled" => args.logger_enabled = true,
            other => eprintln!("ignoring unknown argument: {other}"),
        }
    }

    args
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = parse_args(std::env::args().skip(1));

    let filter = if args.logger_enabled {
        let level = args.log_level.as_deref().unwrap_or("info");
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new("off")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(token) = args.token else {
        eprintln!("usage: vimeo-client --token <token> [--log-level <LEVEL>] [--logger-enabled]");
        return ExitCode::FAILURE;
    };

    let client = match VimeoClient::new(Credentials::token(token)) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(%err, "failed to construct client");
            return ExitCode::FAILURE;
        }
    };

    match client.read_user().await {
        Ok(response) => {
            tracing::info!(status = response.status, "read_user succeeded");
            println!("{}", response.body);
        }
        // Log and continue; an API-side failure is not a harness failure
        Err(err) => tracing::error!(%err, "read_user failed"),
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn args(list: &[&str]) -> super::Args {
        parse_args(list.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn parses_token() {
        let parsed = args(&["--token", "abc"]);
        assert_eq!(parsed.token.as_deref(), Some("abc"));
        assert!(!parsed.logger_enabled);
    }

    #[test]
    fn log_level_implies_logger_enabled() {
        let parsed = args(&["--token", "abc", "--log-level", "debug"]);
        assert_eq!(parsed.log_level.as_deref(), Some("debug"));
        assert!(parsed.logger_enabled);
    }

    #[test]
    fn logger_enabled_flag_alone() {
        let parsed = args(&["--logger-enabled"]);
        assert!(parsed.logger_enabled);
        assert!(parsed.log_level.is_none());
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let parsed = args(&["--bogus", "--token", "abc"]);
        assert_eq!(parsed.token.as_deref(), Some("abc"));
    }
}

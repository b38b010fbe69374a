use clap::Parser;
use gatekeeper::client::*;
use gatekeeper::logger::*;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Terminal front-end for the verification flow.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the lookup service
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Pause between the success message and the redirect, in milliseconds
    #[arg(long, default_value_t = 1500)]
    redirect_delay_ms: u64,

    /// Username to verify; prompts interactively when omitted
    username: Option<String>,
}

struct Terminal;

impl Notifier for Terminal {
    fn notify_success(&self, message: &str) {
        println!("{message}");
    }
}

impl Navigator for Terminal {
    fn navigate_to(&self, url: &str) {
        println!("Redirecting to {url}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logger = Logger::new_bootstrap();
    logger.reload_from_config(&LogConfig {
        filter: "warn".to_string(),
    })?;

    let api = HttpLookupApi::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let terminal = Arc::new(Terminal);
    let client = VerificationClient::new(Arc::new(api), terminal.clone(), terminal)
        .with_redirect_delay(Duration::from_millis(args.redirect_delay_ms));

    if let Some(username) = args.username {
        let state = client.submit(&username).await?;
        return match state.error_message() {
            Some(message) => Err(anyhow::anyhow!(message.to_owned())),
            None => Ok(()),
        };
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Username: ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match client.submit(&line).await? {
            VerificationState::Redirecting { .. } => return Ok(()),
            VerificationState::Error(message) => {
                eprintln!("Error: {message}");
                client.dismiss();
            }
            state => debug!(?state, "submission ended"),
        }
    }
}

use anyhow::Context;
use chrono::Local;
use strava_client::config::Config;
use strava_client::credentials::EnvFileStore;
use strava_client::http_client::ReqwestStravaClient;
use strava_client::token::TokenManager;
use strava_report::window::{ReportWindow, parse_date_argument};
use strava_report::{ReportError, run_report};

fn print_usage() {
    println!("Usage:");
    println!("  strava-report                           # Current week");
    println!("  strava-report 2024-07-01                # From July 1, 2024 to today");
    println!("  strava-report 2024-07-01 2024-07-31     # From July 1 to July 31, 2024");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `STRAVA_LOG_LEVEL` (or fallback to `RUST_LOG`, default `warn`).
    // The report itself goes to stdout; diagnostics stay on stderr.
    let log_env = std::env::var("STRAVA_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 {
        println!("Error: Too many arguments provided.");
        print_usage();
        return Ok(());
    }

    // Invalid CLI input prints usage and returns without a failure status,
    // matching the historical behavior of this tool.
    let mut dates = [None, None];
    for (i, (arg, label)) in args.iter().zip(["start", "end"]).enumerate() {
        match parse_date_argument(arg) {
            Some(date) => dates[i] = Some(date),
            None => {
                println!("Error: Invalid {label} date '{arg}'. Please use YYYY-MM-DD format.");
                print_usage();
                return Ok(());
            }
        }
    }

    let window = match ReportWindow::resolve(dates[0], dates[1], Local::now().naive_local()) {
        Ok(window) => window,
        Err(ReportError::InvalidRange { .. }) => {
            println!("Error: Start date cannot be later than end date.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let cfg = Config::from_env();
    let store = EnvFileStore::new(cfg.credentials_path.clone());
    let mut tokens = TokenManager::new(store).context("loading Strava credentials")?;
    let api = ReqwestStravaClient::new(&cfg.base_url);
    let access_token = tokens
        .access_token(&api)
        .await
        .context("could not retrieve access token")?;

    run_report(&api, &access_token, &window, &cfg.output_dir).await?;
    Ok(())
}

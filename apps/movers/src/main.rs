use std::io;

use clap::error::ErrorKind;
use clap::Parser;
use config::ReportConfig;
use dotenv::dotenv;
use seyeon_coingecko::markets::CoinsMarkets;
use seyeon_coingecko::CoingeckoClient;
use seyeon_ranking::{rank_movers, Movers};
use tracing::{debug, warn};

mod config;
mod report;
mod telemetry;

/// Prints the five worst and five best 24h performers among the top 100
/// coins by market cap, as listed by CoinGecko.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ignored; the report takes no input.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

/// Only `--help` and `--version` stop the run; anything else on the
/// command line is logged and the report goes ahead.
fn parse_args() -> bool {
    match Args::try_parse() {
        Ok(_) => true,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                false
            }
            _ => {
                warn!(%err, "ignoring command line");
                true
            }
        },
    }
}

async fn fetch_movers(client: &CoingeckoClient, config: &ReportConfig) -> anyhow::Result<Movers> {
    let records = client.call::<CoinsMarkets>(&config.params).await?;
    debug!(records = records.len(), "markets fetched");

    Ok(rank_movers(records, config.limit))
}

async fn run(config: &ReportConfig) -> anyhow::Result<()> {
    let client = CoingeckoClient::new()?;
    let movers = fetch_movers(&client, config).await?;

    debug!(
        worst = movers.worst.len(),
        best = movers.best.len(),
        "movers ranked"
    );

    let mut stdout = io::stdout().lock();
    report::write_report(&mut stdout, &movers, config.limit)?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    telemetry::init_tracing("warn");
    if !parse_args() {
        return;
    }

    let config = ReportConfig::default();

    if let Err(err) = run(&config).await {
        println!("{}", report::failure_line(&err));
    }
}

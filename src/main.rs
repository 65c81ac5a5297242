use anyhow::Context as _;
use clap::Parser as _;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer as _};
use utxo_select::primitives::{Output, Value};

mod config;

#[derive(Serialize)]
struct Report<'a> {
    selected: Vec<&'a Output>,
    total: Value,
}

fn main() -> anyhow::Result<()> {
    // A missing `.env` file is fine, configuration can come from the environment or flags
    dotenv::dotenv().ok();
    init_tracing();

    let config = config::Config::parse();

    let contents = std::fs::read_to_string(&config.utxos_path)
        .with_context(|| format!("could not read {}", config.utxos_path.display()))?;
    let candidates: Vec<Output> =
        serde_json::from_str(&contents).context("could not parse utxos file")?;
    info!(candidates = candidates.len(), "loaded utxos");

    let target = config.target();
    let selection = utxo_select::select(&candidates, &target)
        .map_err(|error| {
            let code = error.code();
            anyhow::Error::new(error).context(format!("coin selection failed (code {code})"))
        })?;

    let total = selection.total_value();
    info!(selected = selection.len(), lovelace = %total.lovelace, "selection done");

    if config.json {
        let report = Report {
            selected: selection.into_outputs(),
            total,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for output in selection.iter() {
            println!("{}", output.reference);
        }
        println!("lovelace: {}", total.lovelace);
        for (asset, quantity) in total.assets.iter() {
            println!("{asset}: {quantity}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_default_env());
    let _ = tracing_subscriber::registry().with(fmt).try_init();
}

use std::path::PathBuf;

use clap::Parser;
use utxo_select::primitives::{AssetId, Quantity, Value, parse_quantity};

/// The configuration parameters for the application.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// For convenience, they can also be read from a `.env` file in the working directory
/// where the application is started.
#[derive(Parser, Debug, Clone)]
#[command(about = "Select UTxOs covering a target value")]
pub struct Config {
    /// Path to a JSON file with the candidate outputs, as an array of
    /// `{"tx_hash": .., "index": .., "value": {"lovelace": .., "assets": {..}}}`
    #[arg(long, env)]
    pub utxos_path: PathBuf,

    /// Lovelace the selection must cover
    #[arg(long, env = "TARGET_LOVELACE", default_value = "0", value_parser = parse_quantity)]
    pub lovelace: Quantity,

    /// Named asset the selection must cover, as `<policy hex>.<name hex>=<quantity>`.
    /// Can be repeated, or given comma-separated through the environment.
    #[arg(
        long = "asset",
        env = "TARGET_ASSETS",
        value_delimiter = ',',
        value_parser = parse_asset
    )]
    pub assets: Vec<(AssetId, Quantity)>,

    /// Print the selection as JSON
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn target(&self) -> Value {
        self.assets
            .iter()
            .fold(Value::new(self.lovelace.clone()), |target, (asset, quantity)| {
                target.with_asset(asset.clone(), quantity.clone())
            })
    }
}

fn parse_asset(s: &str) -> Result<(AssetId, Quantity), String> {
    let (asset, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid asset: {s}, expected `<policy>.<name>=<quantity>`"))?;
    let asset = asset.trim().parse::<AssetId>().map_err(|e| e.to_string())?;
    let quantity = parse_quantity(quantity).map_err(|e| e.to_string())?;
    Ok((asset, quantity))
}

//! In-memory stand-in for a wallet and the network it lives on, so selection can be
//! exercised against realistic UTxO sets without a node.

use pallas::crypto::hash::Hasher;
use tracing::debug;

use crate::primitives::{Assets, Output, OutputRef, Quantity, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletId(usize);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmulatorError {
    #[error("Unknown wallet {0:?}")]
    UnknownWallet(WalletId),
    /// The output was never confirmed, or was already spent
    #[error("Output {0} is not in the ledger")]
    UnknownOutput(OutputRef),
}

/// Outputs created through the emulator sit in a mempool until [`Emulator::tick`] confirms
/// them, after which they show up in [`Emulator::utxos`].
#[derive(Debug, Default)]
pub struct Emulator {
    slot: u64,
    wallets: usize,
    tx_count: u64,
    mempool: Vec<(WalletId, Output)>,
    ledger: Vec<(WalletId, Output)>,
}

impl Emulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wallet funded by a single output.
    pub fn create_wallet(&mut self, lovelace: impl Into<Quantity>, assets: Assets) -> WalletId {
        let wallet = WalletId(self.wallets);
        self.wallets += 1;
        self.push_output(wallet, lovelace.into(), assets);
        wallet
    }

    pub fn create_utxo(
        &mut self,
        wallet: WalletId,
        lovelace: impl Into<Quantity>,
        assets: Assets,
    ) -> Result<OutputRef, EmulatorError> {
        if wallet.0 >= self.wallets {
            return Err(EmulatorError::UnknownWallet(wallet));
        }
        Ok(self.push_output(wallet, lovelace.into(), assets))
    }

    fn push_output(&mut self, wallet: WalletId, lovelace: Quantity, assets: Assets) -> OutputRef {
        // Every output gets its own transaction, hashed from a counter so runs are
        // reproducible.
        let hash = Hasher::<256>::hash(&self.tx_count.to_be_bytes());
        self.tx_count += 1;

        let reference = OutputRef::new(hash, 0);
        let output = Output::new(reference, Value::new(lovelace).with_assets(assets));
        debug!(?wallet, output = %reference, "queued output");
        self.mempool.push((wallet, output));
        reference
    }

    /// Advances the slot and confirms everything in the mempool.
    pub fn tick(&mut self, slots: u64) {
        self.slot += slots;
        debug!(slot = self.slot, confirmed = self.mempool.len(), "tick");
        self.ledger.append(&mut self.mempool);
    }

    pub fn slot(&self) -> u64 {
        self.slot
    }

    /// Confirmed outputs of `wallet`, oldest first.
    pub fn utxos(&self, wallet: WalletId) -> Vec<Output> {
        self.ledger
            .iter()
            .filter(|(owner, _)| *owner == wallet)
            .map(|(_, output)| output.clone())
            .collect()
    }

    /// Removes confirmed outputs from the ledger. Nothing is removed unless every
    /// reference is found.
    pub fn spend(&mut self, references: &[OutputRef]) -> Result<(), EmulatorError> {
        if let Some(missing) = references
            .iter()
            .find(|reference| !self.ledger.iter().any(|(_, o)| o.reference == **reference))
        {
            return Err(EmulatorError::UnknownOutput(*missing));
        }
        self.ledger
            .retain(|(_, output)| !references.contains(&output.reference));
        Ok(())
    }
}

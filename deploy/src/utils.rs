use std::time::Duration;

use anyhow::{anyhow, Result};
use ethers::{
    providers::Middleware,
    types::{TransactionReceipt, H256},
};
use tokio::time::sleep;

const WAIT_ATTEMPTS: usize = 600;

pub async fn wait_transaction<M: Middleware>(client: &M, transaction_hash: H256) -> Result<()> {
    for _ in 0..WAIT_ATTEMPTS {
        let transaction = client
            .get_transaction(transaction_hash)
            .await
            .map_err(|e| anyhow!("get transaction: {e}"))?;
        if transaction.is_some() {
            return Ok(());
        }
        sleep(Duration::from_secs(1)).await;
    }
    Err(anyhow!(
        "transaction {transaction_hash:?} was not accepted by the network"
    ))
}

pub async fn get_transaction_receipt<M: Middleware>(
    client: &M,
    transaction_hash: H256,
) -> Result<TransactionReceipt> {
    client
        .get_transaction_receipt(transaction_hash)
        .await
        .map_err(|e| anyhow!("get transaction receipt: {e}"))?
        .ok_or(anyhow!("transaction receipt not found"))
}

pub fn ensure_success(receipt: &TransactionReceipt) -> Result<()> {
    match receipt.status {
        Some(status) if status.as_u64() == 1 => Ok(()),
        _ => Err(anyhow!(
            "transaction {:?} reverted",
            receipt.transaction_hash
        )),
    }
}

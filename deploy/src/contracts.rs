use std::sync::Arc;

use anyhow::{anyhow, Result};
use ethers::{
    contract::{abigen, ContractFactory},
    providers::Middleware,
};

abigen!(
    MyTestToken,
    "contracts/compiled-contracts/MyTestToken.json"
);

/// Resolves a compiled contract by name to a deployable factory.
pub fn contract_factory<M: Middleware>(name: &str, client: Arc<M>) -> Result<ContractFactory<M>> {
    match name {
        "MyTestToken" => Ok(ContractFactory::new(
            MYTESTTOKEN_ABI.clone(),
            MYTESTTOKEN_BYTECODE.clone(),
            client,
        )),
        _ => Err(anyhow!("no compiled contract named {name}")),
    }
}

use std::{
    fs::{create_dir_all, File},
    path::Path,
    sync::Arc,
    time::Duration,
};

use anyhow::Result;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{H160, U256},
    utils::hex,
};
use serde::Serialize;

use crate::{
    contracts::{self, MyTestToken},
    utils,
};

const INITIAL_SUPPLY: u64 = 1000;
const MINT_AMOUNT: u64 = 100_000;

type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

pub struct Deploy {
    client: Arc<Client>,
}

#[derive(Serialize)]
struct DeployedAddresses {
    my_test_token: H160,
}

impl Deploy {
    pub async fn new(rpc: &str, sk: &str) -> Result<Self> {
        let wallet = LocalWallet::from_bytes(&hex::decode(sk.strip_prefix("0x").unwrap_or(sk))?)?;
        let provider = Provider::<Http>::try_from(rpc)?.interval(Duration::from_secs(1));

        let client = Arc::new(SignerMiddleware::new(
            provider.clone(),
            wallet.with_chain_id(provider.get_chainid().await?.as_u64()),
        ));

        Ok(Self { client })
    }

    pub async fn run(&self, confirmations: usize, artifacts_dir: &Path) -> Result<H160> {
        let token = self.deploy_my_test_token(confirmations).await?;
        let address = token.address();

        self.mint(&token).await?;

        println!("MyTestToken deployed to: {address:?}");
        self.write_addresses(artifacts_dir, address)?;
        Ok(address)
    }

    async fn deploy_my_test_token(&self, confirmations: usize) -> Result<MyTestToken<Client>> {
        let factory = contracts::contract_factory("MyTestToken", self.client.clone())?;
        let contract = factory
            .deploy(U256::from(INITIAL_SUPPLY))?
            .confirmations(confirmations)
            .legacy()
            .send()
            .await?;
        log::info!("deployment confirmed at {:?}", contract.address());

        Ok(MyTestToken::new(contract.address(), self.client.clone()))
    }

    async fn mint(&self, token: &MyTestToken<Client>) -> Result<()> {
        let call = token.mint(U256::from(MINT_AMOUNT)).legacy();
        let pending = call.send().await?;
        let transaction_hash = *pending;
        log::info!("mint transaction hash:{transaction_hash:?}");

        utils::wait_transaction(self.client.as_ref(), transaction_hash).await?;
        let receipt =
            utils::get_transaction_receipt(self.client.as_ref(), transaction_hash).await?;
        utils::ensure_success(&receipt)
    }

    fn write_addresses(&self, dir: &Path, address: H160) -> Result<()> {
        create_dir_all(dir)?;
        let file = File::create(dir.join("addresses.json"))?;
        serde_json::to_writer_pretty(
            &file,
            &DeployedAddresses {
                my_test_token: address,
            },
        )?;
        Ok(())
    }
}

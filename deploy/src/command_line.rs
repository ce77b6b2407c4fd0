use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::deploy::Deploy;

#[derive(Debug, Parser)]
pub struct CommandLine {
    #[clap(short, long, env = "RPC_URL", default_value = "http://127.0.0.1:8545")]
    rpc: String,

    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true)]
    sk: String,

    #[clap(short, long, env = "DEPLOY_CONFIRMATIONS", default_value_t = 1)]
    confirmations: usize,

    #[clap(short, long, default_value = "artifacts")]
    artifacts_dir: PathBuf,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let deploy = Deploy::new(&self.rpc, &self.sk).await?;
        deploy.run(self.confirmations, &self.artifacts_dir).await?;
        Ok(())
    }
}

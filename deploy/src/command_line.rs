use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{deploy::Deploy, network};

#[derive(Debug, Parser)]
pub struct CommandLine {
    #[clap(short, long, default_value = "coreTestnet2")]
    network: String,

    #[clap(long)]
    networks: Option<PathBuf>,

    #[clap(short, long)]
    rpc: Option<String>,

    #[clap(long)]
    sk: String,

    #[clap(short, long, default_value_t = 1)]
    confirmations: usize,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let mut net = network::resolve(&self.network, self.networks.as_deref())?;
        if let Some(rpc) = self.rpc {
            net.rpc = rpc;
        }

        let deploy = Deploy::new(&self.network, net, &self.sk, self.confirmations).await?;
        deploy.run().await?;
        Ok(())
    }
}

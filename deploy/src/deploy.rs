use std::sync::Arc;

use anyhow::{bail, Result};
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{H160, H256, U64},
    utils::{format_units, hex},
};

use crate::{
    contracts::Project,
    network::Network,
    utils::{checksum, verify_command},
};

pub struct Deploy {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
    network_name: String,
    confirmations: usize,
}

pub struct Deployment {
    pub address: H160,
    pub transaction_hash: H256,
    pub block_number: Option<U64>,
}

impl Deploy {
    pub async fn new(name: &str, network: Network, sk: &str, confirmations: usize) -> Result<Self> {
        let wallet = parse_wallet(sk)?;
        let provider = Provider::<Http>::try_from(network.rpc.as_str())?;

        let chain_id = provider.get_chainid().await?.as_u64();
        if chain_id != network.chain_id {
            bail!(
                "rpc {} reports chain id {}, expected {} for network {}",
                network.rpc,
                chain_id,
                network.chain_id,
                name
            );
        }

        let client = Arc::new(SignerMiddleware::new(
            provider,
            wallet.with_chain_id(chain_id),
        ));

        Ok(Self {
            client,
            network_name: name.to_string(),
            confirmations,
        })
    }

    pub async fn run(&self) -> Result<Deployment> {
        self.log_deployer().await?;

        println!("Deploying Project contract...");
        let deployment = self.deploy_project().await?;
        log::info!(
            "transaction hash:{:?} block:{:?}",
            deployment.transaction_hash,
            deployment.block_number
        );

        println!("{}", deployment.report(&self.network_name));
        Ok(deployment)
    }

    async fn log_deployer(&self) -> Result<()> {
        let address = self.client.address();
        let balance = self.client.get_balance(address, None).await?;
        log::info!(
            "deployer address:{:?} balance:{}",
            address,
            format_units(balance, "ether")?
        );
        Ok(())
    }

    async fn deploy_project(&self) -> Result<Deployment> {
        let (contract, receipt) = Project::deploy(self.client.clone(), ())?
            .legacy()
            .confirmations(self.confirmations)
            .send_with_receipt()
            .await?;

        Ok(Deployment {
            address: contract.address(),
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

impl Deployment {
    pub fn report(&self, network: &str) -> String {
        [
            format!("Project deployed to: {}", checksum(self.address)),
            "Deployment complete!".to_string(),
            "Contract deployment details for verification:".to_string(),
            verify_command(network, self.address),
        ]
        .join("\n")
    }
}

fn parse_wallet(sk: &str) -> Result<LocalWallet> {
    let sk = sk.strip_prefix("0x").unwrap_or(sk);
    Ok(LocalWallet::from_bytes(&hex::decode(sk)?)?)
}

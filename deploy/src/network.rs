use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub rpc: String,
    pub chain_id: u64,
}

fn builtin() -> HashMap<String, Network> {
    HashMap::from([
        (
            "coreTestnet2".to_string(),
            Network {
                rpc: "https://rpc.test2.btcs.network".to_string(),
                chain_id: 1114,
            },
        ),
        (
            "coreMainnet".to_string(),
            Network {
                rpc: "https://rpc.coredao.org".to_string(),
                chain_id: 1116,
            },
        ),
    ])
}

pub fn resolve(name: &str, extra: Option<&Path>) -> Result<Network> {
    let extra = match extra {
        Some(path) => parse(&fs::read_to_string(path)?)?,
        None => HashMap::new(),
    };
    lookup(name, extra)
}

fn parse(data: &str) -> Result<HashMap<String, Network>> {
    Ok(serde_json::from_str(data)?)
}

fn lookup(name: &str, extra: HashMap<String, Network>) -> Result<Network> {
    let mut networks = builtin();
    networks.extend(extra);
    networks
        .remove(name)
        .ok_or(anyhow!("unknown network {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_builtin_networks() {
        let testnet = lookup("coreTestnet2", HashMap::new()).unwrap();
        assert_eq!(testnet.rpc, "https://rpc.test2.btcs.network");
        assert_eq!(testnet.chain_id, 1114);

        let mainnet = lookup("coreMainnet", HashMap::new()).unwrap();
        assert_eq!(mainnet.chain_id, 1116);
    }

    #[test]
    fn unknown_network_is_an_error() {
        let err = lookup("sepolia", HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("unknown network sepolia"));
    }

    #[test]
    fn extra_networks_extend_and_shadow_builtins() {
        let extra = parse(
            r#"{
                "localhost": {"rpc": "http://127.0.0.1:8545", "chainId": 31337},
                "coreTestnet2": {"rpc": "http://10.0.0.7:8545", "chainId": 1114}
            }"#,
        )
        .unwrap();

        let localhost = lookup("localhost", extra.clone()).unwrap();
        assert_eq!(localhost.chain_id, 31337);

        let shadowed = lookup("coreTestnet2", extra).unwrap();
        assert_eq!(shadowed.rpc, "http://10.0.0.7:8545");
    }

    #[test]
    fn rejects_malformed_network_file() {
        assert!(parse(r#"{"localhost": {"rpc": "http://127.0.0.1:8545"}}"#).is_err());
    }
}

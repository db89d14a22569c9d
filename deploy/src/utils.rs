use ethers::{types::H160, utils::to_checksum};

pub fn checksum(address: H160) -> String {
    to_checksum(&address, None)
}

pub fn verify_command(network: &str, address: H160) -> String {
    format!(
        "npx hardhat verify --network {} {}",
        network,
        checksum(address)
    )
}

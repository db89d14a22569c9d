use ethers::contract::abigen;

abigen!(Project, "compiled-contracts/Project.json");

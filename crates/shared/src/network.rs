/// Maps a chain ID to the network name.
///
/// Unknown chains (anything a dev node like Ganache or Anvil may report)
/// fall back to `chain-<id>` instead of failing, since deployments to
/// throwaway networks are the common case.
pub fn network_name(chain_id: u64) -> String {
    // You can find a list of available networks by network and chain id here:
    // https://chainid.network/chains.json
    match chain_id {
        1 => "mainnet",
        5 => "goerli",
        100 => "xdai",
        11155111 => "sepolia",
        42161 => "arbitrum-one",
        1337 => "ganache",
        31337 => "hardhat",
        _ => return format!("chain-{chain_id}"),
    }
    .to_string()
}

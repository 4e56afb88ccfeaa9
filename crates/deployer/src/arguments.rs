use {clap::Parser, std::path::PathBuf, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Network name recorded in the deployment file. By default the name
    /// is derived from the chain id the node reports.
    #[clap(long, env)]
    pub network: Option<String>,

    /// Number of block confirmations to wait for before considering the
    /// deployment final.
    #[clap(long, env, default_value = "1")]
    pub confirmations: usize,

    /// Path the deployment record is written to.
    #[clap(long, env, default_value = "deployedAddress.json")]
    pub deployment_file: PathBuf,

    /// Only log the deployed address instead of also persisting it to
    /// the deployment file.
    #[clap(long, env)]
    pub skip_deployment_file: bool,

    /// Gas limit for the deployment transaction. The node estimates it
    /// when unset.
    #[clap(long, env)]
    pub gas_limit: Option<u64>,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "network: {:?}", self.network)?;
        writeln!(f, "confirmations: {}", self.confirmations)?;
        writeln!(f, "deployment_file: {}", self.deployment_file.display())?;
        writeln!(f, "skip_deployment_file: {}", self.skip_deployment_file)?;
        writeln!(f, "gas_limit: {:?}", self.gas_limit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_hardhat_setup() {
        let args = Arguments::parse_from(["deployer"]);
        assert_eq!(args.node_url.as_str(), "http://localhost:8545/");
        assert_eq!(args.network, None);
        assert_eq!(args.confirmations, 1);
        assert_eq!(
            args.deployment_file,
            PathBuf::from("deployedAddress.json")
        );
        assert!(!args.skip_deployment_file);
        assert_eq!(args.gas_limit, None);
    }

    #[test]
    fn parses_overrides() {
        let args = Arguments::parse_from([
            "deployer",
            "--node-url",
            "http://geth:8545",
            "--network",
            "sepolia",
            "--confirmations",
            "3",
            "--deployment-file",
            "/tmp/out.json",
            "--skip-deployment-file",
            "--gas-limit",
            "8000000",
        ]);
        assert_eq!(args.node_url.as_str(), "http://geth:8545/");
        assert_eq!(args.network.as_deref(), Some("sepolia"));
        assert_eq!(args.confirmations, 3);
        assert_eq!(args.deployment_file, PathBuf::from("/tmp/out.json"));
        assert!(args.skip_deployment_file);
        assert_eq!(args.gas_limit, Some(8_000_000));
    }
}

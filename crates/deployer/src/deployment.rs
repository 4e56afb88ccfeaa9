use {
    crate::arguments::Arguments,
    anyhow::{Context as _, Result},
    chrono::{DateTime, Utc},
    contracts::CustomsClearance,
    serde::Serialize,
    shared::ethrpc::Web3,
    std::path::Path,
};

pub const CONTRACT_NAME: &str = "CustomsClearance";

/// Metadata describing a single completed deployment. Written once for
/// downstream consumers of the contract and never read back by this code.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub contract_address: String,
    pub network: String,
    pub deployed_at: DateTime<Utc>,
}

impl DeploymentRecord {
    /// Writes the record as pretty printed JSON, unconditionally replacing
    /// whatever is at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write deployment record to {}", path.display()))
    }
}

/// Deploys the contract with no constructor arguments and waits until the
/// network confirmed the deployment.
pub async fn deploy(web3: &Web3, args: &Arguments) -> Result<CustomsClearance> {
    let mut builder = CustomsClearance::builder(web3).confirmations(args.confirmations);
    if let Some(gas_limit) = args.gas_limit {
        builder = builder.gas(gas_limit.into());
    }
    tracing::debug!("submitting deployment transaction");
    builder
        .deploy()
        .await
        .context("contract deployment failed")
}

/// The full 20 byte address as a lowercase hex string.
pub fn format_address(address: ethcontract::Address) -> String {
    format!("{address:#x}")
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs};

    fn record(address: &str) -> DeploymentRecord {
        DeploymentRecord {
            contract_name: CONTRACT_NAME.to_string(),
            contract_address: address.to_string(),
            network: "ganache".to_string(),
            deployed_at: Utc::now(),
        }
    }

    #[test]
    fn serializes_camel_case_with_two_space_indent() {
        let json = serde_json::to_string_pretty(
            &record("0x7c2d9f1d98b17c5014be2294db7e517b3517872b"),
        )
        .unwrap();
        assert!(json.contains("\n  \"contractName\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["contractName", "contractAddress", "network", "deployedAt"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(
            object["contractAddress"],
            "0x7c2d9f1d98b17c5014be2294db7e517b3517872b"
        );
    }

    #[test]
    fn overwrites_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployedAddress.json");

        record("0x0000000000000000000000000000000000000001")
            .write(&path)
            .unwrap();
        record("0x0000000000000000000000000000000000000002")
            .write(&path)
            .unwrap();

        // A second run replaces the file instead of appending to it, so the
        // contents must still be a single valid JSON document.
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value["contractAddress"],
            "0x0000000000000000000000000000000000000002"
        );
    }

    #[test]
    fn deployed_at_round_trips_as_rfc3339() {
        let record = record("0x0000000000000000000000000000000000000001");
        let json = serde_json::to_value(&record).unwrap();
        let deployed_at =
            DateTime::parse_from_rfc3339(json["deployedAt"].as_str().unwrap()).unwrap();
        let age = (Utc::now() - deployed_at.with_timezone(&Utc))
            .num_seconds()
            .abs();
        assert!(age < 5, "deployedAt is {age}s away from now");
    }

    #[test]
    fn formats_full_address() {
        let address: ethcontract::Address = "0x7C2D9F1d98B17c5014BE2294DB7E517b3517872b"
            .parse()
            .unwrap();
        assert_eq!(
            format_address(address),
            "0x7c2d9f1d98b17c5014be2294db7e517b3517872b"
        );
    }

    #[test]
    fn artifact_carries_deployable_bytecode() {
        let creation = contracts::bytecode!(CustomsClearance).0;
        let runtime = contracts::deployed_bytecode!(CustomsClearance).0;
        assert!(!creation.is_empty());
        assert!(!runtime.is_empty());
        // The creation code embeds the runtime it returns.
        assert!(creation
            .windows(runtime.len())
            .any(|window| window == runtime));
    }
}

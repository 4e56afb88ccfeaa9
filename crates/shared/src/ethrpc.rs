use {
    anyhow::{Context as _, Result},
    ethcontract::{dyns::DynWeb3, transport::DynTransport, web3::transports::Http},
    url::Url,
};

pub type Web3 = DynWeb3;
pub type Web3Transport = DynTransport;

/// Create a Web3 instance over an HTTP transport.
pub fn web3(url: &Url) -> Result<Web3> {
    let http = Http::new(url.as_str())
        .with_context(|| format!("failed to create HTTP transport for {url}"))?;
    Ok(Web3::new(Web3Transport::new(http)))
}

/// Convenience method to create a transport from a URL.
pub fn create_test_transport(url: &str) -> Web3Transport {
    Web3Transport::new(Http::new(url).unwrap())
}

/// Like above but takes url from the environment NODE_URL.
pub fn create_env_test_transport() -> Web3Transport {
    create_test_transport(&std::env::var("NODE_URL").unwrap())
}

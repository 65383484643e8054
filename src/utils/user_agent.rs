/// Browser-like User-Agent sent to the discovery endpoint.
pub fn browser_user_agent() -> &'static str {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
}

/// Default client tag reported with every result.
pub fn client_tag() -> String {
    format!("ducos1-miner_v{}", env!("CARGO_PKG_VERSION"))
}

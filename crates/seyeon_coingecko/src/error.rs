use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoingeckoError {
    /// The service answered with a non-200 status.
    #[error("Error fetching data from CoinGecko: {message}")]
    Api { message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl CoingeckoError {
    pub fn is_api(&self) -> bool {
        matches!(self, CoingeckoError::Api { .. })
    }
}

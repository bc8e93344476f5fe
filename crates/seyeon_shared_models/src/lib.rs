use serde::{Deserialize, Serialize};

/// One entry of the CoinGecko `/coins/markets` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,

    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
}

impl MarketRecord {
    pub fn new(name: &str, symbol: &str, change_24h: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price_change_percentage_24h: change_24h,
            id: None,
            current_price: None,
            market_cap_rank: None,
            price_change_percentage_1h_in_currency: None,
            price_change_percentage_7d_in_currency: None,
        }
    }
}

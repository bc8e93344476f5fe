use bon::Builder;
use serde::Serialize;
use seyeon_shared_models::MarketRecord;

use crate::method::Method;

#[derive(Serialize, Debug, Clone, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct MarketsParams {
    #[builder(default = String::from("usd"))]
    pub vs_currency: String,
    #[builder(default = String::from("market_cap_desc"))]
    pub order: String,
    #[builder(default = 100)]
    pub per_page: u32,
    #[builder(default = 1)]
    pub page: u32,
    /// Comma separated windows, e.g. `1h,24h,7d`.
    #[builder(default = String::from("1h,24h,7d"))]
    pub price_change_percentage: String,
}

impl Default for MarketsParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub struct CoinsMarkets;

impl Method for CoinsMarkets {
    const PATH: &'static str = "/coins/markets";

    type Response = Vec<MarketRecord>;
    type Params = MarketsParams;
}

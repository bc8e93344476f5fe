use serde::Serialize;

/// A CoinGecko endpoint, described by its path under [`crate::BASE_URL`],
/// the query it takes and the body it answers with.
///
/// Implementors are unit structs such as [`crate::markets::CoinsMarkets`];
/// [`crate::CoingeckoClient::call`] does the rest.
pub trait Method {
    /// Appended to the client's base URL, leading slash included.
    const PATH: &'static str;

    type Response: serde::de::DeserializeOwned;
    /// Serialized as the query string.
    type Params: Serialize;
}

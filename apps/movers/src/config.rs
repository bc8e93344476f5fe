use seyeon_coingecko::markets::MarketsParams;
use seyeon_ranking::DEFAULT_LIMIT;

/// Everything the report needs, fixed at build time.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Entries per list.
    pub limit: usize,
    pub params: MarketsParams,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            params: MarketsParams::default(),
        }
    }
}

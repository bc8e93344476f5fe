//! Ranks market records by their 24 hour price change.
//!
//! Records without a 24h change are dropped before sorting, so they never
//! show up in either list. What is left is stable-sorted ascending: the
//! head of the order gives the worst performers and the tail, reversed,
//! the best.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use seyeon_shared_models::MarketRecord;

pub const DEFAULT_LIMIT: usize = 5;

/// A record that made it into one of the ranked lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pub name: String,
    /// Always uppercase.
    pub symbol: String,
    pub change_24h: f64,
}

impl Mover {
    fn from_record(record: MarketRecord) -> Option<Self> {
        let change_24h = record.price_change_percentage_24h?;

        Some(Self {
            name: record.name,
            symbol: record.symbol.to_uppercase(),
            change_24h,
        })
    }
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:.2}%", self.name, self.symbol, self.change_24h)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Movers {
    /// Ascending: the biggest loser first.
    pub worst: Vec<Mover>,
    /// Descending: the biggest gainer first.
    pub best: Vec<Mover>,
}

pub fn rank_movers<I>(records: I, limit: usize) -> Movers
where
    I: IntoIterator<Item = MarketRecord>,
{
    let ranked: Vec<Mover> = records
        .into_iter()
        .filter_map(Mover::from_record)
        .sorted_by(|a, b| {
            a.change_24h
                .partial_cmp(&b.change_24h)
                .unwrap_or(Ordering::Equal)
        })
        .collect();

    let take = limit.min(ranked.len());
    let worst = ranked[..take].to_vec();
    let best = ranked[ranked.len() - take..].iter().rev().cloned().collect();

    Movers { worst, best }
}

use std::io::{self, Write};

use seyeon_coingecko::CoingeckoError;
use seyeon_ranking::{Mover, Movers};

pub fn write_report<W: Write>(out: &mut W, movers: &Movers, limit: usize) -> io::Result<()> {
    writeln!(
        out,
        "Top {limit} Worst Performing Cryptocurrencies in the Last 24 Hours:"
    )?;
    write_movers(out, &movers.worst)?;

    writeln!(out)?;
    writeln!(
        out,
        "Top {limit} Best Performing Cryptocurrencies in the Last 24 Hours:"
    )?;
    write_movers(out, &movers.best)?;

    Ok(())
}

fn write_movers<W: Write>(out: &mut W, movers: &[Mover]) -> io::Result<()> {
    for mover in movers {
        writeln!(out, "{mover}")?;
    }
    Ok(())
}

/// The single line printed when the run fails.
pub fn failure_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CoingeckoError>() {
        Some(api) if api.is_api() => api.to_string(),
        _ => format!("An error occurred: {err}"),
    }
}

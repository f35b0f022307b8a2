//! `value` subcommand

use anyhow::Result;
use relic_engine::{BatchStrategy, Refinement};

pub fn handle(
    index: &str,
    relic: &str,
    refinement: Refinement,
    strategy: BatchStrategy,
) -> Result<()> {
    let index = super::load_index(index)?;
    let value = index.average_return(relic, refinement, strategy, None)?;

    println!("{relic} {refinement} {strategy}: {value}");

    Ok(())
}

//! # relic-index
//!
//! Builds relic indexes for `relic-engine` from public sources: the relic
//! drop table page, market price history, and the game's public export
//! manifest (ducat values and set requirements).

pub mod config;
pub mod droptable;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod pipeline;
pub mod prices;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use droptable::{parse_drop_table, DropTable};
#[doc(inline)]
pub use error::IngestError;
#[doc(inline)]
pub use fetch::fetch_index;
#[doc(inline)]
pub use manifest::ManifestData;
#[doc(inline)]
pub use pipeline::{assemble, build_index};
#[doc(inline)]
pub use prices::parse_price_history;

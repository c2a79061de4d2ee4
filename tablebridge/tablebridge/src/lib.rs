//! Connector that exposes table-format storage to a host query engine.
//!
//! The engine's plugin loader builds one [`Connector`] per catalog from three
//! capability providers (see [`spi`]). Providers translate table schemas
//! with [`host::translate`] whenever a source schema is shown to the engine.

mod connector;
mod error;
pub mod spi;
mod transaction;

pub use connector::{Connector, ConnectorBuilder};
pub use error::ConnectorError;
pub use tablebridge_arrow as arrow;
pub use tablebridge_core as core;
pub use tablebridge_host as host;
pub use transaction::{IsolationLevel, TransactionHandle};

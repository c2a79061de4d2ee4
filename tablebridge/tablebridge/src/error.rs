//! Error types for the connector facade.

use tablebridge_arrow::ArrowSchemaError;
use tablebridge_host::TranslateError;

use crate::{spi::SchemaTableName, transaction::IsolationLevel};

/// Errors produced by [`Connector`](crate::Connector) and its providers.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// The engine asked for an isolation level stronger than the one offered.
    #[error("connector supports isolation level {supported}, but {requested} was requested")]
    IncompatibleIsolationLevel {
        supported: IsolationLevel,
        requested: IsolationLevel,
    },

    /// A capability provider was not supplied to
    /// [`ConnectorBuilder`](crate::ConnectorBuilder).
    #[error("{provider} is not set")]
    MissingProvider { provider: &'static str },

    #[error("table '{table}' not found")]
    TableNotFound { table: SchemaTableName },

    /// A table schema contains a type the host engine cannot represent.
    #[error("failed to translate schema of '{table}': {source}")]
    Translate {
        table: SchemaTableName,
        #[source]
        source: TranslateError,
    },

    #[error(transparent)]
    ArrowSchema(#[from] ArrowSchemaError),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error raised inside a capability provider implementation.
    #[error(transparent)]
    Provider(Box<dyn std::error::Error + Send + Sync>),
}

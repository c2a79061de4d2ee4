//! Connector facade handed to the host engine's plugin loader.

use crate::{
    error::ConnectorError,
    spi::{ConnectorMetadata, ConnectorPageSourceProvider, ConnectorSplitManager},
    transaction::{IsolationLevel, TransactionHandle},
};

/// One catalog's view of table-format storage.
///
/// Owns its three capability providers for its whole lifetime. All methods
/// take `&self` and the connector holds no mutable state.
pub struct Connector {
    metadata: Box<dyn ConnectorMetadata>,
    split_manager: Box<dyn ConnectorSplitManager>,
    page_source_provider: Box<dyn ConnectorPageSourceProvider>,
}

/// Builder for configuring [`Connector`].
#[derive(Default)]
pub struct ConnectorBuilder {
    metadata: Option<Box<dyn ConnectorMetadata>>,
    split_manager: Option<Box<dyn ConnectorSplitManager>>,
    page_source_provider: Option<Box<dyn ConnectorPageSourceProvider>>,
}

impl Connector {
    /// The only isolation level storage snapshots provide.
    pub const ISOLATION_LEVEL: IsolationLevel = IsolationLevel::ReadCommitted;

    /// Create a builder for [`Connector`].
    pub fn builder() -> ConnectorBuilder {
        ConnectorBuilder::default()
    }

    pub fn new(
        metadata: Box<dyn ConnectorMetadata>,
        split_manager: Box<dyn ConnectorSplitManager>,
        page_source_provider: Box<dyn ConnectorPageSourceProvider>,
    ) -> Self {
        tracing::info!(isolation_level = %Self::ISOLATION_LEVEL, "connector created");
        Self {
            metadata,
            split_manager,
            page_source_provider,
        }
    }

    /// Begin a transaction.
    ///
    /// Succeeds for any level up to read committed and always returns the same
    /// handle. `read_only` is accepted for every level; storage is never
    /// written through this connector's transactions.
    pub fn begin_transaction(
        &self,
        isolation_level: IsolationLevel,
        read_only: bool,
    ) -> Result<TransactionHandle, ConnectorError> {
        if !Self::ISOLATION_LEVEL.meets_requirement_of(isolation_level) {
            tracing::warn!(
                requested = %isolation_level,
                supported = %Self::ISOLATION_LEVEL,
                "isolation level not supported"
            );
            return Err(ConnectorError::IncompatibleIsolationLevel {
                supported: Self::ISOLATION_LEVEL,
                requested: isolation_level,
            });
        }
        tracing::debug!(isolation_level = %isolation_level, read_only, "begin transaction");
        Ok(TransactionHandle)
    }

    /// The metadata provider. Every transaction sees the same one.
    pub fn metadata(&self, _transaction: TransactionHandle) -> &dyn ConnectorMetadata {
        self.metadata.as_ref()
    }

    pub fn split_manager(&self) -> &dyn ConnectorSplitManager {
        self.split_manager.as_ref()
    }

    pub fn page_source_provider(&self) -> &dyn ConnectorPageSourceProvider {
        self.page_source_provider.as_ref()
    }
}

impl ConnectorBuilder {
    pub fn with_metadata(mut self, metadata: impl ConnectorMetadata + 'static) -> Self {
        self.metadata = Some(Box::new(metadata));
        self
    }

    pub fn with_split_manager(
        mut self,
        split_manager: impl ConnectorSplitManager + 'static,
    ) -> Self {
        self.split_manager = Some(Box::new(split_manager));
        self
    }

    pub fn with_page_source_provider(
        mut self,
        page_source_provider: impl ConnectorPageSourceProvider + 'static,
    ) -> Self {
        self.page_source_provider = Some(Box::new(page_source_provider));
        self
    }

    /// Build the connector. Fails if any provider was not set.
    pub fn build(self) -> Result<Connector, ConnectorError> {
        let missing = |provider| ConnectorError::MissingProvider { provider };
        Ok(Connector::new(
            self.metadata.ok_or_else(|| missing("metadata provider"))?,
            self.split_manager.ok_or_else(|| missing("split manager"))?,
            self.page_source_provider
                .ok_or_else(|| missing("page source provider"))?,
        ))
    }
}

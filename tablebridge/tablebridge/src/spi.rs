//! Capability providers the host engine obtains from a [`Connector`](crate::Connector).
//!
//! Implementations live outside this crate. Only the boundary is defined
//! here, plus the schema helpers providers use to present source schemas
//! to the engine.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::Arc,
};

use arrow::{datatypes::SchemaRef, record_batch::RecordBatch};
use tablebridge_arrow::columns_to_arrow_schema;
use tablebridge_core::SourceFields;
use tablebridge_host::{ColumnMetadata, translate_schema};

use crate::{error::ConnectorError, transaction::TransactionHandle};

/// Fully qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaTableName {
    pub schema: String,
    pub table: String,
}

impl SchemaTableName {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }
}

impl Display for SchemaTableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

/// Catalog view of the tables in storage.
pub trait ConnectorMetadata: Send + Sync {
    /// Tables in `schema`, or in every schema when `None`.
    fn list_tables(&self, schema: Option<&str>) -> Result<Vec<SchemaTableName>, ConnectorError>;

    /// Schema of `table` as recorded in storage metadata, `None` if the table
    /// does not exist.
    fn source_schema(
        &self,
        table: &SchemaTableName,
    ) -> Result<Option<SourceFields>, ConnectorError>;

    /// Columns of `table` in host types.
    ///
    /// Fails as a whole if any column type cannot be translated.
    fn table_columns(
        &self,
        table: &SchemaTableName,
    ) -> Result<Vec<ColumnMetadata>, ConnectorError> {
        let fields = self
            .source_schema(table)?
            .ok_or_else(|| ConnectorError::TableNotFound {
                table: table.clone(),
            })?;
        translate_schema(&fields).map_err(|source| ConnectorError::Translate {
            table: table.clone(),
            source,
        })
    }
}

/// Scannable chunk of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorSplit {
    pub table: SchemaTableName,
    /// Storage files covered by this split.
    pub files: Vec<String>,
}

/// Plans which parts of a table to scan.
pub trait ConnectorSplitManager: Send + Sync {
    fn get_splits(
        &self,
        transaction: TransactionHandle,
        table: &SchemaTableName,
    ) -> Result<Vec<ConnectorSplit>, ConnectorError>;
}

/// Pages of one split, as Arrow record batches sharing [`PageSource::schema`].
pub trait PageSource: Iterator<Item = Result<RecordBatch, ConnectorError>> + Send {
    fn schema(&self) -> SchemaRef;
}

/// Opens page sources for splits.
pub trait ConnectorPageSourceProvider: Send + Sync {
    fn create_page_source(
        &self,
        transaction: TransactionHandle,
        split: &ConnectorSplit,
        columns: &[ColumnMetadata],
    ) -> Result<Box<dyn PageSource>, ConnectorError>;
}

/// Arrow schema of the pages that carry `columns`.
pub fn page_schema(columns: &[ColumnMetadata]) -> Result<SchemaRef, ConnectorError> {
    Ok(Arc::new(columns_to_arrow_schema(columns)?))
}

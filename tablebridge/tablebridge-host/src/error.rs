use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The source type has no host counterpart.
    #[error("Unsupported type: {type_name}")]
    UnsupportedType { type_name: String },
    /// A table column could not be translated; the whole schema is rejected.
    #[error("column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: Box<TranslateError>,
    },
}

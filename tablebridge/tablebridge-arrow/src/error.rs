use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowSchemaError {
    #[error("decimal({precision},{scale}) is outside the supported range (precision 1..={max}, scale <= precision)")]
    DecimalOutOfRange { precision: u8, scale: u8, max: u8 },
}

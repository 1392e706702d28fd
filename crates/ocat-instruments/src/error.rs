use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument type: {0}")]
    UnknownInstrument(i32),
}

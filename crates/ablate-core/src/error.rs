use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Span [{start}:{end}] ({label}) out of bounds for {len} tokens")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        label: String,
        len: usize,
    },

    #[error("Recognizer failure: {0}")]
    RecognizerFailure(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

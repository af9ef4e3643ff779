use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutocomboError {
    #[error("No items to pick from.\n\nPipe newline-separated items on stdin or pass a file.")]
    NoItems,

    #[error("Invalid item list: {0}")]
    InvalidItems(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

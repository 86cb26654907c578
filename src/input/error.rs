#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input closed")]
    Closed,
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Console reader thread panicked")]
    ReaderPanicked,
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unparseable date '{value}' in time header at line {line_number}")]
    MalformedDate { line_number: usize, value: String },

    #[error("failed to read log input: {0}")]
    Read(#[from] std::io::Error),
}

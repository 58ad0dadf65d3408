use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid strand '{0}': expected '+' or '-'")]
    InvalidStrand(String),
}

use crate::guard::DomainError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("{what}: expected {expected} columns, found {found}")]
    Shape {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: {source}")]
    Domain {
        row: usize,
        #[source]
        source: DomainError,
    },
}

pub type Result<T> = std::result::Result<T, TransportError>;

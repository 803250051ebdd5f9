use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("authorization failed")]
    AuthorizationFailed,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

use aroi_components::PriceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}

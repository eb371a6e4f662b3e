use ft_core::FtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FtError),
}

pub type SimResult<T> = Result<T, SimError>;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LecternError {
    #[error("Invalid color token: {0}")]
    InvalidColor(String),

    #[error("Invalid length token: {0}")]
    InvalidLength(String),
}

pub type LecternResult<T> = Result<T, LecternError>;

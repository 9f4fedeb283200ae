use thiserror::Error;

use crate::{dom::DomError, gateways::map::MapError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing attribute '{0}'")]
    MissingAttribute(String),
    #[error("Missing child element with class '{0}'")]
    MissingLabel(String),
    #[error("Element has no parent")]
    MissingParent,
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Map(#[from] MapError),
}

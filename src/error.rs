
use crate::eval::EvalError;
use crate::eval::shunting_yard::ShuntingYardError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  EvalError(#[from] EvalError),
  #[error("{0}")]
  ShuntingYardError(#[from] ShuntingYardError<EvalError>),
}


pub mod command;
pub mod error;
pub mod eval;
pub mod expr;
pub mod state;

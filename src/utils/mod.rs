pub mod error_helpers;

pub use error_helpers::{error_chain_fmt, error_chain_line};

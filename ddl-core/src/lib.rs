pub mod batch;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod schema;
pub mod workbook;

pub use error::{DdlError, Result};

pub mod config;
pub mod error;
pub mod markup;
pub mod types;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use markup::escape_html;
pub use types::*;

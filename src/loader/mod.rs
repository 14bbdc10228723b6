//! Detection log loading.

mod detection;
mod parser;
mod record;

pub use detection::Detection;
pub use parser::load_log;
pub use record::LogRecord;

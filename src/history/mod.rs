mod reader;
mod revert;
mod types;
mod writer;

pub use reader::load;
pub use revert::reverse;
pub use types::*;
pub use writer::{clear, record, write_log, write_log_at};

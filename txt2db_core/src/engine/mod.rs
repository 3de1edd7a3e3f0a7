pub mod execute;
pub mod format;
pub mod result;

pub use execute::{execute_command, matches_predicate};
pub use format::{format_select, parse_select_output, TabularData};
pub use result::{CommandResponse, QueryResult};

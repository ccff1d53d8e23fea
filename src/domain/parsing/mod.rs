pub mod log_parser;

pub use log_parser::{LOG_EXTENSIONS, ParseError, ip_from_file_name, parse_log};

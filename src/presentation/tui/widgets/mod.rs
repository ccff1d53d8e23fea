pub mod directory_input;
pub mod file_list;
pub mod status_line;

pub mod cli;
pub mod html;
pub mod tui;

pub mod collect;
pub mod config;
pub mod report;
pub mod scan;

pub mod disk_collector;
pub mod service_probe;
pub mod sysinfo_collector;

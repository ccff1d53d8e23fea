pub mod entities;
pub mod parsing;
pub mod ports;
pub mod value_objects;

pub mod colors;
pub mod entity;
pub mod ports;
pub mod types;

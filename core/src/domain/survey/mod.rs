mod content;
pub mod entities;
pub mod ports;
pub mod services;

pub mod entities;
pub mod matcher;
pub mod no_food;
pub mod normalizer;
pub mod nutrition_parser;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

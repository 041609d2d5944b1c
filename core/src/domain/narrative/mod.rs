pub mod entities;
pub mod fallback;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub mod authors;
pub mod config;
pub mod prepare;
pub mod roster;

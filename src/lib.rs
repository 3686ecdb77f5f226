pub mod codec;
pub mod config;
pub mod error;
pub mod fol;
pub mod render;
pub mod sql;
pub mod validate;

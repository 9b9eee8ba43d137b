mod structs;

#[path = "impl.rs"]
mod config_impl;

pub use structs::*;

#![allow(clippy::let_unit_value)]
mod macros;
pub mod paths;

include!(concat!(env!("OUT_DIR"), "/CustomsClearance.rs"));

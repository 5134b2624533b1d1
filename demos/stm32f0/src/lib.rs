#![no_std]

pub mod panel_pins;
pub mod time_source;

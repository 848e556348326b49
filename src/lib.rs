#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod identity;
pub mod logo;
pub mod version;

pub use version::{UART_VERSION, VERSION};

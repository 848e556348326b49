use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use serde::{Deserialize, Serialize};

use crate::version::{UART_VERSION, VERSION};

pub const FIRMWARE: &str = "TRX";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeviceIdentity {
    pub firmware: String,
    pub version: String,
    pub uart_version: String,
}

impl DeviceIdentity {
    pub fn current() -> Self {
        Self {
            firmware: FIRMWARE.to_string(),
            version: VERSION.to_string(),
            uart_version: UART_VERSION.to_string(),
        }
    }
}

/// Hello packet sent to the server on connect.
pub fn identity_json() -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&DeviceIdentity::current())
}

pub fn version_line() -> heapless::String<64> {
    let mut line = heapless::String::new();
    _ = core::fmt::write(&mut line, format_args!("VER: {}", VERSION));
    line
}

// Reported verbatim, even when empty.
pub fn uart_identity() -> &'static str {
    UART_VERSION
}

pub fn log_startup() {
    log::info!("{} {}", FIRMWARE, version_line());
    if !UART_VERSION.is_empty() {
        log::debug!("uart identity: {}", UART_VERSION);
    }
}

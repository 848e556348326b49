#[cfg(feature = "gen_version")]
include!(concat!(env!("OUT_DIR"), "/version.rs"));

#[cfg(not(feature = "gen_version"))]
pub const VERSION: &str = "";

// Different than VERSION for compatibility with Chirp, F4INX.
#[cfg(not(feature = "gen_version"))]
pub const UART_VERSION: &str = "";

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "gen_version")]
    #[test]
    fn version_matches_build_env() {
        assert_eq!(VERSION, option_env!("VERSION_STRING").unwrap_or(""));
    }

    #[cfg(feature = "gen_version")]
    #[test]
    fn uart_version_matches_build_env() {
        assert_eq!(UART_VERSION, option_env!("UART_VERSION_STRING").unwrap_or(""));
    }

    #[cfg(not(feature = "gen_version"))]
    #[test]
    fn fallback_constants_are_empty() {
        assert_eq!(VERSION, "");
        assert_eq!(UART_VERSION, "");
    }
}

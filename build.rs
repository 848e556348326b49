use std::path::Path;

const VERSION_TEMPLATE: &'static str = r#"
pub const VERSION: &'static str = "{version}";

// Different than VERSION for compatibility with Chirp, F4INX.
pub const UART_VERSION: &'static str = "{uart_version}";
"#;

fn main() {
    println!("cargo:rerun-if-changed=*.env*");
    println!("cargo:rerun-if-env-changed=VERSION_STRING");
    println!("cargo:rerun-if-env-changed=UART_VERSION_STRING");

    let mut version = None;
    let mut uart_version = None;

    if let Ok(mut iter) = dotenvy::dotenv_iter() {
        while let Some(Ok((key, value))) = iter.next() {
            println!("cargo:rustc-env={key}={value}");
            match key.as_str() {
                "VERSION_STRING" => version = Some(value),
                "UART_VERSION_STRING" => uart_version = Some(value),
                _ => {}
            }
        }
    }

    // .env wins over process env, same as the rustc-env re-export above.
    let version = version
        .or_else(|| std::env::var("VERSION_STRING").ok())
        .unwrap_or_default();
    let uart_version = uart_version
        .or_else(|| std::env::var("UART_VERSION_STRING").ok())
        .unwrap_or_default();

    let gen = VERSION_TEMPLATE
        .replace("{version}", &version)
        .replace("{uart_version}", &uart_version);

    let out_dir = std::env::var("OUT_DIR").unwrap();
    std::fs::write(Path::new(&out_dir).join("version.rs"), gen.trim()).unwrap();
}

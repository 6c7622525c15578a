use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Saitaku";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the check server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory.
/// `SAITAKU_DATA` overrides; otherwise ~/Saitaku (user-visible, holds the
/// reference datasets the reviewing committee distributes).
pub fn app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SAITAKU_DATA") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Saitaku")
}

/// Trusted textbook catalog (教科書目録) CSV.
pub fn catalog_path() -> PathBuf {
    app_data_dir().join("textbooks_list.csv")
}

/// Wording guideline (かな及び漢字等の書き表し方) CSV.
pub fn guidelines_path() -> PathBuf {
    app_data_dir().join("writing_guidelines.csv")
}

use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Caremigrate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page size used against the legacy export API when the operator does not
/// pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Request timeout for the legacy export and facility APIs, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory
/// ~/Caremigrate/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Caremigrate")
}

/// Path of the target SQLite store. Overridable via CAREMIGRATE_DB for
/// dry runs against a scratch file.
pub fn database_path() -> PathBuf {
    match std::env::var("CAREMIGRATE_DB") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => app_data_dir().join("caremigrate.db"),
    }
}

/// Base URL of the legacy export API.
pub fn source_api_url() -> String {
    std::env::var("CAREMIGRATE_SOURCE_URL")
        .unwrap_or_else(|_| "https://localhost:44344".to_string())
}

/// Base URL of the facility registry in the new system.
pub fn facility_api_url() -> String {
    std::env::var("CAREMIGRATE_FACILITY_URL")
        .unwrap_or_else(|_| "https://localhost:44388".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Caremigrate"));
    }

    #[test]
    fn database_path_under_app_data_by_default() {
        if std::env::var("CAREMIGRATE_DB").is_err() {
            assert!(database_path().starts_with(app_data_dir()));
        }
    }

    #[test]
    fn app_name_is_caremigrate() {
        assert_eq!(APP_NAME, "Caremigrate");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}

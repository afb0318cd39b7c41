use std::path::PathBuf;

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "DONATE_AWAY_CONFIG_DIR";

pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// `~/.config/donate-away` on every OS, unless `DONATE_AWAY_CONFIG_DIR` is
/// set.
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("donate-away"),
    }
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Where the log file goes. Falls back to the config directory when the
/// platform has no cache directory.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("donate-away"))
        .unwrap_or_else(get_config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_toml_in_config_dir() {
        let path = get_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        assert_eq!(path.parent(), Some(get_config_dir().as_path()));
    }

    #[test]
    fn test_log_dir_names_the_app() {
        assert!(get_log_dir().ends_with("donate-away"));
    }
}

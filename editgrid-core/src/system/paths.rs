use std::path::PathBuf;
use std::sync::OnceLock;

static EDITGRID_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the editgrid home directory
/// Checks EDITGRID_HOME environment variable, falls back to ${HOME}/.editgrid
pub fn editgrid_home() -> PathBuf {
    EDITGRID_HOME.get_or_init(resolve_home).clone()
}

fn resolve_home() -> PathBuf {
    if let Ok(path) = std::env::var("EDITGRID_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".editgrid")
    }
}

/// Location of the user configuration file
pub fn default_config_path() -> PathBuf {
    editgrid_home().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_inside_home() {
        let path = default_config_path();
        assert!(path.starts_with(editgrid_home()));
        assert_eq!(path.file_name().unwrap(), "config.toml");
    }

    #[test]
    fn test_home_is_cached() {
        assert_eq!(editgrid_home(), editgrid_home());
    }
}

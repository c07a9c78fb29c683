//! Path management for paycheck-planner
//!
//! Provides XDG-compliant path resolution for the plan configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `PAYCHECK_PLANNER_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/paycheck-planner` or `~/.config/paycheck-planner`
//! 3. Windows: `%APPDATA%\paycheck-planner`

use std::path::PathBuf;

use crate::error::PlannerError;

/// Manages all paths used by paycheck-planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    /// Base directory for all paycheck-planner data
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Create a new PlannerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = if let Ok(custom) = std::env::var("PAYCHECK_PLANNER_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PlannerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/paycheck-planner/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the plan configuration file
    pub fn plan_file(&self) -> PathBuf {
        self.base_dir.join("plan.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }

    /// Check if a saved plan exists
    pub fn is_initialized(&self) -> bool {
        self.plan_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PlannerError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| PlannerError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("paycheck-planner"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PlannerError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PlannerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("paycheck-planner"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.plan_file(), temp_dir.path().join("plan.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.plan_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}

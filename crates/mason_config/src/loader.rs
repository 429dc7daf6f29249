//! Workspace configuration loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::WorkspaceConfig;

/// Loads and validates a `mason.toml` configuration from a workspace
/// directory.
///
/// Reads `<workspace_dir>/mason.toml`, parses it, and validates required
/// fields.
pub fn load_workspace_config(workspace_dir: &Path) -> Result<WorkspaceConfig, ConfigError> {
    let config_path = workspace_dir.join("mason.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_workspace_config_from_str(&content)
}

/// Parses and validates a `mason.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_workspace_config_from_str(content: &str) -> Result<WorkspaceConfig, ConfigError> {
    let config: WorkspaceConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and cell definitions are
/// usable.
fn validate_config(config: &WorkspaceConfig) -> Result<(), ConfigError> {
    if config.workspace.name.is_empty() {
        return Err(ConfigError::MissingField("workspace.name".to_string()));
    }
    if config.cells.is_empty() {
        return Err(ConfigError::MissingField("cells".to_string()));
    }
    for (name, cell) in &config.cells {
        if name.is_empty() {
            return Err(ConfigError::ValidationError(
                "cell names must be non-empty".to_string(),
            ));
        }
        if name.contains('/') {
            return Err(ConfigError::ValidationError(format!(
                "cell name '{name}' must not contain '/'"
            )));
        }
        if cell.root.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "cell '{name}' has an empty root"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[workspace]
name = "acme"

[cells.root]
root = "."
"#;
        let config = load_workspace_config_from_str(toml).unwrap();
        assert_eq!(config.workspace.name, "acme");
        assert_eq!(config.cells["root"].root, ".");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[workspace]
name = "acme"
description = "acme monorepo"

[cells.root]
root = "."

[cells.third_party]
root = "vendor/third_party"

[cells.prelude]
root = "/opt/mason/prelude"
"#;
        let config = load_workspace_config_from_str(toml).unwrap();
        assert_eq!(config.workspace.description, "acme monorepo");
        assert_eq!(config.cells.len(), 3);
        assert_eq!(config.cells["third_party"].root, "vendor/third_party");
        assert_eq!(config.cells["prelude"].root, "/opt/mason/prelude");
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[workspace]
name = ""

[cells.root]
root = "."
"#;
        let err = load_workspace_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn no_cells_errors() {
        let toml = r#"
[workspace]
name = "acme"
"#;
        let err = load_workspace_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn empty_cell_root_errors() {
        let toml = r#"
[workspace]
name = "acme"

[cells.root]
root = ""
"#;
        let err = load_workspace_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn slash_in_cell_name_errors() {
        let toml = r#"
[workspace]
name = "acme"

[cells."a/b"]
root = "x"
"#;
        let err = load_workspace_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_workspace_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_workspace_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}

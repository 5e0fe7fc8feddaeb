//! Path handling for the Zellij sandbox.

use std::path::PathBuf;

/// File name of the OTLP trace export inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "zcatalog-otlp.json";

/// Returns the directory zcatalog writes its trace output to.
///
/// `/host` maps to the cwd of the last focused terminal (usually the user's
/// home), so this typically resolves to `~/.local/share/zellij/zcatalog`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zcatalog")
}

/// Full path of the trace export file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the sandbox `/host` prefix.
///
/// ```
/// use zcatalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix so a sandbox path reads like a host path in logs.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/zcatalog")
        );
        assert!(trace_file().ends_with("zcatalog/zcatalog-otlp.json"));
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/a.toml"), "themes/~/a.toml");
    }

    #[test]
    fn strips_sandbox_prefix() {
        assert_eq!(strip_host_prefix("/host/themes/a.toml"), "/themes/a.toml");
        assert_eq!(strip_host_prefix("/etc/a.toml"), "/etc/a.toml");
    }
}

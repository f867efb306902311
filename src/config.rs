use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Saved defaults, stored in the same syntax as command-line flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub word_chars: Option<String>,
    pub prompt: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            word_chars: other.word_chars.clone().or_else(|| self.word_chars.clone()),
            prompt: other.prompt.clone().or_else(|| self.prompt.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("lineedit").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("lineedit")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("lineedit").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("lineedit").join("config");
        }
    }

    PathBuf::from(".lineeditrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".lineeditrc")
}

/// Load flags from `path`; a missing file yields the defaults.
///
/// Each non-comment line holds one flag, optionally followed by its value.
/// The value is the rest of the line, so prompts and word characters may
/// contain spaces.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(|line| line.trim_start().trim_end_matches(['\r', '\n']))
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .flat_map(|line| match line.split_once(' ') {
            Some((flag, value)) if !flag.contains('=') => {
                vec![flag.to_string(), value.to_string()]
            }
            _ => vec![line.trim_end().to_string()],
        })
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write `flags` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# lineedit defaults (saved with --save)".to_string());
    if let Some(chars) = &flags.word_chars {
        lines.push(format!("--word-chars {chars}"));
    }
    if let Some(prompt) = &flags.prompt {
        lines.push(format!("--prompt {prompt}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove the config file at `path` if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract the persisted flags from a token list (e.g. `std::env::args`).
///
/// Unknown tokens are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--word-chars" {
            if let Some(next) = tokens.get(i + 1) {
                flags.word_chars = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--word-chars=") {
            flags.word_chars = Some(value.to_string());
        } else if token == "--prompt" {
            if let Some(next) = tokens.get(i + 1) {
                flags.prompt = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--prompt=") {
            flags.prompt = Some(value.to_string());
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "lineedit".to_string(),
            "--word-chars".to_string(),
            "abc_".to_string(),
            "--prompt=> ".to_string(),
            "--log-file".to_string(),
            "edit.log".to_string(),
            "--text".to_string(),
            "hello".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.word_chars.as_deref(), Some("abc_"));
        assert_eq!(flags.prompt.as_deref(), Some("> "));
        assert_eq!(flags.log_file, Some(PathBuf::from("edit.log")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_dangling_flag() {
        let args = vec!["lineedit".to_string(), "--prompt".to_string()];
        assert_eq!(parse_flag_tokens(&args), ConfigFlags::default());
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            word_chars: Some("abc".to_string()),
            prompt: Some("$ ".to_string()),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            prompt: Some("> ".to_string()),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.word_chars.as_deref(), Some("abc"));
        assert_eq!(merged.prompt.as_deref(), Some("> "));
        assert_eq!(merged.log_file, None);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            word_chars: Some("abc-_".to_string()),
            prompt: Some("edit> ".to_string()),
            log_file: Some(PathBuf::from("edit.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}

//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use super::types::ServerConfig;
use super::ConfigError;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// `~/.config/sidekick/sidekick.yml`
pub fn default_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".config").join("sidekick").join("sidekick.yml"))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Parse the settings file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(ServerConfig, Vec<ConfigWarning>), ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NotInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok((ServerConfig::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(&content);

    let config: ServerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Corrupted {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load, apply `SIDEKICK_*` overrides and check required fields
pub fn load(path: &Path) -> Result<(ServerConfig, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = load_with_warnings(path)?;
    let config = with_env_overrides(config);
    config.validate()?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (SIDEKICK_* prefix)
pub fn with_env_overrides(config: ServerConfig) -> ServerConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
pub fn apply_overrides<F>(mut config: ServerConfig, lookup: F) -> ServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(address) = var("SIDEKICK_SERVER_ADDRESS") {
        config.server_address = address;
    }
    if let Some(user) = var("SIDEKICK_REMOTE_USER") {
        config.remote_user = user;
    }
    if let Some(username) = var("SIDEKICK_DOCKER_USERNAME") {
        config.docker_username = Some(username);
    }
    if let Some(domain) = var("SIDEKICK_PUBLIC_DOMAIN") {
        config.public_domain = Some(domain);
    }

    config
}

/// Write the settings file, creating parent directories
///
/// On Unix the file is readable by the owner only.
pub fn save(path: &Path, config: &ServerConfig) -> Result<(), ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let yaml = serde_yaml_ng::to_string(config).map_err(|e| ConfigError::Corrupted {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, yaml).map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(io_err)?;
    }

    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "serverAddress",
        "remoteUser",
        "dockerUsername",
        "publicDomain",
        "certResolver",
        "network",
        "agePublicKey",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

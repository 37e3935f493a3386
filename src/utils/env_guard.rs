use std::fs;
use std::path::Path;

/// Parses one `.env` line into a key/value pair. Comments, blank lines and
/// lines without `=` yield `None`; matching surrounding quotes are stripped.
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    let value = if quoted {
        &value[1..value.len() - 1]
    } else {
        value.split('#').next().unwrap_or("").trim()
    };
    Some((key, value))
}

fn load_dot_env(path: &Path) {
    if !path.exists() {
        return;
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[ENV] Failed to read {}: {}", path.display(), e);
            return;
        }
    };

    for (key, value) in content.lines().filter_map(parse_env_line) {
        // Variables already exported by the shell win over the file.
        if std::env::var_os(key).is_some() {
            continue;
        }
        std::env::set_var(key, value);
    }
}

/// Merges `./.env` into the process environment before configuration is read.
pub fn harden_env_setup() {
    load_dot_env(Path::new(".env"));
    if std::env::var("ETH_RPC_URL").is_err() {
        eprintln!("[ENV] WARN: ETH_RPC_URL is not set");
    }
}

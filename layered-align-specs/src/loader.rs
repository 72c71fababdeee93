//! Fixture discovery and loading.

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{parse_fixture, AlignmentFixture};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a single fixture file. Parse errors name the file.
pub fn load_fixture(path: &Path) -> SpecResult<AlignmentFixture> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    parse_fixture(&content, &path.display().to_string())
}

/// Load every `*.toml` fixture below `dir`.
///
/// Each fixture is named by its path relative to `dir` with `/` separators,
/// and fixtures come back sorted by name, so `function-words/no-evidence.toml`
/// sorts among the top-level files by its directory name. A missing
/// directory holds no fixtures.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, AlignmentFixture)>> {
    let mut paths = Vec::new();
    collect_fixture_paths(dir, &mut paths)?;

    let mut named: Vec<(String, PathBuf)> = paths
        .into_iter()
        .map(|path| (fixture_name(dir, &path), path))
        .collect();
    named.sort_by(|a, b| a.0.cmp(&b.0));

    let mut fixtures = Vec::with_capacity(named.len());
    for (name, path) in named {
        let fixture = load_fixture(&path)?;
        debug!(fixture = %name, "loaded alignment fixture");
        fixtures.push((name, fixture));
    }
    Ok(fixtures)
}

fn fixture_name(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn load_error(path: &Path, error: io::Error) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}

fn collect_fixture_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(dir).map_err(|e| load_error(dir, e))? {
        let path = entry.map_err(|e| load_error(dir, e))?.path();
        if path.is_dir() {
            collect_fixture_paths(&path, paths)?;
        } else if path.extension().map_or(false, |ext| ext == "toml") {
            paths.push(path);
        }
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use metamodel::config::PROJECT_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `metamodel.toml` (project configuration)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
    }
    for dir in start.ancestors() {
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("app/model")).unwrap();
        std::fs::write(root.join("app/metamodel.toml"), "").unwrap();

        assert_eq!(discover_project_root(&root.join("app/model")), root.join("app"));
    }

    #[test]
    fn config_above_git_root_still_wins() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("metamodel.toml"), "").unwrap();
        std::fs::create_dir_all(root.join("nested/.git")).unwrap();

        assert_eq!(discover_project_root(&root.join("nested")), root.to_path_buf());
    }

    #[test]
    fn discover_project_root_falls_back_to_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("sub/src")).unwrap();

        assert_eq!(discover_project_root(&root.join("sub/src")), root.to_path_buf());
    }

    #[test]
    fn discover_project_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("a/b");
        std::fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_project_root(&start), start);
    }
}

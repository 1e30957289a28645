/*!
 * Path helpers for promptclip
 */

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without touching the filesystem
///
/// A `..` that would climb above the first component is kept, so a path
/// escaping its base never collapses back into it.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Render a relative path with `/` separators on every platform
pub fn display_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Count lines the way an editor does: a trailing newline does not open a new line
pub fn count_lines(text: &str) -> usize {
    text.lines().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_resolves_parent_dirs() {
        assert_eq!(
            normalize_path(Path::new("/proj/pages/../main.js")),
            PathBuf::from("/proj/main.js")
        );
        assert_eq!(
            normalize_path(Path::new("/proj/./pages/render.js")),
            PathBuf::from("/proj/pages/render.js")
        );
    }

    #[test]
    fn test_normalize_path_escaping_base() {
        assert_eq!(
            normalize_path(Path::new("/proj/../secret.txt")),
            PathBuf::from("/secret.txt")
        );
        assert_eq!(
            normalize_path(Path::new("../../a.txt")),
            PathBuf::from("../../a.txt")
        );
        // Cannot climb above the filesystem root
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_display_path_uses_forward_slashes() {
        let rel = Path::new("pages").join("render.js");
        assert_eq!(display_path(&rel), "pages/render.js");
        assert_eq!(display_path(Path::new("main.js")), "main.js");
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("hello"), 1);
        assert_eq!(count_lines("a\nb\n"), 2);
    }
}

use std::path::{Component, Path, PathBuf};

use super::DocsError;

/// Ensures `target` stays inside `base` and returns the normalized target.
///
/// The check is purely lexical (`.` and `..` are folded without touching the
/// file system), so it works for files that do not exist yet.
///
/// # Errors
///
/// Returns `DocsError::PathEscape` if `target` resolves outside `base`.
pub fn ensure_within_base(base: &Path, target: &Path) -> Result<PathBuf, DocsError> {
    let clean_base = normalize(base);
    let clean_target = normalize(target);

    let escapes = clean_target
        .strip_prefix(&clean_base)
        .map(|relative| relative.components().next() == Some(Component::ParentDir))
        .unwrap_or(true);

    if escapes {
        return Err(DocsError::PathEscape {
            base: base.to_path_buf(),
            target: target.to_path_buf(),
        });
    }

    Ok(clean_target)
}

fn normalize(path: &Path) -> PathBuf {
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

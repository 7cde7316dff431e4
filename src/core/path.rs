//! String-level path helpers.
//!
//! All paths handed out by the shell are absolute (`/`, `/home/user`),
//! with no trailing slash and no `.`/`..` segments. These helpers never
//! touch the tree; existence checks live in [`VirtualFs`](super::VirtualFs).

/// Path separator and root.
pub const ROOT: &str = "/";

pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Expand `~` and make `path` absolute relative to `cwd`.
///
/// The result is not normalized: `..` and `.` segments are kept for the
/// resolver to interpret.
pub fn absolutize(path: &str, cwd: &str, home: &str) -> String {
    if path == "~" {
        return home.to_string();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return join(home, rest);
    }
    if is_absolute(path) {
        path.to_string()
    } else {
        join(cwd, path)
    }
}

/// Join a relative path onto a base directory.
pub fn join(base: &str, rel: &str) -> String {
    if rel.is_empty() {
        return base.to_string();
    }
    if base.ends_with('/') {
        format!("{}{}", base, rel)
    } else {
        format!("{}/{}", base, rel)
    }
}

/// Non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Build an absolute path from already-resolved segments.
pub fn from_segments<S: AsRef<str>>(parts: &[S]) -> String {
    if parts.is_empty() {
        return ROOT.to_string();
    }
    parts.iter().fold(String::new(), |mut acc, part| {
        acc.push('/');
        acc.push_str(part.as_ref());
        acc
    })
}

/// Normalize an absolute path by resolving `.` and `..` lexically.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in segments(path) {
        match part {
            ".." => {
                parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }
    from_segments(&parts)
}

/// Parent of an absolute path. The root is its own parent.
pub fn parent_path(path: &str) -> String {
    match path.trim_end_matches('/').rsplit_once('/') {
        Some(("", _)) | None => ROOT.to_string(),
        Some((parent, _)) => parent.to_string(),
    }
}

/// Split a user-supplied path into its directory part and final name.
///
/// Trailing slashes are ignored. The directory part is empty for a bare
/// name (meaning "the current directory") and `/` for top-level names.
/// The name is empty only for the root itself.
pub fn split_last(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { ("", "") } else { (ROOT, "") };
    }
    match trimmed.rsplit_once('/') {
        Some(("", name)) => (ROOT, name),
        Some((dir, name)) => (dir, name),
        None => ("", trimmed),
    }
}

/// Final segment of an absolute path (empty for the root).
pub fn file_name(path: &str) -> &str {
    split_last(path).1
}

/// Whether `path` equals `ancestor` or lies beneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor == ROOT {
        return true;
    }
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize() {
        let home = "/home/user";
        assert_eq!(absolutize("~", "/tmp", home), "/home/user");
        assert_eq!(absolutize("~/docs", "/tmp", home), "/home/user/docs");
        assert_eq!(absolutize("/etc", "/tmp", home), "/etc");
        assert_eq!(absolutize("a/b", "/tmp", home), "/tmp/a/b");
        assert_eq!(absolutize("a", "/", home), "/a");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/home/./user"), "/home/user");
        assert_eq!(normalize("/home/user/../etc"), "/home/etc");
        assert_eq!(normalize("/a/b/c/../../d"), "/a/d");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/../.."), "/");
        assert_eq!(normalize("//usr//lib/"), "/usr/lib");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("/home/user"), "/home");
        assert_eq!(parent_path("/home"), "/");
        assert_eq!(parent_path("/"), "/");
    }

    #[test]
    fn test_split_last() {
        assert_eq!(split_last("demo"), ("", "demo"));
        assert_eq!(split_last("demo/"), ("", "demo"));
        assert_eq!(split_last("/demo"), ("/", "demo"));
        assert_eq!(split_last("/home/user/demo"), ("/home/user", "demo"));
        assert_eq!(split_last("a/b"), ("a", "b"));
        assert_eq!(split_last("/"), ("/", ""));
        assert_eq!(split_last(""), ("", ""));
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/home/user", "/home"));
        assert!(is_within("/home", "/home"));
        assert!(!is_within("/homework", "/home"));
        assert!(is_within("/anything", "/"));
    }
}

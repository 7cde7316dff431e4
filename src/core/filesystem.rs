use crate::config::SEED_LAYOUT;
use crate::core::error::{FsError, SeedError};
use crate::core::path;
use crate::models::{Directory, Node, SeedNode};

/// In-memory filesystem for one shell session.
///
/// # Path Convention
///
/// - Root: `"/"`
/// - Absolute paths start with `/`; anything else is relative to the
///   working directory passed by the caller
/// - Empty segments are skipped, `.` stays put, `..` goes up one level
///   (the root is its own parent)
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: Node,
}

impl VirtualFs {
    /// Create an empty filesystem containing only the root.
    pub fn empty() -> Self {
        Self {
            root: Node::empty_dir(),
        }
    }

    /// Create the filesystem from the embedded seed layout.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::from_seed_json(SEED_LAYOUT)
    }

    /// Create filesystem from a JSON layout.
    pub fn from_seed_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedNode = serde_json::from_str(json)?;
        Self::from_seed(&seed)
    }

    /// Create filesystem from a parsed layout. The top level must be a directory.
    pub fn from_seed(seed: &SeedNode) -> Result<Self, SeedError> {
        match seed {
            SeedNode::Directory(_) => Ok(Self {
                root: Node::from(seed),
            }),
            SeedNode::File(_) => Err(SeedError::RootNotDirectory),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a path to its node.
    pub fn resolve(&self, path: &str, cwd: &str) -> Result<&Node, FsError> {
        self.walk_to(path, cwd).map(|(_, node)| node)
    }

    /// Resolve a path to the absolute, normalized path of an existing node.
    pub fn canonicalize(&self, path: &str, cwd: &str) -> Result<String, FsError> {
        self.walk_to(path, cwd).map(|(canonical, _)| canonical)
    }

    /// Check whether a path resolves.
    pub fn exists(&self, path: &str, cwd: &str) -> bool {
        self.resolve(path, cwd).is_ok()
    }

    /// Walk the tree segment by segment.
    ///
    /// Fails with [`FsError::NotFound`] as soon as a segment is missing or
    /// the walk would have to descend through a file.
    fn walk_to(&self, path: &str, cwd: &str) -> Result<(String, &Node), FsError> {
        let full = if path::is_absolute(path) {
            path.to_string()
        } else {
            path::join(cwd, path)
        };

        let mut names: Vec<&str> = Vec::new();
        let mut stack: Vec<&Node> = vec![&self.root];

        for segment in path::segments(&full) {
            let dir = stack
                .last()
                .and_then(|node| node.as_dir())
                .ok_or(FsError::NotFound)?;
            match segment {
                "." => {}
                ".." => {
                    if stack.len() > 1 {
                        stack.pop();
                        names.pop();
                    }
                }
                name => {
                    let child = dir.get(name).ok_or(FsError::NotFound)?;
                    stack.push(child);
                    names.push(name);
                }
            }
        }

        let node = stack.last().copied().unwrap_or(&self.root);
        Ok((path::from_segments(&names), node))
    }

    /// Get a node by canonical absolute path.
    pub fn node(&self, abs: &str) -> Option<&Node> {
        let mut current = &self.root;
        for part in path::segments(abs) {
            current = current.as_dir()?.get(part)?;
        }
        Some(current)
    }

    /// Get a mutable node by canonical absolute path.
    pub fn node_mut(&mut self, abs: &str) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for part in path::segments(abs) {
            current = current.as_dir_mut()?.get_mut(part)?;
        }
        Some(current)
    }

    /// Get a directory by canonical absolute path.
    pub fn dir(&self, abs: &str) -> Result<&Directory, FsError> {
        self.node(abs)
            .ok_or(FsError::NotFound)?
            .as_dir()
            .ok_or(FsError::NotADirectory)
    }

    /// Get a mutable directory by canonical absolute path.
    pub fn dir_mut(&mut self, abs: &str) -> Result<&mut Directory, FsError> {
        self.node_mut(abs)
            .ok_or(FsError::NotFound)?
            .as_dir_mut()
            .ok_or(FsError::NotADirectory)
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str, cwd: &str) -> bool {
        matches!(self.resolve(path, cwd), Ok(Node::Directory(_)))
    }

    /// Resolve the parent directory of `path` separately from its final name.
    ///
    /// Mutating operations act on the parent's children, so the target
    /// itself need not exist. Returns the canonical parent path and the
    /// name. Fails with [`FsError::NotFound`] when the parent is missing
    /// and [`FsError::NotADirectory`] when it is a file.
    pub fn parent_of(&self, path: &str, cwd: &str) -> Result<(String, String), FsError> {
        let (dir_part, name) = path::split_last(path);
        let dir_part = if dir_part.is_empty() { "." } else { dir_part };
        let (parent, node) = self.walk_to(dir_part, cwd)?;
        if !node.is_directory() {
            return Err(FsError::NotADirectory);
        }
        Ok((parent, name.to_string()))
    }

    /// All descendants of a directory, depth-first, siblings in name order.
    ///
    /// Paths are absolute. The starting directory itself is not included;
    /// a file yields nothing.
    pub fn walk(&self, abs: &str) -> Vec<(String, &Node)> {
        let mut out = Vec::new();
        if let Some(Node::Directory(dir)) = self.node(abs) {
            Self::walk_dir(dir, abs, &mut out);
        }
        out
    }

    fn walk_dir<'a>(dir: &'a Directory, base: &str, out: &mut Vec<(String, &'a Node)>) {
        for (name, node) in dir.sorted_entries() {
            let child_path = path::join(base, name);
            out.push((child_path.clone(), node));
            if let Node::Directory(child) = node {
                Self::walk_dir(child, &child_path, out);
            }
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::seeded().expect("embedded seed should parse")
    }

    #[test]
    fn test_seed_layout() {
        let fs = create_test_fs();
        for dir in [
            "/bin",
            "/etc/apt",
            "/etc/config",
            "/home/user/documents",
            "/home/user/downloads",
            "/home/user/pictures",
            "/home/user/projects/python_app",
            "/usr/lib",
            "/usr/share",
            "/var/log",
        ] {
            assert!(fs.is_directory(dir, "/"), "{} should be a directory", dir);
        }
        let main = fs
            .resolve("/home/user/projects/python_app/main.py", "/")
            .unwrap();
        assert_eq!(main.as_file().unwrap().content(), "print('Hello, world!')");
    }

    #[test]
    fn test_seed_root_must_be_directory() {
        assert!(matches!(
            VirtualFs::from_seed_json(r#""just a file""#),
            Err(SeedError::RootNotDirectory)
        ));
        assert!(matches!(
            VirtualFs::from_seed_json("{not json"),
            Err(SeedError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_absolute_and_relative() {
        let fs = create_test_fs();
        assert!(fs.resolve("/home/user", "/var").is_ok());
        assert!(fs.resolve("projects/python_app", "/home/user").is_ok());
        assert_eq!(
            fs.resolve("nonexistent", "/home/user"),
            Err(FsError::NotFound)
        );
    }

    #[test]
    fn test_resolve_skips_empty_segments() {
        let fs = create_test_fs();
        assert_eq!(
            fs.canonicalize("//home///user/", "/").unwrap(),
            "/home/user"
        );
    }

    #[test]
    fn test_resolve_dot_segments() {
        let fs = create_test_fs();
        assert_eq!(fs.canonicalize(".", "/home/user").unwrap(), "/home/user");
        assert_eq!(fs.canonicalize("..", "/home/user").unwrap(), "/home");
        assert_eq!(fs.canonicalize("../../..", "/home/user").unwrap(), "/");
        assert_eq!(
            fs.canonicalize("./projects/../documents", "/home/user").unwrap(),
            "/home/user/documents"
        );
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let fs = create_test_fs();
        let cwd = "/home/user/projects/python_app";
        assert_eq!(fs.resolve("main.py/x", cwd), Err(FsError::NotFound));
        assert_eq!(fs.resolve("main.py/..", cwd), Err(FsError::NotFound));
    }

    #[test]
    fn test_resolve_is_side_effect_free() {
        let fs = create_test_fs();
        let before = fs.clone();
        let first = fs.canonicalize("../user/projects", "/home/user").unwrap();
        let second = fs.canonicalize("../user/projects", "/home/user").unwrap();
        assert_eq!(first, second);
        assert!(fs.resolve("/does/not/exist", "/").is_err());
        assert_eq!(fs.root(), before.root());
    }

    #[test]
    fn test_parent_of() {
        let fs = create_test_fs();
        assert_eq!(
            fs.parent_of("demo", "/home/user/projects").unwrap(),
            ("/home/user/projects".to_string(), "demo".to_string())
        );
        assert_eq!(
            fs.parent_of("/home/user/projects/demo", "/").unwrap(),
            ("/home/user/projects".to_string(), "demo".to_string())
        );
        assert_eq!(
            fs.parent_of("/nope/demo", "/"),
            Err(FsError::NotFound)
        );
        assert_eq!(
            fs.parent_of("main.py/demo", "/home/user/projects/python_app"),
            Err(FsError::NotADirectory)
        );
    }

    #[test]
    fn test_dir_mut() {
        let mut fs = create_test_fs();
        fs.dir_mut("/tmp").unwrap_err();
        let dir = fs.dir_mut("/var/log").unwrap();
        dir.insert("syslog", Node::file("boot ok")).unwrap();
        assert!(fs.exists("/var/log/syslog", "/"));
        assert_eq!(
            fs.dir_mut("/var/log/syslog").unwrap_err(),
            FsError::NotADirectory
        );
    }

    #[test]
    fn test_walk() {
        let fs = create_test_fs();
        let paths: Vec<_> = fs
            .walk("/home/user/projects")
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(
            paths,
            vec![
                "/home/user/projects/python_app",
                "/home/user/projects/python_app/main.py",
                "/home/user/projects/python_app/requirements.txt",
            ]
        );
        assert!(fs.walk("/home/user/projects/python_app/main.py").is_empty());
    }

    #[test]
    fn test_walk_from_root_joins_cleanly() {
        let fs = create_test_fs();
        let paths: Vec<_> = fs.walk("/").into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths.first().map(String::as_str), Some("/bin"));
    }
}

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

use crate::config::DIRECTORY_SIZE;
use crate::core::error::FsError;

// =============================================================================
// Seed Layout
// =============================================================================

/// One entry of the embedded seed layout.
///
/// JSON strings become files, JSON objects become directories.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SeedNode {
    File(String),
    Directory(BTreeMap<String, SeedNode>),
}

// =============================================================================
// Display Permissions
// =============================================================================

/// Unix-style permission string for long listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPermissions {
    pub is_dir: bool,
}

impl fmt::Display for DisplayPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir {
            write!(f, "drwxr-xr-x")
        } else {
            write!(f, "-rw-r--r--")
        }
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A file: an opaque text payload. Its name is the key in the parent directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    content: String,
}

impl File {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Content length in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// A directory: exclusive owner of its named children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    children: HashMap<String, Node>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Insert a child.
    ///
    /// Fails with [`FsError::NameConflict`] when a directory already has
    /// this name. An existing file is replaced and returned.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Result<Option<Node>, FsError> {
        let name = name.into();
        if let Some(Node::Directory(_)) = self.children.get(&name) {
            return Err(FsError::NameConflict);
        }
        Ok(self.children.insert(name, node))
    }

    /// Remove a child and return it, subtree included.
    pub fn remove(&mut self, name: &str) -> Result<Node, FsError> {
        self.children.remove(name).ok_or(FsError::NotFound)
    }

    /// Child names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Children sorted by name.
    pub fn sorted_entries(&self) -> Vec<(&str, &Node)> {
        let mut entries: Vec<_> = self
            .children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Represents an entry in the virtual filesystem.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Directory(Directory::new())
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File(File::new(content))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    /// Size for display: content length for files, a nominal value for directories.
    pub fn display_size(&self) -> u64 {
        match self {
            Node::Directory(_) => DIRECTORY_SIZE,
            Node::File(file) => file.size(),
        }
    }

    pub fn permissions(&self) -> DisplayPermissions {
        DisplayPermissions {
            is_dir: self.is_directory(),
        }
    }
}

impl From<&SeedNode> for Node {
    fn from(seed: &SeedNode) -> Self {
        match seed {
            SeedNode::File(content) => Node::file(content.as_str()),
            SeedNode::Directory(entries) => {
                let children = entries
                    .iter()
                    .map(|(name, child)| (name.clone(), Node::from(child)))
                    .collect();
                Node::Directory(Directory { children })
            }
        }
    }
}

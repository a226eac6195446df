use serde::Deserialize;

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure (see `assets/fs/manifest.json`).
#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    /// Format version
    pub version: u32,
    /// Entries in display order
    pub entries: Vec<ManifestEntry>,
}

/// A single manifest entry.
///
/// Paths are relative to the root and use `/` as separator
/// (e.g. `about/about.txt`).
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestEntry {
    Dir {
        path: String,
    },
    File {
        path: String,
        #[serde(default)]
        content: Vec<String>,
    },
}

impl ManifestEntry {
    pub fn path(&self) -> &str {
        match self {
            Self::Dir { path } | Self::File { path, .. } => path,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

/// Represents an entry in the virtual filesystem.
///
/// Children are kept in insertion order, which is also the listing order.
/// A child is looked up by its own `name`, so a key can never disagree with
/// the node it names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Directory { name: String, children: Vec<Node> },
    File { name: String, content: Vec<String> },
}

impl Node {
    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, content: Vec<String>) -> Self {
        Node::File {
            name: name.into(),
            content,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } => name,
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Find a direct child by name (directories only).
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory { children, .. } => children.iter().find(|c| c.name() == name),
            Node::File { .. } => None,
        }
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&[String]> {
        match self {
            Node::File { content, .. } => Some(content),
            Node::Directory { .. } => None,
        }
    }
}

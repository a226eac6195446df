use crate::config::{DEFAULT_MANIFEST, MANIFEST_VERSION, ROOT_MARKER};
use crate::core::error::{FsError, ManifestError};
use crate::models::{Manifest, ManifestEntry, Node, VirtualPath};

/// Directory entry returned by `list_children`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read-only virtual filesystem.
///
/// Built once from a [`Manifest`] and never mutated afterwards, so a single
/// instance can be shared (e.g. behind an `Arc`) by any number of sessions.
///
/// # Path Convention
///
/// - Root: empty [`VirtualPath`], displayed as `~`
/// - Manifest paths are relative: `"skills.txt"`, `"about/about.txt"`
/// - No leading or trailing slashes in the manifest
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: Node,
}

impl VirtualFs {
    /// Filesystem described by the embedded default manifest.
    pub fn builtin() -> Result<Self, ManifestError> {
        Self::from_json(DEFAULT_MANIFEST)
    }

    /// Parse a JSON manifest and build the tree.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(&manifest)
    }

    /// Create filesystem from manifest.
    ///
    /// Entries are inserted in manifest order; that order is the listing
    /// order. Parent directories that are not declared explicitly are created
    /// at their first mention.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        if manifest.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion {
                found: manifest.version,
                expected: MANIFEST_VERSION,
            });
        }

        let mut root = Node::directory(ROOT_MARKER);
        for entry in &manifest.entries {
            Self::insert_entry(&mut root, entry)?;
        }

        tracing::debug!(entries = manifest.entries.len(), "virtual filesystem built");
        Ok(Self { root })
    }

    /// Insert one manifest entry, walking (and creating) parents iteratively.
    fn insert_entry(root: &mut Node, entry: &ManifestEntry) -> Result<(), ManifestError> {
        let full_path = entry.path();
        let parts: Vec<&str> = full_path.split('/').collect();
        if parts
            .iter()
            .any(|p| p.is_empty() || matches!(*p, "." | ".." | ROOT_MARKER))
        {
            return Err(ManifestError::InvalidPath(full_path.to_string()));
        }

        let (leaf, parents) = parts
            .split_last()
            .ok_or_else(|| ManifestError::InvalidPath(full_path.to_string()))?;

        let mut current = root;
        let mut current_path = String::new();
        for part in parents {
            let children = Self::children_mut(current, full_path, &current_path)?;
            let index = match children.iter().position(|c| c.name() == *part) {
                Some(index) => index,
                None => {
                    children.push(Node::directory(*part));
                    children.len() - 1
                }
            };
            current = &mut children[index];

            if !current_path.is_empty() {
                current_path.push('/');
            }
            current_path.push_str(part);
        }

        let children = Self::children_mut(current, full_path, &current_path)?;
        let existing = children
            .iter()
            .find(|c| c.name() == *leaf)
            .map(Node::is_directory);
        match (existing, entry) {
            (None, ManifestEntry::Dir { .. }) => children.push(Node::directory(*leaf)),
            (None, ManifestEntry::File { content, .. }) => {
                children.push(Node::file(*leaf, content.clone()))
            }
            // Declaring a directory after it was implied by a nested path is fine.
            (Some(true), ManifestEntry::Dir { .. }) => {}
            (Some(_), _) => return Err(ManifestError::Duplicate(full_path.to_string())),
        }
        Ok(())
    }

    /// Children of a directory reached while inserting `path`.
    fn children_mut<'a>(
        node: &'a mut Node,
        path: &str,
        at: &str,
    ) -> Result<&'a mut Vec<Node>, ManifestError> {
        match node {
            Node::Directory { children, .. } => Ok(children),
            Node::File { .. } => Err(ManifestError::BlockedByFile {
                path: path.to_string(),
                blocker: at.to_string(),
            }),
        }
    }

    /// Resolve a path to a node.
    ///
    /// The empty path is the root. Descending through a file fails with
    /// [`FsError::NotADirectory`]; a missing segment with [`FsError::NotFound`].
    pub fn resolve(&self, path: &VirtualPath) -> Result<&Node, FsError> {
        let mut current = &self.root;
        let mut walked = VirtualPath::root();

        for segment in path.segments() {
            if !current.is_directory() {
                return Err(FsError::NotADirectory(walked.to_string()));
            }
            walked = walked.join(segment.as_str());
            current = current
                .child(segment)
                .ok_or_else(|| FsError::NotFound(walked.to_string()))?;
        }

        Ok(current)
    }

    /// List a directory's children in stored order.
    pub fn list_children(&self, path: &VirtualPath) -> Result<Vec<DirEntry>, FsError> {
        match self.resolve(path)? {
            Node::Directory { children, .. } => Ok(children
                .iter()
                .map(|child| DirEntry {
                    name: child.name().to_string(),
                    is_dir: child.is_directory(),
                })
                .collect()),
            Node::File { .. } => Err(FsError::NotADirectory(path.to_string())),
        }
    }

    /// Check if a path resolves to a directory.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        matches!(self.resolve(path), Ok(Node::Directory { .. }))
    }

    /// Content of the file at `path`, if it is one.
    pub fn read_file(&self, path: &VirtualPath) -> Option<&[String]> {
        self.resolve(path).ok().and_then(Node::content)
    }
}

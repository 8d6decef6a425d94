use serde::{Deserialize, Serialize};

// =============================================================================
// Filesystem Tree
// =============================================================================

/// Represents a node in the virtual filesystem.
///
/// Directories own their children in insertion order. There are no parent
/// links: moving up is done by re-walking from the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsNode {
    Directory {
        name: String,
        display_name: String,
        entries: Vec<FsNode>,
    },
    File {
        name: String,
        display_name: String,
        content: String,
    },
}

impl FsNode {
    /// Create a directory whose display name equals its name.
    pub fn directory(name: impl Into<String>, entries: Vec<FsNode>) -> Self {
        let name = name.into();
        FsNode::Directory {
            display_name: name.clone(),
            name,
            entries,
        }
    }

    /// Create a file whose display name equals its name.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        FsNode::File {
            display_name: name.clone(),
            name,
            content: content.into(),
        }
    }

    /// Replace the display name.
    pub fn with_display_name(mut self, display: impl Into<String>) -> Self {
        match &mut self {
            FsNode::Directory { display_name, .. } | FsNode::File { display_name, .. } => {
                *display_name = display.into();
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::Directory { name, .. } | FsNode::File { name, .. } => name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            FsNode::Directory { display_name, .. } | FsNode::File { display_name, .. } => {
                display_name
            }
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    /// Children of a directory, in insertion order.
    pub fn entries(&self) -> Option<&[FsNode]> {
        match self {
            FsNode::Directory { entries, .. } => Some(entries),
            FsNode::File { .. } => None,
        }
    }

    /// Content of a file.
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content, .. } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Look up a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.entries()?.iter().find(|entry| entry.name() == name)
    }
}

/// Directory entry summary, as kept in the terminal context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub display_name: String,
    pub is_dir: bool,
}

impl From<&FsNode> for DirEntry {
    fn from(node: &FsNode) -> Self {
        Self {
            name: node.name().to_string(),
            display_name: node.display_name().to_string(),
            is_dir: node.is_directory(),
        }
    }
}

// =============================================================================
// Content Document
// =============================================================================

/// Root of the content document describing the initial filesystem.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContentDocument {
    /// Entries of the root directory
    #[serde(default)]
    pub entries: Vec<ContentEntry>,
}

/// A single node of the content document.
///
/// Exactly one of `entries` (directory) or `content` (file) must be set.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContentEntry {
    /// Name used for path resolution
    pub name: String,
    /// Name shown by `ls` (defaults to `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Children, for directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<ContentEntry>>,
    /// Raw text, for files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let dir = FsNode::directory(
            "docs",
            vec![FsNode::file("a.md", "alpha").with_display_name("A")],
        );

        assert!(dir.is_directory());
        assert_eq!(dir.name(), "docs");
        assert_eq!(dir.display_name(), "docs");
        assert!(dir.content().is_none());

        let child = dir.child("a.md").expect("child should exist");
        assert!(!child.is_directory());
        assert_eq!(child.display_name(), "A");
        assert_eq!(child.content(), Some("alpha"));
        assert!(dir.child("A").is_none());
    }

    #[test]
    fn test_dir_entry_from_node() {
        let entry = DirEntry::from(&FsNode::directory("src", vec![]));
        assert_eq!(
            entry,
            DirEntry {
                name: "src".to_string(),
                display_name: "src".to_string(),
                is_dir: true,
            }
        );
    }

    #[test]
    fn test_document_deserialize() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{ "entries": [
                { "name": "links", "entries": [
                    { "name": "gh.url", "display": "github", "content": "https://github.com" }
                ] }
            ] }"#,
        )
        .expect("document should parse");

        assert_eq!(doc.entries.len(), 1);
        let links = &doc.entries[0];
        assert!(links.content.is_none());
        let children = links.entries.as_ref().expect("directory entries");
        assert_eq!(children[0].display.as_deref(), Some("github"));
    }
}

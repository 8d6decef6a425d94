use std::collections::HashSet;

use crate::config::DEFAULT_CONTENT;
use crate::core::error::{ContentError, ShellError};
use crate::models::{ContentDocument, ContentEntry, FsNode};

/// A node found by [`VirtualFs::resolve`], with its absolute location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPath<'a> {
    /// Segments from the root (empty for the root itself)
    pub path: Vec<String>,
    pub node: &'a FsNode,
}

/// Read-only virtual filesystem.
///
/// # Path Convention
///
/// - A path is a list of segments from the root; the root is `[]`
/// - Displayed as `/` for the root and `/a/b` otherwise
/// - `..` is resolved by dropping a segment and walking again from the root
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory containing all entries
    root: FsNode,
}

impl VirtualFs {
    /// Create a filesystem from a root directory, validating every name.
    pub fn new(root: FsNode) -> Result<Self, ContentError> {
        Self::validate(&root, &mut Vec::new())?;
        Ok(Self { root })
    }

    /// Create filesystem from a JSON content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let document: ContentDocument = serde_json::from_str(json)?;
        Self::from_document(&document)
    }

    /// Create filesystem from an already parsed content document.
    pub fn from_document(document: &ContentDocument) -> Result<Self, ContentError> {
        let entries = document
            .entries
            .iter()
            .map(Self::build_node)
            .collect::<Result<Vec<_>, _>>()?;

        let fs = Self::new(FsNode::directory("", entries))?;
        log::debug!("mounted virtual filesystem ({} top-level entries)", document.entries.len());
        Ok(fs)
    }

    /// Filesystem built from the content embedded at compile time.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(DEFAULT_CONTENT)
    }

    /// Create empty filesystem (fallback when content fails to load).
    pub fn empty() -> Self {
        Self {
            root: FsNode::directory("", Vec::new()),
        }
    }

    fn build_node(entry: &ContentEntry) -> Result<FsNode, ContentError> {
        let node = match (&entry.entries, &entry.content) {
            (Some(children), None) => FsNode::directory(
                entry.name.clone(),
                children
                    .iter()
                    .map(Self::build_node)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            (None, Some(content)) => FsNode::file(entry.name.clone(), content.clone()),
            _ => return Err(ContentError::AmbiguousNode(entry.name.clone())),
        };

        Ok(match &entry.display {
            Some(display) => node.with_display_name(display.clone()),
            None => node,
        })
    }

    /// Check names and sibling uniqueness for the whole tree.
    fn validate(dir: &FsNode, path: &mut Vec<String>) -> Result<(), ContentError> {
        let Some(entries) = dir.entries() else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for entry in entries {
            let name = entry.name();
            if name.is_empty() || name == "." || name == ".." || name == "~" || name.contains('/')
            {
                return Err(ContentError::InvalidName(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(ContentError::DuplicateEntry {
                    parent: Self::display_path(path),
                    name: name.to_string(),
                });
            }

            path.push(name.to_string());
            Self::validate(entry, path)?;
            path.pop();
        }

        Ok(())
    }

    /// Root directory node.
    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Get a node by absolute segments.
    ///
    /// - `[]` returns the root directory
    /// - `["home"]` returns the home directory
    pub fn get(&self, path: &[String]) -> Option<&FsNode> {
        let mut current = &self.root;
        for part in path {
            current = current.child(part)?;
        }
        Some(current)
    }

    /// Resolve `term` relative to `base`.
    ///
    /// Segments are applied one at a time against the directory reached so
    /// far: `.` stays, `..` pops (no-op at the root), anything else must be an
    /// exact child name. Walking through a file fails. A leading `/`, a bare
    /// `~` or a leading `~/` starts from the root; empty segments are skipped.
    pub fn resolve(&self, base: &[String], term: &str) -> Option<ResolvedPath<'_>> {
        let (mut path, rest) = if term == "~" {
            (Vec::new(), "")
        } else if let Some(rest) = term.strip_prefix("~/") {
            (Vec::new(), rest)
        } else if let Some(rest) = term.strip_prefix('/') {
            (Vec::new(), rest)
        } else {
            (base.to_vec(), term)
        };

        let mut node = self.get(&path)?;

        for part in rest.split('/').filter(|s| !s.is_empty()) {
            if !node.is_directory() {
                return None;
            }
            match part {
                "." => {}
                ".." => {
                    path.pop();
                    node = self.get(&path)?;
                }
                name => {
                    node = node.child(name)?;
                    path.push(name.to_string());
                }
            }
        }

        Some(ResolvedPath { path, node })
    }

    /// Resolve `term` and require a directory.
    pub fn directory(&self, base: &[String], term: &str) -> Result<ResolvedPath<'_>, ShellError> {
        match self.resolve(base, term) {
            Some(resolved) if resolved.node.is_directory() => Ok(resolved),
            _ => Err(ShellError::PathNotFound {
                path: term.to_string(),
            }),
        }
    }

    /// Resolve `term` and return the file content.
    pub fn file_content(&self, base: &[String], term: &str) -> Result<&str, ShellError> {
        self.resolve(base, term)
            .and_then(|resolved| resolved.node.content())
            .ok_or_else(|| ShellError::FileNotFound {
                path: term.to_string(),
            })
    }

    /// Display names of a directory's entries, in insertion order.
    ///
    /// Returns an empty list for files.
    pub fn list_entries(dir: &FsNode) -> Vec<&str> {
        dir.entries()
            .map(|entries| entries.iter().map(FsNode::display_name).collect())
            .unwrap_or_default()
    }

    /// Render segments as an absolute path.
    pub fn display_path(path: &[String]) -> String {
        format!("/{}", path.join("/"))
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

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(FsNode::directory(
            "",
            vec![
                FsNode::directory(
                    "home",
                    vec![
                        FsNode::directory(
                            "personal",
                            vec![FsNode::file("Resume.js", "const resume = {};")],
                        ),
                        FsNode::directory("empty", vec![]),
                    ],
                ),
                FsNode::directory(
                    "docs",
                    vec![
                        FsNode::file("c.md", "c"),
                        FsNode::file("a.md", "a"),
                        FsNode::file("b.md", "b").with_display_name("B"),
                    ],
                ),
                FsNode::file("readme.md", "hello"),
            ],
        ))
        .expect("valid tree")
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::empty();
        assert!(fs.root().is_directory());
        assert!(VirtualFs::list_entries(fs.root()).is_empty());
    }

    #[test]
    fn test_builtin_content_mounts() {
        let fs = VirtualFs::builtin().expect("embedded content should be valid");
        let resume = fs.file_content(&[], "/home/personal/Resume.js");
        assert!(resume.is_ok());
    }

    #[test]
    fn test_resolve_relative() {
        let fs = create_test_fs();

        let resolved = fs.resolve(&[], "home/personal").expect("should resolve");
        assert_eq!(resolved.path, segs(&["home", "personal"]));
        assert!(resolved.node.is_directory());

        let resolved = fs.resolve(&segs(&["home"]), "personal/Resume.js").unwrap();
        assert_eq!(resolved.node.content(), Some("const resume = {};"));
    }

    #[test]
    fn test_resolve_dot_and_dotdot() {
        let fs = create_test_fs();
        let base = segs(&["home", "personal"]);

        assert_eq!(fs.resolve(&base, ".").unwrap().path, base);
        assert_eq!(fs.resolve(&base, "..").unwrap().path, segs(&["home"]));
        assert_eq!(fs.resolve(&base, "../..").unwrap().path, segs(&[]));
        assert_eq!(fs.resolve(&base, "../../docs").unwrap().path, segs(&["docs"]));
        // `..` at the root stays at the root
        assert_eq!(fs.resolve(&[], "../../..").unwrap().path, segs(&[]));
        assert_eq!(fs.resolve(&[], "./home/./empty").unwrap().path, segs(&["home", "empty"]));
    }

    #[test]
    fn test_resolve_absolute_and_home() {
        let fs = create_test_fs();
        let base = segs(&["home", "personal"]);

        assert_eq!(fs.resolve(&base, "/docs").unwrap().path, segs(&["docs"]));
        assert_eq!(fs.resolve(&base, "/").unwrap().path, segs(&[]));
        assert_eq!(fs.resolve(&base, "~").unwrap().path, segs(&[]));
        assert_eq!(fs.resolve(&base, "~/docs").unwrap().path, segs(&["docs"]));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let fs = create_test_fs();
        assert!(fs.resolve(&[], "Home").is_none());
        assert!(fs.resolve(&[], "home/personal/resume.js").is_none());
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let fs = create_test_fs();
        assert!(fs.resolve(&[], "readme.md/x").is_none());
        assert!(fs.resolve(&[], "readme.md/..").is_none());
        assert!(fs.resolve(&[], "missing/..").is_none());
    }

    #[test]
    fn test_directory_and_file_content() {
        let fs = create_test_fs();

        assert!(fs.directory(&[], "home").is_ok());
        assert_eq!(
            fs.directory(&[], "readme.md"),
            Err(ShellError::PathNotFound {
                path: "readme.md".to_string()
            })
        );

        assert_eq!(fs.file_content(&[], "readme.md"), Ok("hello"));
        assert_eq!(
            fs.file_content(&[], "home"),
            Err(ShellError::FileNotFound {
                path: "home".to_string()
            })
        );
    }

    #[test]
    fn test_list_entries_keeps_insertion_order() {
        let fs = create_test_fs();
        let docs = fs.get(&segs(&["docs"])).unwrap();
        assert_eq!(VirtualFs::list_entries(docs), vec!["c.md", "a.md", "B"]);

        let file = fs.get(&segs(&["readme.md"])).unwrap();
        assert!(VirtualFs::list_entries(file).is_empty());
    }

    #[test]
    fn test_display_path() {
        assert_eq!(VirtualFs::display_path(&[]), "/");
        assert_eq!(VirtualFs::display_path(&segs(&["home", "personal"])), "/home/personal");
    }

    #[test]
    fn test_duplicate_siblings_rejected() {
        let result = VirtualFs::new(FsNode::directory(
            "",
            vec![FsNode::directory(
                "home",
                vec![FsNode::file("a", "1"), FsNode::file("a", "2")],
            )],
        ));
        assert!(matches!(
            result,
            Err(ContentError::DuplicateEntry { ref parent, ref name }) if parent == "/home" && name == "a"
        ));
    }

    #[test]
    fn test_invalid_names_rejected() {
        for bad in ["", ".", "..", "~", "a/b"] {
            let result = VirtualFs::new(FsNode::directory("", vec![FsNode::file(bad, "")]));
            assert!(matches!(result, Err(ContentError::InvalidName(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_from_json() {
        let fs = VirtualFs::from_json(
            r#"{ "entries": [
                { "name": "links", "entries": [
                    { "name": "gh.url", "display": "github", "content": "https://github.com" }
                ] },
                { "name": "notes.txt", "content": "hi" }
            ] }"#,
        )
        .expect("document should load");

        let links = fs.get(&segs(&["links"])).unwrap();
        assert_eq!(VirtualFs::list_entries(links), vec!["github"]);
        assert_eq!(fs.file_content(&[], "links/gh.url"), Ok("https://github.com"));
    }

    #[test]
    fn test_from_json_ambiguous_node() {
        let result = VirtualFs::from_json(r#"{ "entries": [ { "name": "x" } ] }"#);
        assert!(matches!(result, Err(ContentError::AmbiguousNode(ref n)) if n == "x"));

        let result =
            VirtualFs::from_json(r#"{ "entries": [ { "name": "x", "entries": [], "content": "" } ] }"#);
        assert!(matches!(result, Err(ContentError::AmbiguousNode(_))));
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            VirtualFs::from_json("not json"),
            Err(ContentError::Parse(_))
        ));
    }
}

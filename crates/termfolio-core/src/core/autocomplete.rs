//! Tab autocomplete for path arguments.
//!
//! Completion is a case-sensitive prefix match over the entry names of one
//! directory, in directory order:
//! - Single match: the partial segment is replaced in place
//! - Multiple matches: candidates are listed, the input is left alone
//! - No match: nothing happens

use crate::config::PATH_COMMANDS;
use crate::core::VirtualFs;
use crate::models::FsNode;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single match - the completed command line.
    Single(String),
    /// Multiple matches - candidate names in directory order.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Parsed path argument for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix including the trailing slash (e.g., "docs/" or "").
    dir_part: &'a str,
    /// Segment being completed.
    name_part: &'a str,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str) -> Self {
        match partial.rfind('/') {
            Some(idx) => Self {
                dir_part: &partial[..=idx],
                name_part: &partial[idx + 1..],
            },
            None => Self {
                dir_part: "",
                name_part: partial,
            },
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Names of entries in `dir` starting with `partial`.
///
/// An empty partial matches every entry. Files have no entries.
pub fn complete<'a>(partial: &str, dir: &'a FsNode) -> Vec<&'a str> {
    dir.entries()
        .map(|entries| {
            entries
                .iter()
                .map(FsNode::name)
                .filter(|name| name.starts_with(partial))
                .collect()
        })
        .unwrap_or_default()
}

/// Perform autocomplete on Tab press.
///
/// Only the first argument of a path command is completed. The directory
/// searched is the argument's prefix up to its last `/`, relative to `cwd`.
pub fn autocomplete(input: &str, cwd: &[String], fs: &VirtualFs) -> AutocompleteResult {
    let mut tokens = input.split_whitespace();
    let Some(cmd) = tokens.next() else {
        return AutocompleteResult::None;
    };
    if !PATH_COMMANDS.contains(&cmd) {
        return AutocompleteResult::None;
    }

    let parsed = ParsedPath::parse(tokens.next().unwrap_or(""));

    let search_dir = if parsed.dir_part.is_empty() {
        fs.get(cwd)
    } else {
        fs.resolve(cwd, parsed.dir_part).map(|resolved| resolved.node)
    };
    let Some(search_dir) = search_dir else {
        return AutocompleteResult::None;
    };

    let matches = complete(parsed.name_part, search_dir);
    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [single] => AutocompleteResult::Single(format!("{} {}{}", cmd, parsed.dir_part, single)),
        _ => AutocompleteResult::Multiple(matches.iter().map(|s| s.to_string()).collect()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(FsNode::directory(
            "",
            vec![
                FsNode::file("resume.js", "resume"),
                FsNode::file("readme.md", "readme"),
                FsNode::directory(
                    "docs",
                    vec![
                        FsNode::file("resume.js", "resume"),
                        FsNode::file("notes.md", "notes"),
                    ],
                ),
                FsNode::file("Rust.md", "rust"),
            ],
        ))
        .expect("valid tree")
    }

    #[test]
    fn test_complete_prefix() {
        let fs = create_test_fs();
        assert_eq!(complete("re", fs.root()), vec!["resume.js", "readme.md"]);
        assert_eq!(complete("res", fs.root()), vec!["resume.js"]);
        assert!(complete("zzz", fs.root()).is_empty());
    }

    #[test]
    fn test_complete_empty_partial_matches_all_in_order() {
        let fs = create_test_fs();
        assert_eq!(
            complete("", fs.root()),
            vec!["resume.js", "readme.md", "docs", "Rust.md"]
        );
    }

    #[test]
    fn test_complete_is_case_sensitive() {
        let fs = create_test_fs();
        assert_eq!(complete("R", fs.root()), vec!["Rust.md"]);
        assert_eq!(complete("r", fs.root()), vec!["resume.js", "readme.md"]);
    }

    #[test]
    fn test_complete_on_file() {
        let file = FsNode::file("a", "b");
        assert!(complete("", &file).is_empty());
    }

    #[test]
    fn test_autocomplete_multiple() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("nvim re", &[], &fs),
            AutocompleteResult::Multiple(vec!["resume.js".to_string(), "readme.md".to_string()])
        );
    }

    #[test]
    fn test_autocomplete_single() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("nvim res", &[], &fs),
            AutocompleteResult::Single("nvim resume.js".to_string())
        );
    }

    #[test]
    fn test_autocomplete_preserves_prefix() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("cat docs/re", &[], &fs),
            AutocompleteResult::Single("cat docs/resume.js".to_string())
        );
        assert_eq!(
            autocomplete("cd /docs/n", &["docs".to_string()], &fs),
            AutocompleteResult::Single("cd /docs/notes.md".to_string())
        );
    }

    #[test]
    fn test_autocomplete_relative_to_cwd() {
        let fs = create_test_fs();
        let cwd = vec!["docs".to_string()];
        assert_eq!(
            autocomplete("open no", &cwd, &fs),
            AutocompleteResult::Single("open notes.md".to_string())
        );
        assert_eq!(
            autocomplete("ls ../do", &cwd, &fs),
            AutocompleteResult::Single("ls ../docs".to_string())
        );
    }

    #[test]
    fn test_autocomplete_missing_argument_lists_all() {
        let fs = create_test_fs();
        let cwd = vec!["docs".to_string()];
        assert_eq!(
            autocomplete("ls", &cwd, &fs),
            AutocompleteResult::Multiple(vec!["resume.js".to_string(), "notes.md".to_string()])
        );
    }

    #[test]
    fn test_autocomplete_unknown_prefix_dir() {
        let fs = create_test_fs();
        assert_eq!(autocomplete("cd nope/re", &[], &fs), AutocompleteResult::None);
        assert_eq!(autocomplete("cd readme.md/x", &[], &fs), AutocompleteResult::None);
    }

    #[test]
    fn test_autocomplete_non_path_command() {
        let fs = create_test_fs();
        assert_eq!(autocomplete("pwd re", &[], &fs), AutocompleteResult::None);
        assert_eq!(autocomplete("echo re", &[], &fs), AutocompleteResult::None);
        assert_eq!(autocomplete("", &[], &fs), AutocompleteResult::None);
    }

    #[test]
    fn test_autocomplete_no_match() {
        let fs = create_test_fs();
        assert_eq!(autocomplete("nvim xyz", &[], &fs), AutocompleteResult::None);
    }
}

//! Command history recall.
//!
//! The cursor indexes into the real, non-empty commands of the log
//! (oldest first). `None` means nothing is selected and the input buffer
//! belongs to the user.

use crate::models::{CommandRecord, RecordKind};

/// What the caller should do with the input buffer after a history move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Overwrite the buffer with this command.
    Select(&'a str),
    /// Empty the buffer (moved past the newest entry).
    Clear,
    /// Leave the buffer alone.
    Unchanged,
}

/// Position in the command history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    index: Option<usize>,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected index, `None` when the buffer is free-typed.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Forget the selection.
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Arrow-up: step toward older entries, clamped at the oldest.
    ///
    /// With nothing selected, selects the newest entry.
    pub fn older<'a>(&mut self, entries: &[&'a str]) -> Recall<'a> {
        if entries.is_empty() {
            self.index = None;
            return Recall::Unchanged;
        }

        let next = match self.valid_index(entries.len()) {
            None => entries.len() - 1,
            Some(0) => return Recall::Unchanged,
            Some(i) => i - 1,
        };

        self.index = Some(next);
        Recall::Select(entries[next])
    }

    /// Arrow-down: step toward newer entries.
    ///
    /// Moving past the newest entry deselects and clears the buffer.
    pub fn newer<'a>(&mut self, entries: &[&'a str]) -> Recall<'a> {
        match self.valid_index(entries.len()) {
            None => {
                self.index = None;
                Recall::Unchanged
            }
            Some(i) if i + 1 < entries.len() => {
                self.index = Some(i + 1);
                Recall::Select(entries[i + 1])
            }
            Some(_) => {
                self.index = None;
                Recall::Clear
            }
        }
    }

    fn valid_index(&self, len: usize) -> Option<usize> {
        self.index.filter(|&i| i < len)
    }
}

/// Inputs eligible for recall, oldest first.
pub fn recallable(commands: &[CommandRecord]) -> Vec<&str> {
    commands
        .iter()
        .filter(|record| record.kind == RecordKind::Real && !record.input.is_empty())
        .map(|record| record.input.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(input: &str, kind: RecordKind) -> CommandRecord {
        CommandRecord {
            input: input.to_string(),
            kind,
            output: String::new(),
            cwd: "/".to_string(),
        }
    }

    #[test]
    fn test_recallable_filters_fake_and_empty() {
        let commands = vec![
            record("pwd", RecordKind::Real),
            record("foo^C", RecordKind::Fake),
            record("", RecordKind::Real),
            record("ls", RecordKind::Real),
            record("cd nope", RecordKind::Fake),
        ];
        assert_eq!(recallable(&commands), vec!["pwd", "ls"]);
    }

    #[test]
    fn test_up_up_down_down() {
        let entries = ["pwd", "ls"];
        let mut cursor = HistoryCursor::new();

        assert_eq!(cursor.older(&entries), Recall::Select("ls"));
        assert_eq!(cursor.index(), Some(1));
        assert_eq!(cursor.older(&entries), Recall::Select("pwd"));
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.newer(&entries), Recall::Select("ls"));
        assert_eq!(cursor.newer(&entries), Recall::Clear);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn test_older_clamps_at_oldest() {
        let entries = ["a", "b"];
        let mut cursor = HistoryCursor::new();
        cursor.older(&entries);
        cursor.older(&entries);

        assert_eq!(cursor.older(&entries), Recall::Unchanged);
        assert_eq!(cursor.index(), Some(0));
    }

    #[test]
    fn test_newer_without_selection() {
        let mut cursor = HistoryCursor::new();
        assert_eq!(cursor.newer(&["a"]), Recall::Unchanged);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn test_empty_history() {
        let mut cursor = HistoryCursor::new();
        assert_eq!(cursor.older(&[]), Recall::Unchanged);
        assert_eq!(cursor.newer(&[]), Recall::Unchanged);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn test_stale_index_is_ignored() {
        let mut cursor = HistoryCursor::new();
        cursor.older(&["a", "b", "c"]);
        assert_eq!(cursor.index(), Some(2));

        // Log shrank underneath the cursor.
        assert_eq!(cursor.older(&["x"]), Recall::Select("x"));
        assert_eq!(cursor.index(), Some(0));
    }
}

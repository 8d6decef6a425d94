//! Key scripts.
//!
//! A key script is plain text where every character is one key press, plus
//! bracketed names for keys that have no character:
//!
//! | token | key |
//! |---|---|
//! | `<Tab>` | Tab |
//! | `<Enter>` / `<CR>` | Enter |
//! | `<Up>` / `<Down>` | ArrowUp / ArrowDown |
//! | `<Esc>` | Escape |
//! | `<BS>` | Backspace |
//! | `<Space>` | a space |
//! | `<lt>` | a literal `<` |
//! | `<C-x>` | x with Control held |
//! | `<M-x>` | x with Meta held |
//!
//! A literal tab character is read as `<Tab>`.

use termfolio_core::config::keys;

use crate::CliError;

/// One key press, optionally with a modifier held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyStroke {
    pub modifier: Option<&'static str>,
    pub key: String,
}

impl KeyStroke {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            modifier: None,
            key: key.into(),
        }
    }

    pub fn with(modifier: &'static str, key: impl Into<String>) -> Self {
        Self {
            modifier: Some(modifier),
            key: key.into(),
        }
    }

    /// True for keys that do not type a character.
    pub fn is_control(&self) -> bool {
        self.modifier.is_some() || self.key.chars().count() != 1
    }
}

/// Parse a key script into strokes.
pub fn parse_script(script: &str) -> Result<Vec<KeyStroke>, CliError> {
    let mut strokes = Vec::new();
    let mut rest = script;

    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            let end = rest
                .find('>')
                .ok_or_else(|| CliError::KeyScript(format!("unterminated token in {rest:?}")))?;
            strokes.push(parse_token(&rest[1..end])?);
            rest = &rest[end + 1..];
            continue;
        }

        strokes.push(match ch {
            '\t' => KeyStroke::plain(keys::TAB),
            '\n' | '\r' => KeyStroke::plain(keys::ENTER),
            _ => KeyStroke::plain(ch.to_string()),
        });
        rest = &rest[ch.len_utf8()..];
    }

    Ok(strokes)
}

fn parse_token(token: &str) -> Result<KeyStroke, CliError> {
    let stroke = match token {
        "Tab" => KeyStroke::plain(keys::TAB),
        "Enter" | "CR" => KeyStroke::plain(keys::ENTER),
        "Up" => KeyStroke::plain(keys::ARROW_UP),
        "Down" => KeyStroke::plain(keys::ARROW_DOWN),
        "Esc" => KeyStroke::plain(keys::ESCAPE),
        "BS" => KeyStroke::plain(keys::BACKSPACE),
        "Space" => KeyStroke::plain(" "),
        "lt" => KeyStroke::plain("<"),
        _ => {
            if let Some(key) = token.strip_prefix("C-")
                && key.chars().count() == 1
            {
                KeyStroke::with(keys::CONTROL, key)
            } else if let Some(key) = token.strip_prefix("M-")
                && key.chars().count() == 1
            {
                KeyStroke::with(keys::META, key)
            } else {
                return Err(CliError::KeyScript(format!("unknown key <{token}>")));
            }
        }
    };
    Ok(stroke)
}

/// Strokes for one line read from stdin.
///
/// The line is submitted with Enter unless it already ends in a control
/// key (`nvim re<Tab>`, `foo<C-c>`, `<Up>`).
pub fn line_strokes(line: &str) -> Result<Vec<KeyStroke>, CliError> {
    let mut strokes = parse_script(line.trim_end_matches(['\n', '\r']))?;
    if !strokes.last().is_some_and(KeyStroke::is_control) {
        strokes.push(KeyStroke::plain(keys::ENTER));
    }
    Ok(strokes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(strokes: &[KeyStroke]) -> Vec<&str> {
        strokes.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_plain_text() {
        let strokes = parse_script("ls -a").unwrap();
        assert_eq!(keys_of(&strokes), vec!["l", "s", " ", "-", "a"]);
        assert!(strokes.iter().all(|s| s.modifier.is_none()));
    }

    #[test]
    fn test_named_tokens() {
        let strokes = parse_script("<Up><Down><Esc><BS><Space><lt><CR>").unwrap();
        assert_eq!(
            keys_of(&strokes),
            vec!["ArrowUp", "ArrowDown", "Escape", "Backspace", " ", "<", "Enter"]
        );
    }

    #[test]
    fn test_modifiers() {
        let strokes = parse_script("foo<C-c><M-k>").unwrap();
        assert_eq!(strokes[3], KeyStroke::with("Control", "c"));
        assert_eq!(strokes[4], KeyStroke::with("Meta", "k"));
    }

    #[test]
    fn test_tab_character() {
        let strokes = parse_script("cd h\t").unwrap();
        assert_eq!(strokes.last(), Some(&KeyStroke::plain("Tab")));
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(matches!(parse_script("<Tab"), Err(CliError::KeyScript(_))));
        assert!(matches!(parse_script("<F1>"), Err(CliError::KeyScript(_))));
        assert!(matches!(parse_script("<C-ab>"), Err(CliError::KeyScript(_))));
    }

    #[test]
    fn test_line_strokes_submit() {
        assert_eq!(keys_of(&line_strokes("pwd\n").unwrap()), vec!["p", "w", "d", "Enter"]);
        assert_eq!(keys_of(&line_strokes("").unwrap()), vec!["Enter"]);
    }

    #[test]
    fn test_line_strokes_control_suffix() {
        assert_eq!(keys_of(&line_strokes("cd h\t").unwrap()), vec!["c", "d", " ", "h", "Tab"]);
        assert_eq!(keys_of(&line_strokes("<Up>").unwrap()), vec!["ArrowUp"]);
        assert_eq!(line_strokes("x<C-c>").unwrap().len(), 2);
    }
}

/// Replace the characters `start..end` of a text control with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: String::new(),
        }
    }

    pub fn replace_all(text: impl Into<String>) -> Self {
        Self {
            start: 0,
            end: usize::MAX,
            text: text.into(),
        }
    }

    /// Text after the edit; out-of-range positions are clamped.
    pub fn apply(&self, current: &str) -> String {
        let chars: Vec<char> = current.chars().collect();
        let end = self.end.min(chars.len());
        let start = self.start.min(end);
        chars[..start]
            .iter()
            .copied()
            .chain(self.text.chars())
            .chain(chars[end..].iter().copied())
            .collect()
    }
}

/// A single-line text control holding an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    text: String,
    enabled: bool,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
        }
    }
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Programmatic update; bypasses the keystroke check.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Apply a user edit unless the result could not be read as an integer.
    /// An empty field is let through so the user can retype a value.
    pub fn verify_and_apply(&mut self, edit: &TextEdit) -> bool {
        let candidate = edit.apply(&self.text);
        if !candidate.is_empty() && candidate.parse::<i32>().is_err() {
            return false;
        }
        self.text = candidate;
        true
    }
}

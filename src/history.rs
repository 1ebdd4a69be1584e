//! History of recognized text: tabular and flat variants
//!
//! The formatter never fails. Each recognized line becomes one table row
//! verbatim, so malformed OCR output (stray delimiters, garbage glyphs)
//! degrades to an opaque single-cell value instead of an error.

use serde::{Deserialize, Serialize};

/// How recognized text is accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryMode {
    /// One row per recognized line, replaced on each capture.
    #[default]
    Table,
    /// Trimmed text appended to a persistent buffer.
    Flat,
}

/// One row of the history table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRow {
    /// Recognized line, kept verbatim.
    pub text: String,
    /// User-entered annotation, starts empty.
    pub note: String,
}

/// Tabular history: the "History" column plus a user note column.
#[derive(Debug, Clone, Default)]
pub struct HistoryTable {
    rows: Vec<HistoryRow>,
}

impl HistoryTable {
    /// Build a table from recognized text, one row per line.
    ///
    /// Blank lines are kept as empty-string rows, not dropped.
    pub fn from_text(text: &str) -> Self {
        let rows = text
            .lines()
            .map(|line| HistoryRow {
                text: line.to_string(),
                note: String::new(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [HistoryRow] {
        &mut self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render for export: `text<TAB>note` when a note is present,
    /// the bare text otherwise.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.text);
            if !row.note.is_empty() {
                out.push('\t');
                out.push_str(&row.note);
            }
            out.push('\n');
        }
        out
    }
}

/// Flat history: captures appended to one text buffer.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    text: String,
}

impl HistoryBuffer {
    /// Append one capture's recognized text, trimmed of leading and
    /// trailing whitespace. Successive captures are separated by a blank
    /// line. Whitespace-only captures are dropped.
    pub fn append(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push_str("\n\n");
        }
        self.text.push_str(trimmed);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The accumulated recognized text across captures, owned by the presenter.
#[derive(Debug, Clone)]
pub enum History {
    Table(HistoryTable),
    Flat(HistoryBuffer),
}

impl History {
    pub fn new(mode: HistoryMode) -> Self {
        match mode {
            HistoryMode::Table => History::Table(HistoryTable::default()),
            HistoryMode::Flat => History::Flat(HistoryBuffer::default()),
        }
    }

    pub fn mode(&self) -> HistoryMode {
        match self {
            History::Table(_) => HistoryMode::Table,
            History::Flat(_) => HistoryMode::Flat,
        }
    }

    /// Fold one capture's recognized text into the history.
    ///
    /// Table mode replaces the whole table; flat mode appends.
    pub fn ingest(&mut self, text: &str) {
        match self {
            History::Table(table) => *table = HistoryTable::from_text(text),
            History::Flat(buffer) => buffer.append(text),
        }
    }

    /// Full current contents, as written by export.
    pub fn render(&self) -> String {
        match self {
            History::Table(table) => table.render(),
            History::Flat(buffer) => buffer.text().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            History::Table(table) => table.is_empty(),
            History::Flat(buffer) => buffer.is_empty(),
        }
    }

    pub fn clear(&mut self) {
        *self = History::new(self.mode());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keeps_blank_lines_as_empty_rows() {
        let table = HistoryTable::from_text("A\nB\n\nC");
        let texts: Vec<&str> = table.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["A", "B", "", "C"]);
        assert!(table.rows().iter().all(|r| r.note.is_empty()));
    }

    #[test]
    fn table_keeps_malformed_lines_verbatim() {
        let table = HistoryTable::from_text("a,b,,c\n\"quoted | stray\t stuff");
        let texts: Vec<&str> = table.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["a,b,,c", "\"quoted | stray\t stuff"]);
    }

    #[test]
    fn flat_buffer_trims_outer_whitespace_only() {
        let mut buffer = HistoryBuffer::default();
        buffer.append("  hello world  \n");
        assert_eq!(buffer.text(), "hello world");
    }

    #[test]
    fn flat_buffer_appends_captures_with_separator() {
        let mut buffer = HistoryBuffer::default();
        buffer.append("first");
        buffer.append("second");
        buffer.append("   \n");
        assert_eq!(buffer.text(), "first\n\nsecond");
    }

    #[test]
    fn table_history_replaces_on_each_capture() {
        let mut history = History::new(HistoryMode::Table);
        history.ingest("old");
        history.ingest("new A\nnew B");
        assert_eq!(history.render(), "new A\nnew B\n");
    }

    #[test]
    fn flat_history_accumulates_across_captures() {
        let mut history = History::new(HistoryMode::Flat);
        history.ingest(" one ");
        history.ingest("two");
        assert_eq!(history.render(), "one\n\ntwo");
    }

    #[test]
    fn notes_show_up_in_the_rendered_table() {
        let mut table = HistoryTable::from_text("kick\nsnare");
        table.rows_mut()[1].note = "double it".to_string();
        assert_eq!(table.render(), "kick\nsnare\tdouble it\n");
    }
}

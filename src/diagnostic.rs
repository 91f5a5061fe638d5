use std::ops::Range;

use crate::metadata::Metadata;

/// An error reported by the reader, a rewrite pass or the config loader.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub message: String,
    pub meta: Metadata,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: String, meta: Metadata) -> Self {
        Self {
            message,
            meta,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    /// Byte range in `source` that the location points at.
    ///
    /// Locations are line/column based, so the label covers one character;
    /// an unset location points at the start of the file.
    fn byte_range(&self, source: &str) -> Range<usize> {
        if self.meta.is_unset() || self.meta.line < 1 {
            return 0..0;
        }
        let line_start: usize = source
            .split_inclusive('\n')
            .take(self.meta.line as usize - 1)
            .map(str::len)
            .sum();
        let start = (line_start + (self.meta.column as usize).saturating_sub(1)).min(source.len());
        start..(start + 1).min(source.len())
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str, source: &str) {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        let range = self.byte_range(source);
        let mut report = Report::build(ReportKind::Error, filename, range.start)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, range))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        // A closed stderr is not worth a panic.
        let _ = report
            .finish()
            .eprint((filename, Source::from(source)));
    }
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str, source: &str) {
    for diag in diagnostics {
        diag.render(filename, source);
    }
}

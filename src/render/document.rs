//! Shared document assembly.
//!
//! Every artifact is a list of lines joined with a single `\n`. Format-specific
//! policy (separators, alignment, omission) lives in the individual renderers.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn extend<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn into_content(self) -> String {
        self.lines.join("\n")
    }
}

/// Join header, body and footer into the final text.
pub fn assemble(header: &[String], body: &[String], footer: &[String]) -> String {
    let mut doc = Document::new();
    doc.extend(header.iter().cloned()).extend(body.iter().cloned()).extend(footer.iter().cloned());
    doc.into_content()
}

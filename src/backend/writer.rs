//! Output writer with indentation tracking
//!
//! Handles writing generated C# with proper indentation. Braced blocks are opened and closed by
//! [`CodeWriter::block`], so every `{` has its `}` at the same level by construction.

/// Writer that tracks indentation and builds generated output
#[derive(Debug)]
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
}

impl CodeWriter {
    /// Create a new writer with `indent_width` spaces per level
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Borrow the output written so far
    pub fn snapshot(&self) -> &str {
        &self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        debug_assert!(self.indent_level > 0, "dedent below column zero");
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    /// Start a line: indentation followed by `s`
    pub fn write(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write an indented line
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Continue the current line
    pub fn write_no_indent(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Continue and terminate the current line
    pub fn writeln_no_indent(&mut self, s: &str) {
        self.output.push_str(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write an empty line (no trailing indentation)
    pub fn blank_line(&mut self) {
        self.newline();
    }

    /// Write `header`, then a braced block whose contents `body` writes one level deeper.
    pub fn block<E>(&mut self, header: &str, body: impl FnOnce(&mut Self) -> Result<(), E>) -> Result<(), E> {
        self.writeln(header);
        self.writeln("{");
        self.indent();
        let result = body(self);
        self.dedent();
        self.writeln("}");
        result
    }

    /// Infallible [`CodeWriter::block`].
    pub fn simple_block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        let result: Result<(), std::convert::Infallible> = self.block(header, |w| {
            body(w);
            Ok(())
        });
        let Ok(()) = result;
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}

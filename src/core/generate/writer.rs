/// Line-oriented builder for tab-indented Go source.
#[derive(Debug, Default)]
pub struct GoWriter {
    buf: String,
    indent: usize,
}

impl GoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `indent` levels of indentation.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            buf: String::new(),
            indent,
        }
    }

    /// Write one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.indent {
            self.buf.push('\t');
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Append text as-is, without indentation or newline.
    pub fn raw(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

use anyhow::Result;
use std::io::Write;

pub type EmitResult = Result<()>;

/// Indentation state threaded through a report. The report format indents with tabs.
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub indent_level: usize,
    pub indent_chars: String,
}

impl EmitContext {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_chars: "\t".to_string(),
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn get_indent(&self) -> String {
        self.indent_chars.repeat(self.indent_level)
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Emitter {
    type Item;

    fn emit<W: Write>(
        &self,
        item: &Self::Item,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult;

    fn emit_to_string(&self, item: &Self::Item) -> Result<String> {
        let mut buffer = Vec::new();
        let mut context = EmitContext::new();
        self.emit(item, &mut buffer, &mut context)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct EmitHelper;

impl EmitHelper {
    pub fn write_line<W: Write>(writer: &mut W, context: &EmitContext, text: &str) -> EmitResult {
        writeln!(writer, "{}{}", context.get_indent(), text)?;
        Ok(())
    }
}

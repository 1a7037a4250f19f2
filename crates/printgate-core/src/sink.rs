//! The output primitive the gate delegates to: value rendering, options,
//! and the sink trait.

use std::io;

use serde_json::Value;

/// Rendering options mirroring the keyword arguments of the output
/// primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Separator written between consecutive values.
    pub sep: String,
    /// Terminator written after the last value.
    pub end: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
        }
    }
}

impl PrintOptions {
    /// Replace the separator written between values.
    pub fn sep(mut self, sep: &str) -> Self {
        self.sep = sep.to_string();
        self
    }

    /// Replace the terminator written after the last value.
    pub fn end(mut self, end: &str) -> Self {
        self.end = end.to_string();
        self
    }
}

/// An output primitive: writes an ordered sequence of values as one record.
pub trait PrintSink {
    /// Write `values` joined by `opts.sep` and terminated by `opts.end`.
    ///
    /// A call with no values writes the bare terminator.
    fn write_values(&mut self, values: &[Value], opts: &PrintOptions) -> io::Result<()>;
}

/// Every writer is a sink, so `io::stdout()` and `Vec<u8>` both work with
/// no adapter type.
impl<W: io::Write> PrintSink for W {
    fn write_values(&mut self, values: &[Value], opts: &PrintOptions) -> io::Result<()> {
        let mut line = String::new();
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                line.push_str(&opts.sep);
            }
            line.push_str(&render_value(value));
        }
        line.push_str(&opts.end);
        self.write_all(line.as_bytes())
    }
}

/// Render a single value: strings render their bare contents, everything
/// else renders as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

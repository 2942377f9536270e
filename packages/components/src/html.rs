use serde::{Deserialize, Serialize};

/// Trusted markup that is written verbatim.
///
/// Only authored layout fragments and the static icon set should be wrapped
/// in `Markup`; anything that comes from catalog or config data goes through
/// [`MarkupWriter::text`] or attribute values instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn trusted(source: impl Into<String>) -> Self {
        Markup(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Output buffer for markup. The only place values are embedded into HTML.
pub struct MarkupWriter {
    buffer: String,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Open an element. Attribute values are escaped; empty values are omitted.
    pub fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        for (name, value) in attributes {
            if value.is_empty() {
                continue;
            }
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape_html(value));
            self.buffer.push('"');
        }
        self.buffer.push('>');
    }

    pub fn close(&mut self, tag: &str) {
        if is_void(tag) {
            return;
        }
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    /// `open` + escaped text + `close`.
    pub fn element(&mut self, tag: &str, attributes: &[(&str, &str)], text: &str) {
        self.open(tag, attributes);
        self.text(text);
        self.close(tag);
    }

    pub fn text(&mut self, text: &str) {
        self.buffer.push_str(&escape_html(text));
    }

    pub fn raw(&mut self, markup: &Markup) {
        self.buffer.push_str(markup.as_str());
    }

    pub(crate) fn raw_static(&mut self, markup: &'static str) {
        self.buffer.push_str(markup);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source" | "wbr"
    )
}

/// Argument to an inline event handler call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsArg<'a> {
    Str(&'a str),
    Int(i64),
}

impl JsArg<'_> {
    fn write(&self, out: &mut String) {
        match self {
            // A JSON string literal is a valid JS string literal
            JsArg::Str(s) => {
                out.push_str(&serde_json::Value::String((*s).to_string()).to_string())
            }
            JsArg::Int(n) => out.push_str(&n.to_string()),
        }
    }
}

/// Builds the script of an inline event handler (`onclick`, `onkeyup`).
///
/// The result is still escaped as an attribute value when written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handler {
    script: String,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an authored handler script, e.g. from an untyped property bag.
    pub fn script(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn call(function: &str, args: &[JsArg]) -> Self {
        Self::new().then(function, args)
    }

    pub fn then(mut self, function: &str, args: &[JsArg]) -> Self {
        if !self.script.is_empty() {
            self.script.push_str("; ");
        }
        self.script.push_str(function);
        self.script.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.script.push_str(", ");
            }
            arg.write(&mut self.script);
        }
        self.script.push(')');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.script
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

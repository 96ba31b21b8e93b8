//! Line builder for a single manifest document.

use std::fmt::Display;

const RULE: &str =
    "# =============================================================================";

/// A document under construction: a comment banner followed by indented lines.
#[derive(Debug, Default)]
pub(crate) struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Start a document with a one-line banner title.
    pub fn new(title: &str) -> Self {
        Self {
            lines: banner_lines(&[title]),
        }
    }

    /// Comment banner: a rule, one comment per entry (an empty entry becomes another
    /// rule), and a closing rule.
    pub fn banner(entries: &[&str]) -> String {
        banner_lines(entries).join("\n")
    }

    pub fn line(&mut self, indent: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{:indent$}{}", "", text.as_ref(), indent = indent));
    }

    /// `key: value` with the value rendered by `Display` (booleans as `true`/`false`).
    pub fn field(&mut self, indent: usize, key: &str, value: impl Display) {
        self.line(indent, format!("{}: {}", key, value));
    }

    /// One `- item` line per element; nothing for an empty slice.
    pub fn items(&mut self, indent: usize, items: &[String]) {
        self.prefixed_items(indent, "", items);
    }

    /// One `- {prefix}item` line per element.
    pub fn prefixed_items(&mut self, indent: usize, prefix: &str, items: &[String]) {
        for item in items {
            self.line(indent, format!("- {}{}", prefix, item));
        }
    }

    /// `apiVersion`, `kind` and `metadata` lines shared by every document.
    pub fn resource(&mut self, api_version: &str, kind: &str, name: &str, namespace: Option<&str>) {
        self.field(0, "apiVersion", api_version);
        self.field(0, "kind", kind);
        self.line(0, "metadata:");
        self.field(2, "name", name);
        if let Some(namespace) = namespace {
            self.field(2, "namespace", namespace);
        }
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn banner_lines(entries: &[&str]) -> Vec<String> {
    let mut lines = vec![RULE.to_string()];
    for entry in entries {
        if entry.is_empty() {
            lines.push(RULE.to_string());
        } else {
            lines.push(format!("# {}", entry));
        }
    }
    lines.push(RULE.to_string());
    lines
}

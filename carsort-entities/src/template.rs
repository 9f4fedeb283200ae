use std::fmt;

pub const DIST_PLACEHOLDER: &str = "{dist}";
pub const MINUTES_PLACEHOLDER: &str = "{minutes}";
pub const MIN_PLACEHOLDER: &str = "{min}";

/// A message with `{name}` placeholders, as provided by the page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replaces the first occurrence of each placeholder, in the given order.
    pub fn fill(&self, replacements: &[(&str, &str)]) -> String {
        replacements
            .iter()
            .fold(self.0.clone(), |msg, &(placeholder, value)| {
                msg.replacen(placeholder, value, 1)
            })
    }
}

impl From<&str> for Template {
    fn from(from: &str) -> Self {
        Self::new(from)
    }
}

impl From<String> for Template {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

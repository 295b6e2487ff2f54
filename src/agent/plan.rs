// ABOUTME: Plan - the ordered list of tool names an agent run executes.
// ABOUTME: Renders as a bracketed, quoted list for the run report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tool names of the fixed plan, in execution order.
pub const FIXED_PLAN: [&str; 3] = ["http_get", "sql_query", "ticket_create"];

/// An ordered sequence of tool names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan(Vec<String>);

impl Plan {
    /// Create a plan from tool names.
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(steps.into_iter().map(Into::into).collect())
    }

    /// The plan every run uses. It does not depend on the task or params.
    pub fn fixed() -> Self {
        Self::new(FIXED_PLAN)
    }

    pub fn steps(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plan {
    /// Formats as `['a', 'b']`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, step)?;
        }
        f.write_str("]")
    }
}

/// Quote a name with single quotes, switching to double quotes when the
/// name holds a single quote but no double quote.
///
/// Control characters and whitespace other than a plain space are escaped
/// as `\xhh`, `\uhhhh` or `\Uhhhhhhhh`. Format characters such as
/// U+200B are not recognised and are written as-is.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c if c.is_control() || (c.is_whitespace() && c != ' ') => match c as u32 {
                n if n < 0x100 => write!(f, "\\x{:02x}", n)?,
                n if n < 0x10000 => write!(f, "\\u{:04x}", n)?,
                n => write!(f, "\\U{:08x}", n)?,
            },
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

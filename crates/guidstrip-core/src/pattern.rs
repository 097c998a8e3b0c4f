//! Identifier matching for file names and markup content.
//!
//! Both expressions match the canonical 8-4-4-4-12 hexadecimal layout. The
//! name expression additionally swallows one leading `-`, so
//! `Form-3fa85f64-5717-4562-b3fc-2c963f66afa6.json` becomes `Form.json`
//! instead of `Form-.json`.

use crate::Result;
use regex::Regex;
use std::borrow::Cow;

/// Hexadecimal identifier without separator.
const GUID: &str = "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

/// Compiled name and content expressions.
///
/// # Examples
///
/// ```
/// use guidstrip_core::GuidPattern;
///
/// let patterns = GuidPattern::new()?;
///
/// let (name, removed) = patterns.strip_name("Entity_3fa85f64-5717-4562-b3fc-2c963f66afa6.xml");
/// assert_eq!(name, "Entity_.xml");
/// assert_eq!(removed, 1);
///
/// let (body, _) = patterns.strip_content("<Id>3fa85f64-5717-4562-b3fc-2c963f66afa6</Id>");
/// assert_eq!(body, "<Id></Id>");
/// # Ok::<(), guidstrip_core::SanitizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GuidPattern {
    name: Regex,
    content: Regex,
}

impl GuidPattern {
    /// Compiles both expressions.
    pub fn new() -> Result<Self> {
        Ok(Self {
            name: Regex::new(&format!("-?{GUID}"))?,
            content: Regex::new(GUID)?,
        })
    }

    /// Removes identifiers (and one optional leading `-` each) from a file
    /// name. Returns the new name and the number of identifiers removed.
    pub fn strip_name<'a>(&self, name: &'a str) -> (Cow<'a, str>, usize) {
        strip(&self.name, name)
    }

    /// Removes identifiers from markup text. Returns the new text and the
    /// number of identifiers removed.
    pub fn strip_content<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        strip(&self.content, text)
    }

    /// Expression applied to file names.
    pub fn name_regex(&self) -> &Regex {
        &self.name
    }

    /// Expression applied to markup content.
    pub fn content_regex(&self) -> &Regex {
        &self.content
    }
}

fn strip<'a>(regex: &Regex, input: &'a str) -> (Cow<'a, str>, usize) {
    let removed = regex.find_iter(input).count();
    if removed == 0 {
        return (Cow::Borrowed(input), 0);
    }
    (regex.replace_all(input, ""), removed)
}

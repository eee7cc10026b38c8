//! URL path templates with named placeholders.
//!
//! A template such as `/admin/api/{api_version}/orders/{order_id}.json` is
//! parsed once when its descriptor is built. Rendering substitutes every
//! placeholder with a caller-supplied, already-encoded value.

use thiserror::Error;

/// Errors found while parsing a path template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Template does not start with `/`.
    #[error("path template must start with '/'")]
    NotAbsolute,

    /// A `{` was never closed.
    #[error("unclosed placeholder at byte {0}")]
    Unclosed(usize),

    /// A `}` appeared without a matching `{`.
    #[error("unmatched '}}' at byte {0}")]
    Unmatched(usize),

    /// `{}` with no name.
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),

    /// Placeholder name is not an identifier.
    #[error("invalid placeholder name '{0}'")]
    InvalidName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template.
    ///
    /// Placeholder names may contain ASCII letters, digits, and `_`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] describing the first syntax problem found.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        if !raw.starts_with('/') {
            return Err(TemplateError::NotAbsolute);
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.char_indices();

        while let Some((idx, c)) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(TemplateError::Unclosed(idx)),
                            _ => name.push(inner),
                        }
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed(idx));
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder(idx));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(TemplateError::InvalidName(name));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => return Err(TemplateError::Unmatched(idx)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_owned(),
            segments,
        })
    }

    /// The template as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether `name` appears as a placeholder.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.placeholders().any(|p| p == name)
    }

    /// Render the template, asking `value` for the text of each placeholder.
    ///
    /// The returned text is inserted verbatim, so it must already be encoded
    /// for use in a path.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `value`.
    pub fn render<E, F>(&self, mut value: F) -> Result<String, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(name) => path.push_str(&value(name)?),
            }
        }
        Ok(path)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

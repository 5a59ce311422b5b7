//! Segment-based path patterns.
//!
//! Patterns look like `/movies/:id` or `/users/:user/posts/:post`. A pattern
//! is split on `/` and compared segment by segment: literal segments must be
//! equal, and each `:name` segment binds exactly one non-empty path segment.
//! There is no prefix matching and no multi-segment wildcard, so a pattern
//! only matches paths with the same number of segments.

use std::collections::HashSet;

use crate::error::PatternError;

/// Parameter bindings extracted from a matched path, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled `:param` path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string.
    ///
    /// # Errors
    ///
    /// - [`PatternError::MissingLeadingSlash`] if the pattern is not absolute
    /// - [`PatternError::EmptyParamName`] for a bare `:` segment
    /// - [`PatternError::DuplicateParam`] if a name is bound twice
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        };

        let mut seen = HashSet::new();
        let mut segments = Vec::new();

        for (index, raw) in rest.split('/').enumerate() {
            let segment = match raw.strip_prefix(':') {
                Some("") => {
                    return Err(PatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                        // +1 accounts for the empty segment before the leading slash
                        segment: index + 1,
                    });
                }
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(PatternError::DuplicateParam {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Param(name.to_string())
                }
                None => Segment::Literal(raw.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of the parameters, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match `path`, returning the bindings on success.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/')?;
        let mut parts = rest.split('/');
        let mut params = Params::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.insert(name, part),
            }
        }

        // Extra trailing segments mean a longer path.
        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }
}

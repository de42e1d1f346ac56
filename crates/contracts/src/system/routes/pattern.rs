//! Route path patterns
//!
//! A pattern is either a literal path (`/business`) or a path with exactly one
//! placeholder segment (`/business/:id`). Matching is done by comparing the
//! fixed prefix and suffix and checking the captured segment.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("path must start with '/'")]
    MissingLeadingSlash,

    #[error("placeholder must be a whole segment of the form ':name'")]
    MalformedPlaceholder,

    #[error("only one placeholder segment is supported")]
    TooManyPlaceholders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Literal(String),
    Parametrized {
        /// Everything up to and including the slash before the placeholder
        prefix: String,
        param: String,
        /// Everything after the placeholder, starting with a slash (or empty)
        suffix: String,
    },
}

impl RoutePattern {
    pub fn parse(path: &str) -> Result<Self, PatternError> {
        if !path.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash);
        }

        let segments: Vec<&str> = path.split('/').collect();
        let mut placeholder: Option<(usize, &str)> = None;

        for (idx, segment) in segments.iter().enumerate() {
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() || name.contains(':') {
                    return Err(PatternError::MalformedPlaceholder);
                }
                if placeholder.replace((idx, name)).is_some() {
                    return Err(PatternError::TooManyPlaceholders);
                }
            } else if segment.contains(':') {
                return Err(PatternError::MalformedPlaceholder);
            }
        }

        let Some((idx, name)) = placeholder else {
            return Ok(RoutePattern::Literal(path.to_string()));
        };

        let prefix = format!("{}/", segments[..idx].join("/"));
        let suffix = if idx + 1 < segments.len() {
            format!("/{}", segments[idx + 1..].join("/"))
        } else {
            String::new()
        };

        Ok(RoutePattern::Parametrized {
            prefix,
            param: name.to_string(),
            suffix,
        })
    }

    pub fn is_parametrized(&self) -> bool {
        matches!(self, RoutePattern::Parametrized { .. })
    }

    /// Name of the placeholder, if any
    pub fn param(&self) -> Option<&str> {
        match self {
            RoutePattern::Literal(_) => None,
            RoutePattern::Parametrized { param, .. } => Some(param),
        }
    }

    /// True if this is a literal pattern equal to `path`
    pub fn matches_exactly(&self, path: &str) -> bool {
        matches!(self, RoutePattern::Literal(literal) if literal == path)
    }

    /// Value of the placeholder segment if `path` fits this parametrized pattern.
    ///
    /// Literal patterns never capture. The captured segment is non-empty and
    /// never contains a slash.
    pub fn capture<'a>(&self, path: &'a str) -> Option<&'a str> {
        let RoutePattern::Parametrized { prefix, suffix, .. } = self else {
            return None;
        };

        let value = path.strip_prefix(prefix.as_str())?;
        let value = value.strip_suffix(suffix.as_str())?;

        if value.is_empty() || value.contains('/') {
            return None;
        }
        Some(value)
    }

    /// Shape of the pattern with the placeholder name erased.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        match self {
            RoutePattern::Literal(path) => path.clone(),
            RoutePattern::Parametrized { prefix, suffix, .. } => format!("{prefix}:{suffix}"),
        }
    }
}

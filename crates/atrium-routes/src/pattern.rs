//! Path patterns
//!
//! `collections/:name/:id` → literal, variable, variable.
//! A trailing `:name?` may be absent from the path.

use serde::Serialize;

use crate::error::RouteError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// Must match exactly (case-sensitive)
    Literal(String),
    /// Binds any non-empty segment
    Param(String),
    /// Trailing parameter that may be absent
    Optional(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let source = pattern.trim_matches('/').to_string();
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let raw: Vec<&str> = if source.is_empty() {
            Vec::new()
        } else {
            source.split('/').collect()
        };

        let mut segments = Vec::with_capacity(raw.len());
        let mut names: Vec<&str> = Vec::new();

        for (idx, part) in raw.iter().enumerate() {
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }

            let Some(name) = part.strip_prefix(':') else {
                segments.push(Segment::Literal(part.to_string()));
                continue;
            };

            let (name, optional) = match name.strip_suffix('?') {
                Some(name) => (name, true),
                None => (name, false),
            };
            if name.is_empty() {
                return Err(invalid("empty parameter name"));
            }
            if names.contains(&name) {
                return Err(invalid("duplicate parameter name"));
            }
            if optional && idx + 1 != raw.len() {
                return Err(invalid("optional parameter must be the last segment"));
            }
            names.push(name);

            segments.push(if optional {
                Segment::Optional(name.to_string())
            } else {
                Segment::Param(name.to_string())
            });
        }

        Ok(Self { source, segments })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in pattern order
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) | Segment::Optional(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Match path segments, returning bound parameters in encounter order
    pub fn match_segments<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<(String, String)>> {
        let required = self
            .segments
            .iter()
            .filter(|s| !matches!(s, Segment::Optional(_)))
            .count();
        if path.len() < required || path.len() > self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            let Some(value) = path.get(idx).map(AsRef::as_ref) else {
                // only an absent trailing optional gets here
                break;
            };
            match segment {
                Segment::Literal(literal) => {
                    if literal != value {
                        return None;
                    }
                }
                Segment::Param(name) | Segment::Optional(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.push((name.clone(), value.to_string()));
                }
            }
        }

        Some(params)
    }

    /// Build a path from parameter values
    pub fn build(&self, params: &[(&str, &str)]) -> Result<String> {
        let lookup = |name: &str| {
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        };

        let mut parts: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(literal.clone()),
                Segment::Param(name) => {
                    let value = lookup(name).ok_or_else(|| RouteError::MissingParam {
                        pattern: self.source.clone(),
                        param: name.clone(),
                    })?;
                    parts.push(value.to_string());
                }
                Segment::Optional(name) => {
                    if let Some(value) = lookup(name) {
                        parts.push(value.to_string());
                    }
                }
            }
        }

        Ok(parts.join("/"))
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

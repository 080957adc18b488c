//! Placeholder templates.
//!
//! A template is literal text with `{{ field }}` placeholders. Field names are
//! lowercase identifiers (`[a-z_][a-z0-9_]*`); whitespace inside the braces is
//! ignored. There are no conditionals, loops or escapes.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error_handling::{RenderError, TemplateError};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses template source.
    ///
    /// # Errors
    ///
    /// - `TemplateError::Unterminated` if a `{{` has no closing `}}`
    /// - `TemplateError::InvalidPlaceholder` if a placeholder is not a field name
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }

            let inner = &rest[start + OPEN.len()..];
            let end = inner.find(CLOSE).ok_or_else(|| TemplateError::Unterminated {
                template: name.to_string(),
                offset: offset + start,
            })?;

            let raw = &inner[..end];
            let field = raw.trim();
            if !is_field_name(field) {
                return Err(TemplateError::InvalidPlaceholder {
                    template: name.to_string(),
                    placeholder: raw.to_string(),
                    offset: offset + start,
                });
            }
            segments.push(Segment::Field(field.to_string()));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    /// Template name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field names referenced by the template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Checks that every placeholder names one of `known`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::UnknownField` for the first unknown name.
    pub fn check_fields(&self, known: &[&str]) -> Result<(), TemplateError> {
        match self.fields().find(|field| !known.contains(field)) {
            Some(field) => Err(TemplateError::UnknownField {
                template: self.name.clone(),
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Renders the template against `data` into a string.
    ///
    /// `data` must serialise to an object whose referenced fields are strings,
    /// numbers or booleans.
    pub fn render_to_string<T: Serialize>(&self, data: &T) -> Result<String, RenderError> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => {
                    let found = value
                        .get(field.as_str())
                        .ok_or_else(|| RenderError::MissingField {
                            template: self.name.clone(),
                            field: field.clone(),
                        })?;
                    match found {
                        Value::String(s) => out.push_str(s),
                        Value::Number(n) => out.push_str(&n.to_string()),
                        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                        Value::Null | Value::Array(_) | Value::Object(_) => {
                            return Err(RenderError::UnsupportedValue {
                                template: self.name.clone(),
                                field: field.clone(),
                            })
                        }
                    }
                }
            }
        }

        Ok(out)
    }

    /// Renders the template against `data` and writes the result to `out`.
    ///
    /// Nothing is written if rendering fails.
    pub fn render<T: Serialize>(&self, data: &T, out: &mut dyn Write) -> Result<(), RenderError> {
        let text = self.render_to_string(data)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}

fn is_field_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Data {
        name: String,
        count: u32,
        enabled: bool,
        tags: Vec<String>,
    }

    fn data() -> Data {
        Data {
            name: "example".to_string(),
            count: 3,
            enabled: true,
            tags: vec![],
        }
    }

    #[test]
    fn test_parse_and_render() {
        let template = Template::parse("t", "name={{ name }} count={{count}}\n").unwrap();
        assert_eq!(
            template.render_to_string(&data()).unwrap(),
            "name=example count=3\n"
        );
    }

    #[test]
    fn test_render_bool() {
        let template = Template::parse("t", "{{ enabled }}").unwrap();
        assert_eq!(template.render_to_string(&data()).unwrap(), "true");
    }

    #[test]
    fn test_literal_only() {
        let template = Template::parse("t", "no placeholders here").unwrap();
        assert_eq!(template.fields().count(), 0);
        assert_eq!(
            template.render_to_string(&data()).unwrap(),
            "no placeholders here"
        );
    }

    #[test]
    fn test_empty_template() {
        let template = Template::parse("t", "").unwrap();
        assert_eq!(template.render_to_string(&data()).unwrap(), "");
    }

    #[test]
    fn test_single_braces_are_literal() {
        let template = Template::parse("t", "resource \"x\" { a = {{ name }} }").unwrap();
        assert_eq!(
            template.render_to_string(&data()).unwrap(),
            "resource \"x\" { a = example }"
        );
    }

    #[test]
    fn test_fields_in_order() {
        let template = Template::parse("t", "{{ count }}-{{ name }}-{{ count }}").unwrap();
        assert_eq!(
            template.fields().collect::<Vec<_>>(),
            vec!["count", "name", "count"]
        );
    }

    #[test]
    fn test_unterminated_placeholder() {
        let err = Template::parse("zone", "abc {{ name").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Unterminated {
                template: "zone".to_string(),
                offset: 4,
            }
        );
    }

    #[test]
    fn test_unterminated_after_valid_placeholder() {
        let err = Template::parse("zone", "{{ name }} x {{").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Unterminated {
                template: "zone".to_string(),
                offset: 13,
            }
        );
    }

    #[test]
    fn test_invalid_placeholders() {
        for source in ["{{}}", "{{ }}", "{{ Name }}", "{{ 1st }}", "{{ a b }}", "{{ host-name }}"] {
            let err = Template::parse("t", source).unwrap_err();
            assert!(
                matches!(err, TemplateError::InvalidPlaceholder { .. }),
                "{} should be rejected",
                source
            );
        }
    }

    #[test]
    fn test_check_fields() {
        let template = Template::parse("record", "{{ name }} {{ missing }}").unwrap();
        assert!(template.check_fields(&["name", "missing"]).is_ok());
        assert_eq!(
            template.check_fields(&["name"]).unwrap_err(),
            TemplateError::UnknownField {
                template: "record".to_string(),
                field: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_render_missing_field() {
        let template = Template::parse("t", "{{ nope }}").unwrap();
        let err = template.render_to_string(&data()).unwrap_err();
        assert!(matches!(err, RenderError::MissingField { ref field, .. } if field == "nope"));
    }

    #[test]
    fn test_render_non_scalar_field() {
        let template = Template::parse("t", "{{ tags }}").unwrap();
        let err = template.render_to_string(&data()).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedValue { .. }));
    }

    #[test]
    fn test_render_non_object_data() {
        let template = Template::parse("t", "{{ name }}").unwrap();
        let err = template.render_to_string(&"just a string").unwrap_err();
        assert!(matches!(err, RenderError::MissingField { .. }));
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let template = Template::parse("t", "prefix {{ nope }}").unwrap();
        let mut out = Vec::new();
        assert!(template.render(&data(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_ascii_literal() {
        let template = Template::parse("t", "é{{ name }}ü").unwrap();
        assert_eq!(template.render_to_string(&data()).unwrap(), "éexampleü");
    }
}

use richref_types::RenderOutput;

use crate::config::{
    FragmentBinding, DEFAULT_FRAGMENT_HREF, DEFAULT_FRAGMENT_LABEL_FIELDS,
    DEFAULT_LABEL_SEPARATOR,
};
use crate::error::{RenderError, RenderResult};
use crate::fields::MergedFields;
use crate::renderer::ReferenceRenderer;

// ---------------------------------------------------------------------------
// HrefTemplate
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A link target pattern such as `/event:{slug}`.
///
/// Placeholders name merged fields; everything else is copied literally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HrefTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl HrefTemplate {
    /// Parse a template, rejecting unbalanced braces and empty placeholders.
    pub fn parse(template: &str) -> RenderResult<Self> {
        let invalid = |reason: &str| RenderError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(invalid("nested '{'")),
                            Some(c) => name.push(c),
                            None => return Err(invalid("unclosed '{'")),
                        }
                    }
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(invalid("empty placeholder"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(name.to_string()));
                }
                '}' => return Err(invalid("unmatched '}'")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The template text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of the fields this template reads, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Fill the placeholders from merged fields.
    pub fn fill(&self, fields: &MergedFields<'_>) -> RenderResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(name) => out.push_str(&fields.require_str(name)?),
            }
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// FragmentRenderer
// ---------------------------------------------------------------------------

/// Renders content-fragment references as a navigable link.
///
/// The href comes from an [`HrefTemplate`] over a slug-like field; the label
/// joins one or more record fields (`"{eventName}: {capacity}"` by default).
#[derive(Clone, Debug)]
pub struct FragmentRenderer {
    href: HrefTemplate,
    label_fields: Vec<String>,
    label_separator: String,
}

impl Default for FragmentRenderer {
    fn default() -> Self {
        Self {
            href: HrefTemplate {
                source: DEFAULT_FRAGMENT_HREF.to_string(),
                segments: vec![
                    Segment::Literal("/event:".to_string()),
                    Segment::Field("slug".to_string()),
                ],
            },
            label_fields: DEFAULT_FRAGMENT_LABEL_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            label_separator: DEFAULT_LABEL_SEPARATOR.to_string(),
        }
    }
}

impl FragmentRenderer {
    pub fn new(
        href: HrefTemplate,
        label_fields: Vec<String>,
        label_separator: impl Into<String>,
    ) -> Self {
        Self {
            href,
            label_fields,
            label_separator: label_separator.into(),
        }
    }

    pub fn from_binding(binding: &FragmentBinding) -> RenderResult<Self> {
        Ok(Self::new(
            HrefTemplate::parse(&binding.href_template)?,
            binding.label_fields.clone(),
            binding.label_separator.clone(),
        ))
    }
}

impl ReferenceRenderer for FragmentRenderer {
    fn render(&self, fields: &MergedFields<'_>) -> RenderResult<RenderOutput> {
        let href = self.href.fill(fields)?;
        let parts = self
            .label_fields
            .iter()
            .map(|f| fields.require_str(f))
            .collect::<RenderResult<Vec<_>>>()?;
        Ok(RenderOutput::link(href, parts.join(&self.label_separator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richref_types::{FieldMap, ReferenceRecord};

    fn event() -> ReferenceRecord {
        ReferenceRecord::new("/content/dam/events/surf-camp", "EventModel")
            .unwrap()
            .field("slug", "surf-camp")
            .field("eventName", "Surf Camp")
            .field("capacity", 40)
    }

    #[test]
    fn default_template_matches_parsed() {
        let parsed = HrefTemplate::parse(DEFAULT_FRAGMENT_HREF).unwrap();
        assert_eq!(FragmentRenderer::default().href, parsed);
    }

    #[test]
    fn parse_extracts_fields() {
        let t = HrefTemplate::parse("/{section}/item/{ slug }.html").unwrap();
        assert_eq!(t.fields().collect::<Vec<_>>(), vec!["section", "slug"]);
        assert_eq!(t.as_str(), "/{section}/item/{ slug }.html");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["/event:{slug", "/event:slug}", "/event:{}", "/{a{b}}"] {
            assert!(
                matches!(HrefTemplate::parse(bad), Err(RenderError::InvalidTemplate { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn renders_event_link() {
        let record = event();
        let node = FieldMap::new();
        let out = FragmentRenderer::default()
            .render(&MergedFields::new(&record, &node))
            .unwrap();
        assert_eq!(out, RenderOutput::link("/event:surf-camp", "Surf Camp: 40"));
    }

    #[test]
    fn missing_label_field_is_error() {
        let record = ReferenceRecord::new("/content/dam/events/x", "EventModel")
            .unwrap()
            .field("slug", "x");
        let node = FieldMap::new();
        let err = FragmentRenderer::default()
            .render(&MergedFields::new(&record, &node))
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingField {
                type_name: "EventModel".into(),
                field: "eventName".into()
            }
        );
    }

    #[test]
    fn custom_binding() {
        let mut binding = FragmentBinding::new("ArticleModel", "/article/{slug}");
        binding.label_fields = vec!["title".into()];
        let renderer = FragmentRenderer::from_binding(&binding).unwrap();
        let record = ReferenceRecord::new("/content/articles/a", "ArticleModel")
            .unwrap()
            .field("slug", "a")
            .field("title", "Alpine Trails");
        let node = FieldMap::new();
        let out = renderer.render(&MergedFields::new(&record, &node)).unwrap();
        assert_eq!(out, RenderOutput::link("/article/a", "Alpine Trails"));
    }
}

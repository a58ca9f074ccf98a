use richref_types::RenderOutput;

use crate::config::{AssetBinding, DEFAULT_ASSET_ALT, DEFAULT_ASSET_SRC_FIELDS};
use crate::error::{RenderError, RenderResult};
use crate::fields::MergedFields;
use crate::renderer::ReferenceRenderer;

/// Renders asset references as an image primitive.
///
/// The image source is the first present field among `src_fields`
/// (publish URL first, repository path as fallback by default).
#[derive(Clone, Debug)]
pub struct AssetRenderer {
    src_fields: Vec<String>,
    alt_field: Option<String>,
    default_alt: String,
}

impl Default for AssetRenderer {
    fn default() -> Self {
        Self {
            src_fields: DEFAULT_ASSET_SRC_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            alt_field: None,
            default_alt: DEFAULT_ASSET_ALT.to_string(),
        }
    }
}

impl AssetRenderer {
    pub fn from_binding(binding: &AssetBinding) -> Self {
        Self {
            src_fields: binding.src_fields.clone(),
            alt_field: binding.alt_field.clone(),
            default_alt: binding.default_alt.clone(),
        }
    }
}

impl ReferenceRenderer for AssetRenderer {
    fn render(&self, fields: &MergedFields<'_>) -> RenderResult<RenderOutput> {
        let src = self
            .src_fields
            .iter()
            .find_map(|f| fields.get_str(f).filter(|s| !s.is_empty()))
            .ok_or_else(|| RenderError::MissingField {
                type_name: fields.type_name().to_string(),
                field: self.src_fields.join("|"),
            })?;

        let alt = self
            .alt_field
            .as_deref()
            .and_then(|f| fields.get_str(f))
            .unwrap_or_else(|| self.default_alt.clone());

        Ok(RenderOutput::image(src, alt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richref_types::{FieldMap, ReferenceRecord};

    fn render(renderer: &AssetRenderer, record: &ReferenceRecord) -> RenderResult<RenderOutput> {
        let node = FieldMap::new();
        renderer.render(&MergedFields::new(record, &node))
    }

    #[test]
    fn prefers_publish_url() {
        let record = ReferenceRecord::new("/content/dam/a.jpg", "ImageRef")
            .unwrap()
            .field("_publishUrl", "https://publish.example/a.jpg");
        let out = render(&AssetRenderer::default(), &record).unwrap();
        assert_eq!(
            out,
            RenderOutput::image("https://publish.example/a.jpg", "in-line reference")
        );
    }

    #[test]
    fn falls_back_to_path() {
        let record = ReferenceRecord::new("/content/dam/a.jpg", "ImageRef").unwrap();
        let out = render(&AssetRenderer::default(), &record).unwrap();
        assert_eq!(out, RenderOutput::image("/content/dam/a.jpg", "in-line reference"));
    }

    #[test]
    fn missing_source_is_error() {
        let renderer = AssetRenderer::from_binding(&AssetBinding {
            src_fields: vec!["url".into()],
            ..AssetBinding::new("AssetRef")
        });
        let record = ReferenceRecord::new("/content/a", "AssetRef").unwrap();
        assert_eq!(
            render(&renderer, &record),
            Err(RenderError::MissingField {
                type_name: "AssetRef".into(),
                field: "url".into()
            })
        );
    }

    #[test]
    fn alt_from_field() {
        let renderer = AssetRenderer::from_binding(&AssetBinding {
            alt_field: Some("title".into()),
            ..AssetBinding::new("ImageRef")
        });
        let record = ReferenceRecord::new("/content/dam/a.jpg", "ImageRef")
            .unwrap()
            .field("title", "Beach at dawn");
        let out = render(&renderer, &record).unwrap();
        assert_eq!(out, RenderOutput::image("/content/dam/a.jpg", "Beach at dawn"));
    }
}

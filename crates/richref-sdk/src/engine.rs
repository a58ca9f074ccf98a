//! The engine: renderer registry plus view options.

use richref_index::ReferenceIndex;
use richref_render::{RenderResult, RendererRegistry};
use richref_types::{DocumentNode, ReferenceRecord, RenderedNode};
use richref_walk::{Resolution, ResolveStats, Walker};
use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, ViewConfig};
use crate::error::{SdkError, SdkResult};
use crate::model::{EventDetailResponse, EventsPage};
use crate::view;

/// Resolves rich-text documents and renders event pages.
///
/// The engine owns the renderer registry; each call builds a fresh index
/// over the references it is given, so one engine serves any number of
/// documents.
#[derive(Debug)]
pub struct Engine {
    renderers: RendererRegistry,
    view: ViewConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RendererRegistry::with_defaults())
    }
}

impl Engine {
    pub fn new(renderers: RendererRegistry) -> Self {
        Self {
            renderers,
            view: ViewConfig::default(),
        }
    }

    /// Build an engine from configuration.
    pub fn from_config(config: &EngineConfig) -> SdkResult<Self> {
        let renderers = RendererRegistry::from_config(&config.renderers)?;
        Ok(Self {
            renderers,
            view: config.view.clone(),
        })
    }

    /// Replace the view options.
    pub fn with_view(mut self, view: ViewConfig) -> Self {
        self.view = view;
        self
    }

    pub fn renderers(&self) -> &RendererRegistry {
        &self.renderers
    }

    /// Mutable access for registering custom renderers.
    pub fn renderers_mut(&mut self) -> &mut RendererRegistry {
        &mut self.renderers
    }

    pub fn view_config(&self) -> &ViewConfig {
        &self.view
    }

    /// Resolve every embed in `root` against `references`.
    pub fn render_document(
        &self,
        root: &DocumentNode,
        references: &[ReferenceRecord],
    ) -> RenderResult<RenderedNode> {
        let index = ReferenceIndex::build(references);
        Walker::new(&index, &self.renderers).resolve(root)
    }

    /// Like [`Self::render_document`], also reporting embed outcomes.
    pub fn render_document_with_stats(
        &self,
        root: &DocumentNode,
        references: &[ReferenceRecord],
    ) -> RenderResult<Resolution> {
        let index = ReferenceIndex::build(references);
        if index.shadowed() > 0 {
            debug!(shadowed = index.shadowed(), "duplicate reference paths");
        }
        Walker::new(&index, &self.renderers).resolve_with_stats(root)
    }

    /// Resolve the description of the single event in a detail response.
    ///
    /// Fails with [`SdkError::NoEventFound`] unless the response holds
    /// exactly one event.
    pub fn render_event_detail(&self, response: &EventDetailResponse) -> SdkResult<EventDetailView> {
        let event = response.require_event()?;
        let references = response.references()?;
        let document = event.description_document()?;
        let Resolution { tree, stats } = self.render_document_with_stats(&document, &references)?;
        debug!(
            path = ?event.path,
            resolved = stats.resolved,
            unresolved = stats.unresolved(),
            "rendered event description"
        );

        Ok(EventDetailView {
            path: event.path.clone(),
            title: event.event_name.clone().unwrap_or_default(),
            capacity: event.capacity_text(),
            teasing_image: event
                .teasing_image
                .as_ref()
                .and_then(|image| image.src())
                .map(str::to_string),
            description: tree,
            stats,
        })
    }

    /// HTML for the event detail page.
    ///
    /// A response without exactly one event renders the missing-event
    /// state; other failures are returned.
    pub fn event_detail_html(&self, response: &EventDetailResponse) -> SdkResult<String> {
        match self.render_event_detail(response) {
            Ok(detail) => Ok(view::render_event_detail(&detail, &self.view).into_string()),
            Err(SdkError::NoEventFound(count)) => {
                debug!(count, "no single event in detail response");
                Ok(view::render_missing_event(&self.view).into_string())
            }
            Err(e) => Err(e),
        }
    }

    /// HTML for the event list page.
    pub fn event_list_html(&self, page: &EventsPage) -> String {
        view::render_event_list(page.listable_events()).into_string()
    }

    /// HTML for a resolved tree.
    pub fn to_html(&self, node: &RenderedNode) -> String {
        view::render_node(node, &self.view).into_string()
    }
}

/// The resolved event detail, ready for a view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventDetailView {
    pub path: Option<String>,
    pub title: String,
    pub capacity: Option<String>,
    pub teasing_image: Option<String>,
    pub description: RenderedNode,
    #[serde(skip)]
    pub stats: ResolveStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use richref_render::{MergedFields, RenderError};
    use richref_types::RenderOutput;
    use serde_json::{json, Value};

    fn detail(items: Value, references: Value) -> EventDetailResponse {
        EventDetailResponse::from_value(json!({"data": {"eventList": {
            "items": items,
            "_references": references
        }}}))
        .unwrap()
    }

    fn surf_camp() -> EventDetailResponse {
        detail(
            json!([{
                "_path": "/content/dam/events/surf-camp",
                "eventName": "Surf Camp",
                "capacity": 40,
                "teasingImage": {"_publishUrl": "https://p/surf.jpg"},
                "description": {"json": [
                    {"nodeType": "paragraph", "content": [
                        {"nodeType": "text", "value": "Bring "},
                        {"nodeType": "reference", "data": {"path": "/content/dam/board.jpg"}},
                        {"nodeType": "text", "value": " and see "},
                        {"nodeType": "reference", "data": {"href": "/content/dam/events/yoga"}},
                        {"nodeType": "reference", "data": {"path": "/content/dam/gone.jpg"}}
                    ]}
                ]}
            }]),
            json!([
                {"_path": "/content/dam/board.jpg", "__typename": "ImageRef",
                 "_publishUrl": "https://p/board.jpg"},
                {"_path": "/content/dam/events/yoga", "__typename": "EventModel",
                 "slug": "yoga", "eventName": "Yoga", "capacity": 12}
            ]),
        )
    }

    #[test]
    fn event_detail_resolves_description() {
        let view = Engine::default().render_event_detail(&surf_camp()).unwrap();
        assert_eq!(view.title, "Surf Camp");
        assert_eq!(view.capacity.as_deref(), Some("40"));
        assert_eq!(view.teasing_image.as_deref(), Some("https://p/surf.jpg"));
        assert_eq!(view.stats.resolved, 2);
        assert_eq!(view.stats.dangling, 1);

        let embeds = view.description.resolved_embeds();
        assert_eq!(embeds[0], ("ImageRef", &RenderOutput::image("https://p/board.jpg", "in-line reference")));
        assert_eq!(embeds[1], ("EventModel", &RenderOutput::link("/event:yoga", "Yoga: 12")));
    }

    #[test]
    fn event_detail_needs_one_event() {
        let engine = Engine::default();
        let empty = detail(json!([]), json!([]));
        assert!(matches!(
            engine.render_event_detail(&empty),
            Err(SdkError::NoEventFound(0))
        ));
        let html = engine.event_detail_html(&empty).unwrap();
        assert!(html.contains("Missing data"));
    }

    #[test]
    fn event_detail_html_contains_embeds() {
        let html = Engine::default().event_detail_html(&surf_camp()).unwrap();
        assert!(html.contains(r#"itemid="/content/dam/events/surf-camp""#));
        assert!(html.contains(r#"<img src="https://p/board.jpg" alt="in-line reference">"#));
        assert!(html.contains(r#"<a href="/event:yoga">Yoga: 12</a>"#));
        assert!(!html.contains("gone.jpg"));
    }

    #[test]
    fn renderer_error_escapes() {
        let mut engine = Engine::new(RendererRegistry::new());
        engine.renderers_mut().register_fn("ImageRef", |f: &MergedFields<'_>| {
            Ok(RenderOutput::image(f.require_str("missing")?, ""))
        });
        let err = engine.render_event_detail(&surf_camp()).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Render(RenderError::MissingField { ref field, .. }) if field == "missing"
        ));
    }

    #[test]
    fn malformed_sibling_record_does_not_abort() {
        let response = detail(
            json!([{
                "_path": "/content/dam/events/surf-camp",
                "eventName": "Surf Camp",
                "description": {"json": [
                    {"nodeType": "paragraph", "content": [
                        {"nodeType": "reference", "data": {"path": "/content/dam/board.jpg"}}
                    ]}
                ]}
            }]),
            json!([
                {"_path": "/content/dam/board.jpg", "__typename": "ImageRef",
                 "_publishUrl": "https://p/board.jpg"},
                {"__typename": "DocumentRef", "_publishUrl": "https://p/terms.pdf"}
            ]),
        );
        let engine = Engine::default();
        let view = engine.render_event_detail(&response).unwrap();
        assert_eq!(view.stats.resolved, 1);

        let html = engine.event_detail_html(&response).unwrap();
        assert!(html.contains(r#"<img src="https://p/board.jpg" alt="in-line reference">"#));
    }

    #[test]
    fn unsafe_fragment_href_renders_label_only() {
        let mut engine = Engine::default();
        engine.renderers_mut().register(
            "EventModel",
            richref_render::FragmentRenderer::from_binding(&richref_render::FragmentBinding {
                label_fields: vec!["eventName".into()],
                ..richref_render::FragmentBinding::new("EventModel", "{url}")
            })
            .unwrap(),
        );
        let records = vec![ReferenceRecord::new("/content/dam/events/x", "EventModel")
            .unwrap()
            .field("url", "javascript:alert(document.cookie)")
            .field("eventName", "click")];
        let doc = DocumentNode::container(
            "paragraph",
            vec![DocumentNode::embed_href("/content/dam/events/x")],
        );
        let tree = engine.render_document(&doc, &records).unwrap();
        assert_eq!(engine.to_html(&tree), "<p>click</p>");
    }

    #[test]
    fn render_document_direct() {
        let records = vec![ReferenceRecord::new("/a", "ImageRef")
            .unwrap()
            .field("_publishUrl", "/a.png")];
        let doc = DocumentNode::container("paragraph", vec![DocumentNode::embed_path("/a")]);
        let engine = Engine::default();
        let tree = engine.render_document(&doc, &records).unwrap();
        assert_eq!(engine.to_html(&tree), r#"<p><img src="/a.png" alt="in-line reference"></p>"#);
    }

    #[test]
    fn from_config_uses_bindings() {
        let config = EngineConfig::from_toml_str(
            r#"
            [[renderers.fragments]]
            type_name = "EventModel"
            href_template = "/events/{slug}"
            "#,
        )
        .unwrap();
        let engine = Engine::from_config(&config).unwrap();
        assert!(engine.renderers().contains("ImageRef"));
        let view = engine.render_event_detail(&surf_camp()).unwrap();
        assert_eq!(view.description.resolved_embeds()[1].1, &RenderOutput::link("/events/yoga", "Yoga: 12"));
    }

    #[test]
    fn bad_template_is_render_error() {
        let config = EngineConfig::from_toml_str(
            r#"
            [[renderers.fragments]]
            type_name = "EventModel"
            href_template = "/events/{slug"
            "#,
        )
        .unwrap();
        assert!(matches!(
            Engine::from_config(&config),
            Err(SdkError::Render(RenderError::InvalidTemplate { .. }))
        ));
    }

    #[test]
    fn event_list_html() {
        let page = EventsPage::from_value(json!({"eventPaginated": {"edges": [
            {"node": {"_path": "/a", "eventName": "A", "slug": "a", "teasingImage": {"_path": "/a.jpg"}}},
            {"node": {"_path": "/b"}}
        ]}}))
        .unwrap();
        let html = Engine::default().event_list_html(&page);
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains(r#"src="/a.jpg""#));
    }
}

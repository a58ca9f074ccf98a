//! HTML view of resolved rich text and event pages.
//!
//! Containers map to structural elements by kind, text runs to escaped text
//! wrapped in their marks, resolved embeds to their render output, and
//! unresolved embeds to nothing. Escaping is handled by maud.

use maud::{html, Markup, PreEscaped};
use richref_types::{value_as_text, FieldMap, RenderOutput, RenderedNode};

use crate::config::{FallbackElement, ViewConfig};
use crate::engine::EventDetailView;
use crate::model::Event;
use crate::routes::{editor_item_id, event_route, FRAGMENT_ITEM_TYPE};

/// Schemes allowed in link hrefs coming from content.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Render a resolved tree.
pub fn render_node(node: &RenderedNode, config: &ViewConfig) -> Markup {
    match node {
        RenderedNode::Text { value, marks } => render_text(value, marks),
        RenderedNode::Container {
            kind,
            data,
            children,
        } => {
            let inner = html! {
                @for child in children {
                    (render_node(child, config))
                }
            };
            render_container(kind, data, inner, config)
        }
        RenderedNode::ResolvedEmbed { output, .. } => render_output(output),
        RenderedNode::UnresolvedEmbed => html! {},
    }
}

/// Render one embed output.
///
/// Links and images whose URL fails [`is_safe_href`] lose the URL: a link
/// renders its label only and an image renders nothing.
pub fn render_output(output: &RenderOutput) -> Markup {
    match output {
        RenderOutput::Image { src, alt } if is_safe_href(src) => html! { img src=(src) alt=(alt); },
        RenderOutput::Image { .. } => html! {},
        RenderOutput::Link { href, label } if is_safe_href(href) => {
            html! { a href=(href) { (label) } }
        }
        RenderOutput::Link { label, .. } => html! { (label) },
        RenderOutput::Markup { html } => PreEscaped(html.clone()),
        RenderOutput::Data { .. } => html! {},
    }
}

fn render_text(value: &str, marks: &[String]) -> Markup {
    marks
        .iter()
        .fold(html! { (value) }, |inner, mark| match mark.as_str() {
            "bold" => html! { strong { (inner) } },
            "italic" => html! { em { (inner) } },
            "underline" => html! { u { (inner) } },
            "code" => html! { code { (inner) } },
            "strikethrough" => html! { s { (inner) } },
            "superscript" => html! { sup { (inner) } },
            "subscript" => html! { sub { (inner) } },
            _ => inner,
        })
}

fn render_container(kind: &str, data: &FieldMap, inner: Markup, config: &ViewConfig) -> Markup {
    match kind {
        "paragraph" => html! { p { (inner) } },
        "header" => match data_str(data, "style").as_deref() {
            Some("h1") => html! { h1 { (inner) } },
            Some("h3") => html! { h3 { (inner) } },
            Some("h4") => html! { h4 { (inner) } },
            Some("h5") => html! { h5 { (inner) } },
            Some("h6") => html! { h6 { (inner) } },
            _ => html! { h2 { (inner) } },
        },
        "ordered-list" => html! { ol { (inner) } },
        "unordered-list" => html! { ul { (inner) } },
        "list-item" => html! { li { (inner) } },
        "line-break" => html! { br; },
        "link" => match data_str(data, "href").filter(|h| is_safe_href(h)) {
            Some(href) => {
                let target = data_str(data, "target");
                html! { a href=(href) target=[target] { (inner) } }
            }
            None => inner,
        },
        _ => match config.fallback_element {
            FallbackElement::Div => html! { div { (inner) } },
            FallbackElement::Span => html! { span { (inner) } },
        },
    }
}

fn data_str(data: &FieldMap, key: &str) -> Option<String> {
    data.get(key).and_then(value_as_text)
}

/// Returns `true` for relative hrefs and absolute ones with a safe scheme.
pub fn is_safe_href(href: &str) -> bool {
    match url::Url::parse(href) {
        Ok(url) => SAFE_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Render the event detail page.
pub fn render_event_detail(view: &EventDetailView, config: &ViewConfig) -> Markup {
    html! {
        div.event-detail {
            div itemscope itemid=[view.path.as_deref()] itemtype=(FRAGMENT_ITEM_TYPE) {
                h1.event-detail-title { (view.title) }
                div.event-detail-info {
                    @if let Some(capacity) = &view.capacity {
                        div.event-detail-info-capacity itemprop="capacity" itemtype="text" { (capacity) }
                    }
                }
                @if let Some(src) = &view.teasing_image {
                    div.event-detail-content {
                        img.event-detail-teasingImage src=(src) alt=(view.title) itemtype="image";
                    }
                }
                div { (render_node(&view.description, config)) }
            }
        }
    }
}

/// Render the "no event" state of the detail page.
pub fn render_missing_event(config: &ViewConfig) -> Markup {
    html! {
        div.event-detail {
            a.event-detail-close-button href="/" { "Return" }
            div.error { (config.missing_event_message) }
        }
    }
}

/// Render a list of events. Events missing a path, name or image are
/// skipped.
pub fn render_event_list<'a, I>(events: I) -> Markup
where
    I: IntoIterator<Item = &'a Event>,
{
    html! {
        div.events {
            ul.event-items {
                @for event in events.into_iter().filter(|e| e.is_listable()) {
                    (render_event_item(event))
                }
            }
        }
    }
}

fn render_event_item(event: &Event) -> Markup {
    let path = event.path.as_deref().unwrap_or_default();
    let name = event.event_name.as_deref().unwrap_or_default();
    let href = event_route(event.slug.as_deref().unwrap_or_default());
    let src = event.teasing_image.as_ref().and_then(|i| i.src());
    html! {
        li.event-item itemscope itemid=(editor_item_id(path)) itemtype="reference" itemfilter="cf" {
            a href=(href) {
                img.event-item-image src=[src] alt=(name) itemprop="teasingImage" itemtype="image";
            }
            div.event-item-details {
                div.event-item-date itemprop="eventStart" itemtype="date" {
                    (event.event_start.as_deref().unwrap_or_default())
                }
                div.event-item-date itemprop="eventEnd" itemtype="date" {
                    (event.event_end.as_deref().unwrap_or_default())
                }
            }
            div.event-item-title itemprop="eventName" itemtype="text" { (name) }
        }
    }
}

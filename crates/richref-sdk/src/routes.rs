//! Route and editor-instrumentation helpers.

/// Prefix of event detail routes (`/event:<slug>`).
pub const EVENT_ROUTE_PREFIX: &str = "/event:";

/// Item type the visual editor uses for content fragments.
pub const FRAGMENT_ITEM_TYPE: &str = "urn:fcs:type/fragment";

/// Route to an event's detail page.
pub fn event_route(slug: &str) -> String {
    format!("{EVENT_ROUTE_PREFIX}{slug}")
}

/// Extract the slug from an event detail route.
///
/// Returns `None` for other routes or an empty slug.
pub fn parse_event_route(route: &str) -> Option<&str> {
    route
        .strip_prefix(EVENT_ROUTE_PREFIX)
        .filter(|slug| !slug.is_empty())
}

/// Slug from a router parameter captured as `:<slug>`.
///
/// Routers that declare the path as `/event:slug` capture the separator
/// with the parameter; it is dropped here.
pub fn slug_from_route_param(param: &str) -> &str {
    param.strip_prefix(':').unwrap_or(param)
}

/// Visual-editor item id for a content fragment at `path`.
pub fn editor_item_id(path: &str) -> String {
    format!("urn:aemconnection:{path}/jcr:content/data/master")
}

use richref_index::ReferenceIndex;
use richref_render::{MergedFields, RenderResult, RendererRegistry};
use richref_types::{DocumentNode, EmbedKey, FieldMap, RenderedNode};
use tracing::debug;

// ---------------------------------------------------------------------------
// EmbedOutcome / ResolveStats
// ---------------------------------------------------------------------------

/// How a single embed was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedOutcome {
    /// Rendered by the renderer registered for the record's type.
    Resolved,
    /// The lookup key matched no record.
    Dangling,
    /// The record's type has no registered renderer.
    UnknownType,
    /// The embed carried neither a path nor an href.
    Keyless,
}

/// Per-outcome embed counts for one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub resolved: usize,
    pub dangling: usize,
    pub unknown_type: usize,
    pub keyless: usize,
}

impl ResolveStats {
    fn record(&mut self, outcome: EmbedOutcome) {
        match outcome {
            EmbedOutcome::Resolved => self.resolved += 1,
            EmbedOutcome::Dangling => self.dangling += 1,
            EmbedOutcome::UnknownType => self.unknown_type += 1,
            EmbedOutcome::Keyless => self.keyless += 1,
        }
    }

    /// Total embeds visited.
    pub fn total(&self) -> usize {
        self.resolved + self.dangling + self.unknown_type + self.keyless
    }

    /// Embeds that rendered nothing.
    pub fn unresolved(&self) -> usize {
        self.total() - self.resolved
    }
}

/// A resolved tree together with its embed counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub tree: RenderedNode,
    pub stats: ResolveStats,
}

// ---------------------------------------------------------------------------
// Walker
// ---------------------------------------------------------------------------

/// Resolves embeds in a document against a reference index and a renderer
/// registry.
///
/// The walker only borrows its inputs and keeps no state between calls, so
/// one walker can resolve any number of documents, from any thread.
#[derive(Clone, Copy, Debug)]
pub struct Walker<'a> {
    index: &'a ReferenceIndex<'a>,
    renderers: &'a RendererRegistry,
}

impl<'a> Walker<'a> {
    pub fn new(index: &'a ReferenceIndex<'a>, renderers: &'a RendererRegistry) -> Self {
        Self { index, renderers }
    }

    /// Resolve a document, returning the rendered tree.
    pub fn resolve(&self, root: &DocumentNode) -> RenderResult<RenderedNode> {
        let mut stats = ResolveStats::default();
        self.walk(root, &mut stats)
    }

    /// Resolve a document, also reporting how each embed was handled.
    pub fn resolve_with_stats(&self, root: &DocumentNode) -> RenderResult<Resolution> {
        let mut stats = ResolveStats::default();
        let tree = self.walk(root, &mut stats)?;
        Ok(Resolution { tree, stats })
    }

    fn walk(&self, node: &DocumentNode, stats: &mut ResolveStats) -> RenderResult<RenderedNode> {
        match node {
            DocumentNode::Text { value, marks } => Ok(RenderedNode::Text {
                value: value.clone(),
                marks: marks.clone(),
            }),
            DocumentNode::Container {
                kind,
                data,
                children,
            } => {
                let children = children
                    .iter()
                    .map(|child| self.walk(child, stats))
                    .collect::<RenderResult<Vec<_>>>()?;
                Ok(RenderedNode::Container {
                    kind: kind.clone(),
                    data: data.clone(),
                    children,
                })
            }
            DocumentNode::EmbedReference { key, data } => {
                let (outcome, rendered) = self.embed(key, data)?;
                stats.record(outcome);
                Ok(rendered)
            }
        }
    }

    /// Resolve one embed. Only a renderer failure is an error.
    fn embed(
        &self,
        key: &EmbedKey,
        data: &FieldMap,
    ) -> RenderResult<(EmbedOutcome, RenderedNode)> {
        let Some(lookup) = key.lookup_key() else {
            debug!("embed has no lookup key");
            return Ok((EmbedOutcome::Keyless, RenderedNode::UnresolvedEmbed));
        };

        let Some(record) = self.index.get(lookup.as_str()) else {
            debug!(key = lookup.as_str(), "dangling reference");
            return Ok((EmbedOutcome::Dangling, RenderedNode::UnresolvedEmbed));
        };

        let Some(renderer) = self.renderers.get(record.type_name()) else {
            debug!(
                path = record.path(),
                type_name = record.type_name(),
                "no renderer for reference type"
            );
            return Ok((EmbedOutcome::UnknownType, RenderedNode::UnresolvedEmbed));
        };

        let output = renderer.render(&MergedFields::new(record, data))?;
        Ok((
            EmbedOutcome::Resolved,
            RenderedNode::ResolvedEmbed {
                type_name: record.type_name().to_string(),
                output,
            },
        ))
    }
}

/// Resolve `root` against `index`, rendering embeds with `renderers`.
pub fn resolve(
    root: &DocumentNode,
    index: &ReferenceIndex<'_>,
    renderers: &RendererRegistry,
) -> RenderResult<RenderedNode> {
    Walker::new(index, renderers).resolve(root)
}

/// Like [`resolve`], also returning per-outcome embed counts.
pub fn resolve_with_stats(
    root: &DocumentNode,
    index: &ReferenceIndex<'_>,
    renderers: &RendererRegistry,
) -> RenderResult<Resolution> {
    Walker::new(index, renderers).resolve_with_stats(root)
}

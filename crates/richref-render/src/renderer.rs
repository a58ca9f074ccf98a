use richref_types::RenderOutput;

use crate::error::RenderResult;
use crate::fields::MergedFields;

// ---------------------------------------------------------------------------
// ReferenceRenderer trait
// ---------------------------------------------------------------------------

/// A rendering rule for one reference type.
///
/// Renderers receive the merged record/node fields of a resolved embed and
/// return its render output. A renderer is free to fail on a malformed
/// record; the walker passes that failure to its caller untouched.
///
/// The trait is object-safe and `Send + Sync` so renderers can be stored in
/// a registry of `Box<dyn ReferenceRenderer>` shared across threads.
pub trait ReferenceRenderer: Send + Sync {
    /// Render one resolved embed.
    fn render(&self, fields: &MergedFields<'_>) -> RenderResult<RenderOutput>;
}

// ---------------------------------------------------------------------------
// FnRenderer
// ---------------------------------------------------------------------------

/// Adapter turning a closure into a [`ReferenceRenderer`].
pub struct FnRenderer<F>(F);

impl<F> FnRenderer<F>
where
    F: Fn(&MergedFields<'_>) -> RenderResult<RenderOutput> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ReferenceRenderer for FnRenderer<F>
where
    F: Fn(&MergedFields<'_>) -> RenderResult<RenderOutput> + Send + Sync,
{
    fn render(&self, fields: &MergedFields<'_>) -> RenderResult<RenderOutput> {
        (self.0)(fields)
    }
}

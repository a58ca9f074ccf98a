//! The dispatch table from reference type name to renderer.

use std::collections::BTreeMap;

use richref_types::RenderOutput;
use tracing::debug;

use crate::config::RendererConfig;
use crate::error::RenderResult;
use crate::fields::MergedFields;
use crate::renderer::{FnRenderer, ReferenceRenderer};
use crate::renderers::{AssetRenderer, FragmentRenderer};

/// Pluggable mapping from `type_name` to its rendering rule.
///
/// Entries are added with [`Self::register`] or [`Self::register_fn`]; the
/// walker only ever reads the table. Unknown type names are a normal lookup
/// miss, never a panic.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: BTreeMap<String, Box<dyn ReferenceRenderer>>,
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("type_names", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the default bindings:
    /// `ImageRef` -> asset renderer, `EventModel` -> fragment renderer.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("ImageRef", AssetRenderer::default());
        registry.register("EventModel", FragmentRenderer::default());
        registry
    }

    /// Build a registry from configuration.
    ///
    /// Asset bindings are registered before fragment bindings; a later
    /// binding for the same type name replaces an earlier one.
    pub fn from_config(config: &RendererConfig) -> RenderResult<Self> {
        let mut registry = Self::new();
        for binding in &config.assets {
            registry.register(binding.type_name.clone(), AssetRenderer::from_binding(binding));
        }
        for binding in &config.fragments {
            registry.register(
                binding.type_name.clone(),
                FragmentRenderer::from_binding(binding)?,
            );
        }
        Ok(registry)
    }

    /// Register a renderer for `type_name`.
    ///
    /// Returns `true` if an existing renderer was replaced.
    pub fn register<R>(&mut self, type_name: impl Into<String>, renderer: R) -> bool
    where
        R: ReferenceRenderer + 'static,
    {
        let type_name = type_name.into();
        let replaced = self
            .renderers
            .insert(type_name.clone(), Box::new(renderer))
            .is_some();
        if replaced {
            debug!(type_name = %type_name, "replaced reference renderer");
        }
        replaced
    }

    /// Register a closure as the renderer for `type_name`.
    pub fn register_fn<F>(&mut self, type_name: impl Into<String>, f: F) -> bool
    where
        F: Fn(&MergedFields<'_>) -> RenderResult<RenderOutput> + Send + Sync + 'static,
    {
        self.register(type_name, FnRenderer::new(f))
    }

    /// Remove the renderer for `type_name`, returning whether one existed.
    pub fn unregister(&mut self, type_name: &str) -> bool {
        self.renderers.remove(type_name).is_some()
    }

    /// The renderer registered for `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&dyn ReferenceRenderer> {
        self.renderers.get(type_name).map(|r| r.as_ref())
    }

    /// Returns `true` if a renderer is registered for `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.renderers.contains_key(type_name)
    }

    /// Number of registered type names.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }
}

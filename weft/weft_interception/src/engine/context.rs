//! Collaborators shared by the resolution stages of one initialization.

use weft_core::traits::{BindingCatalog, InterceptorMetadataReader, InterceptorResolver};
use weft_core::types::{BindingSet, ComponentType, InterceptionType, InterceptorHandle};
use weft_core::{Diagnostic, InterceptionConfig};

use super::diagnostics::DiagnosticLog;

/// Borrowed view of everything a resolution stage consults.
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// The component type being initialized.
    pub component: &'a ComponentType,

    /// Binding type and stereotype definitions.
    pub catalog: &'a dyn BindingCatalog,

    /// Interceptor resolution by phase and bindings.
    pub resolver: &'a dyn InterceptorResolver,

    /// Interceptor and target class metadata.
    pub reader: &'a dyn InterceptorMetadataReader,

    /// Engine configuration.
    pub config: &'a InterceptionConfig,

    /// Where non-fatal diagnostics are retained, if anywhere.
    pub diagnostics: Option<&'a DiagnosticLog>,
}

impl<'a> ResolutionContext<'a> {
    /// Resolve the interceptors bound to `bindings` for `phase`, in resolver
    /// order, as metadata handles.
    pub fn resolve(&self, phase: InterceptionType, bindings: &BindingSet) -> Vec<InterceptorHandle> {
        self.resolver
            .resolve(phase, bindings)
            .iter()
            .map(|definition| self.reader.interceptor_metadata(definition))
            .collect()
    }

    /// Emit a diagnostic and retain it if a diagnostic log is attached.
    pub fn report(&self, diagnostic: Diagnostic) {
        diagnostic.emit();
        if let Some(log) = self.diagnostics {
            log.record(diagnostic);
        }
    }
}

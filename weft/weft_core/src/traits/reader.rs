//! Interceptor metadata reader trait.

use crate::id::TypeName;
use crate::types::{ComponentType, InterceptorDefinition, InterceptorHandle, TargetClassMetadata};

/// Turns interceptors and target classes into invocable metadata.
pub trait InterceptorMetadataReader: Send + Sync {
    /// Metadata for an interceptor returned by a resolver.
    fn interceptor_metadata(&self, definition: &InterceptorDefinition) -> InterceptorHandle;

    /// Metadata for an interceptor class listed explicitly on an element.
    fn plain_interceptor_metadata(&self, class: &TypeName) -> InterceptorHandle;

    /// Self-interception metadata of the target class.
    fn target_class_metadata(&self, component: &ComponentType) -> TargetClassMetadata;
}

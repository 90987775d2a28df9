//! Core data types for Weft.
//!
//! This module defines the explicit metadata the engine works over: the
//! interception phases, metadata markers, the shape of a component type, and
//! the interceptor metadata produced by the metadata reader.

pub mod component;
pub mod interceptor;
pub mod marker;
pub mod phase;

pub use component::{ComponentType, ConstructorInfo, MethodInfo, MethodSignature, OwnerBean, Visibility};
pub use interceptor::{
    InterceptorClassMetadata, InterceptorDefinition, InterceptorHandle, TargetClassMetadata,
};
pub use marker::{BindingMap, BindingSet, Marker};
pub use phase::InterceptionType;

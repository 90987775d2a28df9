//! Reference collaborators.
//!
//! In-memory interceptor resolution and a caching metadata reader, so the
//! engine can be driven end to end without a container around it.

mod reader;
mod resolver;

pub use reader::DefaultMetadataReader;
pub use resolver::InMemoryInterceptorResolver;

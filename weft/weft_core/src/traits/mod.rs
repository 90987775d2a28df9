//! Collaborator interfaces.
//!
//! The engine consults three collaborators while it builds a model. Each is a
//! trait so that the container embedding the engine can supply its own
//! registries:
//!
//! - `BindingCatalog`: which tag types are bindings, their inherited bindings,
//!   and stereotype definitions
//! - `InterceptorResolver`: which enabled interceptors match a phase and a
//!   binding set
//! - `InterceptorMetadataReader`: invocable metadata for interceptors and for
//!   the target class itself
//!
//! All three are expected to be deterministic and free of observable side
//! effects; implementations may cache internally.

pub mod catalog;
pub mod reader;
pub mod resolver;

pub use catalog::BindingCatalog;
pub use reader::InterceptorMetadataReader;
pub use resolver::InterceptorResolver;

//! Interception model.
//!
//! This module provides the immutable interception model of a component type,
//! the records it is made of, and the builder the resolution stages thread
//! through initialization.

mod builder;
mod interception;
mod record;
mod summary;

pub use builder::InterceptionModelBuilder;
pub use interception::InterceptionModel;
pub use record::InterceptionRecord;
pub use summary::ModelSummary;

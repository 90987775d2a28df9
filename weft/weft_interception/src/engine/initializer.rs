//! Interception model initialization.
//!
//! Initialization runs the resolution stages in a fixed order:
//!
//! 1. target class self-interception metadata
//! 2. interceptable method extraction
//! 3. explicitly listed interceptors (class, constructor, methods)
//! 4. binding-resolved interceptors (class bindings, lifecycle, constructor,
//!    business methods)
//!
//! The builder is threaded through the stages by value. The resulting model
//! is validated and, unless it is empty, published into the registry under
//! the erased component type name.

use std::sync::Arc;

use log::{debug, info};
use weft_core::traits::{BindingCatalog, InterceptorMetadataReader, InterceptorResolver};
use weft_core::types::{BindingSet, ComponentType, ConstructorInfo, OwnerBean};
use weft_core::{Diagnostic, DiagnosticKind, InterceptionConfig, InterceptionError, Result};

use super::business::resolve_business_method_interceptors;
use super::collector::collect_class_bindings;
use super::context::ResolutionContext;
use super::declarative::{
    resolve_class_declared_interceptors, resolve_constructor_declared_interceptors,
    resolve_method_declared_interceptors,
};
use super::diagnostics::DiagnosticLog;
use super::lifecycle::{resolve_constructor_interceptors, resolve_lifecycle_interceptors};
use super::merger::merge_member_bindings;
use crate::model::{InterceptionModel, InterceptionModelBuilder};
use crate::store::ModelRegistry;

/// The result of a successful initialization.
#[derive(Debug, Clone)]
pub enum InitOutcome {
    /// A model was built and published.
    Published(Arc<InterceptionModel>),

    /// Nothing intercepts the component; no model was published.
    Empty,
}

impl InitOutcome {
    /// The published model, if any.
    pub fn model(&self) -> Option<&Arc<InterceptionModel>> {
        match self {
            Self::Published(model) => Some(model),
            Self::Empty => None,
        }
    }

    /// Whether a model was published.
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}

/// Builds, validates and publishes interception models.
///
/// The initializer only holds shared collaborators, so one instance can
/// initialize many component types concurrently.
#[derive(Clone)]
pub struct InterceptionModelInitializer {
    /// Binding type and stereotype definitions.
    catalog: Arc<dyn BindingCatalog>,

    /// Interceptor resolution.
    resolver: Arc<dyn InterceptorResolver>,

    /// Interceptor and target class metadata.
    reader: Arc<dyn InterceptorMetadataReader>,

    /// Where published models go.
    registry: Arc<dyn ModelRegistry>,

    /// Engine configuration.
    config: Arc<InterceptionConfig>,

    /// Retained diagnostics.
    diagnostics: Option<DiagnosticLog>,
}

impl InterceptionModelInitializer {
    /// Create an initializer with the default configuration and no
    /// diagnostic retention.
    pub fn new(
        catalog: Arc<dyn BindingCatalog>,
        resolver: Arc<dyn InterceptorResolver>,
        reader: Arc<dyn InterceptorMetadataReader>,
        registry: Arc<dyn ModelRegistry>,
    ) -> Self {
        Self {
            catalog,
            resolver,
            reader,
            registry,
            config: Arc::new(InterceptionConfig::default()),
            diagnostics: None,
        }
    }

    /// Use the given configuration.
    pub fn with_config(mut self, config: InterceptionConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Retain diagnostics in `log`.
    pub fn with_diagnostics(mut self, log: DiagnosticLog) -> Self {
        self.diagnostics = Some(log);
        self
    }

    /// The registry models are published into.
    pub fn registry(&self) -> &Arc<dyn ModelRegistry> {
        &self.registry
    }

    /// The configuration in use.
    pub fn config(&self) -> &InterceptionConfig {
        &self.config
    }

    /// The diagnostic log, if one is attached.
    pub fn diagnostics(&self) -> Option<&DiagnosticLog> {
        self.diagnostics.as_ref()
    }

    /// Initialize the interception model of `component`.
    ///
    /// # Arguments
    ///
    /// * `component` - The component type.
    /// * `constructor` - The constructor instances are created through.
    /// * `owner` - The owning bean, if the component is one; its stereotypes
    ///   contribute class-level bindings.
    ///
    /// # Returns
    ///
    /// * `Ok(InitOutcome::Published)` - The model was published.
    /// * `Ok(InitOutcome::Empty)` - Nothing intercepts the component.
    /// * `Err` - A binding conflict, a final type or method with interceptors,
    ///   an inaccessible constructor, or a model already published for the
    ///   component. Nothing is published on error.
    pub fn initialize(
        &self,
        component: &ComponentType,
        constructor: &ConstructorInfo,
        owner: Option<&OwnerBean>,
    ) -> Result<InitOutcome> {
        let ctx = ResolutionContext {
            component,
            catalog: self.catalog.as_ref(),
            resolver: self.resolver.as_ref(),
            reader: self.reader.as_ref(),
            config: self.config.as_ref(),
            diagnostics: self.diagnostics.as_ref(),
        };

        debug!("Initializing interception model for {}", component.name);
        let mut builder = InterceptionModelBuilder::new(component.name.clone());

        // An interceptor has no hooks of its own to apply to itself
        let mut self_intercepted = false;
        if !component.is_interceptor {
            let target_class = self.reader.target_class_metadata(component);
            self_intercepted = target_class.requires_model();
            builder = builder.with_target_class_metadata(target_class);
        }

        let methods = component.interceptable_methods();

        builder = resolve_class_declared_interceptors(&ctx, builder, constructor);
        builder = resolve_constructor_declared_interceptors(&ctx, builder, constructor);
        builder = resolve_method_declared_interceptors(&ctx, builder, &methods)?;

        let class_bindings = collect_class_bindings(self.catalog.as_ref(), component, owner)?;
        let class_binding_set: BindingSet = class_bindings.values().cloned().collect();
        builder = builder.with_class_bindings(class_binding_set.clone());

        builder = resolve_lifecycle_interceptors(&ctx, builder, &class_binding_set);

        let constructor_bindings = merge_member_bindings(
            self.catalog.as_ref(),
            &component.name,
            &class_bindings,
            &constructor.markers,
        )?;
        builder = resolve_constructor_interceptors(&ctx, builder, constructor_bindings);

        builder = resolve_business_method_interceptors(&ctx, builder, &class_bindings, &methods)?;

        if !builder.has_records() && !self_intercepted {
            debug!("{} is not intercepted", component.name);
            ctx.report(Diagnostic::new(component.name.clone(), DiagnosticKind::ModelSkipped));
            return Ok(InitOutcome::Empty);
        }

        self.validate(component, constructor)?;

        let model = Arc::new(builder.build());
        self.registry.put(component.name.erased(), model.clone())?;

        let interceptors = model.all_interceptors().len();
        info!(
            "Interception model for {} published with {} interceptor(s)",
            component.name, interceptors
        );
        ctx.report(Diagnostic::new(
            component.name.clone(),
            DiagnosticKind::ModelPublished { interceptors },
        ));

        Ok(InitOutcome::Published(model))
    }

    /// Initialize the interception model of `component` through its
    /// designated constructor.
    ///
    /// # Returns
    ///
    /// * `Err` - `MissingConstructor` if the component has neither an
    ///   initializer constructor nor a no-argument one, or any error of
    ///   [`initialize`](Self::initialize).
    pub fn initialize_component(
        &self,
        component: &ComponentType,
        owner: Option<&OwnerBean>,
    ) -> Result<InitOutcome> {
        let constructor = component.designated_constructor().ok_or_else(|| {
            InterceptionError::MissingConstructor {
                component: component.name.clone(),
            }
        })?;

        self.initialize(component, constructor, owner)
    }

    fn validate(&self, component: &ComponentType, constructor: &ConstructorInfo) -> Result<()> {
        if component.is_final {
            return Err(InterceptionError::FinalTypeNotInterceptable {
                component: component.name.clone(),
            }
            .into());
        }

        if !constructor.is_accessible() {
            return Err(InterceptionError::InaccessibleConstructor {
                component: component.name.clone(),
                constructor: constructor.describe(&component.name),
            }
            .into());
        }

        Ok(())
    }
}

//! Component type metadata.
//!
//! These structures are the explicit, read-only view of a managed class that
//! the engine resolves bindings over. They are produced by whatever reads the
//! component's declared shape; the engine never inspects anything else.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::marker::Marker;
use super::phase::InterceptionType;
use crate::id::TypeName;

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere.
    #[default]
    Public,

    /// Visible to subclasses and the package.
    Protected,

    /// Visible within the package.
    Package,

    /// Visible only within the declaring type.
    Private,
}

/// Identity of a method: declaring type, name and parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodSignature {
    /// The type declaring the method.
    pub declaring_type: TypeName,

    /// The method name.
    pub name: String,

    /// Parameter types in declaration order.
    pub parameters: Vec<TypeName>,
}

impl MethodSignature {
    /// Create a method signature.
    pub fn new<P>(
        declaring_type: impl Into<TypeName>,
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = P>,
    ) -> Self
    where
        P: Into<TypeName>,
    {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| p.simple_name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}.{}({})", self.declaring_type, self.name, params)
    }
}

/// A method declared or inherited by a component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInfo {
    /// The type declaring the method.
    pub declaring_type: TypeName,

    /// The method name.
    pub name: String,

    /// Parameter types in declaration order.
    #[serde(default)]
    pub parameters: Vec<TypeName>,

    /// Method visibility.
    #[serde(default)]
    pub visibility: Visibility,

    /// Whether the method is final.
    #[serde(default)]
    pub is_final: bool,

    /// Whether the method is static.
    #[serde(default)]
    pub is_static: bool,

    /// Whether the method is a compiler-generated bridge.
    #[serde(default)]
    pub is_bridge: bool,

    /// Whether the method is an injection initializer.
    #[serde(default)]
    pub is_initializer: bool,

    /// Whether the method is a timeout handler.
    #[serde(default)]
    pub is_timeout: bool,

    /// The phase this method implements when it is an interceptor hook of the
    /// declaring class itself.
    #[serde(default)]
    pub interceptor_hook: Option<InterceptionType>,

    /// Whether the method ignores class-level interceptors.
    #[serde(default)]
    pub exclude_class_interceptors: bool,

    /// Explicitly listed interceptor classes, in declaration order.
    #[serde(default)]
    pub interceptors: Vec<TypeName>,

    /// Markers declared on the method.
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl MethodInfo {
    /// Create a public, non-final, parameterless method.
    pub fn new(declaring_type: impl Into<TypeName>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            parameters: Vec::new(),
            visibility: Visibility::Public,
            is_final: false,
            is_static: false,
            is_bridge: false,
            is_initializer: false,
            is_timeout: false,
            interceptor_hook: None,
            exclude_class_interceptors: false,
            interceptors: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Set the parameter types.
    pub fn with_parameters<P: Into<TypeName>>(mut self, parameters: impl IntoIterator<Item = P>) -> Self {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Add a marker.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Add an explicitly listed interceptor class.
    pub fn with_interceptor(mut self, class: impl Into<TypeName>) -> Self {
        self.interceptors.push(class.into());
        self
    }

    /// Mark the method final.
    pub fn finalized(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Mark the method static.
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the method as a timeout handler.
    pub fn timeout(mut self) -> Self {
        self.is_timeout = true;
        self
    }

    /// Mark the method as ignoring class-level interceptors.
    pub fn excluding_class_interceptors(mut self) -> Self {
        self.exclude_class_interceptors = true;
        self
    }

    /// Mark the method as the declaring class's own hook for `phase`.
    pub fn hook(mut self, phase: InterceptionType) -> Self {
        self.interceptor_hook = Some(phase);
        self
    }

    /// The identity of this method.
    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            declaring_type: self.declaring_type.clone(),
            name: self.name.clone(),
            parameters: self.parameters.clone(),
        }
    }

    /// Whether this method is a business method eligible for interception.
    ///
    /// Final methods are business methods too; interception of them is
    /// rejected later rather than silently dropped here.
    pub fn is_business_method(&self) -> bool {
        !self.is_static && !self.is_initializer && !self.is_bridge && self.interceptor_hook.is_none()
    }
}

/// A constructor of a component type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstructorInfo {
    /// Parameter types in declaration order.
    #[serde(default)]
    pub parameters: Vec<TypeName>,

    /// Constructor visibility.
    #[serde(default)]
    pub visibility: Visibility,

    /// Whether this is the injection constructor.
    #[serde(default)]
    pub is_initializer: bool,

    /// Whether class-level around-construct interceptors are excluded.
    #[serde(default)]
    pub exclude_class_interceptors: bool,

    /// Explicitly listed interceptor classes, in declaration order.
    #[serde(default)]
    pub interceptors: Vec<TypeName>,

    /// Markers declared on the constructor.
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl ConstructorInfo {
    /// Create a public no-argument constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter types.
    pub fn with_parameters<P: Into<TypeName>>(mut self, parameters: impl IntoIterator<Item = P>) -> Self {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Add a marker.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Add an explicitly listed interceptor class.
    pub fn with_interceptor(mut self, class: impl Into<TypeName>) -> Self {
        self.interceptors.push(class.into());
        self
    }

    /// Mark this as the injection constructor.
    pub fn initializer(mut self) -> Self {
        self.is_initializer = true;
        self
    }

    /// Exclude class-level around-construct interceptors.
    pub fn excluding_class_interceptors(mut self) -> Self {
        self.exclude_class_interceptors = true;
        self
    }

    /// Whether the proxy layer can invoke this constructor.
    pub fn is_accessible(&self) -> bool {
        self.visibility != Visibility::Private
    }

    /// Display form of this constructor for the given owner.
    pub fn describe(&self, owner: &TypeName) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| p.simple_name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", owner, params)
    }
}

/// The bean a component type belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnerBean {
    /// Stereotypes declared for the bean.
    #[serde(default)]
    pub stereotypes: Vec<TypeName>,
}

impl OwnerBean {
    /// Create an owner bean with the given stereotypes.
    pub fn with_stereotypes<S: Into<TypeName>>(stereotypes: impl IntoIterator<Item = S>) -> Self {
        Self {
            stereotypes: stereotypes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A managed class under analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentType {
    /// The fully-qualified type name.
    pub name: TypeName,

    /// Whether the class is final.
    #[serde(default)]
    pub is_final: bool,

    /// Whether the class is itself an interceptor.
    #[serde(default)]
    pub is_interceptor: bool,

    /// Class-level markers, including inherited ones.
    #[serde(default)]
    pub markers: Vec<Marker>,

    /// Explicitly listed class-level interceptor classes, in declaration order.
    #[serde(default)]
    pub interceptors: Vec<TypeName>,

    /// Declared constructors.
    #[serde(default)]
    pub constructors: Vec<ConstructorInfo>,

    /// Declared and inherited methods.
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl ComponentType {
    /// Create a non-final component with no members.
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            is_final: false,
            is_interceptor: false,
            markers: Vec::new(),
            interceptors: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Mark the class final.
    pub fn finalized(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Mark the class as an interceptor.
    pub fn as_interceptor(mut self) -> Self {
        self.is_interceptor = true;
        self
    }

    /// Add a class-level marker.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Add an explicitly listed class-level interceptor class.
    pub fn with_interceptor(mut self, class: impl Into<TypeName>) -> Self {
        self.interceptors.push(class.into());
        self
    }

    /// Add a constructor.
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add a method.
    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Business methods eligible for interception, in declaration order.
    pub fn interceptable_methods(&self) -> Vec<&MethodInfo> {
        self.methods.iter().filter(|m| m.is_business_method()).collect()
    }

    /// The constructor the container instantiates the component with.
    ///
    /// This is the injection constructor when one is declared, otherwise the
    /// no-argument constructor.
    pub fn designated_constructor(&self) -> Option<&ConstructorInfo> {
        self.constructors
            .iter()
            .find(|c| c.is_initializer)
            .or_else(|| self.constructors.iter().find(|c| c.parameters.is_empty()))
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }
}

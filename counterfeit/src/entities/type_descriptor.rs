use std::any::Any;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::StdResult;
use crate::entities::{TypeKey, Value};

/// Shape of a type, deciding if it can be instantiated and if it can be proxied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TypeKind {
    /// Can be instantiated and proxied.
    Concrete,
    /// Can be instantiated but never proxied.
    Sealed,
    /// Can be proxied, its constructors only build the base state of the proxy.
    Abstract,
    /// Can be proxied, has no constructor.
    Interface,
}

impl TypeKind {
    /// Check if a value of the type can be built by calling one of its constructors.
    pub fn is_instantiable(&self) -> bool {
        matches!(self, Self::Concrete | Self::Sealed)
    }

    /// Check if a proxy can be generated for the type.
    pub fn is_proxiable(&self) -> bool {
        !matches!(self, Self::Sealed)
    }
}

/// Arguments given to a [ConstructorFn].
pub struct ConstructorArguments<'a> {
    arguments: &'a [Value],
}

impl<'a> ConstructorArguments<'a> {
    pub(crate) fn new(arguments: &'a [Value]) -> Self {
        Self { arguments }
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Check if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Raw argument at the given position.
    pub fn value(&self, index: usize) -> StdResult<&'a Value> {
        self.arguments
            .get(index)
            .ok_or_else(|| anyhow!("No constructor argument at position {index}"))
    }

    /// Clone of the argument at the given position, which must be a `T`.
    pub fn get<T: Any + Clone>(&self, index: usize) -> StdResult<T> {
        let value = self.value(index)?;
        value.downcast_ref::<T>().cloned().ok_or_else(|| {
            anyhow!(
                "Constructor argument at position {index} is a '{}', expected a '{}'",
                value.type_name(),
                std::any::type_name::<T>()
            )
        })
    }
}

/// Instantiation closure of a constructor.
pub type ConstructorFn = Arc<dyn Fn(&ConstructorArguments) -> StdResult<Value> + Send + Sync>;

/// A constructor of a type: the types of its parameters and how to call it.
#[derive(Clone)]
pub struct ConstructorInfo {
    parameters: Vec<TypeKey>,
    is_public: bool,
    invoke: ConstructorFn,
}

impl ConstructorInfo {
    /// Public constructor with the given parameters.
    pub fn new<F>(parameters: Vec<TypeKey>, invoke: F) -> Self
    where
        F: Fn(&ConstructorArguments) -> StdResult<Value> + Send + Sync + 'static,
    {
        Self {
            parameters,
            is_public: true,
            invoke: Arc::new(invoke),
        }
    }

    /// Mark the constructor as non public: it's never used by the engine.
    pub fn non_public(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Types of the parameters, in order.
    pub fn parameters(&self) -> &[TypeKey] {
        &self.parameters
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the constructor is public.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Check if the given arguments can be passed to this constructor.
    pub fn accepts(&self, arguments: &[Value]) -> bool {
        self.arity() == arguments.len()
            && self
                .parameters
                .iter()
                .zip(arguments)
                .all(|(parameter, argument)| argument.is_assignable_to(parameter))
    }

    /// Call the constructor.
    pub fn invoke(&self, arguments: &[Value]) -> StdResult<Value> {
        (self.invoke)(&ConstructorArguments::new(arguments))
    }

    /// Human readable signature, ie `(u32, String)`.
    pub fn signature(&self) -> String {
        let parameters: Vec<String> = self.parameters.iter().map(TypeKey::short_name).collect();
        format!("({})", parameters.join(", "))
    }
}

impl Debug for ConstructorInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("parameters", &self.parameters)
            .field("is_public", &self.is_public)
            .finish_non_exhaustive()
    }
}

/// Metadata stamped on a generated proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    properties: BTreeMap<String, String>,
}

impl Attribute {
    /// Attribute without properties.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a named property.
    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Name of the attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of a property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.name)?;
        if !self.properties.is_empty() {
            let properties: Vec<String> =
                self.properties.iter().map(|(k, v)| format!("{k} = {v}")).collect();
            write!(f, "({})", properties.join(", "))?;
        }
        write!(f, "]")
    }
}

/// Description of a type the engine can be asked to create.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    kind: TypeKind,
    constructors: Vec<ConstructorInfo>,
    interfaces: Vec<TypeKey>,
}

impl TypeDescriptor {
    /// Descriptor with no constructors nor interfaces.
    pub fn new(key: TypeKey, kind: TypeKind) -> Self {
        Self {
            key,
            kind,
            constructors: vec![],
            interfaces: vec![],
        }
    }

    /// Descriptor of the concrete rust type `T`.
    pub fn concrete<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), TypeKind::Concrete)
    }

    /// Descriptor of the sealed rust type `T`.
    pub fn sealed<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), TypeKind::Sealed)
    }

    /// Descriptor of the abstract rust type `T`.
    pub fn abstract_type<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), TypeKind::Abstract)
    }

    /// Descriptor of the interface `T`, usually a trait object type.
    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>(), TypeKind::Interface)
    }

    /// Add a constructor.
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add a public parameterless constructor.
    pub fn with_parameterless_constructor<F>(self, invoke: F) -> Self
    where
        F: Fn() -> StdResult<Value> + Send + Sync + 'static,
    {
        self.with_constructor(ConstructorInfo::new(vec![], move |_| invoke()))
    }

    /// Declare an implemented interface.
    pub fn with_interface(mut self, interface: TypeKey) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Key of the type.
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Kind of the type.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// All constructors, in declaration order.
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// Declared interfaces.
    pub fn interfaces(&self) -> &[TypeKey] {
        &self.interfaces
    }

    /// Public constructors, the ones with the most parameters first.
    ///
    /// Constructors with the same number of parameters keep their declaration order.
    pub fn public_constructors_by_descending_arity(&self) -> Vec<&ConstructorInfo> {
        let mut constructors: Vec<&ConstructorInfo> =
            self.constructors.iter().filter(|c| c.is_public()).collect();
        constructors.sort_by_key(|c| Reverse(c.arity()));
        constructors
    }
}

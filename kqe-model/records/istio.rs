use crate::{Comparable, IstioConfigObjectType, IstioConfigValidation, is_equal_when_known};

/// Istio configuration object row of the Istio Config list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IstioConfig {
    pub name: String,
    pub namespace: String,
    pub object_type: IstioConfigObjectType,
    pub validation: Option<IstioConfigValidation>,
}

impl IstioConfig {
    /// Creates new [`IstioConfig`] instance.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, object_type: IstioConfigObjectType) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            object_type,
            validation: None,
        }
    }
}

impl Comparable for IstioConfig {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.namespace != other.namespace || self.object_type != other.object_type {
            return false;
        }

        !advanced_check || is_equal_when_known(self.validation.as_ref(), other.validation.as_ref())
    }
}

/// Istio configuration object details with its textual rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IstioConfigDetails {
    pub name: String,
    pub namespace: String,
    pub object_type: IstioConfigObjectType,
    pub text: String,
    pub validation: Option<IstioConfigValidation>,
    pub error_messages: Vec<String>,
}

impl Comparable for IstioConfigDetails {
    fn is_equal(&self, other: &Self, advanced_check: bool) -> bool {
        if self.name != other.name || self.object_type != other.object_type {
            return false;
        }

        !advanced_check || is_equal_when_known(self.validation.as_ref(), other.validation.as_ref())
    }
}

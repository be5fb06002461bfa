use thiserror::Error;

/// Component-local failures; the affected component is dropped, the run continues
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("Interface '{interface}' in class {class_name} does not point to a valid class/interface.")]
    UnresolvedInterface {
        interface: String,
        class_name: String,
    },

    #[error("Duplicate definition for reference {name} in class {class_name}")]
    DuplicateReference { name: String, class_name: String },

    #[error("Component {component} failed validation with {} error(s)", errors.len())]
    Validation {
        component: String,
        errors: Vec<String>,
    },
}

impl AssemblyError {
    /// Individual messages suitable for line-by-line reporting
    pub fn messages(&self) -> Vec<String> {
        match self {
            AssemblyError::Validation { errors, .. } => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

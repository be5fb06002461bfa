pub mod assembly_error;
pub mod class_catalog;
pub mod class_description;
pub mod component;
pub mod components;
pub mod metadata;
pub mod tag;

pub use assembly_error::AssemblyError;
pub use class_catalog::{ClassCatalog, MAX_ANCESTRY_DEPTH};
pub use class_description::{ClassDescription, FieldDescription, MethodDescription};
pub use component::{
    Cardinality, Component, Interface, Property, PropertyType, Reference, ReferencePolicy,
    Service, SERVICE_PID, SERVICE_REFERENCE_TYPE,
};
pub use components::Components;
pub use metadata::{AttributeDefinition, Designate, MetaData, MetatypeEntry, MtObject, Ocd};
pub use tag::Tag;

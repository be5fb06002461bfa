use crate::descriptor_generation::domain::{Component, Components, MetaData, MetatypeEntry};

/// Where a validated component ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// `ds` was disabled; the component appears nowhere
    Skipped,
    /// Written only to the abstract (inheritance) descriptor
    Abstract,
    /// Written to both the concrete and the abstract descriptor
    Concrete,
}

/// The three output collections of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedOutput {
    pub components: Components,
    pub abstract_components: Components,
    pub metadata: MetaData,
}

/// OutputCollector partitions validated components into the output collections
#[derive(Debug, Default)]
pub struct OutputCollector {
    output: CollectedOutput,
}

impl OutputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component that passed validation
    ///
    /// Every included component lands in the abstract set so that later builds
    /// can inherit from it; only non-abstract ones also land in the concrete set.
    pub fn collect(&mut self, component: Component, metatype: Option<MetatypeEntry>) -> Disposition {
        if !component.is_ds() {
            return Disposition::Skipped;
        }
        if let Some(entry) = metatype {
            self.output.metadata.add(entry);
        }
        if component.is_abstract() {
            self.output.abstract_components.add(component);
            Disposition::Abstract
        } else {
            self.output.abstract_components.add(component.clone());
            self.output.components.add(component);
            Disposition::Concrete
        }
    }

    pub fn finish(self) -> CollectedOutput {
        self.output
    }
}

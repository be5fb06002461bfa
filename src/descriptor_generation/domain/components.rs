use super::component::Component;

/// Ordered output collection of components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    components: Vec<Component>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Finds the component implemented by the given class
    pub fn by_implementation(&self, class_name: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.implementation() == class_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }
}

impl FromIterator<Component> for Components {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Components {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

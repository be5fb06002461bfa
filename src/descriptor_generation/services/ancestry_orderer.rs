use crate::descriptor_generation::domain::{tag, ClassCatalog, ClassDescription};

/// AncestryOrderer service for choosing the processing order of component classes
///
/// Ancestor declarations are resolved lazily per component, so the order does not
/// need to be topological for correctness. It must be stable so that descriptor
/// documents stay byte-identical across runs with unchanged inputs. Classes are
/// ordered by ancestry depth (ancestors first), then by qualified name.
pub struct AncestryOrderer;

impl AncestryOrderer {
    /// Returns every source class carrying a component tag, in processing order
    pub fn order(catalog: &ClassCatalog) -> Vec<&ClassDescription> {
        let mut classes: Vec<(usize, &ClassDescription)> = catalog
            .source_classes()
            .filter(|class| class.tag_by_name(tag::COMPONENT).is_some())
            .map(|class| (catalog.ancestry(class).len(), class))
            .collect();

        classes.sort_by(|(depth_a, a), (depth_b, b)| {
            depth_a.cmp(depth_b).then_with(|| a.name().cmp(b.name()))
        });

        classes.into_iter().map(|(_, class)| class).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor_generation::domain::Tag;

    fn component_class(name: &str) -> ClassDescription {
        ClassDescription::new(name).with_tag(Tag::new(tag::COMPONENT))
    }

    #[test]
    fn test_order_skips_untagged_and_external_classes() {
        let catalog = ClassCatalog::from_descriptions(vec![
            component_class("a.Tagged"),
            ClassDescription::new("a.Plain"),
            component_class("a.Library").external(true),
        ]);

        let names: Vec<_> = AncestryOrderer::order(&catalog)
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["a.Tagged"]);
    }

    #[test]
    fn test_order_places_ancestors_first_then_by_name() {
        let catalog = ClassCatalog::from_descriptions(vec![
            component_class("z.Leaf").extends("a.Base"),
            component_class("b.Other"),
            component_class("a.Base"),
            component_class("c.Deep").extends("z.Leaf"),
        ]);

        let names: Vec<_> = AncestryOrderer::order(&catalog)
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["a.Base", "b.Other", "z.Leaf", "c.Deep"]);
    }

    #[test]
    fn test_order_is_independent_of_insertion_order() {
        let forward = ClassCatalog::from_descriptions(vec![
            component_class("a.One"),
            component_class("a.Two"),
            component_class("a.Three"),
        ]);
        let backward = ClassCatalog::from_descriptions(vec![
            component_class("a.Three"),
            component_class("a.Two"),
            component_class("a.One"),
        ]);

        let forward_names: Vec<_> = AncestryOrderer::order(&forward)
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let backward_names: Vec<_> = AncestryOrderer::order(&backward)
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(forward_names, backward_names);
    }
}

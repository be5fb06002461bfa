use scr_descriptor::prelude::*;
use std::path::Path;

/// Mock ClassModelReader serving a fixed list of class descriptions
pub struct MockClassModelReader {
    classes: Vec<ClassDescription>,
    should_fail: bool,
}

impl MockClassModelReader {
    pub fn new(classes: Vec<ClassDescription>) -> Self {
        Self {
            classes,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            classes: Vec::new(),
            should_fail: true,
        }
    }
}

impl ClassModelReader for MockClassModelReader {
    fn read_class_model(&self, path: &Path) -> Result<ClassCatalog> {
        if self.should_fail {
            anyhow::bail!("Mock class model read failure: {}", path.display());
        }
        Ok(ClassCatalog::from_descriptions(self.classes.clone()))
    }
}

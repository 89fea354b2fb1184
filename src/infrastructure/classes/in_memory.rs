//! In-memory class source for tests and embedding.

use crate::domain::entities::DomainClass;
use crate::domain::ports::ClassSource;

#[derive(Debug, Clone, Default)]
pub struct InMemoryClassSource {
    classes: Vec<DomainClass>,
}

impl InMemoryClassSource {
    pub fn new(classes: Vec<DomainClass>) -> Self {
        Self { classes }
    }

    pub fn with_class(mut self, class: DomainClass) -> Self {
        self.register(class);
        self
    }

    /// Adds `class`, replacing an earlier registration under the same name.
    pub fn register(&mut self, class: DomainClass) {
        match self.classes.iter_mut().find(|c| c.name == class.name) {
            Some(existing) => *existing = class,
            None => self.classes.push(class),
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassSource for InMemoryClassSource {
    fn class(&self, name: &str) -> Option<&DomainClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_replaces_in_place() {
        let mut source = InMemoryClassSource::default()
            .with_class(DomainClass::new("acme.A"))
            .with_class(DomainClass::new("acme.B"));
        source.register(DomainClass::new("acme.A").with_superclass("acme.B"));

        assert_eq!(source.class_names(), vec!["acme.A", "acme.B"]);
        assert_eq!(source.class("acme.A").unwrap().superclass.as_deref(), Some("acme.B"));
        assert!(source.class("acme.C").is_none());
    }
}

//! ClassSource port
//!
//! Supplies the domain class descriptors introspection works from.

use crate::domain::entities::DomainClass;

pub trait ClassSource: Send + Sync {
    fn class(&self, name: &str) -> Option<&DomainClass>;

    /// Every registered class name, in registration order.
    fn class_names(&self) -> Vec<String>;
}

//! Domain class descriptors
//!
//! The registration table that stands in for runtime reflection: each
//! descriptor lists a class's annotations, members and declared non-member
//! methods. Descriptors are built in code or deserialized from model files.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    BookmarkPolicy, CssClassFaPosition, FeatureType, MenuBarKind, Nature, Where,
};

/// Method names recognised as object support methods.
pub const OBJECT_SUPPORT_METHODS: [&str; 4] = ["title", "iconName", "cssClass", "layout"];

/// Prefixes of member support methods, e.g. `hideName` supports `name`.
pub const MEMBER_SUPPORT_PREFIXES: [&str; 6] = [
    "hide",
    "disable",
    "validate",
    "default",
    "choices",
    "autoComplete",
];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainClass {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// `@Value`: instances are immutable values rather than references
    #[serde(default)]
    pub value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_object: Option<DomainObjectAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_object_layout: Option<DomainObjectLayoutAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_service: Option<DomainServiceAnnotation>,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl DomainClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_domain_object(mut self, annotation: DomainObjectAnnotation) -> Self {
        self.domain_object = Some(annotation);
        self
    }

    pub fn with_layout(mut self, annotation: DomainObjectLayoutAnnotation) -> Self {
        self.domain_object_layout = Some(annotation);
        self
    }

    pub fn with_domain_service(mut self, annotation: DomainServiceAnnotation) -> Self {
        self.domain_service = Some(annotation);
        self
    }

    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, simple)| simple)
            .unwrap_or(&self.name)
    }

    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDescriptor> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// The body of the single zero-argument method with this name, if any.
    pub fn support_method_body(&self, name: &str) -> Option<&str> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.param_count == 0)
            .and_then(|m| m.body.as_deref())
    }

    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainObjectAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_type_name: Option<String>,
    #[serde(default)]
    pub nature: Nature,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainObjectLayoutAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_fa: Option<String>,
    #[serde(default)]
    pub css_class_fa_position: CssClassFaPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paged: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarking: Option<BookmarkPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ui_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_ui_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_ui_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_ui_event: Option<String>,
}

/// `@DomainService` together with its `@DomainServiceLayout`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainServiceAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default)]
    pub menu_bar: MenuBarKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub kind: FeatureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// `@Title` on a property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<MemberLayoutAnnotation>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl MemberDescriptor {
    fn new(name: impl Into<String>, kind: FeatureType) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: None,
            title: None,
            layout: None,
            parameters: Vec::new(),
        }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self::new(name, FeatureType::Property)
    }

    pub fn collection(name: impl Into<String>) -> Self {
        Self::new(name, FeatureType::Collection)
    }

    pub fn action(name: impl Into<String>) -> Self {
        Self::new(name, FeatureType::Action)
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_title(mut self, title: TitleAnnotation) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_layout(mut self, layout: MemberLayoutAnnotation) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAnnotation {
    #[serde(default = "default_title_sequence")]
    pub sequence: String,
    #[serde(default)]
    pub prepend: String,
    #[serde(default)]
    pub append: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviated_to: Option<usize>,
}

impl Default for TitleAnnotation {
    fn default() -> Self {
        Self {
            sequence: default_title_sequence(),
            prepend: String::new(),
            append: String::new(),
            abbreviated_to: None,
        }
    }
}

fn default_title_sequence() -> String {
    "1.0".to_string()
}

/// `@PropertyLayout`, `@CollectionLayout` and `@ActionLayout` in one shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberLayoutAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_fa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<Where>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paged: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_as: Option<String>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A declared method that is not itself a member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Template evaluated against the object's state, e.g. `"{first} {last}"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub param_count: usize,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn returning(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Some(body.into()),
            param_count: 0,
        }
    }

    pub fn with_param_count(mut self, param_count: usize) -> Self {
        self.param_count = param_count;
        self
    }

    /// Splits `hideName` into `("hide", "name")` for a known support prefix.
    pub fn support_target(&self) -> Option<(&'static str, String)> {
        MEMBER_SUPPORT_PREFIXES.iter().find_map(|prefix| {
            let rest = self.name.strip_prefix(prefix)?;
            let mut chars = rest.chars();
            let first = chars.next()?;
            if !first.is_uppercase() {
                return None;
            }
            let member: String = first.to_lowercase().chain(chars).collect();
            Some((*prefix, member))
        })
    }
}

//! Test fixtures - a small CRM model shared by CLI and scenario tests.

/// Customer entity with a custom CssClassUiEvent, plus one menu service.
pub const CRM_MODEL: &str = r#"
[[classes]]
name = "acme.Customer"

[classes.domain_object]
logical_type_name = "crm.Customer"
nature = "entity"

[classes.domain_object_layout]
css_class = "customer"
css_class_ui_event = "acme.CustomerCssClassUiEvent"

[[classes.members]]
name = "name"
kind = "property"

[[classes.members]]
name = "email"
kind = "property"

[classes.members.layout]
named = "E-mail"

[[classes.methods]]
name = "title"
body = "{name}"

[[classes]]
name = "acme.CustomerMenu"

[classes.domain_service]
logical_type_name = "crm.Customers"
named = "Customers"

[[classes.members]]
name = "findByName"
kind = "action"

[[classes.members]]
name = "create"
kind = "action"
"#;

/// A second service on the secondary bar, as YAML.
pub const ORDER_MENU_YAML: &str = r#"
classes:
  - name: acme.OrderMenu
    domain_service:
      menu_bar: secondary
    members:
      - name: recent
        kind: action
"#;

/// Primary menu with one referenced action and a tertiary catch-all menu.
pub const MENUBARS: &str = r#"
[[primary.menus]]
named = "Customers"

[[primary.menus.sections]]
actions = [
  { object_type = "crm.Customers", id = "findByName", named = "Find", css_class_fa = "search" },
  { object_type = "crm.Customers", id = "gone" },
]

[[tertiary.menus]]
named = "Other"
unreferenced_actions = true
"#;

/// An orphaned `hideNothing()` support method.
pub const ORPHAN_MODEL: &str = r#"
[[classes]]
name = "acme.Orphan"

[[classes.members]]
name = "name"
kind = "property"

[[classes.methods]]
name = "hideNothing"
body = "true"
"#;

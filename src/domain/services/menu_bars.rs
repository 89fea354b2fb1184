//! Menu bars
//!
//! Derives the application menus from the loaded domain services and, when a
//! menubars layout resource exists, reconciles it with the model: stale
//! references are dropped, layout overrides are pushed onto the service
//! actions as high-precedence facets and actions the layout does not mention
//! land in its catch-all menu.

use std::collections::BTreeSet;

use crate::domain::entities::{
    FacetKind, Menu, MenuBars, MenuSection, ObjectMember, ObjectSpecification,
    ServiceActionLayout,
};
use crate::domain::services::factories::create;
use crate::domain::services::specification_loader::SpecificationLoader;
use crate::domain::value_objects::{
    CssClassFaPosition, FacetType, MenuBarKind, NounForm, Precedence,
};

pub const MENUBARS_LAYOUT_ORIGIN: &str = "menubars-layout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBarsSource {
    /// Derived from service annotations only
    Annotations,
    /// Read from the menubars layout resource
    Layout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMenuBars {
    pub menu_bars: MenuBars,
    pub source: MenuBarsSource,
}

pub struct MenuBarsService;

impl MenuBarsService {
    /// One menu per domain service that has at least one visible action,
    /// placed on the bar its annotation asks for. Names are read below any
    /// layout override so the result does not depend on a previous
    /// reconciliation.
    pub fn default_menu_bars(loader: &SpecificationLoader) -> MenuBars {
        let mut bars = MenuBars::default();
        for spec in loader.specifications().filter(|s| s.bean_sort().is_manager()) {
            let actions: Vec<ServiceActionLayout> = visible_actions(spec)
                .map(|action| {
                    let mut layout = ServiceActionLayout::new(spec.logical_type_name(), action.id());
                    layout.named = Some(annotated_action_name(action));
                    layout
                })
                .collect();
            if actions.is_empty() {
                continue;
            }
            bars.bar_mut(menu_bar_kind(spec)).menus.push(Menu {
                named: service_name(spec),
                css_class_fa: None,
                unreferenced_actions: false,
                sections: vec![MenuSection {
                    named: None,
                    actions,
                }],
            });
        }
        bars
    }

    /// Effective menu bars for the loaded model.
    ///
    /// Falls back to [`MenuBarsService::default_menu_bars`] when there is no
    /// layout resource or it cannot be used. Reconciling the same layout
    /// twice leaves the specifications unchanged.
    pub fn reconcile(loader: &mut SpecificationLoader) -> ResolvedMenuBars {
        let annotated = Self::default_menu_bars(loader);
        let fallback = |menu_bars: MenuBars| ResolvedMenuBars {
            menu_bars,
            source: MenuBarsSource::Annotations,
        };

        let mut layout = match loader.layout_loader().menu_bars() {
            Ok(Some(layout)) => layout,
            Ok(None) => return fallback(annotated),
            Err(e) => {
                tracing::error!(error = %e, "ignoring menubars layout");
                return fallback(annotated);
            }
        };

        let catch_all = layout.unreferenced_actions_menu_count();
        if catch_all != 1 {
            tracing::error!(
                found = catch_all,
                "menubars layout must have exactly one unreferenced-actions menu; using annotations"
            );
            return fallback(annotated);
        }

        drop_unknown_references(loader, &mut layout);
        apply_overrides(loader, &layout);
        add_unreferenced(&annotated, &mut layout);

        tracing::debug!(actions = layout.actions().count(), "menubars reconciled");
        ResolvedMenuBars {
            menu_bars: layout,
            source: MenuBarsSource::Layout,
        }
    }
}

fn visible_actions(spec: &ObjectSpecification) -> impl Iterator<Item = &ObjectMember> {
    spec.actions().filter(|action| !action.is_always_hidden())
}

fn annotated_action_name(action: &ObjectMember) -> String {
    action
        .holder()
        .facet_lower_or_equal_to(FacetType::Named, Precedence::Default)
        .and_then(|f| f.named(NounForm::Singular))
        .map(str::to_string)
        .unwrap_or_else(|| action.name())
}

fn service_name(spec: &ObjectSpecification) -> String {
    spec.holder()
        .facet_lower_or_equal_to(FacetType::Named, Precedence::Default)
        .and_then(|f| f.named(NounForm::Singular))
        .map(str::to_string)
        .unwrap_or_else(|| spec.singular_name())
}

fn menu_bar_kind(spec: &ObjectSpecification) -> MenuBarKind {
    match spec.facet(FacetType::MenuBar).map(|f| f.kind()) {
        Some(FacetKind::MenuBar(kind)) => *kind,
        _ => MenuBarKind::default(),
    }
}

fn drop_unknown_references(loader: &SpecificationLoader, layout: &mut MenuBars) {
    layout.retain_actions(|action| {
        let known = loader
            .specification_by_logical_type(&action.object_type)
            .filter(|spec| spec.bean_sort().is_manager())
            .is_some_and(|spec| spec.action(&action.id).is_some());
        if !known {
            tracing::warn!(
                object_type = %action.object_type,
                action = %action.id,
                "menubars layout references an unknown service action"
            );
        }
        known
    });
}

fn apply_overrides(loader: &mut SpecificationLoader, layout: &MenuBars) {
    for action in layout.actions() {
        let Some(class_name) = loader
            .specification_by_logical_type(&action.object_type)
            .map(|spec| spec.class_name().to_string())
        else {
            continue;
        };
        let result = loader.update_specification(&class_name, |spec| {
            let Some(member) = spec.member_mut(&action.id) else {
                return;
            };
            let id = member.identifier().clone();
            let holder = member.holder_mut();
            holder.add_facet_if_present(create::named(
                action.named.as_deref(),
                None,
                Precedence::High,
                MENUBARS_LAYOUT_ORIGIN,
                &id,
            ));
            holder.add_facet_if_present(create::described(
                action.described_as.as_deref(),
                Precedence::High,
                MENUBARS_LAYOUT_ORIGIN,
                &id,
            ));
            holder.add_facet_if_present(create::css_class(
                action.css_class.as_deref(),
                Precedence::High,
                MENUBARS_LAYOUT_ORIGIN,
                &id,
            ));
            holder.add_facet_if_present(create::css_class_fa(
                action.css_class_fa.as_deref(),
                CssClassFaPosition::Left,
                Precedence::High,
                MENUBARS_LAYOUT_ORIGIN,
                &id,
            ));
        });
        if let Err(e) = result {
            tracing::warn!(class = %class_name, error = %e, "menubars override not applied");
        }
    }
}

/// Appends every annotated action the layout leaves out to the catch-all
/// menu, one section per service.
fn add_unreferenced(annotated: &MenuBars, layout: &mut MenuBars) {
    let referenced: BTreeSet<(String, String)> =
        layout.actions().map(ServiceActionLayout::key).collect();

    let sections: Vec<MenuSection> = annotated
        .menus()
        .filter_map(|menu| {
            let actions: Vec<ServiceActionLayout> = menu
                .sections
                .iter()
                .flat_map(|s| s.actions.iter())
                .filter(|a| !referenced.contains(&a.key()))
                .cloned()
                .collect();
            (!actions.is_empty()).then(|| MenuSection {
                named: Some(menu.named.clone()),
                actions,
            })
        })
        .collect();

    if let Some(menu) = layout.unreferenced_actions_menu_mut() {
        menu.sections.extend(sections);
    }
}

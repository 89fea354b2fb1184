//! Domain Services
//!
//! Metamodel assembly and the behavior behind facet queries. Nothing here
//! touches the file system; sources come in through `ports`.

pub mod facet_factory;
pub mod factories;
pub mod menu_bars;
pub mod specification_loader;
pub mod ui_event;
pub mod validator;

pub use facet_factory::{
    FacetFactory, FacetProcessor, ProcessClassContext, ProcessMemberContext,
    ProcessParameterContext,
};
pub use menu_bars::{MenuBarsService, MenuBarsSource, ResolvedMenuBars, MENUBARS_LAYOUT_ORIGIN};
pub use specification_loader::SpecificationLoader;
pub use ui_event::{
    CssClassUiEvent, EventTypeClass, IconUiEvent, LayoutUiEvent, TitleUiEvent, UiEventKind,
    UiEventSource, BUILTIN_EVENT_NAMESPACE,
};
pub use validator::MetamodelValidator;

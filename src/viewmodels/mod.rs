// ============================================================================
// VIEWMODELS - Lógica de cada pantalla, sin DOM
// ============================================================================

pub mod error;
pub mod navigation;
pub mod auth_viewmodel;
pub mod search_viewmodel;
pub mod schedule_viewmodel;
pub mod admin_viewmodel;
pub mod support_viewmodel;

pub use error::{ActionError, LoginError};
pub use navigation::{guard, nav_items, shows_carousel, shows_search, NavItem, Route, RouteDecision};
pub use auth_viewmodel::{AuthViewModel, RegistrationKind};
pub use search_viewmodel::{SearchOutcome, SearchViewModel};
pub use schedule_viewmodel::{ScheduleSnapshot, ScheduleViewModel};
pub use admin_viewmodel::AdminViewModel;
pub use support_viewmodel::SupportViewModel;

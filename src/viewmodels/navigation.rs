// ============================================================================
// NAVIGATION - Rutas, guards por rol y visibilidad de la cabecera
// ============================================================================
// Funciones puras sobre la foto de sesión: la pantalla decide qué pintar,
// aquí solo se decide qué se permite.
// ============================================================================

use crate::models::{SessionSnapshot, UserType};
use crate::state::ListingSnapshot;
use crate::utils::{ROUTE_AGENDAMENTOS, ROUTE_CLIENTES, ROUTE_DASHBOARD, ROUTE_HOME, ROUTE_LOGIN};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    Agendamentos,
    Clientes,
    /// Ficha pública de un inmueble
    Detalhes(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => ROUTE_HOME.to_string(),
            Route::Login => ROUTE_LOGIN.to_string(),
            Route::Dashboard => ROUTE_DASHBOARD.to_string(),
            Route::Agendamentos => ROUTE_AGENDAMENTOS.to_string(),
            Route::Clientes => ROUTE_CLIENTES.to_string(),
            Route::Detalhes(id) => format!("/detalhes/{}", id),
        }
    }

    /// Parsea una ruta interna. Ignora query string y barra final.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => ROUTE_HOME,
            trimmed => trimmed,
        };

        match path {
            ROUTE_HOME => Some(Route::Home),
            ROUTE_LOGIN => Some(Route::Login),
            ROUTE_DASHBOARD => Some(Route::Dashboard),
            ROUTE_AGENDAMENTOS => Some(Route::Agendamentos),
            ROUTE_CLIENTES => Some(Route::Clientes),
            other => other
                .strip_prefix("/detalhes/")
                .and_then(|id| id.parse().ok())
                .map(Route::Detalhes),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

/// Destino por defecto tras el login
pub fn landing_for(user_type: UserType) -> Route {
    if user_type.is_staff() {
        Route::Dashboard
    } else {
        Route::Home
    }
}

/// Guard de ruta: sin sesión => login; rol insuficiente => home
pub fn guard(route: &Route, session: &SessionSnapshot) -> RouteDecision {
    let allowed = match route {
        Route::Home | Route::Login | Route::Detalhes(_) => return RouteDecision::Allow,
        Route::Dashboard => session.is_admin() || session.is_suporte(),
        Route::Agendamentos => session.is_admin() || session.is_cliente(),
        Route::Clientes => session.is_admin(),
    };

    if !session.is_authenticated {
        log::debug!("🔒 [NAV] {} requiere login", route.path());
        RouteDecision::Redirect(Route::Login)
    } else if allowed {
        RouteDecision::Allow
    } else {
        log::warn!("⛔ [NAV] {} no permitido para '{}'", route.path(), session.user_type);
        RouteDecision::Redirect(Route::Home)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Agendamentos,
    Dashboard,
    Login,
    Logout,
}

/// Enlaces de la cabecera, en orden
pub fn nav_items(session: &SessionSnapshot) -> Vec<NavItem> {
    let mut items = vec![NavItem::Home];
    if session.is_cliente() {
        items.push(NavItem::Agendamentos);
    }
    if session.is_admin() || session.is_suporte() {
        items.push(NavItem::Dashboard);
    }
    items.push(if session.is_authenticated {
        NavItem::Logout
    } else {
        NavItem::Login
    });
    items
}

/// La caja de búsqueda solo se muestra a anónimos y clientes
pub fn shows_search(session: &SessionSnapshot) -> bool {
    !session.is_authenticated || session.is_cliente()
}

/// Carrusel de destacados: anónimo y sin búsqueda activa
pub fn shows_carousel(session: &SessionSnapshot, listing: &ListingSnapshot) -> bool {
    !session.is_authenticated && listing.current_search_term.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user_type: UserType) -> SessionSnapshot {
        SessionSnapshot {
            is_authenticated: true,
            user_name: "Ana".into(),
            user_email: "ana@x.com".into(),
            user_type,
        }
    }

    #[test]
    fn paths_round_trip_through_parser() {
        for route in [Route::Home, Route::Dashboard, Route::Clientes, Route::Detalhes(42)] {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/detalhes/7?ref=home"), Some(Route::Detalhes(7)));
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/detalhes/abc"), None);
        assert_eq!(Route::from_path("/nada"), None);
    }

    #[test]
    fn anonymous_users_are_sent_to_login() {
        let anonymous = SessionSnapshot::anonymous();
        for route in [Route::Dashboard, Route::Agendamentos, Route::Clientes] {
            assert_eq!(guard(&route, &anonymous), RouteDecision::Redirect(Route::Login));
        }
        assert_eq!(guard(&Route::Detalhes(3), &anonymous), RouteDecision::Allow);
        assert_eq!(guard(&Route::Home, &anonymous), RouteDecision::Allow);
    }

    #[test]
    fn dashboard_is_for_staff_only() {
        assert_eq!(guard(&Route::Dashboard, &session(UserType::Admin)), RouteDecision::Allow);
        assert_eq!(guard(&Route::Dashboard, &session(UserType::Suporte)), RouteDecision::Allow);
        assert_eq!(
            guard(&Route::Dashboard, &session(UserType::Cliente)),
            RouteDecision::Redirect(Route::Home)
        );
    }

    #[test]
    fn clientes_page_requires_admin() {
        assert_eq!(guard(&Route::Clientes, &session(UserType::Admin)), RouteDecision::Allow);
        assert_eq!(
            guard(&Route::Clientes, &session(UserType::Suporte)),
            RouteDecision::Redirect(Route::Home)
        );
    }

    #[test]
    fn authenticated_without_role_is_not_staff() {
        let roleless = session(UserType::None);
        assert_eq!(guard(&Route::Dashboard, &roleless), RouteDecision::Redirect(Route::Home));
        assert_eq!(guard(&Route::Agendamentos, &roleless), RouteDecision::Redirect(Route::Home));
    }

    #[test]
    fn header_links_follow_role() {
        assert_eq!(nav_items(&SessionSnapshot::anonymous()), vec![NavItem::Home, NavItem::Login]);
        assert_eq!(
            nav_items(&session(UserType::Cliente)),
            vec![NavItem::Home, NavItem::Agendamentos, NavItem::Logout]
        );
        assert_eq!(
            nav_items(&session(UserType::Suporte)),
            vec![NavItem::Home, NavItem::Dashboard, NavItem::Logout]
        );
    }

    #[test]
    fn search_box_and_carousel_visibility() {
        let anonymous = SessionSnapshot::anonymous();
        assert!(shows_search(&anonymous));
        assert!(shows_search(&session(UserType::Cliente)));
        assert!(!shows_search(&session(UserType::Admin)));

        let mut listing = ListingSnapshot::default();
        assert!(shows_carousel(&anonymous, &listing));
        assert!(!shows_carousel(&session(UserType::Cliente), &listing));
        listing.current_search_term = Some("casa".into());
        assert!(!shows_carousel(&anonymous, &listing));
    }

    #[test]
    fn staff_land_on_dashboard() {
        assert_eq!(landing_for(UserType::Admin), Route::Dashboard);
        assert_eq!(landing_for(UserType::Suporte), Route::Dashboard);
        assert_eq!(landing_for(UserType::Cliente), Route::Home);
    }
}

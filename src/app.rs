// ============================================================================
// APP - Arranque de la aplicación
// ============================================================================
// Crea el contexto (AppState) una sola vez, reconcilia la sesión, carga el
// listado y vuelve a reconciliar cuando la pestaña recupera el foco o cuando
// otra pestaña toca localStorage.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::config::CONFIG;
use crate::state::AppState;
use crate::utils::LocalStorage;
use crate::viewmodels::{
    guard, AdminViewModel, AuthViewModel, Route, RouteDecision, ScheduleViewModel, SearchViewModel,
    SupportViewModel,
};

/// Aplicación principal
pub struct App {
    state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(CONFIG.clone(), Rc::new(LocalStorage)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn auth(&self) -> AuthViewModel {
        AuthViewModel::new(
            self.state.api.clone(),
            self.state.session.clone(),
            self.state.listing.clone(),
        )
    }

    pub fn search(&self) -> SearchViewModel {
        SearchViewModel::new(self.state.listing.clone(), self.state.config.min_search_len)
    }

    pub fn schedules(&self) -> ScheduleViewModel {
        ScheduleViewModel::new(self.state.api.clone(), self.state.session.clone())
    }

    pub fn admin(&self) -> AdminViewModel {
        AdminViewModel::new(
            self.state.api.clone(),
            self.state.session.clone(),
            self.state.listing.clone(),
        )
    }

    pub fn support(&self) -> SupportViewModel {
        SupportViewModel::new(self.state.api.clone(), self.state.session.clone())
    }

    /// Registra listeners y lanza la reconciliación inicial
    pub fn start(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;

        {
            let session = self.state.session.clone();
            self.state.session.subscribe(move || {
                let snapshot = session.snapshot();
                log::info!(
                    "👤 [APP] Sesión: autenticado={} rol='{}' ({})",
                    snapshot.is_authenticated,
                    snapshot.user_type,
                    snapshot.user_email
                );
            });
        }
        {
            let listing = self.state.listing.clone();
            self.state.listing.subscribe(move || {
                if let Some(error) = listing.error() {
                    log::warn!("⚠️ [APP] Listado con error: {}", error);
                }
            });
        }

        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("🔄 [APP] Bootstrap: sesión + listado");
            state.bootstrap().await;
            apply_route_guard(&state);
        });

        // "focus" = vuelve a esta pestaña, "storage" = otra pestaña escribió.
        // Se registran una sola vez al arrancar.
        for event_name in ["focus", "storage"] {
            let session = self.state.session.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                if session.check_auth() {
                    log::info!("🔄 [APP] Sesión reconciliada tras '{}'", event_name);
                }
            }) as Box<dyn FnMut(Event)>);

            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        log::info!("✅ [APP] Listeners registrados");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Aplica el guard a la ruta actual del navegador
fn apply_route_guard(state: &AppState) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return;
    };
    let Ok(path) = location.pathname() else {
        return;
    };
    let Some(route) = Route::from_path(&path) else {
        log::debug!("🧭 [APP] Ruta sin guard: {}", path);
        return;
    };

    if let RouteDecision::Redirect(target) = guard(&route, &state.session.snapshot()) {
        log::info!("🧭 [APP] {} -> {}", path, target.path());
        if let Err(e) = location.replace(&target.path()) {
            log::error!("❌ [APP] Error redirigiendo: {:?}", e);
        }
    }
}

// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
///
/// Los clones comparten valor y subscribers: cualquier handle del estado
/// notifica a todos los que se suscribieron desde cualquier otro handle.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
    notifications: Rc<Cell<u64>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            notifications: Rc::new(Cell::new(0)),
        }
    }

    /// Lee el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Cantidad de notificaciones emitidas desde la creación
    pub fn notification_count(&self) -> u64 {
        self.notifications.get()
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        self.notifications.set(self.notifications.get() + 1);
        // Copia de la lista: un callback puede suscribir o leer el estado
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: PartialEq> ReactiveState<T> {
    /// Reemplaza el valor solo si difiere; sin cambio no hay notificación
    pub fn set_if_changed(&self, new_value: T) -> bool {
        if *self.value.borrow() == new_value {
            return false;
        }
        self.set(new_value);
        true
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_if_changed_skips_equal_values() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        state.subscribe(move || counter.set(counter.get() + 1));

        assert!(!state.set_if_changed(1));
        assert!(state.set_if_changed(2));
        assert_eq!(hits.get(), 1);
        assert_eq!(state.get(), 2);
    }

    #[test]
    fn clones_share_subscribers() {
        let state = ReactiveState::new(String::new());
        let other = state.clone();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        state.subscribe(move || counter.set(counter.get() + 1));

        other.update(|s| s.push('x'));
        assert_eq!(hits.get(), 1);
        assert_eq!(state.with(|s| s.len()), 1);
    }

    #[test]
    fn subscriber_can_read_state_during_notify() {
        let state = ReactiveState::new(0);
        let seen = Rc::new(Cell::new(0));
        let (reader, sink) = (state.clone(), seen.clone());
        state.subscribe(move || sink.set(reader.get()));

        state.set(7);
        assert_eq!(seen.get(), 7);
    }
}

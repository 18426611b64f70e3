//! Headless theme state, decoupled from the UI shell and the filesystem.

use crate::theme::Theme;

/// Persisted theme preference slot.
pub trait PreferenceStore {
    /// The saved preference, if any.
    fn get(&self) -> Option<Theme>;

    /// Overwrite the saved preference. Implementations absorb write
    /// failures; the in-memory theme must keep working without the store.
    fn set(&mut self, theme: Theme);
}

/// The host's current color-scheme preference.
pub trait AmbientSignal {
    fn is_dark(&self) -> bool;
}

/// Keeps the active theme, the persisted preference, and the toggle
/// control's label and description mutually consistent.
pub struct ThemeController<S, A> {
    store: S,
    signal: A,
    active: Option<Theme>,
}

impl<S: PreferenceStore, A: AmbientSignal> ThemeController<S, A> {
    /// Build the controller and resolve the startup theme: a saved
    /// preference wins, otherwise the ambient signal decides.
    pub fn new(store: S, signal: A) -> Self {
        let mut controller = Self {
            store,
            signal,
            active: None,
        };
        let startup = controller
            .store
            .get()
            .unwrap_or_else(|| controller.active_theme());
        controller.apply(startup);
        controller
    }

    /// The theme currently applied, falling back to the ambient signal
    /// while none has been applied yet.
    pub fn active_theme(&self) -> Theme {
        self.active.unwrap_or_else(|| {
            if self.signal.is_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
    }

    /// Activate `theme` and persist it.
    pub fn apply(&mut self, theme: Theme) {
        self.active = Some(theme);
        self.store.set(theme);
    }

    /// Click handler: flip relative to the displayed theme, not the
    /// stored one.
    pub fn toggle(&mut self) {
        self.apply(self.active_theme().opposite());
    }

    /// System color-scheme change handler. Always follows the new signal,
    /// overwriting any saved preference.
    pub fn system_changed(&mut self, dark: bool) {
        self.apply(if dark { Theme::Dark } else { Theme::Light });
    }

    /// Text shown on the toggle button: the theme a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        self.active_theme().opposite().label()
    }

    /// Accessibility description for the toggle button.
    pub fn toggle_description(&self) -> String {
        format!("Switch to {} mode", self.active_theme().opposite().name())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeStore(Rc<RefCell<Option<Theme>>>);

    impl PreferenceStore for FakeStore {
        fn get(&self) -> Option<Theme> {
            *self.0.borrow()
        }

        fn set(&mut self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme);
        }
    }

    #[derive(Clone, Default)]
    struct FakeSignal(Rc<Cell<bool>>);

    impl AmbientSignal for FakeSignal {
        fn is_dark(&self) -> bool {
            self.0.get()
        }
    }

    fn controller(
        stored: Option<Theme>,
        system_dark: bool,
    ) -> (ThemeController<FakeStore, FakeSignal>, FakeStore) {
        let store = FakeStore(Rc::new(RefCell::new(stored)));
        let signal = FakeSignal(Rc::new(Cell::new(system_dark)));
        (ThemeController::new(store.clone(), signal), store)
    }

    #[test]
    fn apply_updates_active_store_label_and_description() {
        let (mut c, store) = controller(None, false);
        c.apply(Theme::Dark);
        assert_eq!(c.active_theme(), Theme::Dark);
        assert_eq!(*store.0.borrow(), Some(Theme::Dark));
        assert_eq!(c.toggle_label(), "Light");
        assert_eq!(c.toggle_description(), "Switch to light mode");
    }

    #[test]
    fn apply_twice_is_idempotent() {
        let (mut c, store) = controller(None, false);
        c.apply(Theme::Light);
        c.apply(Theme::Light);
        assert_eq!(c.active_theme(), Theme::Light);
        assert_eq!(*store.0.borrow(), Some(Theme::Light));
        assert_eq!(c.toggle_label(), "Dark");
    }

    #[test]
    fn apply_then_active_theme_round_trips() {
        let (mut c, _) = controller(None, true);
        c.apply(Theme::Light);
        assert_eq!(c.active_theme(), Theme::Light);
    }

    #[test]
    fn two_clicks_return_to_the_starting_theme() {
        let (mut c, _) = controller(Some(Theme::Light), false);
        c.toggle();
        assert_eq!(c.active_theme(), Theme::Dark);
        c.toggle();
        assert_eq!(c.active_theme(), Theme::Light);
    }

    #[test]
    fn system_change_overwrites_the_saved_preference() {
        let (mut c, store) = controller(Some(Theme::Light), false);
        c.system_changed(true);
        assert_eq!(c.active_theme(), Theme::Dark);
        assert_eq!(*store.0.borrow(), Some(Theme::Dark));
    }

    #[test]
    fn init_without_preference_follows_a_dark_signal() {
        let (c, store) = controller(None, true);
        assert_eq!(c.active_theme(), Theme::Dark);
        assert_eq!(*store.0.borrow(), Some(Theme::Dark));
    }

    #[test]
    fn init_prefers_the_stored_theme_over_the_signal() {
        let (c, _) = controller(Some(Theme::Dark), false);
        assert_eq!(c.active_theme(), Theme::Dark);
    }

    #[test]
    fn toggle_follows_the_displayed_state_when_the_store_diverges() {
        let (mut c, store) = controller(Some(Theme::Light), false);
        *store.0.borrow_mut() = Some(Theme::Dark);
        c.toggle();
        assert_eq!(c.active_theme(), Theme::Dark);
        assert_eq!(*store.0.borrow(), Some(Theme::Dark));
    }

    #[test]
    fn label_always_names_the_opposite_theme() {
        let (mut c, _) = controller(Some(Theme::Dark), false);
        assert_eq!(c.toggle_label(), "Light");
        assert_eq!(c.toggle_description(), "Switch to light mode");
        c.toggle();
        assert_eq!(c.toggle_label(), "Dark");
        assert_eq!(c.toggle_description(), "Switch to dark mode");
    }
}

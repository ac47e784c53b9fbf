//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Route, Store, VoteSide, WizardField, WizardStep};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use super::InputEvent;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for terminal input before yielding.
    poll_timeout: Duration,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone)]
struct StoreSnapshot {
    input_mode: InputMode,
    route: Route,
    show_help: bool,
    profile_menu_open: bool,
    wizard_step: WizardStep,
    wizard_field: WizardField,
}

impl StoreSnapshot {
    fn of(store: &Store) -> Self {
        Self {
            input_mode: store.app.input_mode,
            route: store.app.route.clone(),
            show_help: store.app.show_help,
            profile_menu_open: store.profile_menu.open,
            wizard_step: store.wizard.step,
            wizard_field: store.wizard.focused_field(),
        }
    }
}

impl EventHandler {
    pub fn new(keybindings: KeyBindings, poll_timeout: Duration) -> Self {
        Self {
            keybindings,
            poll_timeout,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot::of(store));
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Mouse(mouse) => return Ok(self.handle_mouse(mouse)),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key, snapshot),
            InputMode::Insert => self.handle_insert_mode(key, snapshot),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = InputEvent::from(key);
        let kb = &self.keybindings;

        // Global shortcuts
        if input.matches(&kb.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&kb.help) {
            return Some(Action::ToggleHelp);
        }
        if snapshot.show_help {
            return (input.matches(&kb.back) || key.code == KeyCode::Backspace)
                .then_some(Action::ToggleHelp);
        }

        // The profile menu captures navigation while open
        if snapshot.profile_menu_open {
            return if input.matches(&kb.up) || key.code == KeyCode::Up {
                Some(Action::ScrollUp)
            } else if input.matches(&kb.down) || key.code == KeyCode::Down {
                Some(Action::ScrollDown)
            } else if input.matches(&kb.select) {
                Some(Action::ProfileMenuSelect)
            } else if input.matches(&kb.back) || input.matches(&kb.profile) {
                Some(Action::CloseProfileMenu)
            } else {
                None
            };
        }

        // Route-specific bindings win over the generic ones below
        let specific = match snapshot.route {
            Route::MarketDetail(_) => self.handle_detail_view(&input),
            Route::Create => self.handle_create_view(&input, snapshot),
            _ => None,
        };
        if specific.is_some() {
            return specific;
        }

        // Route switching
        let routes = [
            (&kb.markets, Route::Markets),
            (&kb.create, Route::Create),
            (&kb.learn, Route::Learn),
            (&kb.settings, Route::Settings),
            (&kb.transactions, Route::Transactions),
        ];
        for (binding, route) in routes {
            if input.matches(binding) {
                return Some(Action::Navigate(route));
            }
        }

        // Session
        if input.matches(&kb.wallet) {
            return Some(Action::ToggleWallet);
        }
        if input.matches(&kb.profile) {
            return Some(Action::ToggleProfileMenu);
        }

        // Navigation
        if input.matches(&kb.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&kb.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        match key.code {
            KeyCode::Home => return Some(Action::GoToTop),
            KeyCode::End => return Some(Action::GoToBottom),
            KeyCode::Backspace => return Some(Action::Back),
            _ => {}
        }
        if input.matches(&kb.back) {
            return Some(Action::Back);
        }
        if input.matches(&kb.select) {
            return Some(Action::OpenSelected);
        }

        None
    }

    fn handle_detail_view(&self, input: &InputEvent) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.vote_yes) {
            Some(Action::Vote(VoteSide::Yes))
        } else if input.matches(&kb.vote_no) {
            Some(Action::Vote(VoteSide::No))
        } else if input.matches(&kb.edit) {
            Some(Action::SetInputMode(InputMode::Insert))
        } else {
            None
        }
    }

    fn handle_create_view(&self, input: &InputEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let kb = &self.keybindings;
        if input.matches(&kb.next_step) {
            return Some(Action::WizardNext);
        }
        if input.matches(&kb.prev_step) {
            return Some(Action::WizardBack);
        }
        if input.matches(&kb.submit) {
            return Some(Action::SubmitMarket);
        }
        if input.matches(&kb.edit) {
            return Some(Action::SetInputMode(InputMode::Insert));
        }
        if input.matches("Tab") {
            return Some(Action::WizardFocusNext);
        }
        if input.matches("Shift+BackTab") || input.matches("BackTab") {
            return Some(Action::WizardFocusPrev);
        }
        if snapshot.wizard_field == WizardField::Asset {
            if input.matches("Left") {
                return Some(Action::WizardCycleAsset(false));
            }
            if input.matches("Right") {
                return Some(Action::WizardCycleAsset(true));
            }
        }
        if input.matches(&kb.select) {
            return Some(match snapshot.wizard_step {
                WizardStep::Schedule => Action::SubmitMarket,
                _ => Action::WizardNext,
            });
        }
        None
    }

    fn handle_insert_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = InputEvent::from(key);
        let kb = &self.keybindings;

        if snapshot.route == Route::Create {
            if input.matches(&kb.submit) {
                return Some(Action::SubmitMarket);
            }
            if input.matches(&kb.next_step) {
                return Some(Action::WizardNext);
            }
            if input.matches(&kb.prev_step) {
                return Some(Action::WizardBack);
            }
        }

        match key.code {
            KeyCode::Esc => Some(Action::SetInputMode(InputMode::Normal)),
            KeyCode::Enter => Some(match snapshot.route {
                Route::MarketDetail(_) => Action::SubmitComment,
                _ => Action::SetInputMode(InputMode::Normal),
            }),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Tab if snapshot.route == Route::Create => Some(Action::WizardFocusNext),
            KeyCode::BackTab if snapshot.route == Route::Create => Some(Action::WizardFocusPrev),
            _ => input.typed_char().map(Action::InputChar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn handler_with(route: Route, input_mode: InputMode) -> EventHandler {
        let mut handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(10));
        handler.store_snapshot = Some(StoreSnapshot {
            input_mode,
            route,
            show_help: false,
            profile_menu_open: false,
            wizard_step: WizardStep::Basics,
            wizard_field: WizardField::Question,
        });
        handler
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_switch_routes() {
        let handler = handler_with(Route::Markets, InputMode::Normal);
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('2'))),
            Some(Action::Navigate(Route::Create))
        ));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('5'))),
            Some(Action::Navigate(Route::Transactions))
        ));
    }

    #[test]
    fn test_vote_keys_only_on_detail() {
        let handler = handler_with(Route::MarketDetail("1".to_string()), InputMode::Normal);
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('y'))),
            Some(Action::Vote(VoteSide::Yes))
        ));

        let handler = handler_with(Route::Markets, InputMode::Normal);
        assert!(handler.handle_key(key(KeyCode::Char('y'))).is_none());
    }

    #[test]
    fn test_insert_mode_types_and_submits() {
        let handler = handler_with(Route::MarketDetail("1".to_string()), InputMode::Insert);
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        ));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Enter)),
            Some(Action::SubmitComment)
        ));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Esc)),
            Some(Action::SetInputMode(InputMode::Normal))
        ));
    }

    #[test]
    fn test_wizard_shortcuts() {
        let handler = handler_with(Route::Create, InputMode::Normal);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(matches!(handler.handle_key(ctrl_n), Some(Action::WizardNext)));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Enter)),
            Some(Action::WizardNext)
        ));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Tab)),
            Some(Action::WizardFocusNext)
        ));
    }

    #[test]
    fn test_open_menu_captures_keys() {
        let mut handler = handler_with(Route::Markets, InputMode::Normal);
        if let Some(snapshot) = handler.store_snapshot.as_mut() {
            snapshot.profile_menu_open = true;
        }
        assert!(matches!(
            handler.handle_key(key(KeyCode::Enter)),
            Some(Action::ProfileMenuSelect)
        ));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Esc)),
            Some(Action::CloseProfileMenu)
        ));
        assert!(handler.handle_key(key(KeyCode::Char('2'))).is_none());
    }

    #[test]
    fn test_help_overlay_closes_on_back() {
        let mut handler = handler_with(Route::Learn, InputMode::Normal);
        if let Some(snapshot) = handler.store_snapshot.as_mut() {
            snapshot.show_help = true;
        }
        assert!(matches!(
            handler.handle_key(key(KeyCode::Esc)),
            Some(Action::ToggleHelp)
        ));
        assert!(handler.handle_key(key(KeyCode::Char('j'))).is_none());
    }
}

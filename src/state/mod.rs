//! State management for PlayZone.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Every view's state
//! lives in the [`Store`], which is owned by the event loop task.

mod app_state;
mod detail_state;
mod market_state;
mod pages_state;
mod session_state;
mod wizard_state;

pub use app_state::{AppState, InputMode, Route};
pub use detail_state::{Comment, DetailState, DetailView, VoteRequest, VoteSide};
pub use market_state::{Market, MarketCard, MarketState, MarketStatus, Trade};
pub use pages_state::{
    FAQ_ITEMS, FaqItem, FaqState, Preference, ProfileMenu, ProfileMenuItem, SettingsState,
};
pub use session_state::{Balance, ChainInfo, SessionState, short_address};
pub use wizard_state::{
    Asset, DraftErrors, DraftViolation, MarketProposal, WizardDraft, WizardField, WizardState,
    WizardStep,
};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::catalog::SharedCatalog;
use crate::error::{Error, Result};
use crate::time::SharedClock;

/// Which kind of view a countdown timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerScope {
    Card,
    Detail,
}

/// Identity of one countdown subscription.
///
/// The end timestamp is part of the identity, so a market whose end changes
/// gets a fresh timer and the old one is released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub scope: TimerScope,
    pub market_id: String,
    pub end: DateTime<Utc>,
}

impl TimerKey {
    pub fn card(market: &Market) -> Self {
        Self {
            scope: TimerScope::Card,
            market_id: market.id.clone(),
            end: market.end,
        }
    }

    pub fn detail(market: &Market) -> Self {
        Self {
            scope: TimerScope::Detail,
            market_id: market.id.clone(),
            end: market.end,
        }
    }
}

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    Back,
    SetInputMode(InputMode),

    // List navigation
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    OpenSelected,

    // Countdown
    Tick(TimerKey),

    // Text input
    InputChar(char),
    InputBackspace,

    // Detail view
    SubmitComment,
    Vote(VoteSide),

    // Creation wizard
    WizardNext,
    WizardBack,
    WizardFocusNext,
    WizardFocusPrev,
    WizardCycleAsset(bool),
    SubmitMarket,
    WizardReset,

    // Static pages
    ToggleFaq,
    TogglePreference,

    // Profile menu
    ToggleProfileMenu,
    CloseProfileMenu,
    ProfileMenuSelect,

    // Wallet
    ToggleWallet,
    ConnectWallet,
    DisconnectWallet,
    SessionChanged(SessionState),

    // UI actions
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration_secs: 10,
        }
    }

    /// The notification an error should surface as.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Unauthenticated(_) | Error::InvalidInput(_) => Self::warning(err.to_string()),
            Error::NotYetSupported(_) => Self::info(err.to_string()),
            _ => Self::error(err.to_string()),
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Market list. Only populated while the list route is mounted.
    pub markets: MarketState,
    /// Detail view. Only present while a detail route is mounted.
    pub detail: Option<DetailView>,
    /// Creation wizard draft.
    pub wizard: WizardState,
    /// FAQ accordion on the learn page.
    pub faq: FaqState,
    /// Settings page toggles.
    pub settings: SettingsState,
    /// Profile dropdown.
    pub profile_menu: ProfileMenu,
    /// Wallet session snapshot.
    pub session: SessionState,
    catalog: SharedCatalog,
    clock: SharedClock,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store. Nothing is mounted until the first `Navigate`.
    pub fn new(
        catalog: SharedCatalog,
        clock: SharedClock,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            app: AppState::default(),
            markets: MarketState::default(),
            detail: None,
            wizard: WizardState::default(),
            faq: FaqState::default(),
            settings: SettingsState::default(),
            profile_menu: ProfileMenu::default(),
            session: SessionState::default(),
            catalog,
            clock,
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| Error::channel(e.to_string()))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::Navigate(route) => self.navigate(route),
            Action::Back => self.back(),
            Action::SetInputMode(mode) => self.set_input_mode(mode),

            // List navigation
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.scroll(i32::MIN / 2),
            Action::GoToBottom => self.scroll(i32::MAX / 2),
            Action::OpenSelected => self.open_selected(),

            // Countdown
            Action::Tick(key) => self.tick(&key),

            // Text input
            Action::InputChar(c) => self.input_char(c),
            Action::InputBackspace => self.input_backspace(),

            // Detail view
            Action::SubmitComment => self.submit_comment(),
            Action::Vote(side) => {
                // Settlement is async; the app resolves it and reports back.
                debug!(side = %side, "Vote reached the store unsettled");
            }

            // Creation wizard
            Action::WizardNext => self.wizard_next(),
            Action::WizardBack => {
                if self.wizard.back() {
                    self.app.input_mode = InputMode::Normal;
                }
            }
            Action::WizardFocusNext => {
                self.wizard.focus_next();
                self.leave_insert_on_picker();
            }
            Action::WizardFocusPrev => {
                self.wizard.focus_prev();
                self.leave_insert_on_picker();
            }
            Action::WizardCycleAsset(forward) => {
                if self.wizard.focused_field() == WizardField::Asset {
                    self.wizard.cycle_asset(forward);
                }
            }
            Action::SubmitMarket => debug!("Market submission reached the store unsettled"),
            Action::WizardReset => {
                self.wizard = WizardState::default();
                self.app.input_mode = InputMode::Normal;
            }

            // Static pages
            Action::ToggleFaq => self.faq.toggle_selected(),
            Action::TogglePreference => self.settings.toggle_selected(),

            // Profile menu
            Action::ToggleProfileMenu => {
                if self.session.is_connected() {
                    self.profile_menu.toggle();
                } else {
                    self.send(Action::ConnectWallet);
                }
            }
            Action::CloseProfileMenu => self.profile_menu.close(),
            Action::ProfileMenuSelect => self.profile_menu_select(),

            // Wallet
            wallet @ (Action::ToggleWallet | Action::ConnectWallet | Action::DisconnectWallet) => {
                debug!(action = ?wallet, "Wallet action reached the store unhandled");
            }
            Action::SessionChanged(session) => {
                self.session = session;
                if !self.session.is_connected() {
                    self.profile_menu.close();
                }
            }

            // UI actions
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some((notification, self.clock.now()));
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    /// Countdown timers the mounted views need right now.
    pub fn required_timers(&self) -> HashSet<TimerKey> {
        match &self.app.route {
            Route::Markets => self
                .markets
                .cards
                .iter()
                .map(|c| TimerKey::card(&c.market))
                .collect(),
            Route::MarketDetail(_) => self
                .detail
                .as_ref()
                .and_then(DetailView::found)
                .map(|d| TimerKey::detail(&d.market))
                .into_iter()
                .collect(),
            _ => HashSet::new(),
        }
    }

    /// Build a vote for the mounted detail view.
    pub fn vote_request(&self, side: VoteSide) -> Result<VoteRequest> {
        let detail = self
            .detail
            .as_ref()
            .and_then(DetailView::found)
            .ok_or_else(|| Error::invalid_input("No market is open"))?;
        detail.vote_request(side, &self.session)
    }

    /// The mounted detail view, if its market was found.
    pub fn found_detail(&self) -> Option<&DetailState> {
        self.detail.as_ref().and_then(DetailView::found)
    }

    fn send(&self, action: Action) {
        if let Err(e) = self.dispatch(action) {
            warn!("Failed to dispatch action: {}", e);
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.app.notification = Some((notification, self.clock.now()));
    }

    fn navigate(&mut self, route: Route) {
        if route == self.app.route && self.is_mounted() {
            return;
        }
        self.unmount();
        let now = self.clock.now();

        match &route {
            Route::Markets => {
                self.markets = MarketState::mount(self.catalog.list(), now);
            }
            Route::MarketDetail(id) => {
                let view = match self.catalog.get(id) {
                    Some(market) => DetailView::Found(Box::new(DetailState::mount(
                        market.clone(),
                        now,
                    ))),
                    None => {
                        warn!("{}", Error::not_found(format!("market {id}")));
                        DetailView::NotFound { id: id.clone() }
                    }
                };
                self.detail = Some(view);
            }
            Route::Create => self.wizard = WizardState::default(),
            Route::Learn => self.faq = FaqState::default(),
            Route::Settings => self.settings = SettingsState::default(),
            Route::Transactions => {}
        }

        debug!(route = %route.path(), "Mounted route");
        self.app.route = route;
    }

    fn is_mounted(&self) -> bool {
        match self.app.route {
            Route::Markets => !self.markets.cards.is_empty() || self.catalog.list().is_empty(),
            Route::MarketDetail(_) => self.detail.is_some(),
            _ => true,
        }
    }

    fn unmount(&mut self) {
        match self.app.route {
            Route::Markets => self.markets = MarketState::default(),
            Route::MarketDetail(_) => self.detail = None,
            Route::Create => self.wizard = WizardState::default(),
            _ => {}
        }
        self.app.input_mode = InputMode::Normal;
        self.profile_menu.close();
    }

    fn back(&mut self) {
        if self.app.show_help {
            self.app.show_help = false;
        } else if self.profile_menu.open {
            self.profile_menu.close();
        } else if self.app.is_editing() {
            self.app.input_mode = InputMode::Normal;
        } else if self.app.route != Route::Markets {
            self.navigate(self.app.route.parent());
        }
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        let editable = match self.app.route {
            Route::MarketDetail(_) => self.found_detail().is_some(),
            Route::Create => self.wizard.focused_field().is_text(),
            _ => false,
        };
        if mode == InputMode::Insert && !editable {
            return;
        }
        self.app.input_mode = mode;
    }

    fn scroll(&mut self, delta: i32) {
        if self.profile_menu.open {
            self.profile_menu.scroll(delta);
            return;
        }
        match self.app.route {
            Route::Markets => self.markets.scroll(delta),
            Route::Learn => self.faq.scroll(delta),
            Route::Settings => self.settings.scroll(delta),
            Route::Create if delta < 0 => self.reduce(Action::WizardFocusPrev),
            Route::Create => self.reduce(Action::WizardFocusNext),
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        if self.profile_menu.open {
            self.profile_menu_select();
            return;
        }
        match self.app.route {
            Route::Markets => {
                if let Some(card) = self.markets.selected_card() {
                    let id = card.market.id.clone();
                    self.navigate(Route::MarketDetail(id));
                }
            }
            Route::MarketDetail(_) => {
                if self.detail.as_ref().and_then(DetailView::found).is_none() {
                    self.navigate(Route::Markets);
                }
            }
            Route::Learn => self.faq.toggle_selected(),
            Route::Settings => self.settings.toggle_selected(),
            Route::Create => self.wizard_next(),
            Route::Transactions => {}
        }
    }

    fn tick(&mut self, key: &TimerKey) {
        let now = self.clock.now();
        match key.scope {
            TimerScope::Card => {
                if self.app.route != Route::Markets {
                    return;
                }
                if let Some(card) = self.markets.card_mut(&key.market_id)
                    && card.market.end == key.end
                {
                    card.tick(now);
                }
            }
            TimerScope::Detail => {
                if let Some(detail) = self.detail.as_mut().and_then(DetailView::found_mut)
                    && detail.market.id == key.market_id
                    && detail.market.end == key.end
                {
                    detail.tick(now);
                }
            }
        }
    }

    fn input_char(&mut self, c: char) {
        if !self.app.is_editing() {
            return;
        }
        match self.app.route {
            Route::MarketDetail(_) => {
                if let Some(detail) = self.detail.as_mut().and_then(DetailView::found_mut) {
                    detail.comment_input.push(c);
                }
            }
            Route::Create => self.wizard.push_char(c),
            _ => {}
        }
    }

    fn input_backspace(&mut self) {
        if !self.app.is_editing() {
            return;
        }
        match self.app.route {
            Route::MarketDetail(_) => {
                if let Some(detail) = self.detail.as_mut().and_then(DetailView::found_mut) {
                    detail.comment_input.pop();
                }
            }
            Route::Create => self.wizard.pop_char(),
            _ => {}
        }
    }

    fn submit_comment(&mut self) {
        let now = self.clock.now();
        let Some(detail) = self.detail.as_mut().and_then(DetailView::found_mut) else {
            return;
        };
        match detail.submit_comment(&self.session, now) {
            Ok(()) => {
                debug!(market_id = %detail.market.id, "Comment posted");
                self.app.input_mode = InputMode::Normal;
            }
            Err(e @ Error::Unauthenticated(_)) => self.notify(Notification::from_error(&e)),
            Err(e) => debug!("Comment not posted: {}", e),
        }
    }

    fn wizard_next(&mut self) {
        if self.wizard.next() {
            self.app.input_mode = InputMode::Normal;
        } else {
            debug!(step = self.wizard.step.number(), "Wizard step incomplete");
        }
    }

    fn leave_insert_on_picker(&mut self) {
        if !self.wizard.focused_field().is_text() {
            self.app.input_mode = InputMode::Normal;
        }
    }

    fn profile_menu_select(&mut self) {
        if !self.profile_menu.open {
            return;
        }
        let item = self.profile_menu.selected_item();
        self.profile_menu.close();
        match item {
            ProfileMenuItem::TransactionHistory => self.navigate(Route::Transactions),
            ProfileMenuItem::Settings => self.navigate(Route::Settings),
            ProfileMenuItem::LogOut => self.send(Action::DisconnectWallet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::time::{Countdown, FixedClock};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 31, 23, 58, 0).unwrap()
    }

    fn store_at(
        at: DateTime<Utc>,
    ) -> (Store, Arc<FixedClock>, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let clock = Arc::new(FixedClock::new(at));
        let catalog: SharedCatalog = Arc::new(InMemoryCatalog::builtin().unwrap());
        let mut store = Store::new(catalog, clock.clone(), tx);
        store.reduce(Action::Navigate(Route::Markets));
        (store, clock, rx)
    }

    fn connected() -> SessionState {
        SessionState {
            address: Some("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string()),
            chain: Some(ChainInfo {
                id: 11155111,
                name: "Sepolia".to_string(),
            }),
            balance: None,
        }
    }

    #[test]
    fn test_list_mounts_all_cards_with_timers() {
        let (store, _, _) = store_at(now());
        assert_eq!(store.markets.cards.len(), 5);
        assert_eq!(store.required_timers().len(), 5);
        assert!(
            store
                .required_timers()
                .iter()
                .all(|k| k.scope == TimerScope::Card)
        );
    }

    #[test]
    fn test_unknown_market_renders_not_found() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::Navigate(Route::MarketDetail("404".to_string())));

        assert!(matches!(
            store.detail,
            Some(DetailView::NotFound { ref id }) if id == "404"
        ));
        assert!(store.required_timers().is_empty());

        store.reduce(Action::OpenSelected);
        assert_eq!(store.app.route, Route::Markets);
    }

    #[test]
    fn test_side_effect_actions_leave_store_untouched() {
        let (mut store, _, mut rx) = store_at(now());
        store.reduce(Action::Navigate(Route::MarketDetail("1".to_string())));
        store.reduce(Action::SessionChanged(connected()));

        store.reduce(Action::Vote(VoteSide::Yes));
        store.reduce(Action::SubmitMarket);
        store.reduce(Action::ToggleWallet);
        store.reduce(Action::ConnectWallet);
        store.reduce(Action::DisconnectWallet);

        assert_eq!(store.app.route, Route::MarketDetail("1".to_string()));
        assert!(store.session.is_connected());
        assert!(store.found_detail().unwrap().comments.is_empty());
        assert!(store.app.notification.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_leaving_list_releases_card_timers() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::Navigate(Route::MarketDetail("3".to_string())));

        let timers = store.required_timers();
        assert_eq!(timers.len(), 1);
        assert!(store.markets.cards.is_empty());

        store.reduce(Action::Navigate(Route::Learn));
        assert!(store.required_timers().is_empty());
        assert!(store.detail.is_none());
    }

    #[test]
    fn test_tick_reaches_expiry() {
        let (mut store, clock, _) = store_at(now());
        store.reduce(Action::Navigate(Route::MarketDetail("3".to_string())));
        let key = store.required_timers().into_iter().next().unwrap();

        let detail = store.found_detail().unwrap();
        assert!(!detail.countdown.is_expired());
        assert_eq!(detail.countdown.label(crate::time::CountdownStyle::Compact), "1m 59s");

        clock.advance(Duration::seconds(120));
        store.reduce(Action::Tick(key));
        assert_eq!(store.found_detail().unwrap().countdown, Countdown::Expired);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let (mut store, clock, _) = store_at(now());
        let stale = TimerKey {
            scope: TimerScope::Card,
            market_id: "3".to_string(),
            end: now(),
        };
        clock.advance(Duration::seconds(500));
        store.reduce(Action::Tick(stale));

        let card = store.markets.card_mut("3").unwrap();
        assert!(!card.countdown.is_expired());
    }

    #[test]
    fn test_comment_requires_session() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::Navigate(Route::MarketDetail("1".to_string())));
        store.reduce(Action::SetInputMode(InputMode::Insert));
        for c in "gm".chars() {
            store.reduce(Action::InputChar(c));
        }
        store.reduce(Action::SubmitComment);

        let detail = store.found_detail().unwrap();
        assert!(detail.comments.is_empty());
        assert_eq!(detail.comment_input, "gm");
        let (notification, _) = store.app.notification.clone().unwrap();
        assert_eq!(notification.message, "Please connect your wallet to comment");
        assert_eq!(notification.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_comment_with_session_prepends() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::SessionChanged(connected()));
        store.reduce(Action::Navigate(Route::MarketDetail("1".to_string())));
        assert_eq!(store.found_detail().unwrap().comment_count_label(), "(0)");

        store.reduce(Action::SetInputMode(InputMode::Insert));
        store.reduce(Action::InputChar('g'));
        store.reduce(Action::InputChar('m'));
        store.reduce(Action::SubmitComment);

        let detail = store.found_detail().unwrap();
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].content, "gm");
        assert_eq!(detail.comment_input, "");
        assert_eq!(detail.comment_count_label(), "(1)");
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_vote_request_requires_session() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::Navigate(Route::MarketDetail("1".to_string())));
        let err = store.vote_request(VoteSide::Yes).unwrap_err();
        assert_eq!(err.to_string(), "Please connect your wallet to vote");
    }

    #[test]
    fn test_wizard_discarded_on_leave() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::Navigate(Route::Create));
        store.reduce(Action::SetInputMode(InputMode::Insert));
        store.reduce(Action::InputChar('Q'));
        assert_eq!(store.wizard.draft.question, "Q");

        store.reduce(Action::Navigate(Route::Learn));
        store.reduce(Action::Navigate(Route::Create));
        assert_eq!(store.wizard.draft, WizardDraft::default());
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_insert_mode_needs_text_target() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::SetInputMode(InputMode::Insert));
        assert_eq!(store.app.input_mode, InputMode::Normal);

        store.reduce(Action::Navigate(Route::MarketDetail("404".to_string())));
        store.reduce(Action::SetInputMode(InputMode::Insert));
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_profile_menu_requires_session() {
        let (mut store, _, mut rx) = store_at(now());
        store.reduce(Action::ToggleProfileMenu);
        assert!(!store.profile_menu.open);
        assert!(matches!(rx.try_recv(), Ok(Action::ConnectWallet)));

        store.reduce(Action::SessionChanged(connected()));
        store.reduce(Action::ToggleProfileMenu);
        assert!(store.profile_menu.open);

        store.reduce(Action::ScrollDown);
        store.reduce(Action::OpenSelected);
        assert!(!store.profile_menu.open);
        assert_eq!(store.app.route, Route::Settings);
    }

    #[test]
    fn test_log_out_dispatches_disconnect() {
        let (mut store, _, mut rx) = store_at(now());
        store.reduce(Action::SessionChanged(connected()));
        store.reduce(Action::ToggleProfileMenu);
        store.reduce(Action::GoToBottom);
        store.reduce(Action::ProfileMenuSelect);
        assert!(matches!(rx.try_recv(), Ok(Action::DisconnectWallet)));

        store.reduce(Action::SessionChanged(SessionState::default()));
        assert!(!store.session.is_connected());
    }

    #[test]
    fn test_back_walks_up_routes() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::Navigate(Route::Transactions));
        store.reduce(Action::Back);
        assert_eq!(store.app.route, Route::Settings);
        store.reduce(Action::Back);
        assert_eq!(store.app.route, Route::Markets);
        store.reduce(Action::Back);
        assert_eq!(store.app.route, Route::Markets);
        assert_eq!(store.markets.cards.len(), 5);
    }

    #[test]
    fn test_open_selected_follows_list_cursor() {
        let (mut store, _, _) = store_at(now());
        store.reduce(Action::ScrollDown);
        store.reduce(Action::ScrollDown);
        store.reduce(Action::OpenSelected);
        assert_eq!(store.app.route, Route::MarketDetail("3".to_string()));
        assert_eq!(
            store.found_detail().unwrap().market.title,
            "Will Bitcoin reach $100,000 by end of 2025?"
        );
    }
}

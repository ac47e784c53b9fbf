//! Main application module.
//!
//! This module contains the main `App` struct that coordinates the event
//! loop, state management, the wallet and settlement collaborators, and
//! rendering.

use crate::catalog::{InMemoryCatalog, SharedCatalog};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::{EventHandler, TimerSet};
use crate::settlement::{PendingSettlement, Settlement};
use crate::state::{Action, Notification, Route, SessionState, Store, VoteSide, short_address};
use crate::time::SystemClock;
use crate::ui::{Palette, Ui};
use crate::wallet::{self, LocalWallet, WalletSession};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Renderer.
    ui: Ui,
    /// Countdown tick tasks for the mounted views.
    timers: TimerSet,
    /// Wallet session collaborator.
    wallet: Box<dyn WalletSession>,
    /// Settlement collaborator.
    settlement: Arc<dyn Settlement>,
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    pub async fn new(config: Config) -> Result<Self> {
        let catalog: SharedCatalog =
            Arc::new(InMemoryCatalog::load(config.catalog.seed_path.as_deref())?);
        info!(markets = catalog.list().len(), "Catalog ready");

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut store = Store::new(catalog, Arc::new(SystemClock), action_tx.clone());
        store.reduce(Action::Navigate(start_route(&config.ui.start_route)));

        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );
        let timers = TimerSet::new(
            Duration::from_millis(config.ui.countdown_period_ms),
            action_tx,
        );
        let ui = Ui::new(
            Palette::from_config(&config.theme),
            config.keybindings.clone(),
            &config.ui,
        );

        let mut wallet: Box<dyn WalletSession> = Box::new(LocalWallet::new(config.wallet.clone()));
        if config.wallet.auto_connect {
            let (session, notification) = connect_wallet(wallet.as_mut());
            store.reduce(Action::SessionChanged(session));
            store.reduce(Action::ShowNotification(notification));
        }

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            ui,
            timers,
            wallet,
            settlement: Arc::new(PendingSettlement),
            mouse_capture: config.ui.mouse_support,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Keep one tick task per mounted countdown
            self.timers.sync(&self.store.required_timers());

            if self.store.app.notification_expired(self.store.now()) {
                self.store.reduce(Action::DismissNotification);
            }

            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            let ui = &self.ui;
            let store = &self.store;
            self.terminal.draw(|frame| ui.render(frame, store))?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.process(action).await?;
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.process(action).await?;
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        self.timers.clear();
        info!("Shutting down");
        Ok(())
    }

    /// Handle an action, surfacing recoverable failures as notifications.
    async fn process(&mut self, action: Action) -> Result<()> {
        match self.handle_action(action).await {
            Err(e) if e.is_recoverable() => {
                warn!("Action failed: {}", e);
                self.store.reduce(Action::ShowNotification(Notification::from_error(&e)));
                Ok(())
            }
            other => other,
        }
    }

    async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Vote(side) => {
                let notification = settle_vote(self.settlement.as_ref(), &self.store, side).await;
                self.store.reduce(Action::ShowNotification(notification));
            }
            Action::SubmitMarket => {
                if let Some((notification, reset)) =
                    submit_market(self.settlement.as_ref(), &self.store).await
                {
                    if reset {
                        self.store.reduce(Action::WizardReset);
                    }
                    self.store.reduce(Action::ShowNotification(notification));
                }
            }
            Action::ToggleWallet => {
                let next = if self.store.session.is_connected() {
                    Action::DisconnectWallet
                } else {
                    Action::ConnectWallet
                };
                self.store.dispatch(next)?;
            }
            Action::ConnectWallet => {
                let (session, notification) = connect_wallet(self.wallet.as_mut());
                self.store.reduce(Action::SessionChanged(session));
                self.store.reduce(Action::ShowNotification(notification));
            }
            Action::DisconnectWallet => {
                let (session, notification) = disconnect_wallet(self.wallet.as_mut());
                self.store.reduce(Action::SessionChanged(session));
                self.store.reduce(Action::ShowNotification(notification));
            }
            other => {
                // Let the store handle the action
                self.store.reduce(other);
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.timers.clear();
        // Restore terminal state
        let _ = disable_raw_mode();
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Resolve the configured start route. Unknown paths fall back to the list.
pub fn start_route(path: &str) -> Route {
    Route::parse(path).unwrap_or_else(|| {
        warn!(path, "Unknown start route, falling back to /");
        Route::Markets
    })
}

/// Send a vote to settlement and describe the outcome.
pub async fn settle_vote(settlement: &dyn Settlement, store: &Store, side: VoteSide) -> Notification {
    let request = match store.vote_request(side) {
        Ok(request) => request,
        Err(e) => return Notification::from_error(&e),
    };

    match settlement.submit_vote(&request).await {
        Ok(receipt) => {
            info!(market_id = %receipt.market_id, side = %side, "Vote settled");
            Notification::success(format!("Voted {side}"))
        }
        Err(e) => {
            debug!(market_id = %request.market_id, "Vote not settled: {}", e);
            Notification::from_error(&e)
        }
    }
}

/// Validate the wizard draft and hand it to settlement.
///
/// Returns `None` while the Create control is disabled. Otherwise returns the
/// notification to show and whether the draft should be discarded.
pub async fn submit_market(
    settlement: &dyn Settlement,
    store: &Store,
) -> Option<(Notification, bool)> {
    if !store.wizard.can_submit() {
        return None;
    }

    let proposal = match store.wizard.validate(store.now()) {
        Ok(proposal) => proposal,
        Err(errors) => {
            debug!(violations = errors.0.len(), "Draft rejected");
            return Some((
                Notification::warning(format!("Cannot create market: {errors}")),
                false,
            ));
        }
    };

    Some(match settlement.create_market(&proposal).await {
        Ok(receipt) => (
            Notification::success(format!("Market created: {}", receipt.market_id)),
            true,
        ),
        Err(e @ Error::NotYetSupported(_)) => {
            let mut notification = Notification::from_error(&e);
            notification.message = format!("Create market: {} ({e})", proposal.question);
            (notification, true)
        }
        Err(e) => {
            warn!("Market creation failed: {}", e);
            (Notification::from_error(&e), false)
        }
    })
}

/// Connect the wallet and snapshot the resulting session.
pub fn connect_wallet(wallet: &mut dyn WalletSession) -> (SessionState, Notification) {
    let notification = match wallet.connect() {
        Ok(address) => Notification::success(format!("Connected {}", short_address(&address))),
        Err(e) => {
            warn!("Wallet connection failed: {}", e);
            Notification::from_error(&e)
        }
    };
    (wallet::snapshot(wallet), notification)
}

/// Disconnect the wallet and snapshot the resulting session.
pub fn disconnect_wallet(wallet: &mut dyn WalletSession) -> (SessionState, Notification) {
    wallet.disconnect();
    (wallet::snapshot(wallet), Notification::info("Wallet disconnected"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settlement::{MockSettlement, VoteReceipt};
    use crate::state::{Asset, ChainInfo, NotificationLevel, WizardStep};
    use crate::time::FixedClock;
    use crate::wallet::MockWalletSession;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn store_on(route: Route) -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap(),
        ));
        let catalog: SharedCatalog = Arc::new(InMemoryCatalog::builtin().unwrap());
        let mut store = Store::new(catalog, clock, tx);
        store.reduce(Action::Navigate(route));
        store
    }

    fn connected(store: &mut Store) {
        store.reduce(Action::SessionChanged(SessionState {
            address: Some(ADDRESS.to_string()),
            chain: Some(ChainInfo {
                id: 11155111,
                name: "Sepolia".to_string(),
            }),
            balance: None,
        }));
    }

    fn complete_draft(store: &mut Store) {
        let draft = &mut store.wizard.draft;
        draft.question = "Will BTC reach $80k?".to_string();
        draft.description = "Resolves on the close price".to_string();
        draft.asset = Some(Asset::Btc);
        draft.target_amount = "80000".to_string();
        draft.start_date = "2025-12-02".to_string();
        draft.start_time = "09:00".to_string();
        draft.end_date = "2025-12-31".to_string();
        draft.end_time = "18:00".to_string();
        store.wizard.step = WizardStep::Schedule;
    }

    #[test]
    fn test_start_route_falls_back() {
        assert_eq!(start_route("/learn"), Route::Learn);
        assert_eq!(start_route("/nowhere"), Route::Markets);
    }

    #[test]
    fn test_vote_without_session_skips_settlement() {
        let store = store_on(Route::MarketDetail("1".to_string()));
        let mut settlement = MockSettlement::new();
        settlement.expect_submit_vote().never();

        let notification = tokio_test::block_on(settle_vote(&settlement, &store, VoteSide::Yes));
        assert_eq!(notification.message, "Please connect your wallet to vote");
        assert_eq!(notification.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_vote_reports_pending_settlement() {
        let mut store = store_on(Route::MarketDetail("1".to_string()));
        connected(&mut store);

        let notification =
            tokio_test::block_on(settle_vote(&PendingSettlement, &store, VoteSide::No));
        assert_eq!(notification.message, "Voting no is not yet supported");
        assert_eq!(notification.level, NotificationLevel::Info);
        assert!(store.found_detail().unwrap().comments.is_empty());
    }

    #[test]
    fn test_vote_on_closed_market_is_refused() {
        let mut store = store_on(Route::MarketDetail("2".to_string()));
        connected(&mut store);
        let mut settlement = MockSettlement::new();
        settlement.expect_submit_vote().never();

        let notification = tokio_test::block_on(settle_vote(&settlement, &store, VoteSide::Yes));
        assert_eq!(notification.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_vote_success_passes_request_through() {
        let mut store = store_on(Route::MarketDetail("3".to_string()));
        connected(&mut store);
        let mut settlement = MockSettlement::new();
        settlement
            .expect_submit_vote()
            .withf(|vote| vote.market_id == "3" && vote.voter == ADDRESS)
            .times(1)
            .returning(|vote| {
                Ok(VoteReceipt {
                    market_id: vote.market_id.clone(),
                    settled_at: Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap(),
                })
            });

        let notification = tokio_test::block_on(settle_vote(&settlement, &store, VoteSide::Yes));
        assert_eq!(notification.message, "Voted yes");
    }

    #[test]
    fn test_submit_disabled_until_schedule_filled() {
        let store = store_on(Route::Create);
        let mut settlement = MockSettlement::new();
        settlement.expect_create_market().never();
        assert!(tokio_test::block_on(submit_market(&settlement, &store)).is_none());
    }

    #[test]
    fn test_submit_surfaces_question_and_resets() {
        let mut store = store_on(Route::Create);
        complete_draft(&mut store);

        let (notification, reset) =
            tokio_test::block_on(submit_market(&PendingSettlement, &store)).unwrap();
        assert!(reset);
        assert_eq!(
            notification.message,
            "Create market: Will BTC reach $80k? (Market creation is not yet supported)"
        );
    }

    #[test]
    fn test_submit_lists_violations() {
        let mut store = store_on(Route::Create);
        complete_draft(&mut store);
        store.wizard.draft.target_amount = "-5".to_string();
        store.wizard.draft.end_date = "2025-11-30".to_string();

        let mut settlement = MockSettlement::new();
        settlement.expect_create_market().never();
        let (notification, reset) =
            tokio_test::block_on(submit_market(&settlement, &store)).unwrap();
        assert!(!reset);
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert!(notification.message.starts_with("Cannot create market: "));
    }

    #[test]
    fn test_connect_snapshots_session() {
        let mut wallet = MockWalletSession::new();
        wallet
            .expect_connect()
            .times(1)
            .returning(|| Ok(ADDRESS.to_string()));
        wallet.expect_is_connected().return_const(true);
        wallet
            .expect_address()
            .return_const(Some(ADDRESS.to_string()));
        wallet.expect_chain().return_const(None);
        wallet.expect_balance().return_const(None);

        let (session, notification) = connect_wallet(&mut wallet);
        assert_eq!(session.address.as_deref(), Some(ADDRESS));
        assert_eq!(notification.message, "Connected 0xf39F…2266");
        assert_eq!(notification.level, NotificationLevel::Success);
    }

    #[test]
    fn test_disconnect_clears_session() {
        let mut wallet = MockWalletSession::new();
        wallet.expect_disconnect().times(1).return_const(());
        wallet.expect_is_connected().return_const(false);

        let (session, notification) = disconnect_wallet(&mut wallet);
        assert_eq!(session, SessionState::default());
        assert_eq!(notification.message, "Wallet disconnected");
    }

    #[test]
    fn test_failed_connect_leaves_session_empty() {
        let mut wallet = MockWalletSession::new();
        wallet
            .expect_connect()
            .returning(|| Err(Error::wallet("invalid private key")));
        wallet.expect_is_connected().return_const(false);

        let (session, notification) = connect_wallet(&mut wallet);
        assert!(!session.is_connected());
        assert_eq!(notification.level, NotificationLevel::Error);
    }
}

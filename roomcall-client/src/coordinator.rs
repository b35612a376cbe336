/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! The view-state coordinator.
//!
//! Maps user intents and call-engine lifecycle notifications onto
//! [`ViewState`] transitions. All mutable state sits behind one lock that is
//! never held across an `.await`, so notifications are applied one at a time
//! and no interleaving can produce two visible states at once.
//!
//! ```text
//!   Home ──create/join──▶ Lobby ──joined──▶ InCall ──left──▶ Home
//!     │                     │
//!     └──── failure ────────┴──▶ Error ──retry──▶ Home
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_broadcast::Receiver;
use log::{debug, error, info, warn};
use roomcall_types::NetworkStats;

use crate::constants::{COUNTDOWN_INTERVAL_MS, EVENT_BUS_CAPACITY, NETWORK_POLL_INTERVAL_MS};
use crate::engine::{CallEngine, EngineEvent, JoinOptions};
use crate::error::CallError;
use crate::event_bus::EventBus;
use crate::events::CallEvent;
use crate::format::{format_bitrate, format_countdown, format_packet_loss, remaining_seconds};
use crate::platform::{self, IntervalHandle};
use crate::provisioning::RoomProvisioner;
use crate::state::{ConnectionIntent, ErrorMessage, NetworkDisplay, Session, ViewState};

/// Tunables for a [`CallCoordinator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorOptions {
    pub network_poll_interval_ms: u64,
    pub countdown_interval_ms: u64,
    pub event_capacity: usize,
    /// Forwarded to the engine on every join.
    pub show_leave_button: bool,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            network_poll_interval_ms: NETWORK_POLL_INTERVAL_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            event_capacity: EVENT_BUS_CAPACITY,
            show_leave_button: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingStart {
    Provisioning,
    Joining,
}

#[derive(Debug, Default)]
struct CoordinatorInner {
    view: ViewState,
    session: Option<Session>,
    pending: Option<PendingStart>,
    loading: bool,
    error: Option<ErrorMessage>,
    network: Option<NetworkDisplay>,
    countdown: Option<String>,
    stats_timer: Option<IntervalHandle>,
    countdown_timer: Option<IntervalHandle>,
    // Bumped whenever polling starts or stops; stale poll results are dropped.
    poll_generation: u64,
    // Bumped whenever a session starts or ends; late join results compare against it.
    session_generation: u64,
    disposed: bool,
}

impl CoordinatorInner {
    fn can_start(&self) -> bool {
        !self.disposed
            && self.view == ViewState::Home
            && self.pending.is_none()
            && self.session.is_none()
    }

    fn set_view(&mut self, next: ViewState, events: &EventBus) {
        if self.view == next {
            return;
        }
        let from = self.view;
        self.view = next;
        debug!("View {from} -> {next}");
        events.emit(CallEvent::ViewChanged { from, to: next });
    }

    fn set_loading(&mut self, loading: bool, events: &EventBus) {
        if self.loading != loading {
            self.loading = loading;
            events.emit(CallEvent::LoadingChanged(loading));
        }
    }

    fn show_error(&mut self, message: ErrorMessage, events: &EventBus) {
        self.error = Some(message.clone());
        events.emit(CallEvent::ErrorShown(message));
        self.set_view(ViewState::Error, events);
    }

    fn stop_network_polling(&mut self) {
        if let Some(mut timer) = self.stats_timer.take() {
            timer.cancel();
            self.poll_generation += 1;
            debug!("Network stats polling stopped");
        }
        self.network = None;
    }

    fn stop_countdown(&mut self) {
        if let Some(mut timer) = self.countdown_timer.take() {
            timer.cancel();
            debug!("Countdown stopped");
        }
        self.countdown = None;
    }

    /// Drop the session and every timer tied to it.
    fn end_session(&mut self, events: &EventBus) {
        self.stop_network_polling();
        self.stop_countdown();
        if self.session.take().is_some() {
            self.session_generation += 1;
            events.emit(CallEvent::SessionEnded);
        }
    }
}

struct Shared {
    state: Mutex<CoordinatorInner>,
    engine: Arc<dyn CallEngine>,
    provisioner: Arc<dyn RoomProvisioner>,
    events: EventBus,
    options: CoordinatorOptions,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, CoordinatorInner> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start_session(
        self: &Arc<Self>,
        inner: &mut CoordinatorInner,
        room_url: &str,
        expires_at: Option<i64>,
    ) {
        inner.session = Some(Session::new(room_url, expires_at));
        inner.session_generation += 1;
        self.events.emit(CallEvent::SessionStarted {
            room_url: room_url.to_string(),
            expires_at,
        });
        inner.set_view(ViewState::Lobby, &self.events);
        if let Some(exp) = expires_at {
            self.start_countdown(inner, exp);
        }
    }

    fn start_countdown(self: &Arc<Self>, inner: &mut CoordinatorInner, expires_at: i64) {
        inner.stop_countdown();
        let initial = format_countdown(remaining_seconds(expires_at, platform::now_ms()));
        inner.countdown = Some(initial.clone());
        self.events.emit(CallEvent::CountdownTick(initial));

        let weak = Arc::downgrade(self);
        match IntervalHandle::try_new(self.options.countdown_interval_ms, move || {
            if let Some(shared) = weak.upgrade() {
                shared.tick_countdown();
            }
        }) {
            Ok(timer) => inner.countdown_timer = Some(timer),
            Err(e) => warn!("Countdown not started, no runtime: {e}"),
        }
    }

    fn tick_countdown(&self) {
        let mut inner = self.state();
        let Some(exp) = inner.session.as_ref().and_then(|s| s.expires_at) else {
            return;
        };
        let text = format_countdown(remaining_seconds(exp, platform::now_ms()));
        if inner.countdown.as_deref() != Some(text.as_str()) {
            inner.countdown = Some(text.clone());
            self.events.emit(CallEvent::CountdownTick(text));
        }
    }

    fn start_network_polling(self: &Arc<Self>, inner: &mut CoordinatorInner) {
        inner.stop_network_polling();
        inner.poll_generation += 1;
        let generation = inner.poll_generation;

        let weak: Weak<Self> = Arc::downgrade(self);
        match IntervalHandle::try_new(self.options.network_poll_interval_ms, move || {
            if let Some(shared) = weak.upgrade() {
                platform::spawn(async move {
                    shared.poll_network_stats(generation).await;
                });
            }
        }) {
            Ok(timer) => {
                inner.stats_timer = Some(timer);
                debug!("Network stats polling started");
            }
            Err(e) => warn!("Network stats polling not started, no runtime: {e}"),
        }
    }

    async fn poll_network_stats(&self, generation: u64) {
        let stats = match self.engine.get_network_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                debug!("Network stats unavailable: {e}");
                return;
            }
        };
        self.apply_network_stats(generation, stats);
    }

    fn apply_network_stats(&self, generation: u64, stats: NetworkStats) {
        let mut inner = self.state();
        if inner.view != ViewState::InCall || inner.poll_generation != generation {
            return;
        }
        let display = NetworkDisplay {
            video_send: format_bitrate(stats.video_send_bits_per_second),
            video_receive: format_bitrate(stats.video_recv_bits_per_second),
            packet_loss_send: format_packet_loss(stats.worst_video_send_packet_loss),
            packet_loss_receive: format_packet_loss(stats.worst_video_recv_packet_loss),
        };
        inner.network = Some(display.clone());
        self.events.emit(CallEvent::NetworkStatsUpdated(display));
    }

    /// The call ended (engine notification or explicit leave).
    fn settle_left(&self) {
        let mut inner = self.state();
        if !inner.view.holds_session() {
            debug!("Left notification in {}, nothing to do", inner.view);
            return;
        }
        inner.end_session(&self.events);
        inner.set_view(ViewState::Home, &self.events);
    }

    /// Join `url` on behalf of the session tagged `generation`.
    ///
    /// A rejection for a session that has since ended is dropped.
    async fn join_room(self: &Arc<Self>, url: &str, generation: u64) -> Result<(), CallError> {
        let result = self
            .engine
            .join(JoinOptions {
                url: url.to_string(),
                show_leave_button: self.options.show_leave_button,
            })
            .await;

        let mut inner = self.state();
        if inner.pending == Some(PendingStart::Joining) {
            inner.pending = None;
        }
        inner.set_loading(false, &self.events);
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                if inner.disposed {
                    return Err(CallError::Join(err));
                }
                let superseded = inner.session_generation != generation
                    || !matches!(inner.view, ViewState::Home | ViewState::Lobby);
                if superseded {
                    info!("Join for '{url}' ended after the session was left: {err}");
                    return Ok(());
                }
                error!("Join rejected for '{url}': {err}");
                inner.end_session(&self.events);
                if err.is_missing_url() {
                    inner.set_view(ViewState::Home, &self.events);
                }
                inner.show_error(ErrorMessage::incorrect_room_url(), &self.events);
                Err(CallError::Join(err))
            }
        }
    }
}

/// Owns the screen mode, the current session and the timers tied to them.
///
/// Cloning is cheap and yields a handle to the same coordinator.
#[derive(Clone)]
pub struct CallCoordinator {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for CallCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.state();
        f.debug_struct("CallCoordinator")
            .field("view", &inner.view)
            .field("session", &inner.session)
            .field("pending", &inner.pending)
            .finish()
    }
}

impl CallCoordinator {
    /// Create a coordinator in the `Home` state. No timers run until a session starts.
    pub fn new(
        engine: Arc<dyn CallEngine>,
        provisioner: Arc<dyn RoomProvisioner>,
        options: CoordinatorOptions,
    ) -> Self {
        let events = EventBus::new(options.event_capacity);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(CoordinatorInner::default()),
                engine,
                provisioner,
                events,
                options,
            }),
        }
    }

    /// Receive every [`CallEvent`] emitted from now on.
    pub fn subscribe(&self) -> Receiver<CallEvent> {
        self.shared.events.subscribe()
    }

    // === Intents ===

    /// Route a [`ConnectionIntent`] to the matching intent method.
    pub async fn dispatch(&self, intent: ConnectionIntent) -> Result<(), CallError> {
        match intent {
            ConnectionIntent::JoinExisting(url) => self.join_call(&url).await,
            ConnectionIntent::CreateAndStart => self.create_and_start().await,
            ConnectionIntent::Retry => {
                self.retry();
                Ok(())
            }
            ConnectionIntent::Leave => self.leave_call().await,
        }
    }

    /// Provision a new room, then join it.
    ///
    /// Ignored while a call is active or another start is outstanding.
    pub async fn create_and_start(&self) -> Result<(), CallError> {
        let shared = &self.shared;
        {
            let mut inner = shared.state();
            if !inner.can_start() {
                info!("Create ignored: a call is already active or starting");
                return Ok(());
            }
            info!("Creating a room");
            inner.pending = Some(PendingStart::Provisioning);
            inner.set_loading(true, &shared.events);
        }

        let provisioned = shared.provisioner.create_room().await;

        let (url, generation) = {
            let mut inner = shared.state();
            if inner.disposed {
                inner.set_loading(false, &shared.events);
                return Ok(());
            }
            match provisioned {
                Err(e) => {
                    error!("Error fetching room URL: {e}");
                    inner.pending = None;
                    inner.set_loading(false, &shared.events);
                    inner.show_error(ErrorMessage::provisioning(), &shared.events);
                    return Err(CallError::Provisioning(e));
                }
                Ok(room) => {
                    info!("Room provisioned: {}", room.url);
                    inner.pending = Some(PendingStart::Joining);
                    if !room.url.is_empty() {
                        let expires_at = room.expires_at();
                        shared.start_session(&mut inner, &room.url, expires_at);
                    }
                    (room.url, inner.session_generation)
                }
            }
        };

        shared.join_room(&url, generation).await
    }

    /// Join an existing room by URL.
    ///
    /// Ignored while a call is active or another start is outstanding. An
    /// empty URL never reaches the lobby; the engine's rejection moves the
    /// view straight to `Error`.
    pub async fn join_call(&self, url: &str) -> Result<(), CallError> {
        let shared = &self.shared;
        let generation = {
            let mut inner = shared.state();
            if !inner.can_start() {
                info!("Join ignored: a call is already active or starting");
                return Ok(());
            }
            info!("Joining '{url}'");
            inner.pending = Some(PendingStart::Joining);
            if !url.is_empty() {
                shared.start_session(&mut inner, url, None);
            }
            inner.session_generation
        };

        shared.join_room(url, generation).await
    }

    /// Leave the current call. Always settles in `Home`; calling it again is a no-op.
    pub async fn leave_call(&self) -> Result<(), CallError> {
        {
            let inner = self.shared.state();
            if !inner.view.holds_session() {
                debug!("Leave ignored in {}", inner.view);
                return Ok(());
            }
        }
        info!("Leaving call");
        let result = self.shared.engine.leave().await;
        self.shared.settle_left();
        result.map_err(|e| {
            warn!("Engine failed to leave cleanly: {e}");
            CallError::Engine(e)
        })
    }

    /// Dismiss the error screen. Performs no network action.
    pub fn retry(&self) {
        let mut inner = self.shared.state();
        if inner.view != ViewState::Error {
            debug!("Retry ignored in {}", inner.view);
            return;
        }
        inner.error = None;
        self.shared.events.emit(CallEvent::ErrorCleared);
        inner.set_view(ViewState::Home, &self.shared.events);
    }

    // === Engine notifications ===

    /// Apply one lifecycle notification pushed by the call engine.
    pub fn handle_engine_event(&self, event: EngineEvent) {
        let shared = &self.shared;
        match event {
            EngineEvent::Loaded | EngineEvent::StartedCamera => {
                debug!("Engine event: {}", event.name());
                shared.events.emit(CallEvent::Engine(event));
            }
            EngineEvent::CameraError(ref detail) => {
                warn!("Engine camera error: {detail}");
                shared.events.emit(CallEvent::Engine(event));
            }
            EngineEvent::JoiningMeeting => {
                let inner = shared.state();
                debug!("Engine joining meeting (view: {})", inner.view);
            }
            EngineEvent::JoinedMeeting => {
                let mut inner = shared.state();
                if inner.disposed || inner.view != ViewState::Lobby {
                    debug!("Joined notification ignored in {}", inner.view);
                    return;
                }
                inner.set_view(ViewState::InCall, &shared.events);
                shared.start_network_polling(&mut inner);
            }
            EngineEvent::LeftMeeting => shared.settle_left(),
        }
    }

    // === Pass-through controls ===

    pub async fn toggle_camera(&self) -> Result<bool, CallError> {
        let engine = &self.shared.engine;
        let enabled = !engine.local_media().await.video;
        engine
            .set_local_video(enabled)
            .await
            .map_err(CallError::Engine)?;
        Ok(enabled)
    }

    pub async fn toggle_mic(&self) -> Result<bool, CallError> {
        let engine = &self.shared.engine;
        let enabled = !engine.local_media().await.audio;
        engine
            .set_local_audio(enabled)
            .await
            .map_err(CallError::Engine)?;
        Ok(enabled)
    }

    /// Start or stop sharing the screen. Returns whether sharing is now on.
    pub async fn toggle_screen_share(&self) -> Result<bool, CallError> {
        let engine = &self.shared.engine;
        let sharing = engine.local_media().await.screen;
        let result = if sharing {
            engine.stop_screen_share().await
        } else {
            engine.start_screen_share().await
        };
        result.map_err(CallError::Engine)?;
        self.shared
            .events
            .emit(CallEvent::ScreenShareChanged(!sharing));
        Ok(!sharing)
    }

    pub async fn toggle_fullscreen(&self) -> Result<(), CallError> {
        self.shared
            .engine
            .request_fullscreen()
            .await
            .map_err(CallError::Engine)
    }

    /// Returns whether the local video tile is now shown.
    pub fn toggle_local_video(&self) -> bool {
        let engine = &self.shared.engine;
        let show = !engine.show_local_video();
        engine.set_show_local_video(show);
        self.shared
            .events
            .emit(CallEvent::LocalVideoVisibilityChanged(show));
        show
    }

    /// Returns whether the participants bar is now shown.
    pub fn toggle_participants_bar(&self) -> bool {
        let engine = &self.shared.engine;
        let show = !engine.show_participants_bar();
        engine.set_show_participants_bar(show);
        self.shared
            .events
            .emit(CallEvent::ParticipantsBarVisibilityChanged(show));
        show
    }

    // === Read-only views ===

    pub fn view_state(&self) -> ViewState {
        self.shared.state().view
    }

    pub fn session(&self) -> Option<Session> {
        self.shared.state().session.clone()
    }

    /// `true` from the start of a create until its join settles.
    pub fn is_loading(&self) -> bool {
        self.shared.state().loading
    }

    /// `true` while a create or join is outstanding.
    pub fn is_starting(&self) -> bool {
        self.shared.state().pending.is_some()
    }

    pub fn error_message(&self) -> Option<ErrorMessage> {
        self.shared.state().error.clone()
    }

    pub fn network_display(&self) -> Option<NetworkDisplay> {
        self.shared.state().network.clone()
    }

    pub fn is_polling_network(&self) -> bool {
        self.shared.state().stats_timer.is_some()
    }

    pub fn is_counting_down(&self) -> bool {
        self.shared.state().countdown_timer.is_some()
    }

    /// Last countdown text produced by the timer.
    pub fn countdown_text(&self) -> Option<String> {
        self.shared.state().countdown.clone()
    }

    /// Remaining session lifetime at `now_ms`, as `m:ss`.
    ///
    /// `None` without an active session or without a known expiry.
    pub fn countdown_at(&self, now_ms: f64) -> Option<String> {
        let inner = self.shared.state();
        let session = inner.session.as_ref().filter(|s| s.active)?;
        let exp = session.expires_at?;
        Some(format_countdown(remaining_seconds(exp, now_ms)))
    }

    // === Lifecycle ===

    /// Cancel every timer, drop the session and close the event bus.
    ///
    /// Intents issued afterwards are ignored. Idempotent.
    pub fn dispose(&self) {
        let mut inner = self.shared.state();
        if inner.disposed {
            return;
        }
        info!("Disposing coordinator");
        inner.end_session(&self.shared.events);
        inner.pending = None;
        inner.loading = false;
        inner.disposed = true;
        self.shared.events.close();
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.state().disposed
    }
}

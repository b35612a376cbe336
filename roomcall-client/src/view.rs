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

//! Framework-agnostic presentation model.
//!
//! [`ScreenModel`] folds [`CallEvent`]s into the values a page needs to
//! render: which containers are visible, button labels, the error text, the
//! countdown and the network readouts. It never calls back into the
//! coordinator, so it can be tested with hand-made event sequences.

use std::sync::{Arc, Mutex, PoisonError};

use async_broadcast::{Receiver, RecvError};
use log::debug;

use crate::constants::{COUNTDOWN_PREFIX, LOADING_LABEL, START_LABEL};
use crate::events::CallEvent;
use crate::format::is_valid_room_url;
use crate::state::{ErrorMessage, NetworkDisplay, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub view: ViewState,
    pub home_visible: bool,
    pub lobby_visible: bool,
    pub call_visible: bool,
    pub controls_visible: bool,
    pub error_visible: bool,
    pub error: Option<ErrorMessage>,
    pub start_button_label: String,
    pub join_enabled: bool,
    pub create_enabled: bool,
    /// Room link offered in the copy-to-clipboard field.
    pub share_url: Option<String>,
    pub countdown_text: Option<String>,
    pub network: NetworkDisplay,
    pub share_button_label: String,
    pub local_video_button_label: String,
    pub participants_bar_button_label: String,
    pub last_engine_event: Option<String>,
}

impl Default for ScreenModel {
    fn default() -> Self {
        Self {
            view: ViewState::Home,
            home_visible: true,
            lobby_visible: false,
            call_visible: false,
            controls_visible: false,
            error_visible: false,
            error: None,
            start_button_label: START_LABEL.to_string(),
            join_enabled: false,
            create_enabled: true,
            share_url: None,
            countdown_text: None,
            network: NetworkDisplay::default(),
            share_button_label: "Share screen".to_string(),
            local_video_button_label: "Hide local video".to_string(),
            participants_bar_button_label: "Hide participants bar".to_string(),
            last_engine_event: None,
        }
    }
}

impl ScreenModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the model.
    pub fn apply(&mut self, event: &CallEvent) {
        match event {
            CallEvent::ViewChanged { to, .. } => self.show(*to),
            CallEvent::LoadingChanged(loading) => {
                self.start_button_label = if *loading { LOADING_LABEL } else { START_LABEL }.to_string();
            }
            CallEvent::ErrorShown(message) => self.error = Some(message.clone()),
            CallEvent::ErrorCleared => self.error = None,
            CallEvent::SessionStarted { room_url, .. } => {
                self.share_url = Some(room_url.clone());
            }
            CallEvent::SessionEnded => {
                self.countdown_text = None;
                self.network = NetworkDisplay::default();
                self.share_button_label = "Share screen".to_string();
            }
            CallEvent::CountdownTick(remaining) => {
                self.countdown_text = Some(format!("{COUNTDOWN_PREFIX}{remaining}"));
            }
            CallEvent::NetworkStatsUpdated(display) => self.network = display.clone(),
            CallEvent::ScreenShareChanged(sharing) => {
                self.share_button_label = if *sharing {
                    "Stop screenshare"
                } else {
                    "Share screen"
                }
                .to_string();
            }
            CallEvent::LocalVideoVisibilityChanged(shown) => {
                self.local_video_button_label =
                    format!("{} local video", if *shown { "Hide" } else { "Show" });
            }
            CallEvent::ParticipantsBarVisibilityChanged(shown) => {
                self.participants_bar_button_label =
                    format!("{} participants bar", if *shown { "Hide" } else { "Show" });
            }
            CallEvent::Engine(engine_event) => {
                self.last_engine_event = Some(engine_event.name().to_string());
            }
        }
    }

    fn show(&mut self, view: ViewState) {
        self.view = view;
        self.home_visible = view == ViewState::Home;
        self.lobby_visible = view == ViewState::Lobby;
        self.call_visible = view == ViewState::InCall;
        self.controls_visible = view == ViewState::InCall;
        self.error_visible = view == ViewState::Error;
        if view != ViewState::Error {
            self.error = None;
        }
    }

    /// React to edits of the room URL field: a valid link enables Join and
    /// disables Create.
    pub fn on_url_input(&mut self, input: &str) {
        let valid = is_valid_room_url(input);
        self.join_enabled = valid;
        self.create_enabled = !valid;
    }

    /// Keep a shared model in sync with a coordinator until its bus closes.
    pub async fn follow(model: Arc<Mutex<ScreenModel>>, mut events: Receiver<CallEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => model
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .apply(&event),
                Err(RecvError::Overflowed(missed)) => {
                    debug!("Screen model missed {missed} events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

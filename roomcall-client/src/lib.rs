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

//! Call-session view-state coordination for embeddable video call widgets.
//!
//! The crate sits between a page and a third-party call widget. It owns no
//! media: the widget (a [`CallEngine`]) joins rooms and reports lifecycle
//! notifications, a [`RoomProvisioner`] hands out fresh rooms, and the
//! [`CallCoordinator`] keeps exactly one screen mode ([`ViewState`]) in sync
//! with both.
//!
//! # Outline of usage
//!
//! ```no_run
//! # use std::sync::{Arc, Mutex};
//! # use roomcall_client::*;
//! # async fn example(engine: Arc<dyn CallEngine>) -> Result<(), CallError> {
//! let rooms = Arc::new(roomcall_rooms_client::RoomsApiClient::new("http://localhost:8081"));
//! let coordinator = CallCoordinator::new(engine, rooms, CoordinatorOptions::default());
//!
//! // Presentation layer
//! let screen = Arc::new(Mutex::new(ScreenModel::new()));
//! tokio::spawn(ScreenModel::follow(screen.clone(), coordinator.subscribe()));
//!
//! coordinator.create_and_start().await?;
//! // ... the widget reports progress:
//! coordinator.handle_engine_event(EngineEvent::JoiningMeeting);
//! coordinator.handle_engine_event(EngineEvent::JoinedMeeting);
//! assert_eq!(coordinator.view_state(), ViewState::InCall);
//!
//! coordinator.leave_call().await?;
//! coordinator.dispose();
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod coordinator;
pub mod engine;
mod error;
pub mod event_bus;
mod events;
pub mod format;
pub mod platform;
mod provisioning;
pub mod state;
pub mod view;

pub use coordinator::{CallCoordinator, CoordinatorOptions};
pub use engine::{CallEngine, EngineError, EngineEvent, JoinOptions, LocalMedia};
pub use error::CallError;
pub use event_bus::EventBus;
pub use events::CallEvent;
pub use provisioning::RoomProvisioner;
pub use state::{ConnectionIntent, ErrorMessage, NetworkDisplay, Session, ViewState};
pub use view::ScreenModel;

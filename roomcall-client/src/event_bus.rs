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

//! Per-coordinator event bus.
//!
//! A broadcast channel for [`CallEvent`]s. Each coordinator owns its own bus,
//! so independent coordinators never see each other's events. Any number of
//! subscribers receive every event emitted after they subscribed; when the
//! buffer is full the oldest event is dropped.

use crate::events::CallEvent;
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};

#[derive(Clone)]
pub struct EventBus {
    sender: Sender<CallEvent>,
    // Keeps the channel open while nobody is subscribed.
    _keepalive: InactiveReceiver<CallEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (mut sender, receiver) = broadcast(capacity.max(1));
        sender.set_overflow(true);
        Self {
            sender,
            _keepalive: receiver.deactivate(),
        }
    }

    pub fn subscribe(&self) -> Receiver<CallEvent> {
        self.sender.new_receiver()
    }

    /// Non-blocking. Events emitted with no active subscriber are dropped.
    pub fn emit(&self, event: CallEvent) {
        let _ = self.sender.try_broadcast(event);
    }

    pub fn close(&self) {
        self.sender.close();
    }

    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("capacity", &self.sender.capacity())
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_broadcast::TryRecvError;

    #[test]
    fn subscriber_receives_events_in_order() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        bus.emit(CallEvent::LoadingChanged(true));
        bus.emit(CallEvent::LoadingChanged(false));
        assert_eq!(rx.try_recv().unwrap(), CallEvent::LoadingChanged(true));
        assert_eq!(rx.try_recv().unwrap(), CallEvent::LoadingChanged(false));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn emit_without_subscribers_does_not_panic() {
        let bus = EventBus::new(8);
        bus.emit(CallEvent::SessionEnded);
        let mut rx = bus.subscribe();
        // Past events are not replayed.
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn overflow_drops_oldest() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();
        bus.emit(CallEvent::CountdownTick("0:03".into()));
        bus.emit(CallEvent::CountdownTick("0:02".into()));
        bus.emit(CallEvent::CountdownTick("0:01".into()));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Overflowed(1)));
        assert_eq!(rx.try_recv().unwrap(), CallEvent::CountdownTick("0:02".into()));
        assert_eq!(rx.try_recv().unwrap(), CallEvent::CountdownTick("0:01".into()));
    }

    #[test]
    fn buses_are_independent() {
        let a = EventBus::new(4);
        let b = EventBus::new(4);
        let mut rx_b = b.subscribe();
        a.emit(CallEvent::SessionEnded);
        assert!(rx_b.try_recv().is_err());
    }
}

// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::InputEvent;
use log;

/// A thread-safe, unbounded queue of raw input events.
///
/// Producers hold cheap [`EventSender`] clones and append from any thread;
/// the main loop owns the queue and detaches the accumulated events once per
/// frame with [`drain`](EventQueue::drain). Events captured after a drain
/// begins fall into the next frame's batch; none are lost or consumed twice.
#[derive(Debug)]
pub struct EventQueue {
    sender: flume::Sender<InputEvent>,
    receiver: flume::Receiver<InputEvent>,
}

impl EventQueue {
    /// Creates a new empty queue backed by an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("Input event queue initialized.");
        Self { sender, receiver }
    }

    /// Returns a producer handle for the platform's event source.
    /// The handle can be cloned freely and moved across threads.
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Atomically detaches every event captured so far, in arrival order.
    pub fn drain(&self) -> impl Iterator<Item = InputEvent> + '_ {
        self.receiver.drain()
    }

    /// Returns `true` if no events are currently queued.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// The producer end of an [`EventQueue`].
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: flume::Sender<InputEvent>,
}

impl EventSender {
    /// Appends a raw event to the queue. Never blocks beyond the append.
    pub fn capture(&self, event: InputEvent) {
        log::trace!("Capturing input event: {event:?}");
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to capture input event: {e}. Queue likely dropped.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use std::thread;

    fn key_down(key: Key) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    #[test]
    fn queue_starts_empty() {
        let queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        sender.capture(key_down(Key::A));
        sender.capture(InputEvent::KeyUp { key: Key::A });
        sender.capture(key_down(Key::B));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                key_down(Key::A),
                InputEvent::KeyUp { key: Key::A },
                key_down(Key::B),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn events_after_drain_belong_to_next_batch() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        sender.capture(key_down(Key::A));

        let first: Vec<_> = queue.drain().collect();
        sender.capture(key_down(Key::B));
        let second: Vec<_> = queue.drain().collect();

        assert_eq!(first, vec![key_down(Key::A)]);
        assert_eq!(second, vec![key_down(Key::B)]);
    }

    #[test]
    fn capture_from_other_thread() {
        let queue = EventQueue::new();
        let sender = queue.sender();

        let handle = thread::spawn(move || {
            for _ in 0..100 {
                sender.capture(key_down(Key::Space));
            }
        });
        handle.join().expect("Producer thread panicked");

        assert_eq!(queue.drain().count(), 100);
    }

    #[test]
    fn multiple_senders_feed_one_queue() {
        let queue = EventQueue::new();
        let sender1 = queue.sender();
        let sender2 = sender1.clone();

        sender1.capture(key_down(Key::A));
        sender2.capture(key_down(Key::B));

        assert_eq!(queue.drain().count(), 2);
    }
}

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

use super::key::{Key, MouseButton};
use crate::event::{EventQueue, InputEvent};
use crate::math::{Vec2, Viewport};
use std::collections::HashSet;

/// The per-frame input snapshot consumed by game code.
///
/// `down` and `up` are edge-triggered: they hold only the transitions that
/// happened during the last polled frame. `held` persists across frames
/// until a matching release arrives. Typed text and the scroll delta
/// accumulate within a frame and reset at the next poll; the cursor
/// position persists, updated by move events.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    keys_held: HashSet<Key>,
    keys_up: HashSet<Key>,
    typed_text: String,
    buttons_down: HashSet<MouseButton>,
    buttons_held: HashSet<MouseButton>,
    buttons_up: HashSet<MouseButton>,
    cursor: Vec2,
    scroll_delta: f32,
}

impl InputState {
    /// Creates an empty snapshot with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the snapshot from the events queued since the last poll.
    ///
    /// Must be called exactly once per frame, from the main loop only:
    /// resets the transient sets, atomically detaches the queue contents,
    /// and replays them in arrival order against the persistent state.
    /// `viewport` supplies the current window-to-framebuffer mapping for
    /// cursor coordinates.
    pub fn poll(&mut self, queue: &EventQueue, viewport: &Viewport) {
        self.keys_down.clear();
        self.keys_up.clear();
        self.typed_text.clear();
        self.buttons_down.clear();
        self.buttons_up.clear();
        self.scroll_delta = 0.0;

        for event in queue.drain() {
            self.apply(event, viewport);
        }
    }

    fn apply(&mut self, event: InputEvent, viewport: &Viewport) {
        match event {
            InputEvent::KeyDown { key } => {
                // OS autorepeat re-delivers presses while the key is held;
                // only a fresh press counts as a "down" edge.
                if self.keys_held.insert(key) {
                    self.keys_down.insert(key);
                }
            }
            InputEvent::KeyUp { key } => {
                self.keys_held.remove(&key);
                self.keys_up.insert(key);
            }
            InputEvent::KeyTyped { ch } => {
                self.typed_text.push(ch);
            }
            InputEvent::MouseDown { button } => {
                if self.buttons_held.insert(button) {
                    self.buttons_down.insert(button);
                }
            }
            InputEvent::MouseUp { button } => {
                self.buttons_held.remove(&button);
                self.buttons_up.insert(button);
            }
            InputEvent::MouseMoved { x, y } => {
                self.cursor = viewport.window_to_buffer(Vec2::new(x, y));
            }
            InputEvent::MouseScrolled { delta } => {
                self.scroll_delta += delta;
            }
        }
    }

    /// Returns `true` if the key was freshly pressed during the last frame.
    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if the key is currently held.
    #[inline]
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Returns `true` if the key was released during the last frame.
    #[inline]
    pub fn key_up(&self, key: Key) -> bool {
        self.keys_up.contains(&key)
    }

    /// Returns the text typed during the last frame.
    #[inline]
    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    /// Returns `true` if the button was freshly pressed during the last
    /// frame.
    #[inline]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Returns `true` if the button is currently held.
    #[inline]
    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    /// Returns `true` if the button was released during the last frame.
    #[inline]
    pub fn mouse_up(&self, button: MouseButton) -> bool {
        self.buttons_up.contains(&button)
    }

    /// Returns the cursor position in framebuffer pixel coordinates.
    /// Positions outside the presented area are clamped to the nearest edge.
    #[inline]
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    /// Returns the scroll delta accumulated during the last frame.
    #[inline]
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

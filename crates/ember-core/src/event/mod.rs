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

//! Provides the raw input event type and the thread-safe event queue.
//!
//! The platform layer produces [`InputEvent`] records from whatever
//! windowing backend it sits on and pushes them into the [`EventQueue`];
//! the main loop drains the queue exactly once per frame. Keeping the event
//! type platform-neutral means no crate above this one depends on any host
//! windowing interface type.

mod queue;

pub use self::queue::{EventQueue, EventSender};

use crate::input::{Key, MouseButton};

/// A transient record of one raw input occurrence.
///
/// Produced by the platform's event source, consumed exactly once by the
/// per-frame poll, then discarded. Mouse coordinates arrive in
/// presentation-surface (window) pixel space; the poll remaps them into
/// framebuffer space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key transitioned from released to pressed. The platform layer must
    /// not emit this for OS autorepeat; repeats surface only as `KeyTyped`.
    KeyDown {
        /// The key that was pressed.
        key: Key,
    },
    /// A key transitioned from pressed to released.
    KeyUp {
        /// The key that was released.
        key: Key,
    },
    /// A character of text was produced (including autorepeat).
    KeyTyped {
        /// The character produced by the press.
        ch: char,
    },
    /// A mouse button was pressed.
    MouseDown {
        /// The button that was pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseUp {
        /// The button that was released.
        button: MouseButton,
    },
    /// The cursor moved, in presentation-surface pixel coordinates.
    MouseMoved {
        /// The cursor x position within the window.
        x: f32,
        /// The cursor y position within the window.
        y: f32,
    },
    /// The scroll wheel moved.
    MouseScrolled {
        /// The vertical scroll amount, in lines.
        delta: f32,
    },
}

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

//! Platform-neutral key and mouse button identifiers.

/// A stable, platform-neutral keyboard key identifier.
///
/// The platform layer translates host keycodes into this enumeration, so
/// game code never sees a backend-specific key type. Identifies physical
/// key positions (US layout naming) rather than produced characters; typed
/// text is reported separately through the input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    // Digit row
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    // Arrows
    Left, Right, Up, Down,
    // Whitespace and editing
    Space, Enter, Tab, Backspace, Delete, Insert,
    // Navigation
    Home, End, PageUp, PageDown,
    // Modifiers
    ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
    CapsLock, Escape,
    // Punctuation
    Minus, Equal, BracketLeft, BracketRight, Backslash, Semicolon,
    Quote, Backquote, Comma, Period, Slash,
    // Function row
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    // Numpad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd, NumpadSubtract, NumpadMultiply, NumpadDivide,
    NumpadDecimal, NumpadEnter,
}

impl Key {
    /// Returns `true` for either shift key.
    #[inline]
    pub fn is_shift(&self) -> bool {
        matches!(self, Key::ShiftLeft | Key::ShiftRight)
    }

    /// Returns `true` for either control key.
    #[inline]
    pub fn is_control(&self) -> bool {
        matches!(self, Key::ControlLeft | Key::ControlRight)
    }

    /// Returns `true` for either alt key.
    #[inline]
    pub fn is_alt(&self) -> bool {
        matches!(self, Key::AltLeft | Key::AltRight)
    }
}

/// A stable, platform-neutral mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left (primary) mouse button.
    Left,
    /// The right (secondary) mouse button.
    Right,
    /// The middle mouse button, usually the scroll wheel.
    Middle,
    /// The "back" navigation button.
    Back,
    /// The "forward" navigation button.
    Forward,
    /// Any other mouse button, identified by its raw index.
    Other(u16),
}

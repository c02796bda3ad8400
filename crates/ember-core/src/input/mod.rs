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

//! Provides the stable key/button enumerations and the per-frame input
//! snapshot.
//!
//! [`InputState`] is the only input surface visible to game code: it is
//! rebuilt once per frame by replaying the events drained from the
//! [`EventQueue`](crate::event::EventQueue), turning the asynchronous raw
//! stream into deterministic, edge-triggered down/held/up sets.

mod key;
mod state;

pub use self::key::{Key, MouseButton};
pub use self::state::InputState;

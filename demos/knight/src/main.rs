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

//! A walking knight: arrow keys move, the sprite sheet animates, and the
//! knight faces the direction it last walked.

use anyhow::Context as _;
use ember_sdk::prelude::*;

const RESOLUTION: Extent2D = Extent2D::new(128, 128);
const FRAME_SIZE: f32 = 16.0;
const ANIMATION_FRAMES: f32 = 6.0;
const ANIMATION_FPS: f32 = 10.0;
const WALK_SPEED: f32 = 50.0;

struct KnightGame {
    knight: Texture,
    background: Texture,
    position: Vec2,
    face_left: bool,
    frame_index: f32,
}

impl Application for KnightGame {
    fn init(ctx: &mut EngineContext) -> anyhow::Result<Self> {
        log::info!("KnightGame: loading textures...");
        Ok(Self {
            knight: ctx.load_texture("knight.png").context("loading knight sprite sheet")?,
            background: ctx
                .load_texture("background.png")
                .context("loading background")?,
            position: RESOLUTION.as_vec2() * 0.5,
            face_left: false,
            frame_index: 0.0,
        })
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let dt = ctx.delta_seconds();

        ctx.frame()
            .draw_texture(&self.background, Vec2::ZERO, &DrawOptions::default());

        let mut offset = Vec2::ZERO;
        if ctx.input().key_held(Key::Left) {
            offset = offset + Vec2::new(-1.0, 0.0);
            self.face_left = true;
        }
        if ctx.input().key_held(Key::Right) {
            offset = offset + Vec2::new(1.0, 0.0);
            self.face_left = false;
        }
        if ctx.input().key_held(Key::Up) {
            offset = offset + Vec2::new(0.0, -1.0);
        }
        if ctx.input().key_held(Key::Down) {
            offset = offset + Vec2::new(0.0, 1.0);
        }
        self.position = self.position + offset * (WALK_SPEED * dt);

        // Advance through the 6-frame animation and pick the current frame:
        // idle poses are on the top row of the sheet, walking below them.
        self.frame_index = (self.frame_index + ANIMATION_FPS * dt) % ANIMATION_FRAMES;
        let idle = offset.length() == 0.0;
        let frame_bounds = Bounds2::from_xywh(
            self.frame_index.trunc() * FRAME_SIZE,
            if idle { 0.0 } else { FRAME_SIZE },
            FRAME_SIZE,
            FRAME_SIZE,
        );

        let draw_position = self.position + Vec2::new(-8.0, -8.0);
        let mirror = if self.face_left {
            MirrorMode::Horizontal
        } else {
            MirrorMode::None
        };
        ctx.frame().draw_texture(
            &self.knight,
            draw_position,
            &DrawOptions {
                mirror,
                source: Some(frame_bounds),
                ..DrawOptions::default()
            },
        );
    }
}

fn main() -> anyhow::Result<()> {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = EngineConfig {
        title: "Knight".to_string(),
        resolution: RESOLUTION,
        ..EngineConfig::default()
    };
    Engine::run::<KnightGame>(config)?;
    Ok(())
}

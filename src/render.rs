//! Scene drawing
//!
//! One pass over the scene state per frame, back to front: background,
//! clouds, smoke trail, enemies, lasers, player, touch buttons. Pure
//! presentation; all game state was already updated by the scene.

use macroquad::color::{Color, SKYBLUE, WHITE};
use macroquad::math::Vec2;
use macroquad::shapes::draw_circle;
use macroquad::texture::{draw_texture_ex, DrawTextureParams, Texture2D};
use macroquad::window::clear_background;

use crate::assets::GameAssets;
use crate::game::particles::SmokeTrail;
use crate::scene::Scene;
use crate::ui::Rect;

/// Alpha for the on-screen buttons.
const BUTTON_ALPHA: f32 = 0.8;

fn tint(alpha: f32) -> Color {
    Color::new(1.0, 1.0, 1.0, alpha)
}

/// Draw a texture centered on a point.
fn draw_centered(texture: &Texture2D, center: Vec2, params: DrawTextureParams, color: Color) {
    let size = params
        .dest_size
        .unwrap_or_else(|| Vec2::new(texture.width(), texture.height()));
    draw_texture_ex(
        texture,
        center.x - size.x * 0.5,
        center.y - size.y * 0.5,
        color,
        params,
    );
}

fn draw_in_rect(texture: &Texture2D, rect: Rect, color: Color) {
    draw_texture_ex(
        texture,
        rect.x,
        rect.y,
        color,
        DrawTextureParams {
            dest_size: Some(Vec2::new(rect.w, rect.h)),
            ..Default::default()
        },
    );
}

pub fn draw(scene: &Scene, assets: &GameAssets, now_ms: f64) {
    clear_background(SKYBLUE);

    if let Some(bg) = assets.texture("background") {
        draw_texture_ex(
            bg,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(scene.cfg.view_w, scene.cfg.view_h)),
                ..Default::default()
            },
        );
    }

    if let Some(cloud_tex) = assets.texture("cloud") {
        for cloud in &scene.clouds.clouds {
            draw_centered(cloud_tex, cloud.pos, DrawTextureParams::default(), WHITE);
        }
    }

    // Smoke trail; falls back to plain circles when the remote texture
    // didn't load
    let smoke_tex = assets.texture("smoke");
    for puff in scene.smoke.iter() {
        let alpha = tint(SmokeTrail::ALPHA);
        match smoke_tex {
            Some(tex) => {
                let size = Vec2::new(tex.width(), tex.height()) * puff.scale();
                draw_centered(
                    tex,
                    puff.pos,
                    DrawTextureParams {
                        dest_size: Some(size),
                        ..Default::default()
                    },
                    alpha,
                );
            }
            None => draw_circle(puff.pos.x, puff.pos.y, 24.0 * puff.scale(), alpha),
        }
    }

    if let Some(enemy_tex) = assets.texture("enemy") {
        for (_, enemy) in scene.enemies.iter() {
            let alpha = enemy.flash.alpha(now_ms);
            draw_centered(
                enemy_tex,
                enemy.pos,
                DrawTextureParams {
                    dest_size: Some(Vec2::new(enemy.size, enemy.size)),
                    rotation: enemy.rotation,
                    ..Default::default()
                },
                tint(alpha),
            );
        }
    }

    if let Some(sheet) = assets.sheet("laser") {
        let source = sheet.frame_rect(sheet.spec.first);
        for (_, laser) in scene.lasers.iter() {
            draw_centered(
                &sheet.texture,
                laser.pos,
                DrawTextureParams {
                    dest_size: Some(Vec2::new(sheet.spec.frame_w, sheet.spec.frame_h)),
                    source: Some(source),
                    ..Default::default()
                },
                WHITE,
            );
        }
    }

    if let Some(sheet) = assets.sheet("player") {
        let source = sheet.frame_rect(scene.player.anim.frame());
        draw_centered(
            &sheet.texture,
            scene.player.pos,
            DrawTextureParams {
                dest_size: Some(Vec2::new(sheet.spec.frame_w, sheet.spec.frame_h)),
                source: Some(source),
                flip_x: scene.player.flip_x,
                ..Default::default()
            },
            WHITE,
        );
    }

    let buttons = &scene.buttons;
    for (key, rect) in [
        ("left-btn", buttons.left),
        ("right-btn", buttons.right),
        ("shoot-btn", buttons.shoot),
    ] {
        if let Some(tex) = assets.texture(key) {
            draw_in_rect(tex, rect, tint(BUTTON_ALPHA));
        }
    }
}

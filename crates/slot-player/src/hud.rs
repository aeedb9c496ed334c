//! HUD overlay - reels, score line and banners
//!
//! Paints the whole cabinet through egui onto the background layer:
//! - the 3×3 symbol grid, each reel shifted by its current offset
//! - a gold frame around winning rows
//! - score / spin cost, the win banner and the game-over banner

use crate::assets::SymbolImages;
use slot_core::{GameConfig, Millis, Symbol, SymbolSource, REEL_COUNT, ROW_COUNT};
use slot_reels::layout::cell_position;
use slot_runtime::{GameState, MachinePhase, SlotMachine};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(128, 128, 128);
const GOLD: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);
const GAME_OVER_RED: egui::Color32 = egui::Color32::from_rgb(200, 30, 30);

/// Uploaded symbol faces
pub struct SymbolTextures {
    faces: Vec<(Symbol, egui::TextureHandle)>,
}

impl SymbolTextures {
    pub fn upload(ctx: &egui::Context, images: &SymbolImages) -> Self {
        let faces = images
            .iter()
            .map(|(symbol, pixels)| {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [pixels.width as usize, pixels.height as usize],
                    &pixels.data,
                );
                let handle = ctx.load_texture(symbol.name(), image, egui::TextureOptions::LINEAR);
                (symbol, handle)
            })
            .collect();
        Self { faces }
    }

    fn id(&self, symbol: Symbol) -> Option<egui::TextureId> {
        self.faces
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, handle)| handle.id())
    }
}

/// "Score: 80   Spin cost: 20"
pub fn status_line(state: &GameState) -> String {
    format!("Score: {}   Spin cost: {}", state.score, state.spin_cost)
}

/// Centre banner text and colour, if any
pub fn banner(state: &GameState, phase: MachinePhase) -> Option<(String, egui::Color32)> {
    if phase == MachinePhase::GameOver {
        return Some(("GAME OVER".to_string(), GAME_OVER_RED));
    }
    state.message.clone().map(|text| (text, GOLD))
}

/// Paint one frame of the cabinet
pub fn paint<S: SymbolSource>(
    ctx: &egui::Context,
    machine: &SlotMachine<S>,
    textures: &SymbolTextures,
    now: Millis,
) {
    let config: &GameConfig = machine.config();
    let display = &config.display;
    let painter = ctx.layer_painter(egui::LayerId::background());
    let screen = ctx.screen_rect();

    painter.rect_filled(screen, 0.0, BACKGROUND);

    let icon = egui::vec2(display.icon_size, display.icon_size);
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    for column in 0..REEL_COUNT {
        let offset = machine.reel_offset(column, now);
        let symbols = machine.reels().symbols(column);
        for row in 0..ROW_COUNT {
            let (x, y) = cell_position(display, column, row, offset);
            let rect = egui::Rect::from_min_size(egui::pos2(x, y), icon);
            if let Some(id) = textures.id(symbols[row]) {
                painter.image(id, rect, uv, egui::Color32::WHITE);
            }
        }
    }

    let state = machine.state();
    if machine.phase() == MachinePhase::Ready {
        for &row in &state.winning_rows {
            let left = display.reel_x[0];
            let right = display.reel_x[REEL_COUNT - 1] + display.icon_size;
            let top = display.row_y[row];
            let rect = egui::Rect::from_min_max(
                egui::pos2(left, top),
                egui::pos2(right, top + display.icon_size),
            )
            .expand(4.0);
            painter.rect_stroke(rect, 6.0, egui::Stroke::new(3.0, GOLD));
        }
    }

    painter.text(
        egui::pos2(20.0, 20.0),
        egui::Align2::LEFT_TOP,
        status_line(state),
        egui::FontId::proportional(28.0),
        egui::Color32::WHITE,
    );

    if machine.input().connected_gamepads() == 0 {
        painter.text(
            egui::pos2(20.0, display.height as f32 - 20.0),
            egui::Align2::LEFT_BOTTOM,
            "No controller connected",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
    }

    if let Some((text, color)) = banner(state, machine.phase()) {
        painter.text(
            egui::pos2(display.width as f32 / 2.0, display.height as f32 / 2.0),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(64.0),
            color,
        );
    }
}

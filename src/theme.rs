//! Gruvbox-dark palette for the editor window.

use egui::{Color32, Context, Visuals};

pub const BG: Color32 = Color32::from_rgb(0x28, 0x28, 0x28);
pub const BG_HARD: Color32 = Color32::from_rgb(0x1d, 0x20, 0x21);
pub const BG_ALT: Color32 = Color32::from_rgb(0x3c, 0x38, 0x36);
pub const FG: Color32 = Color32::from_rgb(0xeb, 0xdb, 0xb2);
pub const BUTTON: Color32 = Color32::from_rgb(0x50, 0x49, 0x45);
pub const GREEN: Color32 = Color32::from_rgb(0x98, 0x97, 0x1a);
pub const BLUE: Color32 = Color32::from_rgb(0x45, 0x85, 0x88);

pub fn apply(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BG;
    visuals.window_fill = BG;
    visuals.extreme_bg_color = BG_HARD;
    visuals.override_text_color = Some(FG);
    visuals.widgets.inactive.bg_fill = BUTTON;
    visuals.widgets.inactive.weak_bg_fill = BUTTON;
    visuals.widgets.hovered.bg_fill = BG_ALT;
    visuals.widgets.hovered.weak_bg_fill = BG_ALT;
    visuals.widgets.active.bg_fill = GREEN;
    visuals.widgets.active.weak_bg_fill = GREEN;
    visuals.selection.bg_fill = BLUE;
    ctx.set_visuals(visuals);
}

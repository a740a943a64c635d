use egui::{Align2, Color32, Key, RichText};

use crate::commands::{DialogKind, Session};

fn accent(kind: DialogKind) -> (&'static str, Color32) {
    match kind {
        DialogKind::Info => ("ℹ", Color32::from_rgb(30, 110, 200)),
        DialogKind::Warning => ("⚠", Color32::from_rgb(220, 150, 0)),
        DialogKind::Error => ("❌", Color32::from_rgb(200, 40, 40)),
    }
}

/// Draw the open dialog centered over the main window; OK, Enter or Escape dismisses it
pub fn show(ctx: &egui::Context, session: &mut Session) {
    let Some(dialog) = &session.dialog else {
        return;
    };
    let (icon, color) = accent(dialog.kind);
    let mut dismissed = false;

    egui::Window::new(format!("{} {}", icon, dialog.title))
        .id(egui::Id::new("modal_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&dialog.message).color(color));
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape)) {
        dismissed = true;
    }
    if dismissed {
        session.dismiss_dialog();
    }
}

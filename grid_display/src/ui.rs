// ui.rs - Presentation adapter: paints the controller's screen and turns input into events

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Vec2};
use std::time::Instant;

use conway::{CellColor, Controller, Event, Flow, Screen, SizePreset, TickRate};

const WHITE: Color32 = Color32::WHITE;
const MENU_COLOR: Color32 = Color32::from_rgb(100, 149, 237);
const BUTTON_SIZE: [f32; 2] = [140.0, 48.0];

pub struct LifeApp {
    controller: Controller,
    pending: Vec<Event>,          // Button clicks, applied at the start of the next frame
    grid_origin: Option<Pos2>,    // Top-left of the painted grid in the last frame
    last_tick: Instant,
}

impl LifeApp {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            pending: Vec::new(),
            grid_origin: None,
            last_tick: Instant::now(),
        }
    }

    /// Raw input -> controller event, read against the screen the user was looking at
    fn translate(&self, event: &egui::Event) -> Option<Event> {
        let screen = self.controller.screen();
        match event {
            egui::Event::Key { key, pressed: true, repeat: false, .. } => key_event(screen, *key),
            egui::Event::PointerButton { pos, button: egui::PointerButton::Primary, pressed: true, .. } => {
                if screen != Screen::Simulating {
                    return None;
                }
                let offset = *pos - self.grid_origin?;
                let (width, height) = self.controller.cell_dimensions().grid_extent();
                // Clicks outside the painted grid never reach the controller
                let inside = offset.x >= 0.0 && offset.y >= 0.0 && offset.x < width as f32 && offset.y < height as f32;
                inside.then_some(Event::PointerToggle { x: offset.x, y: offset.y })
            }
            _ => None,
        }
    }

    fn show_title(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 2.0 - 70.0);
            ui.label(RichText::new("Game of Life").size(36.0).color(WHITE));
            ui.add_space(30.0);
            ui.label(RichText::new("press spacebar to continue").size(14.0).color(WHITE));
        });
    }

    fn show_info(&self, ui: &mut egui::Ui) {
        let lines = [
            "To pause and resume the game press SPACEBAR",
            "To run one epoch press right arrow key",
            "To open menu press Escape key",
            "To clear the board press C",
        ];
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 2.0 - 160.0);
            for line in lines {
                ui.label(RichText::new(line).size(16.0).color(WHITE));
                ui.add_space(60.0);
            }
            ui.label(RichText::new("press spacebar to start").size(12.0).color(WHITE));
        });
    }

    fn show_grid(&mut self, ui: &mut egui::Ui) {
        let (display_w, display_h) = self.controller.display();
        let (response, painter) = ui.allocate_painter(Vec2::new(display_w as f32, display_h as f32), Sense::hover());
        let origin = response.rect.min;
        self.grid_origin = Some(origin);

        painter.rect_filled(response.rect, 0.0, WHITE);

        let cells = self.controller.cell_dimensions();
        let color = cell_color(self.controller.state().cell_color);
        for (row, col) in self.controller.grid().live_cells() {
            let (x, y, w, h) = cells.cell_rect(row, col);
            let rect = Rect::from_min_size(origin + Vec2::new(x as f32, y as f32), Vec2::new(w as f32, h as f32));
            painter.rect_filled(rect, 0.0, color);
        }

        let state = self.controller.state();
        let status = format!(
            "gen {}  live {}  {}",
            state.generation,
            self.controller.grid().live_count(),
            if state.running { "running" } else { "paused" }
        );
        painter.text(
            response.rect.right_bottom() - Vec2::new(6.0, 4.0),
            Align2::RIGHT_BOTTOM,
            status,
            FontId::monospace(12.0),
            Color32::DARK_GRAY,
        );
    }

    fn show_menu(&mut self, ui: &mut egui::Ui, screen: Screen) {
        let mut clicked = Vec::new();
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            match screen {
                Screen::MenuRoot => {
                    ui.label(RichText::new("MENU").size(24.0).color(WHITE));
                    ui.add_space(20.0);
                    button_row(ui, &[("FPS", Event::SelectFps), ("SIZE", Event::SelectSize), ("COLOR", Event::SelectColor)], &mut clicked);
                    ui.add_space(20.0);
                    button_row(ui, &[("BACK", Event::CloseMenu)], &mut clicked);
                }
                Screen::MenuFps => {
                    let current = self.controller.state().tick_rate;
                    ui.label(RichText::new(format!("FPS (now {})", current.per_second())).size(20.0).color(WHITE));
                    ui.add_space(100.0);
                    let labels: Vec<(String, Event)> = TickRate::ALL
                        .iter()
                        .map(|&rate| (format!("{} FPS", rate.per_second()), Event::PickFps(rate)))
                        .collect();
                    button_row(ui, &labels[..], &mut clicked);
                }
                Screen::MenuSize => {
                    let (rows, cols) = self.controller.grid().dimensions();
                    ui.label(RichText::new(format!("SIZE (now {}x{})", rows, cols)).size(20.0).color(WHITE));
                    ui.add_space(200.0);
                    let labels: Vec<(String, Event)> = SizePreset::ALL
                        .iter()
                        .map(|&preset| (preset.name().to_uppercase(), Event::PickSize(preset)))
                        .collect();
                    button_row(ui, &labels[..], &mut clicked);
                }
                Screen::MenuColor => {
                    ui.label(RichText::new("COLOR").size(20.0).color(WHITE));
                    ui.add_space(200.0);
                    ui.horizontal(|ui| {
                        centre_row(ui, CellColor::ALL.len());
                        for color in CellColor::ALL {
                            let button = egui::Button::new(RichText::new(color.name()).color(WHITE))
                                .fill(cell_color(color));
                            if ui.add_sized(BUTTON_SIZE, button).clicked() {
                                clicked.push(Event::PickColor(color));
                            }
                        }
                    });
                }
                _ => {}
            }
            if screen != Screen::MenuRoot {
                ui.add_space(20.0);
                ui.label(RichText::new("ESC to go back").size(12.0).color(WHITE));
            }
        });
        self.pending.extend(clicked);
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Drain input in order: last frame's button clicks, then this frame's raw events
        let raw = ctx.input(|i| i.events.clone());
        let mut events = std::mem::take(&mut self.pending);
        events.extend(raw.iter().filter_map(|event| self.translate(event)));

        // 2. Fixed cadence stepping
        let interval = self.controller.state().tick_rate.interval();
        let tick_due = self.last_tick.elapsed() >= interval;
        if tick_due {
            self.last_tick = Instant::now();
        }

        if self.controller.frame(events, tick_due) == Flow::Quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // 3. Render
        let screen = self.controller.screen();
        let background = if screen == Screen::Simulating { WHITE } else { MENU_COLOR };
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| match screen {
                Screen::Start => self.show_title(ui),
                Screen::Info => self.show_info(ui),
                Screen::Simulating => self.show_grid(ui),
                menu => self.show_menu(ui, menu),
            });

        if !self.pending.is_empty() {
            ctx.request_repaint();
        } else if self.controller.state().running && screen == Screen::Simulating {
            ctx.request_repaint_after(interval.saturating_sub(self.last_tick.elapsed()));
        }
    }
}

fn key_event(screen: Screen, key: egui::Key) -> Option<Event> {
    use egui::Key;
    if key == Key::Q {
        return Some(Event::Quit);
    }
    match screen {
        Screen::Start | Screen::Info => (key == Key::Space).then_some(Event::Confirm),
        Screen::Simulating => match key {
            Key::Space => Some(Event::ToggleRun),
            Key::C => Some(Event::Reset),
            Key::ArrowRight => Some(Event::StepOnce),
            Key::Escape => Some(Event::OpenMenu),
            _ => None,
        },
        _ => matches!(key, Key::Escape | Key::Space).then_some(Event::CloseMenu),
    }
}

fn cell_color(color: CellColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Left padding that centres `count` buttons in the current row
fn centre_row(ui: &mut egui::Ui, count: usize) {
    let spacing = ui.spacing().item_spacing.x;
    let used = count as f32 * BUTTON_SIZE[0] + count.saturating_sub(1) as f32 * spacing;
    ui.add_space(((ui.available_width() - used) / 2.0).max(0.0));
}

fn button_row<S: AsRef<str>>(ui: &mut egui::Ui, buttons: &[(S, Event)], clicked: &mut Vec<Event>) {
    ui.horizontal(|ui| {
        centre_row(ui, buttons.len());
        for (label, event) in buttons {
            if ui.add_sized(BUTTON_SIZE, egui::Button::new(RichText::new(label.as_ref()).size(16.0))).clicked() {
                clicked.push(*event);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Key;

    #[test]
    fn space_means_different_things_per_screen() {
        assert_eq!(key_event(Screen::Start, Key::Space), Some(Event::Confirm));
        assert_eq!(key_event(Screen::Info, Key::Space), Some(Event::Confirm));
        assert_eq!(key_event(Screen::Simulating, Key::Space), Some(Event::ToggleRun));
        assert_eq!(key_event(Screen::MenuSize, Key::Space), Some(Event::CloseMenu));
    }

    #[test]
    fn escape_opens_and_closes_menus() {
        assert_eq!(key_event(Screen::Simulating, Key::Escape), Some(Event::OpenMenu));
        for screen in [Screen::MenuRoot, Screen::MenuFps, Screen::MenuSize, Screen::MenuColor] {
            assert_eq!(key_event(screen, Key::Escape), Some(Event::CloseMenu));
        }
        assert_eq!(key_event(Screen::Start, Key::Escape), None);
    }

    #[test]
    fn simulation_keys() {
        assert_eq!(key_event(Screen::Simulating, Key::C), Some(Event::Reset));
        assert_eq!(key_event(Screen::Simulating, Key::ArrowRight), Some(Event::StepOnce));
        assert_eq!(key_event(Screen::Simulating, Key::A), None);
        assert_eq!(key_event(Screen::MenuFps, Key::Q), Some(Event::Quit));
    }

    #[test]
    fn palette_maps_to_egui_colors() {
        assert_eq!(cell_color(CellColor::Black), Color32::BLACK);
        assert_eq!(cell_color(CellColor::Red), Color32::from_rgb(220, 20, 60));
    }
}

//! Main window: history view plus the selection overlay
//!
//! While selecting, the frozen frame is shown fullscreen and the drag
//! gesture is forwarded to the controller as press/drag/release messages.
//! Capture and recognition run synchronously on the UI thread; this is an
//! interactive single-user tool and one capture completes before the next
//! begins.

use eframe::egui;

use crate::capture::xcap_backend::XcapBackend;
use crate::config::AppConfig;
use crate::domain::Point;
use crate::export;
use crate::history::{History, HistoryMode};
use crate::ocr::TesseractEngine;
use crate::session::messages::Msg;
use crate::session::{Controller, Phase, Status};

/// Frames to wait after hiding the window before freezing the screen,
/// so the compositor has repainted what was underneath.
const HIDE_SETTLE_FRAMES: u8 = 2;
const HIDE_SETTLE_DELAY: std::time::Duration = std::time::Duration::from_millis(150);

pub struct TextsnipApp {
    controller: Controller<XcapBackend, TesseractEngine>,
    config: AppConfig,
    frame_texture: Option<egui::TextureHandle>,
    fullscreen: bool,
    window_hidden: bool,
    hidden_frames: u8,
}

impl TextsnipApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let controller = Controller::new(
            XcapBackend::new(),
            TesseractEngine::from_config(&config),
            config.history_mode,
        );
        Self {
            controller,
            config,
            frame_texture: None,
            fullscreen: false,
            window_hidden: false,
            hidden_frames: 0,
        }
    }

    fn sync_window_mode(&mut self, ctx: &egui::Context) {
        // The frame must be frozen with this window off the screen, or the
        // capture would contain the tool itself occluding the region the
        // user wants to grab.
        if self.controller.phase() == Phase::Hiding {
            if !self.window_hidden {
                ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
                self.window_hidden = true;
                self.hidden_frames = 0;
            } else if self.hidden_frames < HIDE_SETTLE_FRAMES {
                self.hidden_frames += 1;
            } else {
                std::thread::sleep(HIDE_SETTLE_DELAY);
                self.controller.update(Msg::WindowHidden);
            }
            ctx.request_repaint();
            return;
        }

        if self.window_hidden {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
            self.window_hidden = false;
        }

        let selecting = self.controller.phase() == Phase::Selecting;
        if selecting && !self.fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
            self.fullscreen = true;
        } else if !selecting && self.fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
            self.fullscreen = false;
        }
        if !selecting {
            self.frame_texture = None;
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Capture").clicked() {
                self.controller.update(Msg::CaptureRequested);
            }

            ui.separator();

            let mut mode = self.config.history_mode;
            ui.radio_value(&mut mode, HistoryMode::Table, "Table");
            ui.radio_value(&mut mode, HistoryMode::Flat, "Text");
            if mode != self.config.history_mode {
                self.config.history_mode = mode;
                self.config.save();
                self.controller.update(Msg::HistoryModeSet(mode));
            }

            ui.separator();

            let has_history = !self.controller.history().is_empty();
            if ui
                .add_enabled(has_history, egui::Button::new("Save As…"))
                .clicked()
            {
                if let Some(path) = export::prompt_destination() {
                    self.controller.update(Msg::ExportRequested(path));
                }
            }
            if ui
                .add_enabled(has_history, egui::Button::new("Clear"))
                .clicked()
            {
                self.controller.update(Msg::HistoryCleared);
            }
        });
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        match self.controller.status() {
            Status::Ready => {
                ui.label("Drag a selection over the screen to grab text.");
            }
            Status::Info(msg) => {
                ui.label(msg);
            }
            Status::Error(msg) => {
                ui.colored_label(egui::Color32::RED, msg);
            }
        }
    }

    fn history_view(&mut self, ui: &mut egui::Ui) {
        match self.controller.history_mut() {
            History::Table(table) => {
                if table.is_empty() {
                    ui.weak("No captures yet.");
                    return;
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("history-table")
                        .num_columns(2)
                        .striped(true)
                        .min_col_width(120.0)
                        .show(ui, |ui| {
                            ui.strong("History");
                            ui.strong("Notes");
                            ui.end_row();
                            for (i, row) in table.rows_mut().iter_mut().enumerate() {
                                ui.label(&row.text);
                                ui.add(
                                    egui::TextEdit::singleline(&mut row.note)
                                        .id_source(("history-note", i))
                                        .desired_width(f32::INFINITY),
                                );
                                ui.end_row();
                            }
                        });
                });
            }
            History::Flat(buffer) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(buffer.text_mut())
                            .desired_width(f32::INFINITY)
                            .desired_rows(16),
                    );
                });
            }
        }
    }

    /// Fullscreen frozen frame with the drag gesture mapped back into
    /// frame pixel coordinates.
    fn selection_overlay(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.update(Msg::SelectionCancelled);
            return;
        }

        let Some(frame) = self.controller.frame() else {
            return;
        };
        let frame_size = egui::vec2(frame.width() as f32, frame.height() as f32);

        let texture = self.frame_texture.get_or_insert_with(|| {
            let size = [frame.width() as usize, frame.height() as usize];
            let color = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
            ctx.load_texture("frozen-frame", color, egui::TextureOptions::LINEAR)
        });

        let avail = ui.available_size();
        let scale = (avail.x / frame_size.x).min(avail.y / frame_size.y);
        let display_size = frame_size * scale;

        let (area, response) = ui.allocate_exact_size(display_size, egui::Sense::drag());
        ui.painter().image(
            texture.id(),
            area,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let to_frame = |pos: egui::Pos2| -> Point {
            Point::new(
                ((pos.x - area.min.x) / scale).round() as i32,
                ((pos.y - area.min.y) / scale).round() as i32,
            )
        };

        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started() {
                let p = to_frame(pos);
                self.controller.update(Msg::pressed(p.x, p.y));
            } else if response.drag_released() {
                let p = to_frame(pos);
                self.controller.update(Msg::released(p.x, p.y));
            } else if response.dragged() {
                let p = to_frame(pos);
                self.controller.update(Msg::dragged(p.x, p.y));
            }
        }

        if let Some(outline) = self.controller.selection_outline() {
            let min = area.min + egui::vec2(outline.x as f32, outline.y as f32) * scale;
            let size = egui::vec2(outline.width as f32, outline.height as f32) * scale;
            let rect = egui::Rect::from_min_size(min, size);
            ui.painter()
                .rect_stroke(rect, 0.0, egui::Stroke::new(2.0, egui::Color32::RED));
        }
    }
}

impl eframe::App for TextsnipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_window_mode(ctx);

        if self.controller.phase() == Phase::Selecting {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(egui::Color32::BLACK))
                .show(ctx, |ui| {
                    self.selection_overlay(ctx, ui);
                });
            return;
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.status_line(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.history_view(ui);
        });
    }
}

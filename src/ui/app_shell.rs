use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui;

use crate::app::controller::ApplicationController;
use crate::app::events::AppEvent;
use crate::cache::thumbs::{Thumbnail, ThumbnailCache};
use crate::catalog::models::GameEntry;
use crate::catalog::queries;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x1A, 0x1A, 0x1A);
const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(0x31, 0x31, 0x31);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x09, 0xFF, 0x68);
const CARD_SPACING: f32 = 40.0;
const CARD_MARGIN: f32 = 20.0;
const CARD_MIN_HEIGHT: f32 = 520.0;

pub struct LauncherShell {
    controller: ApplicationController,
    thumbs: ThumbnailCache,
    textures: HashMap<PathBuf, egui::TextureHandle>,
    search: String,
}

impl LauncherShell {
    fn new(controller: ApplicationController) -> Self {
        let config = controller.config();
        let thumbs = ThumbnailCache::new(config.images_dir.clone(), config.icon_size);
        Self {
            search: controller.state().search.clone(),
            controller,
            thumbs,
            textures: HashMap::new(),
        }
    }

    fn show_cards(&mut self, ui: &mut egui::Ui) -> Option<usize> {
        let card_width = self.controller.config().card_width;
        let columns = queries::column_count(ui.available_width(), card_width, CARD_SPACING);
        let visible = self.controller.visible_entries();
        let mut clicked = None;

        if visible.is_empty() {
            ui.label(egui::RichText::new("No games to show").color(egui::Color32::GRAY));
            return None;
        }

        egui::Grid::new("game_cards")
            .spacing([CARD_SPACING, CARD_SPACING])
            .show(ui, |ui| {
                for (position, (index, entry)) in visible.iter().enumerate() {
                    let texture = self
                        .thumbs
                        .resolve_icon(entry)
                        .map(|thumb| texture_for(ui.ctx(), &mut self.textures, &thumb));

                    if draw_card(ui, entry, texture.as_ref(), card_width) {
                        clicked = Some(*index);
                    }

                    let (_, column) = queries::grid_position(position, columns);
                    if column + 1 == columns {
                        ui.end_row();
                    }
                }
            });

        clicked
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.state().notice.clone() else {
            return;
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("launch_notice")).show(ctx, |ui| {
            ui.set_max_width(480.0);
            ui.heading(notice.title);
            ui.add_space(4.0);
            ui.label(notice.detail);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || modal.should_close() {
            self.controller.dispatch(AppEvent::DismissNotice);
        }
    }
}

impl eframe::App for LauncherShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Game Launcher");
                ui.separator();
                let search = egui::TextEdit::singleline(&mut self.search).hint_text("Search");
                if ui.add(search).changed() {
                    self.controller
                        .dispatch(AppEvent::UpdateSearch(self.search.clone()));
                }
            });
        });

        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let state = self.controller.state();
                ui.label(format!(
                    "{} games, {} launched this session",
                    self.controller.catalog().len(),
                    state.launched
                ));
                let exit = egui::Button::new(egui::RichText::new("Exit").size(20.0).strong());
                if ui.add(exit).clicked() {
                    self.controller.dispatch(AppEvent::Quit);
                }
            });
        });

        let mut launch = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        launch = self.show_cards(ui);
                    });
            });

        if let Some(index) = launch {
            self.controller.dispatch(AppEvent::Launch(index));
        }

        self.show_notice(ctx);

        if self.controller.state().quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Uploads a thumbnail once and reuses the texture for later frames.
fn texture_for(
    ctx: &egui::Context,
    textures: &mut HashMap<PathBuf, egui::TextureHandle>,
    thumb: &Thumbnail,
) -> egui::TextureHandle {
    textures
        .entry(thumb.source.clone())
        .or_insert_with(|| {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [thumb.width() as usize, thumb.height() as usize],
                thumb.pixels.as_raw(),
            );
            ctx.load_texture(
                thumb.source.to_string_lossy(),
                image,
                egui::TextureOptions::LINEAR,
            )
        })
        .clone()
}

/// Returns true when the card's Start button was clicked.
fn draw_card(
    ui: &mut egui::Ui,
    entry: &GameEntry,
    texture: Option<&egui::TextureHandle>,
    card_width: f32,
) -> bool {
    let inner_width = card_width - 2.0 * CARD_MARGIN;

    egui::Frame::group(ui.style())
        .fill(CARD_FILL)
        .inner_margin(CARD_MARGIN)
        .show(ui, |ui| {
            ui.set_width(inner_width);
            ui.set_min_height(CARD_MIN_HEIGHT);

            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                match texture {
                    Some(texture) => ui.image((texture.id(), texture.size_vec2())),
                    None => ui.label(egui::RichText::new("No Image").color(egui::Color32::WHITE)),
                };
                ui.add_space(15.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(entry.display_name())
                            .size(24.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .wrap(),
                );
            });

            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(entry.display_desc())
                            .size(14.0)
                            .color(egui::Color32::WHITE),
                    )
                    .wrap(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(entry.display_cat())
                            .size(14.0)
                            .strong()
                            .color(ACCENT),
                    );
                });
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                let start = egui::Button::new(
                    egui::RichText::new("Start")
                        .size(14.0)
                        .strong()
                        .color(egui::Color32::BLACK),
                )
                .fill(ACCENT);
                ui.add_sized([inner_width, 32.0], start).clicked()
            })
            .inner
        })
        .inner
}

pub fn launch_window(controller: ApplicationController) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game Launcher")
            .with_inner_size([1280.0, 900.0])
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        "game-launcher",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(LauncherShell::new(controller)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}

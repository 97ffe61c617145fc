//! Kinoflow - movie catalog browser
//! Search, filter and sort a built-in catalog, inspect titles and keep a local watchlist

// Hide console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Use mimalloc for faster memory allocation (Linux, macOS)
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use chrono::Datelike;
use eframe::egui;
use std::time::Duration;
use tracing::{info, warn};

mod catalog;
mod config;
mod details;
mod favorites;
mod filter;
mod images;
mod models;
mod render;
mod storage;

use catalog::{Catalog, TRENDING_COUNT};
use config::AppConfig;
use details::{DetailsController, ExternalPlayer, Overlay, PlayerState};
use favorites::FavoritesStore;
use images::{CoversSource, ImageCache, ImageSlot};
use models::*;
use render::{CardView, DetailsView, HeroView, ImageKind};
use storage::{LocalStore, THEME_KEY};

const CARD_WIDTH: f32 = 190.0;
const POSTER_HEIGHT: f32 = 240.0;
const TRENDING_POSTER_HEIGHT: f32 = 180.0;
const TRENDING_SCROLL_STEP: f32 = 480.0;
const DETAILS_POSTER_SIZE: [f32; 2] = [200.0, 300.0];

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kinoflow=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

/// Window icon: fuchsia rounded square with a white play triangle
fn load_icon() -> egui::IconData {
    let size: usize = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let nx = x as f32 / size as f32;
            let ny = y as f32 / size as f32;

            let corner_radius = 0.15;
            let dx = (corner_radius - nx).max(nx - (1.0 - corner_radius)).max(0.0);
            let dy = (corner_radius - ny).max(ny - (1.0 - corner_radius)).max(0.0);
            if dx * dx + dy * dy > corner_radius * corner_radius {
                continue; // transparent corner
            }

            // Play triangle pointing right, centered
            let px = nx - 0.36;
            let py = ny - 0.5;
            let in_play = (0.0..=0.34).contains(&px) && py.abs() <= (0.34 - px) * 0.6;

            let (r, g, b) = if in_play {
                (255, 255, 255)
            } else {
                // #d946ef to #7c3aed
                let t = (nx + ny) * 0.5;
                (
                    (217.0 + (124.0 - 217.0) * t) as u8,
                    (70.0 + (58.0 - 70.0) * t) as u8,
                    (239.0 + (237.0 - 239.0) * t) as u8,
                )
            };
            rgba[idx] = r;
            rgba[idx + 1] = g;
            rgba[idx + 2] = b;
            rgba[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}

fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    // Symbol fallback for ★ ❤ ♡ on systems where the bundled fonts miss them
    #[cfg(target_os = "windows")]
    let symbol_paths = ["C:\\Windows\\Fonts\\seguisym.ttf", "C:\\Windows\\Fonts\\seguiemj.ttf"];
    #[cfg(target_os = "linux")]
    let symbol_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ];
    #[cfg(target_os = "macos")]
    let symbol_paths = ["/System/Library/Fonts/Apple Symbols.ttf", "/System/Library/Fonts/Helvetica.ttc"];
    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    let symbol_paths: [&str; 0] = [];

    for path in symbol_paths {
        if let Ok(font_data) = std::fs::read(path) {
            fonts.font_data.insert(
                "symbols".to_owned(),
                egui::FontData::from_owned(font_data).into(),
            );
            fonts.families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .push("symbols".to_owned());
            break;
        }
    }

    ctx.set_fonts(fonts);
}

fn apply_font_size(ctx: &egui::Context, size: u32) {
    let size = size as f32;
    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            font.size = match text_style {
                egui::TextStyle::Heading => size + 8.0,
                egui::TextStyle::Small => size - 3.0,
                _ => size,
            };
        }
    });
}

fn main() -> Result<(), eframe::Error> {
    init_logging();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 600.0])
            .with_icon(load_icon()),
        vsync: true,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "KinoFlow",
        options,
        Box::new(|cc| {
            install_fonts(&cc.egui_ctx);
            Ok(Box::new(KinoflowApp::new(&cc.egui_ctx)))
        }),
    )
}

/// What the user asked for while the frame was drawn; applied afterwards
enum UiAction {
    Open { id: &'static str, autoplay: bool },
    ToggleFavorite(&'static str),
}

struct KinoflowApp {
    catalog: Catalog,
    view: ViewState,
    visible: Vec<&'static CatalogItem>,
    favorites: FavoritesStore,
    details: DetailsController<ExternalPlayer>,
    images: ImageCache,
    config: AppConfig,
    theme: Theme,

    // Raw text of the year fields, applied on Enter / focus loss
    year_min_input: String,
    year_max_input: String,

    // Trending strip scroll
    trending_offset: f32,
    pending_trending_scroll: Option<f32>,

    show_settings: bool,
    status_message: String,
    footer_year: i32,
}

impl KinoflowApp {
    fn new(ctx: &egui::Context) -> Self {
        let config = AppConfig::load();
        let store = LocalStore::open(storage::default_storage_path());
        let theme = Theme::from_stored(store.get(THEME_KEY));

        let catalog = Catalog::builtin();
        for problem in catalog.validate() {
            warn!("catalog: {}", problem);
        }
        info!(
            items = catalog.items().len(),
            genres = catalog.genres().len(),
            "catalog loaded"
        );

        apply_font_size(ctx, config.font_size);

        let view = ViewState::default();
        let mut app = Self {
            catalog,
            year_min_input: view.year_min.to_string(),
            year_max_input: view.year_max.to_string(),
            view,
            visible: Vec::new(),
            favorites: FavoritesStore::new(store),
            details: DetailsController::new(
                ExternalPlayer::new(&config.external_player),
                &config.trailer_url,
            ),
            images: ImageCache::new(CoversSource::parse(&config.covers_source)),
            config,
            theme,
            trending_offset: 0.0,
            pending_trending_scroll: None,
            show_settings: false,
            status_message: "Готово".to_string(),
            footer_year: chrono::Local::now().year(),
        };
        app.refresh();
        app
    }

    /// Re-run the filter/sort pipeline after any change to the view state
    fn refresh(&mut self) {
        self.visible = filter::apply_filters(self.catalog.items(), &self.view, |id| {
            self.favorites.has(id)
        });
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.favorites.storage_mut().set(THEME_KEY, theme.as_str());
    }

    fn reset_filters(&mut self) {
        self.view.reset();
        self.year_min_input = self.view.year_min.to_string();
        self.year_max_input = self.view.year_max.to_string();
        self.refresh();
        self.status_message = "Фильтры сброшены".to_string();
    }

    fn apply_settings(&mut self, ctx: &egui::Context) {
        self.images.set_source(CoversSource::parse(&self.config.covers_source));
        self.details
            .playback_mut()
            .set_command(&self.config.external_player);
        self.details.set_trailer_url(&self.config.trailer_url);
        apply_font_size(ctx, self.config.font_size);
        self.config.save();
        self.status_message = "Настройки сохранены".to_string();
    }

    fn handle_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Open { id, autoplay } => {
                    self.details.open(id, autoplay);
                }
                UiAction::ToggleFavorite(id) => {
                    let added = self.favorites.toggle(id);
                    let title = self.catalog.find(id).map(|m| m.title).unwrap_or(id);
                    self.status_message = if added {
                        format!("«{}» добавлен в мой список", title)
                    } else {
                        format!("«{}» убран из моего списка", title)
                    };
                }
            }
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("🎬 KinoFlow")
                        .strong()
                        .size(20.0)
                        .color(egui::Color32::from_rgb(217, 70, 239)),
                );
                ui.separator();

                let mut nav_changed = false;
                for nav in NavSection::ALL {
                    let label = match nav {
                        NavSection::MyList => format!("{} ({})", nav.label(), self.favorites.ids().len()),
                        _ => nav.label().to_string(),
                    };
                    if ui.selectable_label(self.view.nav == nav, label).clicked() && self.view.nav != nav {
                        self.view.nav = nav;
                        nav_changed = true;
                    }
                }
                if nav_changed {
                    self.refresh();
                }

                ui.separator();

                let search = ui.add(
                    egui::TextEdit::singleline(&mut self.view.query)
                        .hint_text("🔍 Поиск фильмов и сериалов")
                        .desired_width(260.0),
                );
                if search.changed() {
                    self.refresh();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Настройки").clicked() {
                        self.show_settings = true;
                    }
                    if ui.selectable_label(self.theme == Theme::Dark, "🌙").on_hover_text("Тёмная тема").clicked() {
                        self.set_theme(Theme::Dark);
                    }
                    if ui.selectable_label(self.theme == Theme::Light, "☀").on_hover_text("Светлая тема").clicked() {
                        self.set_theme(Theme::Light);
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_filter_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("filters_panel")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Фильтры");
                ui.add_space(8.0);

                let mut changed = false;

                ui.label("Сортировка");
                egui::ComboBox::from_id_salt("sort_mode")
                    .selected_text(self.view.sort.label())
                    .show_ui(ui, |ui| {
                        for mode in SortMode::ALL {
                            if ui.selectable_value(&mut self.view.sort, mode, mode.label()).changed() {
                                changed = true;
                            }
                        }
                    });

                ui.add_space(8.0);
                ui.label("Год выпуска");
                ui.horizontal(|ui| {
                    let from = ui.add(egui::TextEdit::singleline(&mut self.year_min_input).desired_width(60.0));
                    if from.lost_focus() {
                        self.view.set_year_min_input(&self.year_min_input);
                        self.year_min_input = self.view.year_min.to_string();
                        changed = true;
                    }
                    ui.label("—");
                    let to = ui.add(egui::TextEdit::singleline(&mut self.year_max_input).desired_width(60.0));
                    if to.lost_focus() {
                        self.view.set_year_max_input(&self.year_max_input);
                        self.year_max_input = self.view.year_max.to_string();
                        changed = true;
                    }
                });
                ui.label(
                    egui::RichText::new(format!("от {} до {}", YEAR_LOWER_BOUND, YEAR_UPPER_BOUND)).weak().small(),
                );

                ui.add_space(8.0);
                ui.label("Жанры");
                ui.horizontal_wrapped(|ui| {
                    for genre in self.catalog.genres() {
                        let selected = self.view.genres.contains(*genre);
                        if ui.selectable_label(selected, *genre).clicked() {
                            self.view.toggle_genre(genre);
                            changed = true;
                        }
                    }
                });

                if changed {
                    self.refresh();
                }

                ui.add_space(12.0);
                if ui.button("↺ Сбросить").clicked() {
                    self.reset_filters();
                }
            });
    }

    fn show_catalog(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let hero = self.catalog.hero().map(HeroView::new);
        let trending = render::cards(&self.catalog.trending(TRENDING_COUNT), |id| self.favorites.has(id));
        let cards = render::cards(&self.visible, |id| self.favorites.has(id));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("catalog_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    if let Some(hero) = &hero {
                        show_hero(ui, &mut self.images, hero, actions);
                        ui.add_space(16.0);
                    }

                    // Trending strip
                    ui.horizontal(|ui| {
                        ui.heading("В тренде");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("▶").clicked() {
                                self.pending_trending_scroll = Some(self.trending_offset + TRENDING_SCROLL_STEP);
                            }
                            if ui.button("◀").clicked() {
                                self.pending_trending_scroll =
                                    Some((self.trending_offset - TRENDING_SCROLL_STEP).max(0.0));
                            }
                        });
                    });

                    let mut strip = egui::ScrollArea::horizontal()
                        .id_salt("trending_strip")
                        .auto_shrink([false, true]);
                    if let Some(offset) = self.pending_trending_scroll.take() {
                        strip = strip.horizontal_scroll_offset(offset);
                    }
                    let strip_output = strip.show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for card in &trending {
                                show_card(ui, &mut self.images, card, TRENDING_POSTER_HEIGHT, actions);
                            }
                        });
                    });
                    self.trending_offset = strip_output.state.offset.x;

                    ui.add_space(16.0);
                    ui.heading(format!("{} ({})", self.view.nav.label(), cards.len()));
                    ui.add_space(8.0);

                    if cards.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(egui::RichText::new("Ничего не найдено").size(18.0).strong());
                            ui.label(egui::RichText::new("Попробуйте изменить запрос или сбросить фильтры").weak());
                        });
                    } else {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                            for card in &cards {
                                show_card(ui, &mut self.images, card, POSTER_HEIGHT, actions);
                            }
                        });
                    }
                });
        });
    }

    fn show_details(&mut self, ctx: &egui::Context) {
        let Some(id) = self.details.current() else { return };
        let Some(item) = self.catalog.find(id) else {
            warn!(id, "details requested for unknown item");
            self.details.close();
            return;
        };

        let view = DetailsView::new(item, self.favorites.has(id));
        let player = match self.details.state() {
            Overlay::Open { player, .. } => player.clone(),
            Overlay::Closed => PlayerState::Hidden,
        };
        let playing = self.details.is_playing();

        let mut close = false;
        let mut toggle_favorite = false;
        let mut play = false;
        let mut start = false;
        let mut stop = false;

        let modal = egui::Modal::new(egui::Id::new("details_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(160))
            .show(ctx, |ui| {
                ui.set_width(680.0);

                ui.horizontal(|ui| {
                    ui.heading(view.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").on_hover_text("Закрыть").clicked() {
                            close = true;
                        }
                    });
                });
                ui.separator();

                ui.horizontal_top(|ui| {
                    show_image(
                        ui,
                        &mut self.images,
                        view.id,
                        view.title,
                        ImageKind::Poster,
                        egui::vec2(DETAILS_POSTER_SIZE[0], DETAILS_POSTER_SIZE[1]),
                    );

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&view.rating)
                                .strong()
                                .color(egui::Color32::GOLD),
                        );
                        ui.label(egui::RichText::new(&view.meta).weak());
                        ui.add_space(8.0);
                        ui.add(egui::Label::new(view.description).wrap());
                        ui.add_space(12.0);

                        ui.horizontal(|ui| {
                            if ui.button("▶ Смотреть").clicked() {
                                play = true;
                            }
                            if ui.button(view.favorite_label).clicked() {
                                toggle_favorite = true;
                            }
                        });
                    });
                });

                if let PlayerState::Loaded { url } = &player {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("🎞 Трейлер");
                        if playing {
                            if ui.button("⏹ Стоп").clicked() {
                                stop = true;
                            }
                            ui.spinner();
                        } else if ui.button("▶ Запустить").clicked() {
                            start = true;
                        }
                    });
                    ui.label(egui::RichText::new(url).weak().small());
                }
            });

        if modal.should_close() {
            close = true;
        }

        if play {
            if let Err(e) = self.details.trigger_play() {
                warn!(error = %e, "failed to start player");
                self.status_message = format!("Не удалось запустить плеер: {}", e);
            }
        }
        if start {
            if let Err(e) = self.details.start_playback() {
                warn!(error = %e, "failed to start player");
                self.status_message = format!("Не удалось запустить плеер: {}", e);
            }
        }
        if stop {
            self.details.stop_playback();
        }
        if toggle_favorite {
            self.handle_actions(vec![UiAction::ToggleFavorite(id)]);
            // Drops the item from "Мой список" right away while the overlay stays open
            self.refresh();
        }
        if close {
            self.details.close();
        }

        if playing {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        egui::Window::new("⚙ Настройки")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Обложки:");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.config.covers_source)
                                    .hint_text("covers или https://…")
                                    .desired_width(260.0),
                            )
                            .on_hover_text("Папка или адрес с файлами <id>.jpg и <id>-backdrop.jpg");
                            if ui.button("📁").on_hover_text("Выбрать папку").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .set_title("Папка с обложками")
                                    .pick_folder()
                                {
                                    self.config.covers_source = path.display().to_string();
                                }
                            }
                        });
                        ui.end_row();

                        ui.label("Плеер:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.config.external_player)
                                .hint_text("ffplay, mpv, vlc…")
                                .desired_width(260.0),
                        );
                        ui.end_row();

                        ui.label("Трейлер:");
                        ui.add(egui::TextEdit::singleline(&mut self.config.trailer_url).desired_width(260.0));
                        ui.end_row();

                        ui.label("Шрифт:");
                        ui.add(egui::Slider::new(&mut self.config.font_size, 10..=24));
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("💾 Сохранить").clicked() {
                        self.apply_settings(ctx);
                        self.show_settings = false;
                    }
                    if ui.button("Отмена").clicked() {
                        self.config = AppConfig::load();
                        self.show_settings = false;
                    }
                });
            });
    }
}

impl eframe::App for KinoflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.images.poll(ctx);

        // Apply theme
        match self.theme {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        }

        self.show_top_panel(ctx);

        // Bottom panel - Status
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                let loading = self.images.in_flight();
                if loading > 0 {
                    ui.separator();
                    ui.spinner();
                    ui.label(format!("Загрузка обложек: {}", loading));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format!("© {} KinoFlow", self.footer_year)).weak());
                });
            });
        });

        self.show_filter_panel(ctx);

        let mut actions = Vec::new();
        self.show_catalog(ctx, &mut actions);
        self.handle_actions(actions);

        self.show_details(ctx);
        self.show_settings_window(ctx);
    }
}

fn show_hero(ui: &mut egui::Ui, images: &mut ImageCache, hero: &HeroView, actions: &mut Vec<UiAction>) {
    let width = ui.available_width();
    let height = (width * 9.0 / 16.0).min(340.0);
    let backdrop = show_image(ui, images, hero.id, hero.title, ImageKind::Backdrop, egui::vec2(width, height));

    // Text and buttons over the lower-left part of the backdrop
    let text_rect = egui::Rect::from_min_max(
        backdrop.rect.left_bottom() + egui::vec2(24.0, -150.0),
        backdrop.rect.right_bottom() - egui::vec2(24.0, 16.0),
    );
    ui.painter().rect_filled(text_rect.expand(8.0), 8.0, egui::Color32::from_black_alpha(140));
    ui.put(text_rect, |ui: &mut egui::Ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(hero.title)
                    .size(28.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(egui::RichText::new(&hero.meta).color(egui::Color32::LIGHT_GRAY));
            ui.add(egui::Label::new(egui::RichText::new(hero.description).color(egui::Color32::LIGHT_GRAY)).truncate());
            ui.horizontal(|ui| {
                if ui.button("▶ Смотреть").clicked() {
                    actions.push(UiAction::Open { id: hero.id, autoplay: true });
                }
                if ui.button("Подробнее").clicked() {
                    actions.push(UiAction::Open { id: hero.id, autoplay: false });
                }
            });
        })
        .response
    });
}

fn show_card(
    ui: &mut egui::Ui,
    images: &mut ImageCache,
    card: &CardView,
    poster_height: f32,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                let poster = show_image(
                    ui,
                    images,
                    card.id,
                    card.title,
                    ImageKind::Poster,
                    egui::vec2(CARD_WIDTH, poster_height),
                );
                if poster.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    actions.push(UiAction::Open { id: card.id, autoplay: false });
                }

                ui.horizontal(|ui| {
                    ui.set_max_width(CARD_WIDTH);
                    ui.label(egui::RichText::new(&card.rating).color(egui::Color32::GOLD));
                    ui.add(egui::Label::new(egui::RichText::new(card.title).strong()).truncate());
                });

                ui.horizontal(|ui| {
                    if ui.button("▶ Смотреть").clicked() {
                        actions.push(UiAction::Open { id: card.id, autoplay: true });
                    }
                    if ui.button("Подробнее").clicked() {
                        actions.push(UiAction::Open { id: card.id, autoplay: false });
                    }
                    if ui.button(card.favorite).on_hover_text("В мой список").clicked() {
                        actions.push(UiAction::ToggleFavorite(card.id));
                    }
                });
            });
        });
}

/// Draw a poster/backdrop, or the labeled placeholder once it failed to load
fn show_image(
    ui: &mut egui::Ui,
    images: &mut ImageCache,
    id: &str,
    title: &str,
    kind: ImageKind,
    size: egui::Vec2,
) -> egui::Response {
    let ctx = ui.ctx().clone();
    let (texture, failed) = match images.request(&ctx, id, kind) {
        ImageSlot::Ready(texture) => (Some(texture.clone()), false),
        ImageSlot::Loading => (None, false),
        ImageSlot::Failed => (None, true),
    };

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if let Some(texture) = texture {
        egui::Image::new(egui::load::SizedTexture::new(texture.id(), size))
            .corner_radius(6.0)
            .paint_at(ui, rect);
    } else if failed {
        let placeholder = images.placeholder(&ctx, kind);
        egui::Image::new(egui::load::SizedTexture::new(placeholder.id(), size))
            .corner_radius(6.0)
            .paint_at(ui, rect);

        let galley = ui.painter().layout(
            title.to_string(),
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(229),
            rect.width() - 24.0,
        );
        let pos = rect.center() - galley.size() / 2.0;
        ui.painter().galley(pos, galley, egui::Color32::from_gray(229));
    } else {
        ui.painter().rect_filled(rect, 6.0, egui::Color32::from_gray(30));
        ui.put(
            egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0)),
            egui::Spinner::new(),
        );
    }

    response
}

//! Field Mapper.
//!
//! Feldgrenzen auf einer Karte einzeichnen, bearbeiten und vermessen.
//! Fläche in Hektar, Umfang und Kantenlängen in Metern.

use eframe::egui;
use field_mapper::app::{FixedGeolocation, GeolocationProvider};
use field_mapper::storage::{FileStore, KeyValueStore};
use field_mapper::{ui, AppController, AppIntent, AppState, EditorOptions, HaversineGeodesic};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Field Mapper v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Field Mapper"),
            ..Default::default()
        };

        eframe::run_native(
            "Field Mapper",
            options,
            Box::new(|_cc| Ok(Box::new(MapperApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapperApp {
    state: AppState,
    controller: AppController,
    map_view: ui::MapViewState,
}

impl MapperApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let storage: Box<dyn KeyValueStore> =
            Box::new(FileStore::open(editor_options.storage_path()));
        let geolocation: Box<dyn GeolocationProvider> =
            Box::new(FixedGeolocation::new(editor_options.home_position));

        let state = AppState::with_services(
            editor_options,
            storage,
            Box::new(HaversineGeodesic::new()),
            geolocation,
        );
        log::info!("{} Felder geladen", state.field_count());

        Self {
            state,
            controller: AppController::new(),
            map_view: ui::MapViewState::new(),
        }
    }
}

impl eframe::App for MapperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.process_events(vec![AppIntent::FrameTick {
            now: Instant::now(),
        }]);

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.process_events(vec![AppIntent::MapUnmounted]);
    }
}

impl MapperApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_alert_dialog(ctx, &self.state.ui));
        events.extend(ui::show_save_map_dialog(ctx, &mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                events.extend(self.map_view.collect_viewport_events(ui, &response, &scene));
                ui::paint_scene(ui.painter_at(rect), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        let needs_redraw = std::mem::take(&mut self.state.ui.needs_redraw);
        if has_meaningful_events
            || needs_redraw
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.session.is_dragging()
            || self.state.ui.is_locating()
            || self.state.editor.measurement_debounce.is_pending()
        {
            ctx.request_repaint();
        }
    }
}

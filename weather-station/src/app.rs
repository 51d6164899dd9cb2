//! The per-frame presentation loop.

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use tokio::runtime::Handle;
use weather_core::{OpenMeteoProvider, Station, WeatherProvider};

use crate::fetch::{FetchPoll, FetchTask};
use crate::font;
use crate::readout::WeatherReadout;

const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(200.0, 40.0);

/// How soon to redraw while a fetch is outstanding.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct WeatherApp {
    station: Station,
    provider: Arc<dyn WeatherProvider>,
    readout: WeatherReadout,
    /// The at-most-one in-flight fetch.
    fetch: Option<FetchTask>,
    runtime: Handle,
}

impl WeatherApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Handle) -> Self {
        font::install_system_font(&cc.egui_ctx);
        apply_theme(&cc.egui_ctx);

        Self::with_provider(runtime, Arc::new(OpenMeteoProvider::new()), Station::default())
    }

    fn with_provider(
        runtime: Handle,
        provider: Arc<dyn WeatherProvider>,
        station: Station,
    ) -> Self {
        Self {
            station,
            provider,
            readout: WeatherReadout::default(),
            fetch: None,
            runtime,
        }
    }

    /// Start one background fetch unless one is already outstanding.
    fn start_fetch(&mut self, on_done: impl FnOnce() + Send + 'static) {
        if self.readout.loading {
            return;
        }
        self.readout.loading = true;
        self.fetch = Some(FetchTask::spawn(
            &self.runtime,
            Arc::clone(&self.provider),
            self.station.clone(),
            on_done,
        ));
    }

    /// Consume the completion message, if it has arrived.
    fn poll_fetch(&mut self) {
        let Some(task) = self.fetch.as_mut() else {
            return;
        };
        if let FetchPoll::Done(result) = task.try_poll() {
            if let Some(conditions) = result {
                self.readout.apply(&conditions);
            }
            self.readout.loading = false;
            self.fetch = None;
        }
    }
}

impl eframe::App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("Station Location: {}", self.station.label()));
            if let Some(local) = &self.station.local_name {
                ui.weak(local.as_str());
            }
            ui.separator();

            if self.readout.loading {
                ui.label("Fetching weather data...");
                self.poll_fetch();
                ctx.request_repaint_after(POLL_INTERVAL);
            } else {
                ui.label(format!("Current Temperature: {}", self.readout.temperature));
                ui.label(format!("Wind Condition: {}", self.readout.wind));
                if let Some(condition) = &self.readout.condition {
                    ui.label(format!("Sky: {condition}"));
                }
                if let Some(observed) = &self.readout.observed_at {
                    ui.weak(format!("Observed at {observed}"));
                }

                if ui.add(egui::Button::new("Update Weather").min_size(BUTTON_SIZE)).clicked() {
                    let repaint = ctx.clone();
                    self.start_fetch(move || repaint.request_repaint());
                }
            }

            if ui.add(egui::Button::new("Close Application").min_size(BUTTON_SIZE)).clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = egui::Color32::from_rgb(20, 20, 20);
    ctx.set_visuals(visuals);
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eframe::egui;
use eframe::CreationContext;

use crate::controller::{AmbientSignal, ThemeController};
use crate::settings::PreferenceFile;
use crate::theme::{self, Theme};

/// Live system color-scheme flag, written by the frame loop and read by
/// the controller. Platforms that report no system theme count as "not
/// dark".
#[derive(Clone, Default)]
pub struct SystemScheme {
    dark: Arc<AtomicBool>,
}

impl SystemScheme {
    fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
    }
}

impl AmbientSignal for SystemScheme {
    fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }
}

pub struct ThemeToggleApp {
    controller: ThemeController<PreferenceFile, SystemScheme>,
    scheme: SystemScheme,
    /// Last system theme the integration reported, None until it reports.
    seen_system_dark: Option<bool>,
    /// Visuals last pushed onto the egui context.
    applied: Option<Theme>,
}

impl ThemeToggleApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let system_dark = cc
            .integration_info
            .system_theme
            .map(|t| t == eframe::Theme::Dark);
        let scheme = SystemScheme::default();
        scheme.set_dark(system_dark.unwrap_or(false));
        let controller =
            ThemeController::new(PreferenceFile::default_location(), scheme.clone());
        Self {
            controller,
            scheme,
            seen_system_dark: system_dark,
            applied: None,
        }
    }

    /// Feed system color-scheme edges into the controller. The first
    /// report only establishes the baseline; edges after that fire the
    /// change handler.
    fn watch_system_theme(&mut self, frame: &eframe::Frame) {
        let Some(dark) = frame.info().system_theme.map(|t| t == eframe::Theme::Dark) else {
            return;
        };
        self.scheme.set_dark(dark);
        if self.seen_system_dark != Some(dark) {
            if self.seen_system_dark.is_some() {
                self.controller.system_changed(dark);
            }
            self.seen_system_dark = Some(dark);
        }
    }
}

impl eframe::App for ThemeToggleApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.watch_system_theme(frame);

        let active = self.controller.active_theme();
        if self.applied != Some(active) {
            theme::apply_visuals(ctx, active);
            self.applied = Some(active);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Appearance");
            ui.add_space(8.0);
            let description = self.controller.toggle_description();
            if ui
                .button(self.controller.toggle_label())
                .on_hover_text(description)
                .clicked()
            {
                self.controller.toggle();
            }
        });
    }
}

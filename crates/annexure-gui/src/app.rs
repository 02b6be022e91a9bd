//! Main application: form session, generate action, document hand-off

use std::path::{Path, PathBuf};

use annexure_app::config::Config;
use annexure_app::{default_file_name, generate, AnnexureDocument, FormSession, Renderer};
use annexure_domain::model::ShipmentForm;
use annexure_infra::{load_containers_csv, load_form_file};
use annexure_types::Error;
use eframe::egui::{self, Color32, RichText};
use tracing::{info, warn};

use crate::form_panel;

/// Last successfully generated document
struct Generated {
    /// Form values the document was rendered from
    form: ShipmentForm,
    document: AnnexureDocument,
    file_name: String,
}

impl Generated {
    /// False once any field has been edited since generation
    fn matches(&self, session: &FormSession) -> bool {
        self.form == session.read_form()
    }
}

/// Main application state
pub struct AnnexureApp {
    /// Form values, container count and row drafts
    session: FormSession,
    /// None when the document template failed to load
    renderer: Option<Renderer>,
    config: Config,
    generated: Option<Generated>,
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl AnnexureApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!("failed to load config, using defaults: {}", e);
            Config::default()
        });

        let (renderer, status_message) = match Renderer::from_config(&config) {
            Ok(renderer) => (Some(renderer), None),
            Err(e) => (None, Some((e.to_string(), true))),
        };

        Self {
            session: FormSession::new(),
            renderer,
            config,
            generated: None,
            status_message,
        }
    }

    fn on_generate(&mut self) {
        let Some(renderer) = &self.renderer else {
            return;
        };
        let form = self.session.read_form();
        match generate(&form, renderer) {
            Ok(document) => {
                self.generated = Some(Generated {
                    file_name: default_file_name(&form),
                    form,
                    document,
                });
                self.status_message = Some(("✅ Annexure-C generated".to_string(), false));
            }
            Err(e) => {
                // Entered values stay in the session for correction
                self.generated = None;
                self.status_message = Some((format!("❌ {}", e), true));
            }
        }
    }

    /// Any edit invalidates the generated document, as a fresh generate is
    /// needed to print the new values
    fn drop_stale_document(&mut self) {
        if self
            .generated
            .as_ref()
            .is_some_and(|generated| !generated.matches(&self.session))
        {
            self.generated = None;
            self.status_message = None;
        }
    }

    /// Hand the document to the browser, which owns the print dialog
    fn open_for_printing(&mut self) {
        let Some(generated) = &self.generated else {
            return;
        };
        let path = std::env::temp_dir().join(&generated.file_name);
        let result = generated
            .document
            .save(&path)
            .and_then(|_| open::that(&path).map_err(|e| Error::Open(e.to_string())));
        self.status_message = Some(match result {
            Ok(()) => {
                info!(path = %path.display(), "opened document for printing");
                (format!("Opened {} in the browser", path.display()), false)
            }
            Err(e) => (e.to_string(), true),
        });
    }

    fn save_document(&mut self) {
        let Some(generated) = &self.generated else {
            return;
        };
        let mut dialog = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(generated.file_name.clone());
        if let Some(dir) = &self.config.output_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        self.status_message = Some(match generated.document.save(&path) {
            Ok(()) => (format!("Saved {}", path.display()), false),
            Err(e) => (e.to_string(), true),
        });
    }

    fn load_form(&mut self, path: &Path) {
        match load_form_file(path) {
            Ok(input) => {
                self.session = FormSession::from_input_local(input);
                self.generated = None;
                self.status_message = Some((format!("Loaded {}", path.display()), false));
            }
            Err(e) => self.status_message = Some((e.to_string(), true)),
        }
    }

    fn import_containers(&mut self, path: &Path) {
        match load_containers_csv(path, self.session.today()) {
            Ok(rows) => {
                let count = rows.len();
                self.session.replace_containers(rows);
                self.status_message = Some((format!("Imported {} container(s)", count), false));
            }
            Err(e) => self.status_message = Some((e.to_string(), true)),
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("📂 Load form…").clicked() {
                if let Some(path) = pick_file("Form", &["toml", "json"]) {
                    self.load_form(&path);
                }
            }
            if ui.button("📋 Import containers CSV…").clicked() {
                if let Some(path) = pick_file("CSV", &["csv"]) {
                    self.import_containers(&path);
                }
            }
            if ui.button("Clear").clicked() {
                self.session.reset();
                self.generated = None;
                self.status_message = None;
            }
        });
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        if let Some((message, is_error)) = &self.status_message {
            let color = if *is_error {
                Color32::from_rgb(200, 50, 50)
            } else {
                Color32::from_rgb(50, 150, 50)
            };
            ui.label(RichText::new(message).color(color));
        }

        if self.generated.is_some() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("🖨️ Open for printing").clicked() {
                    self.open_for_printing();
                }
                if ui.button("💾 Save HTML…").clicked() {
                    self.save_document();
                }
            });
        }
    }
}

fn pick_file(name: &str, extensions: &[&str]) -> Option<PathBuf> {
    rfd::FileDialog::new().add_filter(name, extensions).pick_file()
}

impl eframe::App for AnnexureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("🚛 Vehicle Load Entry & Annexure-C Receipt");
            self.render_toolbar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                form_panel::show(ui, &mut self.session);
                self.drop_stale_document();

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                let button = egui::Button::new(RichText::new("Generate Annexure-C").strong());
                if ui.add_enabled(self.renderer.is_some(), button).clicked() {
                    self.on_generate();
                }
                ui.add_space(6.0);
                self.render_result(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annexure_app::Escaping;
    use chrono::NaiveDate;

    fn generated_from(session: &FormSession) -> Generated {
        let form = session.read_form();
        let renderer = Renderer::new("X", Escaping::Html).unwrap();
        Generated {
            document: generate(&form, &renderer).unwrap(),
            file_name: default_file_name(&form),
            form,
        }
    }

    #[test]
    fn test_generated_matches_until_edited() {
        let mut session = FormSession::with_today(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        session.gross_weight_kg = 100.0;
        session.net_weight_kg = 90.0;
        let generated = generated_from(&session);
        assert!(generated.matches(&session));

        session.package_type = "Bags".to_string();
        assert!(!generated.matches(&session));
    }

    #[test]
    fn test_container_edits_invalidate_document() {
        let mut session = FormSession::with_today(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let generated = generated_from(&session);

        session.containers_mut()[0].seal_number = "S1".to_string();
        assert!(!generated.matches(&session));

        session.containers_mut()[0].seal_number.clear();
        assert!(generated.matches(&session));

        session.set_container_count(2);
        assert!(!generated.matches(&session));
    }
}

use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Slider, Ui};

use crate::data::export::{export_file_name, to_csv};
use crate::data::filter::{ENERGY_DOMAIN, VOLTAGE_DOMAIN};
use crate::data::model::CompoundType;
use crate::data::stats::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} compounds loaded, {} matching",
                ds.len(),
                state.visible.len()
            ));
            ui.separator();

            // Export is unreachable for an empty view by design.
            let export = ui.add_enabled(
                !state.visible.is_empty(),
                egui::Button::new(format!("Export CSV ({})", state.visible.len())),
            );
            if export.clicked() {
                export_dialog(state);
            }

            if ui.button("Reset Filters").clicked() {
                state.reset_filters();
            }

            ui.separator();
            if ui
                .selectable_label(state.playground_open, "Playground")
                .clicked()
            {
                state.playground_open = !state.playground_open;
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and summary statistics
// ---------------------------------------------------------------------------

/// Render the left filter panel. Widget edits go into a scratch copy of the
/// spec; the state only ever sees whole replacement specs.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No database loaded.");
        return;
    };
    let total = dataset.len();
    let type_counts = dataset.type_counts.clone();

    let mut spec = state.spec.clone();
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Search formula");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut spec.search).hint_text("e.g. TiS2, Li0.5TiO2"))
                .changed();
            ui.add_space(6.0);

            ui.strong("Compound type");
            let selected_label = match spec.kind {
                None => format!("All Types ({total})"),
                Some(k) => k.label().to_string(),
            };
            ComboBox::from_id_salt("type_filter")
                .selected_text(selected_label)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(spec.kind.is_none(), format!("All Types ({total})"))
                        .clicked()
                    {
                        spec.kind = None;
                        changed = true;
                    }
                    for kind in CompoundType::ALL {
                        let n = type_counts.get(&kind).copied().unwrap_or(0);
                        if ui
                            .selectable_label(
                                spec.kind == Some(kind),
                                format!("{kind} ({n})"),
                            )
                            .clicked()
                        {
                            spec.kind = Some(kind);
                            changed = true;
                        }
                    }
                });
            ui.add_space(6.0);

            ui.strong(format!(
                "Voltage: {:.1} V – {:.1} V",
                spec.voltage_range.0, spec.voltage_range.1
            ));
            changed |= range_sliders(ui, "voltage", &mut spec.voltage_range, VOLTAGE_DOMAIN, 0.1);
            ui.add_space(6.0);

            ui.strong(format!(
                "Energy: {:.0} – {:.0} Wh/kg",
                spec.energy_range.0, spec.energy_range.1
            ));
            changed |= range_sliders(ui, "energy", &mut spec.energy_range, ENERGY_DOMAIN, 100.0);

            ui.separator();
            stats_block(ui, state);
        });

    if changed {
        state.apply_filter(spec);
    }
}

/// Min/max slider pair over a fixed domain. Dragging one bound past the other
/// drags the other bound along.
fn range_sliders(
    ui: &mut Ui,
    id: &str,
    range: &mut (f64, f64),
    domain: (f64, f64),
    step: f64,
) -> bool {
    let mut changed = false;
    ui.push_id(id, |ui: &mut Ui| {
        changed |= ui
            .add(Slider::new(&mut range.0, domain.0..=domain.1).step_by(step).text("min"))
            .changed();
        changed |= ui
            .add(Slider::new(&mut range.1, domain.0..=domain.1).step_by(step).text("max"))
            .changed();
    });
    if range.0 > range.1 {
        range.1 = range.0;
    }
    changed
}

/// Summary statistics for the current view, or the empty-state message.
fn stats_block(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    ui.strong("Current selection");
    match summary(dataset, &state.visible) {
        None => {
            ui.label("No compounds match the filters.");
        }
        Some(stats) => {
            egui::Grid::new("summary_stats").num_columns(2).show(ui, |ui: &mut Ui| {
                ui.label("Compounds");
                ui.label(stats.count.to_string());
                ui.end_row();
                ui.label("Avg voltage");
                ui.label(format!("{:.2} V", stats.avg_voltage));
                ui.end_row();
                ui.label("Avg energy");
                ui.label(format!("{:.0} Wh/kg", stats.avg_energy));
                ui.end_row();
                ui.label("Max cycles");
                ui.label(format_thousands(stats.max_cycles));
                ui.end_row();
                ui.label("Avg conductivity");
                ui.label(format!("{:.2} mS/cm", stats.avg_conductivity));
                ui.end_row();
            });
        }
    }
}

/// `62500` → `62,500`.
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Detail window – full attribute set of the selected compound
// ---------------------------------------------------------------------------

pub fn detail_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(idx) = state.selected else {
        return;
    };
    let Some(dataset) = &state.dataset else {
        state.selected = None;
        return;
    };
    let Some(c) = dataset.compounds.get(idx) else {
        state.selected = None;
        return;
    };

    let mut open = true;
    egui::Window::new(&c.formula)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label(RichText::new(c.kind.label()).strong());
            ui.separator();

            let sections: [(&str, Vec<(&str, String)>); 4] = [
                (
                    "Basic",
                    vec![
                        ("Space Group", c.space_group.clone()),
                        ("Crystal System", c.crystal_system.clone()),
                        ("Li Content", format!("{:.2}", c.li_content)),
                        ("Ti Content", format!("{:.1}%", c.ti_content * 100.0)),
                    ],
                ),
                (
                    "Structural",
                    vec![
                        ("Volume Expansion", format!("{:.2}%", c.volume_expansion)),
                        ("Density", format!("{:.2} g/cm³", c.density)),
                        ("Bandgap", format!("{:.3} eV", c.bandgap)),
                        ("Elastic Modulus", format!("{:.1} GPa", c.elastic_modulus)),
                    ],
                ),
                (
                    "Electrochemical",
                    vec![
                        ("Voltage", format!("{:.2} V", c.voltage)),
                        ("Capacity", format!("{:.1} mAh/g", c.capacity)),
                        ("Energy (Grav.)", format!("{:.0} Wh/kg", c.energy_gravimetric)),
                        ("Energy (Vol.)", format!("{:.0} Wh/L", c.energy_volumetric)),
                        ("Conductivity", format!("{:.3} mS/cm", c.conductivity)),
                        ("Overpotential", format!("{:.3} V", c.overpotential)),
                    ],
                ),
                (
                    "Performance",
                    vec![
                        ("Cycle Life", format!("{} cycles", format_thousands(c.cycle_life))),
                        ("Rate Capability", format!("{:.1}%", c.rate_capability)),
                        ("Coulombic Eff.", format!("{:.2}%", c.coulombic_efficiency)),
                        ("Stability", format!("{:.3}", c.stability)),
                    ],
                ),
            ];

            for (title, rows) in sections {
                ui.strong(title);
                egui::Grid::new(title).num_columns(2).show(ui, |ui: &mut Ui| {
                    for (label, value) in rows {
                        ui.label(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
                ui.add_space(4.0);
            }
        });
    if !open {
        state.selected = None;
    }
}

// ---------------------------------------------------------------------------
// Playground window – closed-form prediction
// ---------------------------------------------------------------------------

pub fn playground_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.playground_open {
        return;
    }
    let mut open = true;
    egui::Window::new("Design Playground")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            let d = &mut state.design;
            ui.add(Slider::new(&mut d.voltage, 1.0..=5.0).step_by(0.1).text("Voltage (V)"));
            ui.add(Slider::new(&mut d.capacity, 100.0..=400.0).step_by(10.0).text("Capacity (mAh/g)"));
            ui.add(Slider::new(&mut d.conductivity, 0.0..=300.0).text("Conductivity (mS/cm)"));
            ui.add(Slider::new(&mut d.stability, 0.5..=1.0).step_by(0.01).text("Stability"));
            ui.add(Slider::new(&mut d.volume_expansion, 0.0..=25.0).step_by(0.5).text("Volume Expansion (%)"));
            ui.add(Slider::new(&mut d.bandgap, 0.0..=4.5).step_by(0.1).text("Bandgap (eV)"));

            ui.separator();
            ui.heading(format!("{:.0} Wh/kg", d.predicted_energy()));
            ui.label(format!(
                "{} | {:.0}% confidence",
                d.performance_category(),
                d.confidence()
            ));
        });
    if !open {
        state.playground_open = false;
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open compound database")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} compounds", dataset.len());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.set_load_error(format!("Error: {e:#}"));
            }
        }
    }
}

fn export_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    if state.visible.is_empty() {
        return;
    }
    let file = rfd::FileDialog::new()
        .set_title("Export filtered compounds")
        .set_file_name(export_file_name(state.visible.len()))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let text = to_csv(dataset, &state.visible);
        match std::fs::write(&path, text) {
            Ok(()) => {
                log::info!("Exported {} compounds to {}", state.visible.len(), path.display());
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                state.status_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_thousands;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(62_500), "62,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}

use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::page::{page, total_pages, PAGE_SIZE};
use crate::state::AppState;
use crate::ui::panels::format_thousands;

// ---------------------------------------------------------------------------
// Paginated data table
// ---------------------------------------------------------------------------

/// Render one fixed-size page of the filtered view. Clicking a row opens the
/// compound's detail window.
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a database to explore compounds  (File → Open…)");
        });
        return;
    };

    let pages = total_pages(state.visible.len(), PAGE_SIZE);
    if pages == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No compounds match the filters.");
        });
        return;
    }
    let rows = page(&state.visible, state.page, PAGE_SIZE);

    let mut clicked: Option<usize> = None;
    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in [
                "Formula",
                "Type",
                "Voltage (V)",
                "Energy (Wh/kg)",
                "Conductivity",
                "Cycles",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for &idx in rows {
                let c = &dataset.compounds[idx];
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.monospace(&c.formula);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.colored_label(state.palette.color_for(c.kind), c.kind.label());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.2}", c.voltage));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.0}", c.energy_gravimetric));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.3}", c.conductivity));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_thousands(c.cycle_life));
                    });
                    if row.response().clicked() {
                        clicked = Some(idx);
                    }
                });
            }
        });
    if clicked.is_some() {
        state.selected = clicked;
    }

    // ---- Pagination controls ----
    ui.separator();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!(
            "Page {} of {pages} | Total: {} compounds",
            state.page,
            state.visible.len()
        )));
        if ui
            .add_enabled(state.page > 1, egui::Button::new("← Previous"))
            .clicked()
        {
            state.page -= 1;
        }
        if ui
            .add_enabled(state.page < pages, egui::Button::new("Next →"))
            .clicked()
        {
            state.page += 1;
        }
    });
}

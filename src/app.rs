use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CathodeExplorerApp {
    pub state: AppState,
}

impl eframe::App for CathodeExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters + summary stats ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed views over the filtered data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, label) in [
                    (Tab::Scatter, "Scatter Plot"),
                    (Tab::Distribution, "Distribution"),
                    (Tab::Comparison, "Comparison"),
                    (Tab::Table, "Data Table"),
                ] {
                    ui.selectable_value(&mut self.state.tab, tab, label);
                }
            });
            ui.separator();

            match self.state.tab {
                Tab::Scatter => plot::scatter_plot(ui, &mut self.state),
                Tab::Distribution => plot::distribution_charts(ui, &self.state),
                Tab::Comparison => plot::comparison_chart(ui, &self.state),
                Tab::Table => table::data_table(ui, &mut self.state),
            }
        });

        // ---- Floating windows ----
        panels::detail_window(ctx, &mut self.state);
        panels::playground_window(ctx, &mut self.state);
    }
}

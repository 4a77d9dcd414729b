use eframe::egui::{self, Color32, ComboBox, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::data::filter::{ENERGY_DOMAIN, VOLTAGE_DOMAIN};
use crate::data::model::{CompoundType, Property};
use crate::data::stats::{by_type, histogram};
use crate::state::AppState;

/// Bin count shared by every distribution chart, so histograms of different
/// views stay directly comparable.
const HISTOGRAM_BINS: usize = 15;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// One plotted series: a material class with its screen colour and the
/// dataset indices backing each point (for click-to-select).
struct Series {
    name: String,
    color: Color32,
    points: Vec<[f64; 2]>,
    indices: Vec<usize>,
}

/// Render the scatter plot with selectable axes, one series per material
/// class. Clicking near a point opens its detail window.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        axis_selector(ui, "x_axis", "X:", &Property::X_AXIS, &mut state.x_axis);
        axis_selector(ui, "y_axis", "Y:", &Property::Y_AXIS, &mut state.y_axis);
    });

    let Some(dataset) = &state.dataset else {
        empty_hint(ui);
        return;
    };

    let (x_axis, y_axis) = (state.x_axis, state.y_axis);
    let mut series: Vec<Series> = Vec::new();
    for kind in CompoundType::ALL {
        let mut points = Vec::new();
        let mut indices = Vec::new();
        for &i in &state.visible {
            let c = &dataset.compounds[i];
            if c.kind != kind {
                continue;
            }
            let (x, y) = (x_axis.value(c), y_axis.value(c));
            if x.is_finite() && y.is_finite() {
                points.push([x, y]);
                indices.push(i);
            }
        }
        if points.is_empty() {
            continue;
        }
        series.push(Series {
            name: format!("{kind} ({})", points.len()),
            color: state.palette.color_for(kind),
            points,
            indices,
        });
    }

    let mut clicked: Option<usize> = None;
    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(x_axis.label())
        .y_axis_label(y_axis.label())
        .show(ui, |plot_ui| {
            for s in &series {
                let points: PlotPoints = s.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&s.name)
                        .color(s.color)
                        .radius(3.0),
                );
            }

            if plot_ui.response().clicked() {
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let bounds = plot_ui.plot_bounds();
                    clicked = nearest_point(&series, [pointer.x, pointer.y], bounds.width(), bounds.height());
                }
            }
        });

    if clicked.is_some() {
        state.selected = clicked;
    }
}

/// Index of the point nearest the pointer, in axis-normalised distance, if it
/// is close enough to count as a hit.
fn nearest_point(series: &[Series], pointer: [f64; 2], span_x: f64, span_y: f64) -> Option<usize> {
    let (span_x, span_y) = (span_x.max(f64::EPSILON), span_y.max(f64::EPSILON));
    let mut best: Option<(f64, usize)> = None;
    for s in series {
        for (p, &idx) in s.points.iter().zip(&s.indices) {
            let dx = (p[0] - pointer[0]) / span_x;
            let dy = (p[1] - pointer[1]) / span_y;
            let d2 = dx * dx + dy * dy;
            if best.map_or(true, |(b, _)| d2 < b) {
                best = Some((d2, idx));
            }
        }
    }
    // 2% of the visible span is a comfortable click target.
    best.filter(|&(d2, _)| d2.sqrt() < 0.02).map(|(_, idx)| idx)
}

fn axis_selector(ui: &mut Ui, id: &str, label: &str, options: &[Property], current: &mut Property) {
    ui.label(label);
    ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for &p in options {
                ui.selectable_value(current, p, p.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution charts
// ---------------------------------------------------------------------------

/// Voltage and energy histograms over the current view, plus the per-class
/// count distribution.
pub fn distribution_charts(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        empty_hint(ui);
        return;
    };

    let voltage = histogram(
        dataset,
        &state.visible,
        |c| c.voltage,
        VOLTAGE_DOMAIN.1,
        HISTOGRAM_BINS,
        1,
    );
    let energy = histogram(
        dataset,
        &state.visible,
        |c| c.energy_gravimetric,
        ENERGY_DOMAIN.1,
        HISTOGRAM_BINS,
        0,
    );

    let half = ui.available_height() / 2.0 - 12.0;
    ui.columns(2, |columns| {
        histogram_chart(&mut columns[0], "voltage_hist", "Voltage (V)", &voltage, half);
        histogram_chart(&mut columns[1], "energy_hist", "Energy (Wh/kg)", &energy, half);
    });

    ui.separator();
    let rows = by_type(dataset, &state.visible);
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.count as f64)
                .name(r.kind.label())
                .fill(state.palette.color_for(r.kind))
                .width(0.8)
        })
        .collect();
    Plot::new("type_distribution")
        .x_axis_label("Type")
        .y_axis_label("Count")
        .show_x(false)
        .height(half)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Compounds per type"));
        });
}

fn histogram_chart(
    ui: &mut Ui,
    id: &str,
    label: &str,
    bins: &[crate::data::stats::HistogramBin],
    height: f32,
) {
    let bars: Vec<Bar> = bins
        .iter()
        .enumerate()
        .map(|(i, b)| Bar::new(i as f64, b.count as f64).name(&b.label).width(0.9))
        .collect();
    Plot::new(id)
        .x_axis_label(label)
        .y_axis_label("Count")
        .show_x(false)
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(label));
        });
}

// ---------------------------------------------------------------------------
// Type comparison
// ---------------------------------------------------------------------------

/// Average voltage per material class as bars, with the backing numbers in a
/// grid below (classes absent from the view are omitted).
pub fn comparison_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        empty_hint(ui);
        return;
    };

    let rows = by_type(dataset, &state.visible);
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No compounds match the filters.");
        });
        return;
    }

    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.avg_voltage)
                .name(r.kind.label())
                .fill(state.palette.color_for(r.kind))
                .width(0.8)
        })
        .collect();
    Plot::new("type_comparison")
        .x_axis_label("Type")
        .y_axis_label("Avg Voltage (V)")
        .show_x(false)
        .height(ui.available_height() * 0.55)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Avg voltage"));
        });

    ui.separator();
    egui::Grid::new("type_comparison_table")
        .num_columns(5)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Type");
            ui.strong("Count");
            ui.strong("Avg Voltage (V)");
            ui.strong("Avg Energy (Wh/kg)");
            ui.strong("Avg Conductivity");
            ui.end_row();
            for r in &rows {
                ui.colored_label(state.palette.color_for(r.kind), r.kind.label());
                ui.label(r.count.to_string());
                ui.label(format!("{:.2}", r.avg_voltage));
                ui.label(format!("{:.0}", r.avg_energy));
                ui.label(format!("{:.2}", r.avg_conductivity));
                ui.end_row();
            }
        });
}

fn empty_hint(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a database to explore compounds  (File → Open…)");
    });
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CompoundType;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: material class → Color32
// ---------------------------------------------------------------------------

/// One fixed colour per material class, in [`CompoundType::ALL`] order, so
/// chart series and table badges agree across every view.
#[derive(Debug, Clone)]
pub struct TypePalette {
    colors: [Color32; CompoundType::ALL.len()],
}

impl Default for TypePalette {
    fn default() -> Self {
        let generated = generate_palette(CompoundType::ALL.len());
        let mut colors = [Color32::GRAY; CompoundType::ALL.len()];
        for (slot, c) in colors.iter_mut().zip(generated) {
            *slot = c;
        }
        TypePalette { colors }
    }
}

impl TypePalette {
    /// Look up the colour for a material class.
    pub fn color_for(&self, kind: CompoundType) -> Color32 {
        let idx = CompoundType::ALL
            .iter()
            .position(|&t| t == kind)
            .unwrap_or(0);
        self.colors[idx]
    }
}

// ---------------------------------------------------------------------------
// Closed-form energy-density prediction (playground)
// ---------------------------------------------------------------------------

/// User-adjustable material design for the playground. Purely a scalar
/// formula — no model is fit anywhere in this program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Design {
    pub voltage: f64,
    pub capacity: f64,
    pub conductivity: f64,
    pub stability: f64,
    pub volume_expansion: f64,
    pub bandgap: f64,
}

impl Default for Design {
    fn default() -> Self {
        Design {
            voltage: 3.5,
            capacity: 250.0,
            conductivity: 50.0,
            stability: 0.85,
            volume_expansion: 10.0,
            bandgap: 2.0,
        }
    }
}

impl Design {
    /// Predicted gravimetric energy density, Wh/kg, rounded to a whole number.
    pub fn predicted_energy(&self) -> f64 {
        (self.voltage
            * self.capacity
            * (1.0 + (self.conductivity + 1.0).log10() * 0.05)
            * (self.stability * 1.1)
            * (1.0 - self.volume_expansion * 0.005)
            * (1.0 + (3.0 - self.bandgap) * 0.02))
            .round()
    }

    /// Heuristic confidence in percent, capped at 98.
    pub fn confidence(&self) -> f64 {
        (95.0
            - (self.voltage - 3.5).abs() * 2.0
            - (self.capacity - 250.0).abs() * 0.01
            - (self.stability - 0.85).abs() * 10.0)
            .round()
            .min(98.0)
    }

    /// Qualitative bucket for the predicted energy density.
    pub fn performance_category(&self) -> &'static str {
        let energy = self.predicted_energy();
        if energy > 3500.0 {
            "Excellent"
        } else if energy > 2800.0 {
            "Very Good"
        } else if energy > 2200.0 {
            "Good"
        } else if energy > 1600.0 {
            "Moderate"
        } else {
            "Low"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_is_a_whole_number() {
        let e = Design::default().predicted_energy();
        assert_eq!(e, e.round());
        assert!(e > 0.0);
    }

    #[test]
    fn confidence_is_highest_at_the_reference_design() {
        let base = Design::default().confidence();
        let off = Design {
            voltage: 4.5,
            ..Design::default()
        }
        .confidence();
        assert!(base <= 98.0);
        assert!(off < base);
    }

    #[test]
    fn category_thresholds() {
        let low = Design {
            voltage: 1.0,
            capacity: 100.0,
            ..Design::default()
        };
        assert_eq!(low.performance_category(), "Low");

        // Best design reachable from the playground sliders.
        let strong = Design {
            voltage: 5.0,
            capacity: 400.0,
            conductivity: 300.0,
            stability: 1.0,
            volume_expansion: 0.0,
            bandgap: 0.0,
        };
        assert_eq!(strong.performance_category(), "Good");
    }
}

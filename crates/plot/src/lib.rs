//! Isochron plots for CHIME refinements.
//!
//! [`Isochron`] holds only values the refinement already computed: the
//! equivalent-Th/Pb scatter and the fitted line. [`Isochron::show`] opens a
//! blocking egui window; everything else is plain data so it can be tested
//! without a display.

use chemage::ChimeResult;
use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

const POINT_COLOR: Color32 = Color32::from_rgb(0x75, 0x70, 0xb3);
const LINE_COLOR: Color32 = Color32::from_rgb(0x52, 0x52, 0x52);

/// A Pb versus equivalent-Th scatter with its regression line.
#[derive(Debug, Clone, PartialEq)]
pub struct Isochron {
    points: Vec<[f64; 2]>,
    slope: f64,
    intercept: f64,
    age_ma: f64,
    age_two_sigma_ma: Option<f64>,
}

impl Isochron {
    /// Creates an isochron from parallel Th* and Pb values (ppm) and a fit.
    ///
    /// Extra values in the longer slice are ignored.
    #[must_use]
    pub fn new(
        th_equiv_ppm: &[f64],
        pb_ppm: &[f64],
        slope: f64,
        intercept: f64,
        age_ma: f64,
    ) -> Self {
        Self {
            points: th_equiv_ppm
                .iter()
                .zip(pb_ppm)
                .map(|(&th, &pb)| [th, pb])
                .collect(),
            slope,
            intercept,
            age_ma,
            age_two_sigma_ma: None,
        }
    }

    /// Adds a 2σ age uncertainty to the summary.
    #[must_use]
    pub fn with_age_two_sigma(mut self, two_sigma_ma: f64) -> Self {
        self.age_two_sigma_ma = Some(two_sigma_ma);
        self
    }

    /// Scatter points as `[Th*, Pb]` pairs.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// End points of the regression line, from Th* = 0 to the largest Th*.
    #[must_use]
    pub fn fit_line(&self) -> [[f64; 2]; 2] {
        let x_max = self
            .points
            .iter()
            .map(|p| p[0])
            .fold(0.0_f64, f64::max);

        [
            [0.0, self.intercept],
            [x_max, self.slope * x_max + self.intercept],
        ]
    }

    /// One-line description of the fit.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Slope = {:.6}, Intercept = {:.3} ppm, Age = {:.1} Ma",
            self.slope, self.intercept, self.age_ma
        );
        if let Some(two_sigma) = self.age_two_sigma_ma {
            text.push_str(&format!(" ± {two_sigma:.1} (2σ)"));
        }
        text
    }

    /// Opens a blocking egui window showing the isochron.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        eframe::run_native(
            "CHIME age",
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(IsochronApp { isochron: self }))),
        )
    }
}

impl From<&ChimeResult> for Isochron {
    fn from(result: &ChimeResult) -> Self {
        Self::new(
            &result.th_equiv_ppm,
            &result.pb_ppm,
            result.slope(),
            result.intercept(),
            result.age_ma,
        )
        .with_age_two_sigma(result.age_two_sigma_ma())
    }
}

struct IsochronApp {
    isochron: Isochron,
}

impl eframe::App for IsochronApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("CHIME age");
            ui.label(self.isochron.summary());

            let points: PlotPoints = self.isochron.points.iter().copied().collect();
            let line: PlotPoints = self.isochron.fit_line().into_iter().collect();

            Plot::new("isochron")
                .legend(Legend::default())
                .x_axis_label("Th* (ppm)")
                .y_axis_label("Pb (ppm)")
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new(points)
                            .name("Grains")
                            .color(POINT_COLOR)
                            .radius(4.0),
                    );
                    plot_ui.line(
                        Line::new(line)
                            .name("Isochron")
                            .color(LINE_COLOR)
                            .width(2.0),
                    );
                });
        });
    }
}

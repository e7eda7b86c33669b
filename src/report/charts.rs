//! @ai:module:intent Comparison chart rendering for algorithm results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::metrics::{AlgorithmResults, ReportMode, SummaryStats};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1200, 700);
const PANEL_CHART_SIZE: (u32, u32) = (1400, 700);
// Bars occupy the middle 70% of each algorithm's slot
const BAR_MARGIN: f64 = 0.15;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Render the comparison chart for the requested mode
    fn generate(
        &self,
        results: &[AlgorithmResults],
        mode: ReportMode,
        output_path: &Path,
    ) -> Result<()>;
}

/// @ai:intent Renders bar charts comparing response-time statistics
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render one bar per algorithm for mean response time
    /// @ai:effects fs:write
    ///
    /// Absent statistics draw as zero-height bars; absence is preserved in the
    /// data model and only collapses to zero here, at presentation time.
    fn draw_mean_chart(&self, results: &[AlgorithmResults], output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let data: Vec<(String, f64)> = results
            .iter()
            .map(|r| {
                (
                    r.algorithm.clone(),
                    r.all.as_ref().map(|s| s.mean).unwrap_or(0.0),
                )
            })
            .collect();

        let y_max = data
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0f64, f64::max)
            .max(1.0)
            * 1.15;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Average Response Time Comparison Across Scheduling Algorithms",
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..data.len() as f64, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len())
            .y_desc("Average Response Time (ms)")
            .x_desc("Scheduling Algorithm")
            .x_label_formatter(&|x| {
                data.get(x.floor() as usize)
                    .map(|(name, _)| name.clone())
                    .unwrap_or_default()
            })
            .draw()?;

        chart.draw_series(data.iter().enumerate().map(|(i, (_, v))| {
            Rectangle::new(
                [
                    (i as f64 + BAR_MARGIN, 0.0),
                    (i as f64 + 1.0 - BAR_MARGIN, *v),
                ],
                Palette99::pick(i).mix(0.8).filled(),
            )
        }))?;

        let label_style = TextStyle::from(("sans-serif", 16).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart.draw_series(data.iter().enumerate().map(|(i, (_, v))| {
            Text::new(format!("{v:.1} ms"), (i as f64 + 0.5, *v), label_style.clone())
        }))?;

        root.present()?;
        Ok(())
    }

    /// @ai:intent Render short/long panels with grouped percentile bars
    /// @ai:effects fs:write
    fn draw_percentile_chart(
        &self,
        results: &[AlgorithmResults],
        output_path: &Path,
    ) -> Result<()> {
        let root = BitMapBackend::new(output_path, PANEL_CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let titled = root.titled(
            "Response Time Percentiles by Task Size Class",
            ("sans-serif", 30),
        )?;
        let panels = titled.split_evenly((1, 2));

        self.draw_percentile_panel(&panels[0], "Short Tasks", results, |r| r.short.as_ref())?;
        self.draw_percentile_panel(&panels[1], "Long Tasks", results, |r| r.long.as_ref())?;

        root.present()?;
        Ok(())
    }

    /// @ai:intent Draw one panel of grouped median/p90/p99 bars
    /// @ai:effects fs:write
    fn draw_percentile_panel<F>(
        &self,
        area: &DrawingArea<BitMapBackend, Shift>,
        caption: &str,
        results: &[AlgorithmResults],
        select: F,
    ) -> Result<()>
    where
        F: Fn(&AlgorithmResults) -> Option<&SummaryStats>,
    {
        let data: Vec<(String, [f64; 3])> = results
            .iter()
            .map(|r| {
                let stats = select(r);
                (
                    r.algorithm.clone(),
                    [
                        stats.map(|s| s.median).unwrap_or(0.0),
                        stats.map(|s| s.p90).unwrap_or(0.0),
                        stats.map(|s| s.p99).unwrap_or(0.0),
                    ],
                )
            })
            .collect();

        let y_max = data
            .iter()
            .flat_map(|(_, vals)| vals.iter().copied())
            .fold(0.0f64, f64::max)
            .max(1.0)
            * 1.15;

        let bar_width = (1.0 - 2.0 * BAR_MARGIN) / 3.0;

        let mut chart = ChartBuilder::on(area)
            .caption(caption, ("sans-serif", 25))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..data.len() as f64, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len())
            .y_desc("Response Time (ms)")
            .x_desc("Scheduling Algorithm")
            .x_label_formatter(&|x| {
                data.get(x.floor() as usize)
                    .map(|(name, _)| name.clone())
                    .unwrap_or_default()
            })
            .draw()?;

        // One fixed color per statistic kind, one bar per algorithm per statistic
        let series: [(&str, RGBColor); 3] = [("Median", BLUE), ("p90", GREEN), ("p99", RED)];

        for (k, (label, color)) in series.into_iter().enumerate() {
            chart
                .draw_series(data.iter().enumerate().map(|(i, (_, vals))| {
                    let x0 = i as f64 + BAR_MARGIN + bar_width * k as f64;
                    Rectangle::new(
                        [(x0, 0.0), (x0 + bar_width, vals[k])],
                        color.mix(0.7).filled(),
                    )
                }))?
                .label(label)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.mix(0.7).filled())
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(BLACK)
            .draw()?;

        let label_style = TextStyle::from(("sans-serif", 12).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        for k in 0..3 {
            chart.draw_series(data.iter().enumerate().map(|(i, (_, vals))| {
                let x = i as f64 + BAR_MARGIN + bar_width * (k as f64 + 0.5);
                Text::new(format!("{:.0}", vals[k]), (x, vals[k]), label_style.clone())
            }))?;
        }

        Ok(())
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Render the comparison chart for the requested mode
    /// @ai:effects fs:write
    fn generate(
        &self,
        results: &[AlgorithmResults],
        mode: ReportMode,
        output_path: &Path,
    ) -> Result<()> {
        match mode {
            ReportMode::Mean => self.draw_mean_chart(results, output_path),
            ReportMode::Percentiles => self.draw_percentile_chart(results, output_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn stats(mean: f64) -> SummaryStats {
        SummaryStats {
            count: 10,
            mean,
            median: mean,
            p90: mean * 1.5,
            p99: mean * 2.0,
        }
    }

    fn test_results() -> Vec<AlgorithmResults> {
        vec![
            AlgorithmResults {
                algorithm: "FIFO".to_string(),
                file: PathBuf::from("fifo_results_1.csv"),
                sample_count: 10,
                all: Some(stats(25.0)),
                short: Some(stats(12.0)),
                long: Some(stats(60.0)),
            },
            AlgorithmResults {
                algorithm: "SJF".to_string(),
                file: PathBuf::from("sjf_results_1.csv"),
                sample_count: 10,
                all: Some(stats(15.0)),
                short: Some(stats(8.0)),
                long: None,
            },
        ]
    }

    #[test]
    fn test_generate_mean_chart() {
        let generator = ChartGenerator::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("algorithm_comparison.png");

        generator
            .generate(&test_results(), ReportMode::Mean, &output)
            .unwrap();

        assert!(output.exists());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_generate_percentile_chart_with_absent_long_stats() {
        let generator = ChartGenerator::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("algorithm_comparison.png");

        generator
            .generate(&test_results(), ReportMode::Percentiles, &output)
            .unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_generate_overwrites_existing_chart() {
        let generator = ChartGenerator::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("algorithm_comparison.png");
        std::fs::write(&output, b"stale").unwrap();

        generator
            .generate(&test_results(), ReportMode::Mean, &output)
            .unwrap();

        assert_ne!(std::fs::read(&output).unwrap(), b"stale");
    }
}

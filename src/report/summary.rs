//! Console summary of an analysis run

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::AnalysisResults;

/// Counts and timings collected while the run progresses
#[derive(Debug, Default)]
pub struct RunSummary {
    pub class_count: usize,
    pub features_requested: usize,
    pub load_time: Option<Duration>,
    pub scoring_time: Option<Duration>,
    pub report_time: Option<Duration>,
}

impl RunSummary {
    pub fn new(class_count: usize, features_requested: usize) -> Self {
        Self {
            class_count,
            features_requested,
            ..Default::default()
        }
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = Some(elapsed);
    }

    pub fn set_scoring_time(&mut self, elapsed: Duration) {
        self.scoring_time = Some(elapsed);
    }

    pub fn set_report_time(&mut self, elapsed: Duration) {
        self.report_time = Some(elapsed);
    }

    /// Table of one row per scored feature with its headline values.
    pub fn feature_table(results: &AnalysisResults) -> Table {
        let best = results.best_feature().map(|f| f.feature_index);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Feature").add_attribute(Attribute::Bold),
            Cell::new("Gradations").add_attribute(Attribute::Bold),
            Cell::new("Shannon").add_attribute(Attribute::Bold),
            Cell::new("Max Kullback").add_attribute(Attribute::Bold),
            Cell::new("Max Accum. Diff").add_attribute(Attribute::Bold),
        ]);

        for feature in &results.features {
            let shannon = Cell::new(&feature.shannon);
            let shannon = if Some(feature.feature_index) == best {
                shannon.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                shannon
            };
            let max_kullback = feature
                .kullback
                .iter()
                .max()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());
            let max_accumulated = feature
                .accumulated
                .iter()
                .max()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());

            table.add_row(vec![
                Cell::new(format!("#{}", feature.feature_index + 1)),
                Cell::new(feature.gradations.len()),
                shannon,
                Cell::new(max_kullback),
                Cell::new(max_accumulated),
            ]);
        }

        table
    }

    pub fn display(&self, results: &AnalysisResults) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ANALYSIS SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Classes"), Cell::new(self.class_count)]);
        table.add_row(vec![
            Cell::new("🔢 Features Requested"),
            Cell::new(self.features_requested),
        ]);
        table.add_row(vec![
            Cell::new("✅ Features Scored"),
            Cell::new(results.features.len())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("⚠️  Features Skipped"),
            Cell::new(results.skipped.len()).fg(if results.skipped.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        if let Some(best) = results.best_feature() {
            table.add_row(vec![
                Cell::new("🏆 Best Feature"),
                Cell::new(format!("#{} ({})", best.feature_index + 1, best.shannon))
                    .fg(Color::Green),
            ]);
        }
        for (label, elapsed) in [
            ("⏱️  Load Time", self.load_time),
            ("⏱️  Scoring Time", self.scoring_time),
            ("⏱️  Report Time", self.report_time),
        ] {
            if let Some(elapsed) = elapsed {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(format!("{:.2}s", elapsed.as_secs_f64())),
                ]);
            }
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !results.features.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📊").cyan(),
                style("FEATURE SCORES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for line in Self::feature_table(results).to_string().lines() {
                println!("    {}", line);
            }
        }

        if !results.skipped.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Skipped Features").yellow(),
                style(format!("({})", results.skipped.len())).dim()
            );
            for skipped in &results.skipped {
                println!(
                    "        {} #{}: {}",
                    style("•").dim(),
                    skipped.feature_index + 1,
                    skipped.reason
                );
            }
        }
    }
}

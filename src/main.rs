//! infocontent: Feature Discrimination CLI Tool
//!
//! A command-line tool that scores every feature of a directory of class
//! files by how well it separates the classes.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use infocontent::cli::{confirm_overwrite, Cli};
use infocontent::pipeline::{run_all, ClassDirectory, FeatureSource};
use infocontent::report::{write_all_reports, RunSummary};
use infocontent::utils::{
    create_progress_bar, create_spinner, finish_with_success, finish_with_warning, print_banner,
    print_completion, print_config, print_count, print_info, print_step_header, print_step_time,
    print_success, print_warning,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.analysis_config()?;
    let output_dir = cli.output_dir();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &output_dir, &config);

    if !cli.no_confirm && directory_has_files(&output_dir) && !confirm_overwrite(&output_dir)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    // Step 1: Load class files
    print_step_header(1, "Load Classes");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading class files...");
    let classes = ClassDirectory::open(&cli.input)?;
    finish_with_success(&spinner, "Class files loaded");

    let class_count = classes.num_classes();
    println!("\n    {} Class Statistics:", style("✧").cyan());
    let labels = classes.class_labels();
    for (index, (label, objects)) in labels.iter().zip(classes.object_counts()).enumerate() {
        let marker = if index == config.base_class { " (base)" } else { "" };
        println!("      #{} {}: {} objects{}", index, label, objects, marker);
    }

    if config.base_class >= class_count {
        anyhow::bail!(
            "Base class {} does not exist: found {} class file(s) in {}",
            config.base_class,
            class_count,
            cli.input.display()
        );
    }

    let available = classes.feature_count();
    let feature_count = match cli.features {
        Some(requested) if requested > available => anyhow::bail!(
            "Requested {} features but the class files only have {}",
            requested,
            available
        ),
        Some(requested) => requested,
        None => available,
    };

    let mut summary = RunSummary::new(class_count, feature_count);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Step 2: Score features
    print_step_header(2, "Score Features");

    let step_start = Instant::now();
    let progress = create_progress_bar(feature_count as u64, "Scoring features");
    let results = run_all(&classes, feature_count, &config, &progress)?;
    if results.skipped.is_empty() {
        finish_with_success(&progress, "Scoring complete");
    } else {
        finish_with_warning(&progress, "Scoring complete with skipped features");
        print_count(
            "feature(s) that could not be scored",
            results.skipped.len(),
            Some("(--skip-failed)"),
        );
    }

    match results.best_feature() {
        Some(best) => print_info(&format!(
            "Feature #{} has the highest Shannon information content ({})",
            best.feature_index + 1,
            best.shannon
        )),
        None => print_warning("No feature could be scored"),
    }

    let scoring_elapsed = step_start.elapsed();
    summary.set_scoring_time(scoring_elapsed);
    print_step_time(scoring_elapsed);

    // Step 3: Write reports
    print_step_header(3, "Write Reports");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing reports...");
    let written = write_all_reports(&results, &config, classes.root(), &output_dir, cli.zip)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_dir.display()));
    for path in &written {
        print_success(&path.display().to_string());
    }
    let report_elapsed = step_start.elapsed();
    summary.set_report_time(report_elapsed);
    print_step_time(report_elapsed);

    summary.display(&results);

    print_completion();

    Ok(())
}

/// Whether `dir` exists and already holds entries
fn directory_has_files(dir: &std::path::Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

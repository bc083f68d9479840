use crate::cli::{BmiArgs, CheckArgs};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use medimate::config::AppConfig;
use medimate::error::AppError;
use medimate::features::bmi::{self, BmiInput};
use medimate::features::report::{FileRenderer, ReportRequest, ReportService};
use medimate::features::triage::TriageEngine;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Patient name as it should appear on the report
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Patient age in years (0-120)
    #[arg(long)]
    pub(crate) age: u8,
    /// Free-form health notes
    #[arg(long, default_value = "")]
    pub(crate) notes: String,
    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Directory receiving the artifact (defaults to the configured one)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Report date used by the demo (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the report-rendering portion of the demo
    #[arg(long)]
    pub(crate) skip_report: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let engine = TriageEngine::with_default_rules();
    let verdict = engine.classify(&args.symptoms);

    println!(
        "{} [{}]: {}",
        verdict.category.label(),
        verdict.severity.label(),
        verdict.advice
    );
    Ok(())
}

pub(crate) fn run_bmi(args: BmiArgs) -> Result<(), AppError> {
    let reading = bmi::evaluate(BmiInput {
        weight_kg: args.weight_kg,
        height_cm: args.height_cm,
    })?;

    println!("Your BMI is {}", reading.formatted());
    println!(
        "{} [{}]",
        reading.class.label(),
        reading.class.severity().label()
    );
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut report_config = config.report;
    if let Some(dir) = args.output_dir {
        report_config.output_dir = dir;
    }

    let service = ReportService::new(Arc::new(FileRenderer::from_config(&report_config)));
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let generated = service.generate(&ReportRequest {
        name: args.name,
        age: args.age,
        notes: args.notes,
        date,
    })?;

    println!("Report generated at {}", generated.artifact.path.display());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, skip_report } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("MediMate walkthrough");

    println!("\nSymptom checker");
    let engine = TriageEngine::with_default_rules();
    let samples = [
        "fever and a dry cough",
        "a pounding headache since morning",
        "upset stomach after lunch",
        "just feeling tired",
    ];
    for sample in samples {
        let verdict = engine.classify(sample);
        println!(
            "- \"{}\" -> {} [{}]: {}",
            sample,
            verdict.category.label(),
            verdict.severity.label(),
            verdict.advice
        );
    }

    println!("\nBMI calculator");
    for (weight_kg, height_cm) in [(70.0, 170.0), (45.0, 175.0), (95.0, 168.0)] {
        match bmi::evaluate(BmiInput {
            weight_kg,
            height_cm,
        }) {
            Ok(reading) => println!(
                "- {weight_kg} kg at {height_cm} cm -> BMI {} ({})",
                reading.formatted(),
                reading.class.label()
            ),
            Err(err) => println!("- {weight_kg} kg at {height_cm} cm -> rejected: {err}"),
        }
    }

    if skip_report {
        return Ok(());
    }

    println!("\nHealth report");
    let config = AppConfig::load()?;
    let service = ReportService::new(Arc::new(FileRenderer::from_config(&config.report)));
    let verdict = engine.classify(samples[0]);
    let generated = service.generate(&ReportRequest {
        name: "Demo Patient".to_string(),
        age: 30,
        notes: format!("Reported {}. {}", samples[0], verdict.advice),
        date: today,
    })?;
    println!("- Artifact written to {}", generated.artifact.path.display());

    Ok(())
}

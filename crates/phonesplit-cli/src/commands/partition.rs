use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use phonesplit_core::PartitionCounts;
use phonesplit_store::pipeline::{
    DEFAULT_INDIAN_OUTPUT, DEFAULT_INTERNATIONAL_OUTPUT, DEFAULT_PHONE_COLUMN,
};
use phonesplit_store::{process_phone_numbers, PipelineConfig, StoreErrorKind};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PartitionArgs {
    /// Path to the input CSV file
    pub input_file: PathBuf,
    /// Path to save the CSV with Indian numbers
    #[arg(long, default_value = DEFAULT_INDIAN_OUTPUT)]
    pub indian_output: PathBuf,
    /// Path to save the CSV with international numbers
    #[arg(long, default_value = DEFAULT_INTERNATIONAL_OUTPUT)]
    pub international_output: PathBuf,
    /// Name of the column containing phone numbers
    #[arg(long, default_value = DEFAULT_PHONE_COLUMN)]
    pub phone_column: String,
}

impl PartitionArgs {
    fn into_config(self) -> Result<PipelineConfig> {
        if self.phone_column.trim().is_empty() {
            return Err(invalid_input("phone column cannot be empty"));
        }
        Ok(PipelineConfig {
            input: self.input_file,
            indian_output: self.indian_output,
            international_output: self.international_output,
            phone_column: self.phone_column,
        })
    }
}

#[derive(Debug, Serialize)]
struct PartitionReport {
    input: String,
    indian_output: String,
    international_output: String,
    total: usize,
    indian: usize,
    international: usize,
    indian_percent: f64,
    international_percent: f64,
    countries: Vec<CountryReport>,
}

#[derive(Debug, Serialize)]
struct CountryReport {
    country: String,
    count: usize,
    percent: f64,
}

pub fn partition(ctx: &Context, args: PartitionArgs) -> Result<()> {
    let config = args.into_config()?;
    if !ctx.json {
        println!("Reading file from: {}", config.input.display());
    }

    let counts = match process_phone_numbers(&config) {
        Ok(counts) => counts,
        Err(err) if err.kind() == StoreErrorKind::Core => {
            return Err(invalid_input(format!(
                "{err}; use --phone-column to pick the phone column"
            )));
        }
        Err(err) => return Err(err.into()),
    };

    if ctx.json {
        return print_json(&build_report(&config, &counts))
            .with_context(|| "write json summary");
    }
    let summary = render_summary(&config, &counts).with_context(|| "render summary")?;
    print!("{summary}");
    Ok(())
}

fn build_report(config: &PipelineConfig, counts: &PartitionCounts) -> PartitionReport {
    PartitionReport {
        input: config.input.display().to_string(),
        indian_output: config.indian_output.display().to_string(),
        international_output: config.international_output.display().to_string(),
        total: counts.total,
        indian: counts.indian,
        international: counts.international,
        indian_percent: round2(counts.indian_percent()),
        international_percent: round2(counts.international_percent()),
        countries: counts
            .countries
            .iter()
            .map(|entry| CountryReport {
                country: entry.country.to_string(),
                count: entry.count,
                percent: round2(counts.country_percent(entry)),
            })
            .collect(),
    }
}

fn render_summary(
    config: &PipelineConfig,
    counts: &PartitionCounts,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Total entries: {}", counts.total)?;
    writeln!(
        out,
        "Indian phone numbers: {} ({:.2}%)",
        counts.indian,
        counts.indian_percent()
    )?;
    writeln!(
        out,
        "International phone numbers: {} ({:.2}%)",
        counts.international,
        counts.international_percent()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Indian numbers saved to: {}",
        config.indian_output.display()
    )?;
    writeln!(
        out,
        "International numbers saved to: {}",
        config.international_output.display()
    )?;

    if counts.international > 0 {
        writeln!(out)?;
        writeln!(out, "International numbers by country:")?;
        for entry in &counts.countries {
            writeln!(
                out,
                "{}: {} ({:.2}%)",
                entry.country,
                entry.count,
                counts.country_percent(entry)
            )?;
        }
    }
    Ok(out)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

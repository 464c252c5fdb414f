use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use eyre::{Context, Result};
use ytt_codegen::CodegenOptions;
use ytt_config::Config;
use ytt_ir::MenuExport;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct GenerateCommand {
    /// YAPI export JSON (an array of menus with their interfaces)
    pub input: PathBuf,

    /// Path to ytt.json (defaults to ./ytt.json)
    #[arg(short, long, default_value = "ytt.json")]
    pub config: PathBuf,

    /// Override the configured output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let options = CodegenOptions::from_config(&config);

        let text = fs::read_to_string(&self.input)
            .wrap_err_with(|| format!("Failed to read {}", self.input.display()))?;
        let menus: Vec<MenuExport> = serde_json::from_str(&text)
            .wrap_err_with(|| format!("{} is not a YAPI menu export", self.input.display()))?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_path));
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let report = ops::generate(&menus, &options, &output, &generated_at)
            .wrap_err("Failed to generate code")?;

        if report.modules.is_empty() {
            println!("No interfaces found in {}", self.input.display());
            return Ok(());
        }

        let total: usize = report.modules.iter().map(|m| m.interfaces).sum();
        println!(
            "Generated {} interface{} across {} module{} in {}",
            total,
            plural(total),
            report.modules.len(),
            plural(report.modules.len()),
            output.display()
        );
        for module in &report.modules {
            println!(
                "  {} ({} interface{}) in {}/",
                module.menu,
                module.interfaces,
                plural(module.interfaces),
                module.stem
            );
        }
        println!();
        println!(
            "{} file{} created, {} updated",
            report.created,
            plural(report.created),
            report.updated
        );

        Ok(())
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ytt_core::{File, WriteResult};

const STARTER_CONFIG: &str = r#"{
  "outputPath": "src/api",
  "requestFunctionFilePath": "@/utils/request",
  "importFunctionNames": ["get", "post"]
}
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config (defaults to ./ytt.json)
    #[arg(short, long, default_value = "ytt.json")]
    pub config: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = File::if_missing(&self.config, STARTER_CONFIG);
        match file.write()? {
            WriteResult::Skipped => {
                println!("{} already exists, leaving it alone", self.config.display());
            }
            _ => {
                println!("Created {}", self.config.display());
                println!("Edit outputPath and requestFunctionFilePath to match your project.");
            }
        }
        Ok(())
    }
}

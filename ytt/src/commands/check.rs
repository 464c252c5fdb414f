use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ytt_codegen::CodegenOptions;
use ytt_config::Config;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to ytt.json (defaults to ./ytt.json)
    #[arg(short, long, default_value = "ytt.json")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let options = CodegenOptions::from_config(&config);

        println!("✓ {} is valid\n", self.config.display());
        println!("  output directory:  {}", config.output_path);
        println!("  request module:    {}", options.request_fn_path);
        println!(
            "  transports:        {} (GET), {} (others)",
            options.transport_fns[0], options.transport_fns[1]
        );
        println!("  global namespace:  {}", options.global_namespace);
        if options.always_append_id {
            println!("  interface ids:     appended to every name");
        }
        if !options.generate_comments {
            println!("  comments:          disabled");
        }

        Ok(())
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use graft_codegen::naming::{self, Verb};
use graft_ir::Service;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the service manifest (defaults to ./service.toml)
    #[arg(short, long, default_value = "service.toml")]
    pub manifest: PathBuf,

    /// Module name used to preview the composed operation names
    #[arg(short = 'M', long, default_value = "example")]
    pub module: String,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let service = Service::from_file(&self.manifest).unwrap_or_exit();

        println!("Service: {}", service.name);
        if !service.enums.is_empty() {
            println!("Enums ({}):", service.enums.len());
            for e in &service.enums {
                println!("  {} [{}]", e.name, e.values.join(", "));
            }
        }

        println!("Entities ({}):", service.entities.len());
        for entity in &service.entities {
            let filter = if entity.filterable_fields().is_empty() {
                ""
            } else {
                " (filterable)"
            };
            println!("  {} - {} fields{}", entity.name, entity.fields.len(), filter);
            for verb in Verb::ALL {
                println!("    {}", naming::query_field_name(&self.module, verb, &entity.name));
            }
        }

        println!("OK: manifest is valid");
        Ok(())
    }
}

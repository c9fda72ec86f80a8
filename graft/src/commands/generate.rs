use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use graft_codegen::File;
use graft_codegen_go::{HandlerGenerator, update_aggregator};
use graft_codegen_gql::SchemaGenerator;
use graft_ir::Service;

use super::UnwrapOrExit;
use crate::exec::{self, ShellExecutor};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the service manifest (defaults to ./service.toml)
    #[arg(short, long, default_value = "service.toml")]
    pub manifest: PathBuf,

    /// Project root containing the gateway service tree
    #[arg(short, long, default_value = ".")]
    pub project_root: PathBuf,

    /// Module name prefixed to every generated type and operation
    #[arg(short = 'M', long)]
    pub module: String,

    /// Import path of the backend service, referenced from generated source
    #[arg(long)]
    pub backend: String,

    /// Backend location relative to the project root; when set, backend
    /// imports in the handler are rewritten relative to their final place
    #[arg(long)]
    pub service_path: Option<String>,

    /// Preview generated artifacts on stdout without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite an existing handler file without asking
    #[arg(short, long)]
    pub force: bool,

    /// Skip the dependency tidy step
    #[arg(long)]
    pub no_tidy: bool,
}

impl GenerateCommand {
    /// Run the generation pipeline: schema document, handler source,
    /// aggregator edit, import rewrite, tidy. Fail-fast: artifacts written
    /// before a failing step stay on disk, re-running is the recovery path.
    pub fn run(&self) -> Result<()> {
        let service = Service::from_file(&self.manifest).unwrap_or_exit();

        let schema = SchemaGenerator::new(&service, &self.module).render();
        let handler_generator = HandlerGenerator::new(&service, &self.module, &self.backend);
        let handler = handler_generator
            .render()
            .wrap_err("wire and surface shapes are inconsistent")?;

        let target = self.project_root.join("services").join("default").join("graphql");
        let schema_path = target.join("proto").join("schema.graphql");
        let resolvers_dir = target.join("resolvers");
        let handler_path = resolvers_dir.join(handler_generator.file_name());

        if self.dry_run {
            self.preview(&schema_path, &schema);
            self.preview(&handler_path, &handler);
            return Ok(());
        }

        if handler_path.exists() && !self.force && !confirm_overwrite(&handler_path)? {
            println!("Skipped: not overwriting {}", handler_path.display());
            return Ok(());
        }

        File::new(&schema_path, schema)
            .write()
            .wrap_err("failed to write schema document")?;
        println!("Generated: {}", schema_path.display());

        File::new(&handler_path, handler)
            .write()
            .wrap_err("failed to write handler source")?;
        println!("Generated: {}", handler_path.display());

        let root_path = resolvers_dir.join("root.go");
        update_aggregator(&root_path, &self.module, &service.name)
            .wrap_err("failed to edit the resolver aggregate")?;
        println!("Updated: {}", root_path.display());

        if let Some(service_path) = &self.service_path {
            let replacement = format!("../../{}", service_path);
            exec::replace_in_file(&handler_path, &self.backend, &replacement)
                .wrap_err("failed to rewrite backend imports")?;
        }

        if !self.no_tidy {
            exec::tidy(&resolvers_dir, &ShellExecutor).wrap_err("dependency tidy failed")?;
        }

        println!("Done: {} entities, module {}", service.entities.len(), self.module);
        Ok(())
    }

    fn preview(&self, path: &Path, content: &str) {
        println!("── {} ──", path.display());
        println!("{}", content);
    }
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("{} already exists, overwrite?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

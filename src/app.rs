//! Application orchestrator.
//! Loads/merges config, initializes logging, discovers the project and its
//! modules, validates the selection, builds the move unit queue, and drains
//! it through the filesystem host.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::{debug, info};

use res_move::cli::Args;
use res_move::config::xml::{CONFIG_ENV, LoadResult, load_config};
use res_move::config::{Config, default_config_path};
use res_move::errors::ResMoveError;
use res_move::output as out;
use res_move::{
    FsHost, MoveOperation, MoveUnitQueue, PathMapping, Project, SearchFlags, SelectedFile,
    Selection, build_units,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV} or set it to another file."
            ));
            return Ok(());
        }
        match default_config_path() {
            Some(p) => {
                out::print_info(&format!("Default res_move config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info(
                        "No config file exists there yet. Run without --print-config to create a template.",
                    );
                }
            }
            None => {
                out::print_error("Could not determine a default config path.");
            }
        }
        return Ok(());
    }

    // Load config (XML if present); CLI args override config values.
    let mut cfg = match load_config()? {
        LoadResult::Loaded(cfg) => cfg,
        LoadResult::CreatedTemplate(path) => {
            out::print_info(&format!(
                "A template res_move config was written to: {} (continuing with defaults)",
                path.display()
            ));
            Config::default()
        }
        LoadResult::Defaults => Config::default(),
    };
    args.apply_overrides(&mut cfg);

    // Initialize logging; hold the guard so file logs flush on exit.
    let _guard = init_tracing(&cfg, args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting res_move: {:?}", args);

    let base = match args.project_base.as_ref() {
        Some(p) => p.clone(),
        None => std::env::current_dir().context("determine current directory")?,
    };
    let base = std::fs::canonicalize(&base)
        .with_context(|| format!("resolve project base '{}'", base.display()))?;
    let project = Project::discover(&base)?;

    // Build the selection from the given paths (absolute, verified on disk).
    let mut files = Vec::with_capacity(args.paths.len());
    for p in &args.paths {
        let abs = std::fs::canonicalize(p)
            .with_context(|| format!("selected path does not exist: '{}'", p.display()))?;
        files.push(SelectedFile::from_path(abs)?);
    }
    let selection = Selection::new(files);

    let current = match selection.check_enablement(&project, cfg.resources_root.as_deref()) {
        Ok(module) => module,
        Err(reason) => {
            out::print_error(&format!("Move to module is not available: {reason}"));
            bail!("precondition violated: {reason}");
        }
    };

    // clap enforces --to unless --print-config already returned above.
    let Some(target_name) = args.target_module.as_deref() else {
        bail!("--to <MODULE> is required");
    };
    let Some(target) = project.module(target_name) else {
        let err = ResMoveError::UnknownTargetModule(target_name.to_string());
        out::print_error(&err.to_string());
        let available: Vec<_> = project.modules().iter().map(|m| m.name()).collect();
        out::print_info(&format!("Modules in this project: {}", available.join(", ")));
        return Err(err.into());
    };
    if target.name() == current.name() {
        let err = ResMoveError::TargetIsCurrentModule(target_name.to_string());
        out::print_error(&err.to_string());
        return Err(err.into());
    }

    info!(
        from = current.name(),
        to = target.name(),
        selected = selection.files().len(),
        "preparing move"
    );

    let units = build_units(&selection, cfg.qualifier_delimiter);
    let total = units.len();
    let queue = MoveUnitQueue::from_units(units);
    let mapping = PathMapping::new(current.root(), target.root());
    let flags = SearchFlags {
        references: cfg.search_references,
        comments: cfg.search_comments,
        non_source: cfg.search_non_source,
    };

    let mut host = FsHost::new(cfg.dry_run);
    let report = MoveOperation::new(&mut host, mapping, queue, flags).run();

    for path in &report.moved {
        out::print_user(&format!(
            "{} {} -> {}",
            if cfg.dry_run { "would move" } else { "moved" },
            path.display(),
            target.name()
        ));
    }
    if report.is_clean() {
        out::print_success(&format!(
            "{} unit(s) moved from '{}' to '{}'",
            total,
            current.name(),
            target.name()
        ));
        Ok(())
    } else {
        let failed_paths: Vec<PathBuf> = report.failed.iter().map(|(p, _)| p.clone()).collect();
        for p in &failed_paths {
            out::print_warn(&format!("failed: {}", p.display()));
        }
        bail!(
            "{} of {} unit(s) failed; the rest were moved",
            report.failed.len(),
            total
        )
    }
}

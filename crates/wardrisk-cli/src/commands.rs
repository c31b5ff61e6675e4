use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use wardrisk_cli::config::{ScoreConfig, default_output_path};
use wardrisk_ingest::{read_ward_table, write_ward_table};
use wardrisk_score::{CompositeScores, MIN_COVARIATES, ScoreEngine, enumerate_models};

use crate::cli::{ModelsArgs, ScoreArgs, SourcesArgs};
use crate::summary::{print_models, print_sources};
use crate::types::ScoreResult;

pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let span = info_span!("score", input = %args.input.display());
    let _guard = span.enter();

    let config = ScoreConfig::load_or_default(args.config.as_deref())?
        .with_overrides(args.overrides());
    let plan = config.plan()?;
    for id in &plan.unknown_sources {
        warn!(source = %id, "unknown data source skipped");
    }

    let table = read_ward_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let engine = ScoreEngine::new().with_suffix_policy(plan.suffixes);
    let CompositeScores {
        mut table,
        covariates,
        models,
    } = engine
        .run(&table, &plan.request)
        .context("compute composite scores")?;

    let output = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_ward_table(&mut table, &path)
            .with_context(|| format!("write {}", path.display()))?;
        info!(output = %path.display(), "scores written");
        Some(path)
    };

    Ok(ScoreResult {
        input: args.input.clone(),
        output,
        rows: table.height(),
        columns: table.width(),
        covariates,
        models,
        unknown_sources: plan.unknown_sources,
    })
}

pub fn run_models(args: &ModelsArgs) -> Result<()> {
    let mut covariates: Vec<String> = Vec::with_capacity(args.covariates.len());
    for covariate in &args.covariates {
        if !covariates.contains(covariate) {
            covariates.push(covariate.clone());
        }
    }
    if covariates.len() < MIN_COVARIATES {
        bail!(
            "need at least {MIN_COVARIATES} distinct covariates, got {}",
            covariates.len()
        );
    }
    let models = enumerate_models(&covariates);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        print_models(&models);
    }
    Ok(())
}

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let config = ScoreConfig::load_or_default(args.config.as_deref())?;
    print_sources(&config.catalog());
    Ok(())
}

//! exprkit - render and check stored expression trees

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use exprkit::codec::{Snapshot, SnapshotItem};
use exprkit::config::{NotEqualStyle, RenderConfig};
use exprkit::fol::{Predicate, Quantification, Quantifier, Variable};
use exprkit::sql::{DimElement, Expression, SdoDimArrayExpression};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// exprkit - render SQL and FOL expression trees from snapshot files
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Schema qualifying SDO_DIM_ARRAY / SDO_DIM_ELEMENT
    #[arg(long, global = true, default_value = "MDSYS")]
    sdo_schema: String,

    /// Render spatial constructors without a schema prefix
    #[arg(long, global = true, conflicts_with = "sdo_schema")]
    no_sdo_schema: bool,

    /// Render inequality as != instead of <>
    #[arg(long, global = true)]
    bang_not_equal: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rendering of every tree in a snapshot
    Render {
        snapshot: PathBuf,

        /// Fail if any tree is incomplete
        #[arg(long)]
        strict: bool,
    },
    /// Validate every tree in a snapshot
    Check { snapshot: PathBuf },
    /// Write a sample snapshot
    Demo {
        #[arg(short, long, default_value = "demo.snap")]
        output: PathBuf,
    },
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let schema = if self.no_sdo_schema {
            None
        } else {
            Some(self.sdo_schema.clone())
        };
        let not_equal = if self.bang_not_equal {
            NotEqualStyle::Bang
        } else {
            NotEqualStyle::Standard
        };
        RenderConfig::default()
            .with_sdo_schema(schema)
            .with_not_equal(not_equal)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = args.render_config();
    match &args.command {
        Command::Render { snapshot, strict } => render(snapshot, &config, *strict),
        Command::Check { snapshot } => check(snapshot),
        Command::Demo { output } => demo(output),
    }
}

fn load(path: &Path) -> Result<Snapshot> {
    let snapshot = Snapshot::read_from(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    debug!(
        "loaded snapshot v{} with {} trees from {}",
        snapshot.version(),
        snapshot.items().len(),
        path.display()
    );
    Ok(snapshot)
}

fn render(path: &Path, config: &RenderConfig, strict: bool) -> Result<()> {
    let snapshot = load(path)?;
    let mut incomplete = 0;

    for (i, item) in snapshot.items().iter().enumerate() {
        let rendering = item.render_with(config);
        println!("{}", rendering);
        if !rendering.is_complete() {
            incomplete += 1;
            warn!(
                "{} #{} is incomplete: missing {:?}",
                item.kind(),
                i,
                rendering.missing()
            );
        }
    }

    if strict && incomplete > 0 {
        bail!("{} of {} trees are incomplete", incomplete, snapshot.items().len());
    }
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let snapshot = load(path)?;
    let mut failures = 0;

    for (i, item) in snapshot.items().iter().enumerate() {
        match item.validate() {
            Ok(()) => println!("{} #{}: ok", item.kind(), i),
            Err(e) => {
                failures += 1;
                println!("{} #{}: {}", item.kind(), i, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} trees failed validation", failures, snapshot.items().len());
    }
    info!("all {} trees are complete", snapshot.items().len());
    Ok(())
}

fn demo(output: &Path) -> Result<()> {
    let geometry_bounds = SdoDimArrayExpression::try_new(vec![
        DimElement::new("X", -180.0, 180.0, 0.05),
        DimElement::new("Y", -90.0, 90.0, 0.05),
    ])?;

    let items: Vec<SnapshotItem> = vec![
        Expression::between(
            Expression::column("height"),
            Expression::int(0),
            Expression::int(8848),
        )
        .into(),
        Expression::SdoDimArray(geometry_bounds).into(),
        Predicate::for_all(
            Variable::new("x"),
            Predicate::function("isValid", vec![Expression::column("x")]),
        )
        .into(),
        Predicate::Quantification(
            Quantification::builder(Quantifier::Exists)
                .variable(Variable::new("y"))
                .build(),
        )
        .into(),
    ];

    Snapshot::new(items)
        .write_to(output)
        .with_context(|| format!("Failed to write snapshot {}", output.display()))?;
    info!("wrote sample snapshot to {}", output.display());
    Ok(())
}

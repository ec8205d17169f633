//! Command dispatch: loads models, runs the solver and prints results.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::report::{year_states, YearStates};
use crate::application::{model_file, solve_model, ApplicationError, SolveReport};
use crate::cli::args::{Cli, Commands, ConfigCommands, ModelSource};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, render};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::{samples, Model, Solver};
use crate::tree_traits::ToTermTree;
use crate::util::path::resolve_model_path;

/// Above this many decision years the full decision tree gets unwieldy.
const LARGE_TREE_YEARS: usize = 12;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let work_dir = match &cli.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|e| {
            CliError::Usage(format!("cannot determine working directory: {e}"))
        })?,
    };

    match &cli.command {
        Some(Commands::Solve {
            source,
            format,
            states,
        }) => {
            let settings = Settings::load(Some(work_dir.as_path()))?;
            cmd_solve(&settings, source, *format, *states)
        }
        Some(Commands::States { source, tree }) => {
            let settings = Settings::load(Some(work_dir.as_path()))?;
            cmd_states(&settings, source, *tree)
        }
        Some(Commands::Chains { source, tree }) => {
            let settings = Settings::load(Some(work_dir.as_path()))?;
            cmd_chains(&settings, source, *tree)
        }
        Some(Commands::Samples) => cmd_samples(),
        Some(Commands::Template) => cmd_template(),
        Some(Commands::Config { command }) => cmd_config(&work_dir, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try `mrsolve --help`".to_string(),
        )),
    }
}

/// Resolve the model of a command: a sample by name or a model file.
pub fn load_model(settings: &Settings, source: &ModelSource) -> CliResult<Model> {
    match (&source.file, &source.sample) {
        (_, Some(name)) => {
            samples::by_name(name).ok_or_else(|| ApplicationError::UnknownSample(name.clone()).into())
        }
        (Some(file), None) => {
            let path = resolve_model_path(file, &settings.model_dir);
            debug!(path = %path.display(), "loading model file");
            Ok(model_file::load(&path)?)
        }
        (None, None) => Err(CliError::InvalidArgs(
            "give a model file or --sample <NAME>".to_string(),
        )),
    }
}

#[instrument(level = "debug", skip(settings))]
fn cmd_solve(
    settings: &Settings,
    source: &ModelSource,
    format: Option<OutputFormat>,
    states: bool,
) -> CliResult<()> {
    let model = load_model(settings, source)?;
    let report = solve_model(&model)?;

    match format.unwrap_or(settings.output.format) {
        OutputFormat::Toml => output::info(&report.to_toml()?),
        OutputFormat::Text => {
            if states || settings.output.show_state_space {
                print_states(&report.states);
            }
            print_stages(&report);
            if settings.output.show_chains {
                print_chains(&report);
            }
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_states(settings: &Settings, source: &ModelSource, tree: bool) -> CliResult<()> {
    let model = load_model(settings, source)?;
    let mut solver = Solver::new();
    solver.solve(&model)?;

    print_states(&year_states(solver.state_space()));
    if tree {
        if model.decision_years() > LARGE_TREE_YEARS {
            output::warning(&format!(
                "decision tree over {} years repeats shared states under every parent",
                model.decision_years()
            ));
        }
        output::header("Decision tree");
        output::info(&solver.state_space().to_tree_string());
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_chains(settings: &Settings, source: &ModelSource, tree: bool) -> CliResult<()> {
    let model = load_model(settings, source)?;
    let report = solve_model(&model)?;

    if tree {
        output::header("Optimal chains");
        output::info(&report.chain_tree.to_tree_string());
    } else {
        print_chains(&report);
    }
    Ok(())
}

fn cmd_samples() -> CliResult<()> {
    output::header("Samples");
    for name in samples::names() {
        if let Some(model) = samples::by_name(name) {
            output::detail(&format!(
                "{:<10} {} years, initial age {}, max age {}, price {}",
                name,
                model.decision_years(),
                model.initial_age(),
                model.max_age(),
                model.price()
            ));
        }
    }
    Ok(())
}

fn cmd_template() -> CliResult<()> {
    output::info(&model_file::template()?);
    Ok(())
}

fn cmd_config(work_dir: &Path, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(work_dir))?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", &"<unavailable>"),
            }
            output::action("local", &local_config_path(work_dir).display());
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| ApplicationError::Config {
                    message: "cannot determine global config directory".to_string(),
                })?
            } else {
                local_config_path(work_dir)
            };
            write_template(&path)?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn write_template(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ApplicationError::Config {
            message: format!("create {}: {e}", parent.display()),
        })?;
    }
    std::fs::write(path, Settings::template()).map_err(|e| ApplicationError::Config {
        message: format!("write {}: {e}", path.display()),
    })?;
    Ok(())
}

fn print_states(states: &[YearStates]) {
    output::header("Reachable states");
    for year in states {
        output::detail(&render::year_states(year));
    }
    println!();
}

fn print_stages(report: &SolveReport) {
    for stage in report.stages.iter().rev() {
        output::header(&render::stage_title(stage));
        output::info(&render::stage_header());
        for row in &stage.rows {
            output::decision_line(&render::stage_row(row), row.decision);
        }
        println!();
    }
    if let Some(value) = report.optimal_value {
        output::action("Optimal value", &value);
    }
}

fn print_chains(report: &SolveReport) {
    output::header(&format!("Optimal chains ({})", report.chains.len()));
    for chain in &report.chains {
        output::detail(chain);
    }
}

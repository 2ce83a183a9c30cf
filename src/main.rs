//! `iconmap` binary: merge icon listings and print the resulting map.

use std::io::{ErrorKind, Write};

use clap::Parser;
use log::debug;
use ortho_config::load_and_merge_subcommand_for;

use iconmap::PipelineError;
use iconmap::build_icon_map;
use iconmap::cli_args::{BuildArgs, Cli, Commands};
use iconmap::render::write_map;

fn is_broken_pipe_io(err: &std::io::Error) -> bool {
    err.kind() == ErrorKind::BrokenPipe
}

async fn run_build(cli_args: BuildArgs) -> Result<(), PipelineError> {
    let args = load_and_merge_subcommand_for(&cli_args)?;
    let plan = args.into_plan()?;
    debug!("building icon map from {plan:?}");
    let map = build_icon_map(&plan.source, &plan.launcher, plan.header_lines).await?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_map(&mut stdout, &map, plan.format).and_then(|()| stdout.flush()) {
        if is_broken_pipe_io(&e) {
            return Ok(());
        }
        return Err(e.into());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Commands::Build(args) => run_build(args).await?,
    }
    Ok(())
}

use campwatch_client::commands;
use campwatch_client::commands::common::FilterArgs;
use campwatch_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, DatasetCommand, FilterFlags};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Dataset { command } => match command {
            DatasetCommand::Check { path, .. } => commands::dataset::check(path.as_deref()),
        },
        Commands::Summary { path, filter, .. } => {
            commands::summary::run(path.as_deref(), filter_args(filter))
        }
        Commands::Risk { path, filter, .. } => {
            commands::risk::run(path.as_deref(), filter_args(filter))
        }
        Commands::Parties { path, filter, .. } => {
            commands::parties::run(path.as_deref(), filter_args(filter))
        }
        Commands::Trend { path, filter, .. } => {
            commands::trend::run(path.as_deref(), filter_args(filter))
        }
        Commands::Report {
            path, filter, out, ..
        } => commands::report::run(path.as_deref(), filter_args(filter), out.as_deref()),
    }
}

fn filter_args(flags: &FilterFlags) -> FilterArgs {
    FilterArgs {
        parties: flags.parties.clone(),
        regions: flags.regions.clone(),
        donors: flags.donors.clone(),
        from: flags.from.as_ref().map(|value| value.as_str().to_string()),
        to: flags.to.as_ref().map(|value| value.as_str().to_string()),
    }
}

use crate::cli::{Commands, DatasetCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Dataset {
            command: DatasetCommand::Check { json, .. },
        } => *json,
        Commands::Summary { json, .. }
        | Commands::Risk { json, .. }
        | Commands::Parties { json, .. }
        | Commands::Trend { json, .. }
        | Commands::Report { json, .. } => *json,
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

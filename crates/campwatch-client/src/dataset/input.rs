use std::fs;
use std::io::{IsTerminal, Read};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub(crate) struct ResolvedSource {
    pub(crate) source_ref: Option<String>,
    pub(crate) content: String,
}

pub(crate) fn resolve_source(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<ResolvedSource> {
    let Some(path_value) = path else {
        return Err(ClientError::invalid_argument(
            "No dataset provided. Pass a file path, or `-` to read from stdin.",
        ));
    };

    if path_value == "-" {
        let stdin_body = read_stdin(stdin_override)?;
        if let Some(content) = stdin_body
            && !content.trim().is_empty()
        {
            return Ok(ResolvedSource {
                source_ref: None,
                content,
            });
        }

        return Err(ClientError::invalid_argument(
            "Path `-` means stdin input, but stdin was empty. Pipe the dataset or pass a file path.",
        ));
    }

    let content = fs::read_to_string(&path_value).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            ClientError::dataset_not_found(&path_value)
        } else {
            ClientError::dataset_unreadable(&path_value, &error.to_string())
        }
    })?;

    Ok(ResolvedSource {
        source_ref: Some(path_value),
        content,
    })
}

fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(Some(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("Could not read stdin: {error}"),
                vec!["Retry with an explicit file path argument.".to_string()],
            )
        })?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}

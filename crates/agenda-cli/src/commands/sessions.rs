use agenda_core::client::SessionQuery;
use agenda_core::models::SessionView;

use crate::commands::common::{
    format_session_details, format_session_lines, normalize_session_id, Backend,
};
use crate::error::CliError;

pub async fn run_sessions(
    backend: &Backend,
    query: &SessionQuery,
    limit: Option<usize>,
    as_json: bool,
) -> Result<(), CliError> {
    let mut sessions = backend.sessions(query).await?;
    if let Some(limit) = limit {
        sessions.truncate(limit);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
    } else if sessions.is_empty() {
        println!("No sessions found.");
    } else {
        for line in format_session_lines(&sessions) {
            println!("{line}");
        }
    }

    Ok(())
}

pub async fn run_session(backend: &Backend, id: &str, as_json: bool) -> Result<(), CliError> {
    let id = normalize_session_id(id)?;
    let session: SessionView = backend.session(&id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        for line in format_session_details(&session) {
            println!("{line}");
        }
    }

    Ok(())
}

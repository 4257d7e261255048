use crate::commands::common::{format_speaker_lines, Backend};
use crate::error::CliError;

pub async fn run_speakers(
    backend: &Backend,
    name: Option<&str>,
    as_json: bool,
) -> Result<(), CliError> {
    let speakers = backend.speakers(name).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&speakers)?);
    } else {
        for line in format_speaker_lines(&speakers) {
            println!("{line}");
        }
    }

    Ok(())
}

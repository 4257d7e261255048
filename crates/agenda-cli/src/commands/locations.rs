use crate::commands::common::{format_location_lines, Backend};
use crate::error::CliError;

pub async fn run_locations(
    backend: &Backend,
    name: Option<&str>,
    as_json: bool,
) -> Result<(), CliError> {
    let locations = backend.locations(name).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
    } else {
        for line in format_location_lines(&locations) {
            println!("{line}");
        }
    }

    Ok(())
}

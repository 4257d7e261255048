use crate::commands::common::{format_rating, normalize_session_id, Backend};
use crate::error::CliError;

pub async fn run_rate(backend: &Backend, id: &str, rating: i64) -> Result<(), CliError> {
    let id = normalize_session_id(id)?;
    let summary = backend.rate(&id, rating).await?;
    println!("{}", format_rating(&summary));
    Ok(())
}

use std::env;
use std::path::{Path, PathBuf};

use agenda_core::client::{AgendaClient, ClientError, SessionQuery};
use agenda_core::models::{Location, SessionView, Speaker};
use agenda_core::ratings::RatingSummary;
use agenda_core::search::DEFAULT_MAX_QUERY_CHARS;
use agenda_core::{Catalog, SearchQuery, SessionFilter};

use crate::error::CliError;

/// Where agenda data comes from: the local dataset file or a remote API.
pub enum Backend {
    Local(Catalog),
    Remote(AgendaClient),
}

impl Backend {
    /// Prefer the remote API when a URL is configured, otherwise load the
    /// dataset from `data_path`.
    pub fn open(data_path: &Path, api_url: Option<&str>) -> Result<Self, CliError> {
        if let Some(url) = api_url {
            tracing::info!("Using remote agenda API at {}", url);
            return Ok(Self::Remote(AgendaClient::new(url)?));
        }
        Ok(Self::Local(Catalog::load(data_path)?))
    }

    pub async fn sessions(&self, query: &SessionQuery) -> Result<Vec<SessionView>, CliError> {
        match self {
            Self::Local(catalog) => {
                let filter = SessionFilter::parse(
                    query.id.as_deref(),
                    query.title.as_deref(),
                    query.tag.as_deref(),
                    query.search.as_deref(),
                    DEFAULT_MAX_QUERY_CHARS,
                )?;
                Ok(catalog
                    .sessions(&filter)
                    .into_iter()
                    .map(SessionView::from)
                    .collect())
            }
            Self::Remote(client) => Ok(client.list_sessions(query).await?),
        }
    }

    pub async fn session(&self, id: &str) -> Result<SessionView, CliError> {
        let not_found = || CliError::SessionNotFound(id.to_string());
        match self {
            Self::Local(catalog) => catalog
                .session(id)
                .map(SessionView::from)
                .ok_or_else(not_found),
            Self::Remote(client) => client.get_session(id).await.map_err(|error| match error {
                ClientError::NotFound(_) => not_found(),
                other => other.into(),
            }),
        }
    }

    pub async fn speakers(&self, name: Option<&str>) -> Result<Vec<Speaker>, CliError> {
        match self {
            Self::Local(catalog) => {
                let name = SearchQuery::parse_optional(name, DEFAULT_MAX_QUERY_CHARS)?;
                Ok(catalog.speakers(name.as_ref()).into_iter().cloned().collect())
            }
            Self::Remote(client) => Ok(client.list_speakers(name).await?),
        }
    }

    pub async fn locations(&self, name: Option<&str>) -> Result<Vec<Location>, CliError> {
        match self {
            Self::Local(catalog) => {
                let name = SearchQuery::parse_optional(name, DEFAULT_MAX_QUERY_CHARS)?;
                Ok(catalog
                    .locations(name.as_ref())
                    .into_iter()
                    .cloned()
                    .collect())
            }
            Self::Remote(client) => Ok(client.list_locations(name).await?),
        }
    }

    pub async fn rate(&self, id: &str, rating: i64) -> Result<RatingSummary, CliError> {
        match self {
            Self::Local(_) => Err(CliError::RemoteRequired("rate")),
            Self::Remote(client) => Ok(client.rate_session(id, rating).await?),
        }
    }
}

pub fn format_session_lines(sessions: &[SessionView]) -> Vec<String> {
    sessions
        .iter()
        .map(|session| {
            format!(
                "Session: {} ({})",
                session.title.as_deref().unwrap_or("(untitled)"),
                session.id
            )
        })
        .collect()
}

pub fn format_session_details(session: &SessionView) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  [{}]",
        session.title.as_deref().unwrap_or("(untitled)"),
        session.id
    )];

    match (session.date_start.as_deref(), session.date_end.as_deref()) {
        (Some(start), Some(end)) => lines.push(format!("When:      {start} - {end}")),
        (Some(start), None) => lines.push(format!("When:      {start}")),
        _ => {}
    }

    if !session.speakers.is_empty() {
        let names = session
            .speakers
            .iter()
            .map(|speaker| speaker.name.clone().unwrap_or_else(|| speaker.id.clone()))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Speakers:  {names}"));
    }

    if !session.locations.is_empty() {
        let ids = session
            .locations
            .iter()
            .map(|location| location.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Locations: {ids}"));
    }

    if !session.tags.is_empty() {
        let tags = session
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Tags:      {tags}"));
    }

    if let Some(description) = session.description.as_deref() {
        lines.push(String::new());
        lines.push(description.trim().to_string());
    }

    lines
}

pub fn format_speaker_lines(speakers: &[Speaker]) -> Vec<String> {
    speakers
        .iter()
        .map(|speaker| {
            let name = speaker.name.as_deref().unwrap_or("(unnamed)");
            match speaker.company.as_deref() {
                Some(company) => format!("{:<12}  {name} ({company})", speaker.id),
                None => format!("{:<12}  {name}", speaker.id),
            }
        })
        .collect()
}

pub fn format_location_lines(locations: &[Location]) -> Vec<String> {
    locations
        .iter()
        .map(|location| {
            format!(
                "{:<12}  {}",
                location.id,
                location.name.as_deref().unwrap_or("(unnamed)")
            )
        })
        .collect()
}

pub fn format_rating(summary: &RatingSummary) -> String {
    match summary.average_rating {
        Some(average) => format!(
            "Session {}: {average:.2} average from {} rating(s)",
            summary.session_id, summary.ratings_count
        ),
        None => format!("Session {}: no ratings yet", summary.session_id),
    }
}

pub fn normalize_session_id(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySessionId)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn resolve_data_path(cli_data_path: Option<PathBuf>) -> PathBuf {
    cli_data_path
        .or_else(|| env::var_os("AGENDA_DATA_PATH").map(PathBuf::from))
        .unwrap_or_else(default_data_path)
}

pub fn default_data_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("db").join("data.json"),
        |dir| dir.join("agenda").join("data.json"),
    )
}

pub fn resolve_api_url(cli_api_url: Option<String>) -> Option<String> {
    cli_api_url
        .or_else(|| env::var("AGENDA_API_URL").ok())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

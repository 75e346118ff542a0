use chrono::NaiveDate;
use ureq::Agent;

use crate::config::WatchConfig;
use crate::consts::{HTTP_TIMEOUT, QUERY_DATE_FORMAT, SESSION_COOKIE};
use crate::error::PortalError;

use super::slot::{parse_slots, Slot};

/// Where the watcher gets its slots from. Lets tests script the portal.
pub(crate) trait SlotSource {
    /// Fetch the slots published between `from` and `until`, inclusive.
    fn fetch(&self, from: NaiveDate, until: NaiveDate) -> Result<Vec<Slot>, PortalError>;
}

/// HTTP client for the intra slot calendar. Authentication is the session
/// cookie; there is no API handshake.
pub(crate) struct PortalClient {
    agent: Agent,
    base_url: String,
    project: String,
    team_id: String,
    cookie: String,
}

impl PortalClient {
    pub(crate) fn new(base_url: String, config: &WatchConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .new_agent();
        PortalClient {
            agent,
            base_url,
            project: config.project.clone(),
            team_id: config.team_id.clone(),
            cookie: format!("{SESSION_COOKIE}={}", config.session_token),
        }
    }

    fn slots_url(&self, from: NaiveDate, until: NaiveDate) -> String {
        format!(
            "{}/projects/{}/slots.json?team_id={}&start={}&end={}",
            self.base_url,
            self.project,
            self.team_id,
            from.format(QUERY_DATE_FORMAT),
            until.format(QUERY_DATE_FORMAT),
        )
    }
}

impl SlotSource for PortalClient {
    fn fetch(&self, from: NaiveDate, until: NaiveDate) -> Result<Vec<Slot>, PortalError> {
        let url = self.slots_url(from, until);
        let response = self
            .agent
            .get(url.as_str())
            .header("Cookie", self.cookie.as_str())
            .call()
            .map_err(Box::new)?;

        match response.status().as_u16() {
            200..=299 => {
                let mut body = response.into_body();
                Ok(parse_slots(body.as_reader())?)
            }
            404 => Err(PortalError::ProjectNotFound),
            401 => Err(PortalError::InvalidToken),
            status => Err(PortalError::Status { status }),
        }
    }
}

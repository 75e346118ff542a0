//! Run configuration, resolved once at startup and immutable afterwards.
//! Credentials live in memory only; nothing is ever written to disk.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::cli::Args;
use crate::error::InputError;

/// What happens after a slot has been found and notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotifyPolicy {
    /// Announce the nearest available slot, then stop.
    ExitAfterFirst,
    /// Keep polling and announce each newly appearing slot.
    KeepWatching,
}

pub(crate) struct WatchConfig {
    /// Normalized project slug, e.g. "lib-ft".
    pub(crate) project: String,
    pub(crate) team_id: String,
    pub(crate) session_token: String,
    /// How many days ahead a slot may start.
    pub(crate) days: u32,
    pub(crate) interval: Duration,
    pub(crate) policy: NotifyPolicy,
    /// Consecutive failed polls tolerated before giving up; 0 means never.
    pub(crate) max_failures: u32,
}

impl WatchConfig {
    /// Build the config from flags, prompting on stdin for anything
    /// missing. Fails before any network traffic when a value is empty
    /// or the day count is not a positive integer.
    pub(crate) fn resolve(args: &Args) -> Result<Self, InputError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        Self::resolve_from(args, &mut input)
    }

    fn resolve_from(args: &Args, input: &mut dyn BufRead) -> Result<Self, InputError> {
        let project_raw = match &args.project {
            Some(value) => value.clone(),
            None => prompt("Project name", input)?,
        };
        let project = normalize_project(&project_raw);
        require("project name", &project)?;

        let team_id = match &args.team_id {
            Some(value) => value.trim().to_string(),
            None => prompt("Team ID", input)?,
        };
        require("team id", &team_id)?;

        let session_token = match &args.token {
            Some(value) => value.trim().to_string(),
            None => prompt("Session token", input)?,
        };
        require("session token", &session_token)?;

        let days = match args.days {
            Some(value) => value,
            None => parse_days(&prompt("Number of days to watch", input)?)?,
        };
        if days == 0 {
            return Err(InputError::InvalidDays {
                input: "0".to_string(),
            });
        }

        Ok(WatchConfig {
            project,
            team_id,
            session_token,
            days,
            interval: Duration::from_secs(args.interval),
            policy: if args.once {
                NotifyPolicy::ExitAfterFirst
            } else {
                NotifyPolicy::KeepWatching
            },
            max_failures: args.max_failures,
        })
    }
}

/// The session token is a credential; keep it out of anything printable.
impl fmt::Debug for WatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchConfig")
            .field("project", &self.project)
            .field("team_id", &self.team_id)
            .field("session_token", &redact(&self.session_token))
            .field("days", &self.days)
            .field("interval", &self.interval)
            .field("policy", &self.policy)
            .field("max_failures", &self.max_failures)
            .finish()
    }
}

fn redact(value: &str) -> &str {
    if value.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

/// The portal wants its project slug form: spaces to dashes, lowercased.
fn normalize_project(raw: &str) -> String {
    raw.trim().replace(' ', "-").to_lowercase()
}

fn parse_days(input: &str) -> Result<u32, InputError> {
    input.trim().parse::<u32>().map_err(|_| InputError::InvalidDays {
        input: input.trim().to_string(),
    })
}

fn require(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.is_empty() {
        return Err(InputError::Empty { field });
    }
    Ok(())
}

fn prompt(label: &str, input: &mut dyn BufRead) -> Result<String, InputError> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

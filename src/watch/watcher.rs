use std::thread;

use chrono::{Local, NaiveDateTime};

use crate::config::{NotifyPolicy, WatchConfig};
use crate::consts::EVENT_TIME_FORMAT;
use crate::error::PortalError;
use crate::notify::Notifier;
use crate::output::Reporter;
use crate::portal::{Slot, SlotSource};

use super::window::{next_in_window, Window};

/// What a single poll cycle produced.
#[derive(Debug)]
pub(crate) enum Tick {
    /// At least one slot was announced; carries the first one.
    Found(Slot),
    /// Nothing new this cycle.
    Quiet,
    /// The portal could not be queried or decoded.
    Failed(PortalError),
}

/// Polls the slot source on a fixed interval and announces changes.
///
/// The watcher owns no I/O of its own; the source, notifier and reporter
/// are handed in so tests can script all three.
pub(crate) struct Watcher<'a> {
    config: &'a WatchConfig,
    source: &'a dyn SlotSource,
    notifier: &'a dyn Notifier,
    reporter: &'a Reporter,
    /// Slots already announced, so steady state stays silent.
    known: Vec<Slot>,
}

impl<'a> Watcher<'a> {
    pub(crate) fn new(
        config: &'a WatchConfig,
        source: &'a dyn SlotSource,
        notifier: &'a dyn Notifier,
        reporter: &'a Reporter,
    ) -> Self {
        Watcher {
            config,
            source,
            notifier,
            reporter,
            known: Vec::new(),
        }
    }

    /// Poll until a slot is found (under [`NotifyPolicy::ExitAfterFirst`])
    /// or the consecutive failure limit is hit. Under
    /// [`NotifyPolicy::KeepWatching`] this only returns on failure;
    /// interrupting the process is the expected way to stop.
    pub(crate) fn run(&mut self) -> Result<Slot, PortalError> {
        let mut failures: u32 = 0;
        loop {
            match self.tick(Local::now().naive_local()) {
                Tick::Found(slot) => {
                    failures = 0;
                    if self.config.policy == NotifyPolicy::ExitAfterFirst {
                        return Ok(slot);
                    }
                }
                Tick::Quiet => failures = 0,
                Tick::Failed(err) => {
                    failures += 1;
                    if self.config.max_failures > 0 && failures >= self.config.max_failures {
                        return Err(err);
                    }
                    self.reporter.problem(&err.to_string());
                }
            }
            thread::sleep(self.config.interval);
        }
    }

    /// One poll cycle against the portal at the given instant.
    pub(crate) fn tick(&mut self, now: NaiveDateTime) -> Tick {
        let window = Window::new(now, self.config.days);
        let (from, until) = window.date_range();
        let fetched = match self.source.fetch(from, until) {
            Ok(slots) => slots,
            Err(err) => return Tick::Failed(err),
        };

        // The portal already filters by date, but the deadline is a precise
        // instant; re-check each start against it.
        let visible: Vec<Slot> = fetched
            .into_iter()
            .filter(|slot| window.contains(slot.start))
            .collect();

        if self.config.policy == NotifyPolicy::ExitAfterFirst {
            return match next_in_window(&visible, window) {
                Some(slot) => {
                    self.announce(slot, now);
                    Tick::Found(slot.clone())
                }
                None => Tick::Quiet,
            };
        }

        let mut first_new: Option<Slot> = None;
        for slot in &visible {
            if self.known.contains(slot) {
                continue;
            }
            self.announce(slot, now);
            self.known.push(slot.clone());
            if first_new.is_none() {
                first_new = Some(slot.clone());
            }
        }

        let reporter = self.reporter;
        self.known.retain(|old| {
            if visible.contains(old) {
                return true;
            }
            reporter.removed(&format!(
                "{} - Slot removed: {}",
                now.format(EVENT_TIME_FORMAT),
                old.format_on(now.date())
            ));
            false
        });

        match first_new {
            Some(slot) => Tick::Found(slot),
            None => Tick::Quiet,
        }
    }

    fn announce(&self, slot: &Slot, now: NaiveDateTime) {
        self.reporter.added(&format!(
            "{} - New slot: {}",
            now.format(EVENT_TIME_FORMAT),
            slot.format_on(now.date())
        ));
        self.notifier.notify(&self.config.project, slot);
    }
}

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::portal::Slot;

/// Acceptance horizon for one poll cycle: now through now plus N days.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Window {
    from: NaiveDate,
    deadline: NaiveDateTime,
}

impl Window {
    pub(crate) fn new(now: NaiveDateTime, days: u32) -> Self {
        let deadline = now
            .checked_add_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDateTime::MAX);
        Window {
            from: now.date(),
            deadline,
        }
    }

    /// Inclusive: a slot starting exactly at the deadline still counts.
    pub(crate) fn contains(&self, at: NaiveDateTime) -> bool {
        at <= self.deadline
    }

    /// Date bounds for the portal query.
    pub(crate) fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.from, self.deadline.date())
    }
}

/// Earliest slot starting inside the window, if any.
pub(crate) fn next_in_window<'a>(slots: &'a [Slot], window: Window) -> Option<&'a Slot> {
    slots
        .iter()
        .filter(|slot| window.contains(slot.start))
        .min_by_key(|slot| slot.start)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn slot_at(id: u64, start: NaiveDateTime) -> Slot {
        Slot {
            id,
            start,
            end: start + Duration::minutes(45),
        }
    }

    // --- window bounds ---

    #[test]
    fn includes_slot_later_today() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        assert!(window.contains(dt(2026, 8, 22, 18, 30)));
    }

    #[test]
    fn includes_deadline_exactly() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        assert!(window.contains(dt(2026, 8, 25, 10, 0)));
    }

    #[test]
    fn excludes_one_second_past_deadline() {
        let now = dt(2026, 8, 22, 10, 0);
        let window = Window::new(now, 3);
        let past = now + Duration::days(3) + Duration::seconds(1);
        assert!(!window.contains(past));
    }

    #[test]
    fn huge_day_count_saturates() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), u32::MAX);
        assert!(window.contains(NaiveDateTime::MAX));
    }

    #[test]
    fn date_range_spans_today_through_deadline() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        assert_eq!(
            window.date_range(),
            (
                NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
            )
        );
    }

    // --- nearest slot ---

    #[test]
    fn picks_earliest_in_window() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        let slots = vec![
            slot_at(1, dt(2026, 8, 24, 9, 0)),
            slot_at(2, dt(2026, 8, 23, 13, 30)),
            slot_at(3, dt(2026, 8, 24, 16, 0)),
        ];
        let next = next_in_window(&slots, window).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn skips_slots_past_the_deadline() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        let slots = vec![
            slot_at(1, dt(2026, 8, 26, 9, 0)),
            slot_at(2, dt(2026, 8, 24, 13, 30)),
        ];
        let next = next_in_window(&slots, window).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn none_when_everything_is_too_far_out() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        let slots = vec![slot_at(1, dt(2026, 8, 26, 9, 0))];
        assert!(next_in_window(&slots, window).is_none());
    }

    #[test]
    fn none_on_empty_list() {
        let window = Window::new(dt(2026, 8, 22, 10, 0), 3);
        assert!(next_in_window(&[], window).is_none());
    }
}

//! Desktop notification delivery.
//!
//! Notifications go through the platform's own tooling (osascript on
//! macOS, notify-send elsewhere); delivery is fire and forget, a missing
//! tool only costs the popup.

use crate::portal::Slot;

const NOTIFICATION_TITLE: &str = "New correction slot";

/// Raises one notification per newly available slot.
pub(crate) trait Notifier {
    fn notify(&self, project: &str, slot: &Slot);
}

pub(crate) struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, project: &str, slot: &Slot) {
        send(NOTIFICATION_TITLE, &notification_body(project, slot));
    }
}

fn notification_body(project: &str, slot: &Slot) -> String {
    format!("{project}: {slot}")
}

#[cfg(target_os = "macos")]
fn send(title: &str, body: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );
    let _ = std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output();
}

#[cfg(target_os = "linux")]
fn send(title: &str, body: &str) {
    let _ = std::process::Command::new("notify-send")
        .arg(title)
        .arg(body)
        .output();
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn send(title: &str, body: &str) {
    // No notification command wired up here; the console line still lands.
    let _ = (title, body);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::portal::Slot;

    use super::notification_body;

    #[test]
    fn body_names_the_project_and_the_slot() {
        // A date far from any plausible "today" keeps the rendering stable.
        let start = NaiveDate::from_ymd_opt(2099, 1, 2)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2099, 1, 2)
            .unwrap()
            .and_hms_opt(14, 15, 0)
            .unwrap();
        let slot = Slot { id: 1, start, end };
        assert_eq!(
            notification_body("libft", &slot),
            "libft: 02/01/2099 13:30 - 02/01/2099 14:15"
        );
    }
}

use console::{Style, Term};

use super::{Notification, NotificationKind, Notifier};

/// Prints notifications to stderr, one styled line each.
///
/// Terminal lines cannot expire, so the TTL is ignored.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    term: Term,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Formats a notification the way it is printed.
    pub fn format(notification: &Notification) -> String {
        let style = style_for(notification.kind);
        format!(
            "{} {}",
            style.apply_to(format!("[{}]", notification.kind.as_str())),
            notification.message
        )
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

fn style_for(kind: NotificationKind) -> Style {
    match kind {
        NotificationKind::Info => Style::new().cyan(),
        NotificationKind::Success => Style::new().green(),
        NotificationKind::Warning => Style::new().yellow(),
        NotificationKind::Error => Style::new().red().bold(),
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        if let Err(err) = self.term.write_line(&Self::format(&notification)) {
            tracing::warn!(error = %err, "failed to print notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contains_kind_and_message() {
        console::set_colors_enabled(false);
        let line = ConsoleNotifier::format(&Notification::new(
            "Dark theme activated!",
            NotificationKind::Success,
        ));
        assert_eq!(line, "[success] Dark theme activated!");
    }
}

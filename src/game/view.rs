use std::time::Duration;

use crate::confetti::ConfettiBurst;

/// Transient toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
}

/// Severity of the persistent alert region under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Wrong guess with attempts left. Cleared when the cooldown ends.
    Error,
    Lost,
    Success,
}

/// Presentation surface driven by [`GameSession`](super::GameSession).
///
/// Implementations own rendering, timers and effects. None of these calls
/// report failure back to the game.
pub trait GameView {
    /// Fire-and-forget toast that dismisses itself.
    fn notify(&mut self, kind: NotificationKind, message: &str);

    fn show_message(&mut self, kind: MessageKind, text: &str);

    /// Disable the input and mark it erroneous for `duration`.
    fn start_cooldown(&mut self, duration: Duration);

    /// Clear the form fields.
    fn reset_form(&mut self);

    /// Take the form out of play for good.
    fn remove_form(&mut self);

    fn celebrate(&mut self, burst: ConfettiBurst);

    /// Show the "Play again?" control. Activating it reloads the game.
    fn offer_restart(&mut self);
}

//! Contact form submission flow.
//!
//! Validation, busy state and the single transient message slot. Timers and
//! DOM updates live in `ui::contact_form`; everything here is synchronous.

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_SUCCESS: &str = "Thanks! We'll be in touch soon.";
pub const MSG_FAILURE: &str = "Something went wrong. Please try again.";
pub const BUSY_LABEL: &str = "Sending…";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("invalid email address: {value:?}")]
    InvalidEmail { value: String },
    #[error("a submission is already in progress")]
    Busy,
    #[error("submission failed: {0}")]
    Submission(String),
}

/// Check the `local@domain.tld` shape: no whitespace, a single `@`, and a dot
/// inside the domain.
pub fn validate_email(input: &str) -> Result<String, ContactError> {
    let value = input.trim();
    let invalid = || ContactError::InvalidEmail {
        value: value.to_string(),
    };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(invalid());
    }

    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePhase {
    Visible,
    FadingOut,
}

pub type MessageId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub id: MessageId,
    pub kind: MessageKind,
    pub text: String,
    pub phase: MessagePhase,
}

impl FormMessage {
    pub fn class(&self) -> String {
        format!("form-message form-message-{}", self.kind.as_str())
    }
}

/// Holds at most one message. Showing a new one replaces the old, and the old
/// one's pending timers become no-ops because their id no longer matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageSlot {
    current: Option<FormMessage>,
    next_id: MessageId,
}

impl MessageSlot {
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) -> MessageId {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(FormMessage {
            id,
            kind,
            text: text.into(),
            phase: MessagePhase::Visible,
        });
        id
    }

    /// Start the fade-out of message `id` if it is still shown
    pub fn begin_fade(&mut self, id: MessageId) -> bool {
        match self.current.as_mut() {
            Some(message) if message.id == id => {
                message.phase = MessagePhase::FadingOut;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: MessageId) -> bool {
        if self.current.as_ref().is_some_and(|m| m.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&FormMessage> {
        self.current.as_ref()
    }

    pub fn count(&self) -> usize {
        usize::from(self.current.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// What to do with the form fields once a submission finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    Reset,
    Keep,
}

/// Proof that a submission was started. Consumed by [`ContactFlow::finish`].
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFlow {
    state: SubmitState,
    messages: MessageSlot,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and enter the busy state.
    ///
    /// An invalid address shows the validation message and leaves the flow idle.
    pub fn begin(&mut self, email: &str) -> Result<SubmitTicket, ContactError> {
        if self.state == SubmitState::Submitting {
            return Err(ContactError::Busy);
        }
        let email = validate_email(email).inspect_err(|_| {
            self.messages.show(MessageKind::Error, MSG_INVALID_EMAIL);
        })?;

        self.state = SubmitState::Submitting;
        Ok(SubmitTicket { email })
    }

    /// Leave the busy state and show the outcome
    pub fn finish(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<(), ContactError>,
    ) -> (FormEffect, MessageId) {
        let SubmitTicket { email: _ } = ticket;
        self.state = SubmitState::Idle;
        match outcome {
            Ok(()) => (
                FormEffect::Reset,
                self.messages.show(MessageKind::Success, MSG_SUCCESS),
            ),
            Err(_) => (
                FormEffect::Keep,
                self.messages.show(MessageKind::Error, MSG_FAILURE),
            ),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn submit_enabled(&self) -> bool {
        self.state == SubmitState::Idle
    }

    /// Label to show on the submit control instead of its own text
    pub fn busy_label(&self) -> Option<&'static str> {
        match self.state {
            SubmitState::Submitting => Some(BUSY_LABEL),
            SubmitState::Idle => None,
        }
    }

    pub fn messages(&self) -> &MessageSlot {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageSlot {
        &mut self.messages
    }

    pub fn current_message_id(&self) -> Option<MessageId> {
        self.messages.current().map(|m| m.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "user@example.com",
            "first.last@sub.example.co",
            "a@b.c",
            "  padded@example.com  ",
            "user@.example.com",
        ] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
        assert_eq!(
            validate_email(" padded@example.com ").unwrap(),
            "padded@example.com"
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@example.",
            "user@@example.com",
            "us er@example.com",
            "user@exa mple.com",
            "a@b@c.com",
        ] {
            assert!(
                matches!(validate_email(email), Err(ContactError::InvalidEmail { .. })),
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn test_invalid_email_shows_message_and_stays_idle() {
        let mut flow = ContactFlow::new();
        let result = flow.begin("nope");
        assert!(matches!(result, Err(ContactError::InvalidEmail { .. })));
        assert_eq!(flow.state(), SubmitState::Idle);
        assert!(flow.submit_enabled());

        let message = flow.messages().current().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, MSG_INVALID_EMAIL);
        assert_eq!(message.class(), "form-message form-message-error");
    }

    #[test]
    fn test_successful_submission() {
        let mut flow = ContactFlow::new();
        let ticket = flow.begin("user@example.com").unwrap();
        assert_eq!(flow.state(), SubmitState::Submitting);
        assert!(!flow.submit_enabled());
        assert_eq!(flow.busy_label(), Some(BUSY_LABEL));

        let (effect, id) = flow.finish(ticket, Ok(()));
        assert_eq!(effect, FormEffect::Reset);
        assert!(flow.submit_enabled());
        assert_eq!(flow.busy_label(), None);

        let message = flow.messages().current().unwrap();
        assert_eq!(message.id, id);
        assert_eq!(message.text, MSG_SUCCESS);
        assert_eq!(message.class(), "form-message form-message-success");
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let mut flow = ContactFlow::new();
        let ticket = flow.begin("user@example.com").unwrap();
        let (effect, _) = flow.finish(ticket, Err(ContactError::Submission("offline".into())));
        assert_eq!(effect, FormEffect::Keep);
        assert_eq!(flow.messages().current().unwrap().text, MSG_FAILURE);
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn test_second_submit_while_busy_is_rejected() {
        let mut flow = ContactFlow::new();
        let _ticket = flow.begin("user@example.com").unwrap();
        assert_eq!(flow.begin("other@example.com"), Err(ContactError::Busy));
    }

    #[test]
    fn test_stale_timers_do_not_remove_newer_message() {
        let mut slot = MessageSlot::default();
        let first = slot.show(MessageKind::Error, "one");
        let second = slot.show(MessageKind::Success, "two");
        assert_eq!(slot.count(), 1);

        assert!(!slot.begin_fade(first));
        assert!(!slot.remove(first));
        assert_eq!(slot.current().unwrap().id, second);

        assert!(slot.begin_fade(second));
        assert_eq!(slot.current().unwrap().phase, MessagePhase::FadingOut);
        assert!(slot.remove(second));
        assert_eq!(slot.count(), 0);
    }
}

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::models::{Message, Role};
use crate::providers::AiProvider;

/// Simulated assistant latency.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1200);

/// Prompts offered before the user has said anything.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How can I donate blood?",
    "Find nearby medicine banks",
    "Organ donation eligibility",
    "Check my donation history",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

/// Handle for the one outstanding assistant reply.
#[derive(Debug, Clone)]
pub struct ReplyTicket {
    pub id: String,
    pub query: String,
    pub delay: Duration,
    pub cancel: CancellationToken,
}

/// Reply produced for a ticket, ready to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub ticket_id: String,
    pub content: String,
}

/// The conversation log of one chat screen.
///
/// Messages are only ever appended. The log is seeded with the assistant's
/// welcome message and at most one reply is outstanding at a time.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    state: ChatState,
    pending: Option<ReplyTicket>,
    reply_delay: Duration,
}

impl ChatSession {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: vec![Message::welcome()],
            input: String::new(),
            state: ChatState::Idle,
            pending: None,
            reply_delay,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_composing(&self) -> bool {
        self.state == ChatState::AwaitingReply
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn show_suggestions(&self) -> bool {
        self.messages.len() <= 1
    }

    /// Append a user message and hand back the ticket for its reply.
    ///
    /// `text` is used when given (suggested questions), otherwise the pending
    /// input. Blank text and input while a reply is outstanding are ignored.
    pub fn append_user_message(&mut self, text: Option<&str>) -> Option<ReplyTicket> {
        if self.is_composing() {
            tracing::debug!("Ignoring user message while a reply is pending");
            return None;
        }

        // Suggested questions are sent verbatim; typed input is trimmed.
        let text = match text {
            Some(text) => text.to_string(),
            None => self.input.trim().to_string(),
        };
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::user(text.clone()));
        self.input.clear();
        self.state = ChatState::AwaitingReply;

        let ticket = ReplyTicket {
            id: Uuid::new_v4().to_string(),
            query: text,
            delay: self.reply_delay,
            cancel: CancellationToken::new(),
        };
        self.pending = Some(ticket.clone());
        tracing::debug!(ticket = %ticket.id, "Awaiting assistant reply");
        Some(ticket)
    }

    /// Append the assistant reply if it belongs to the outstanding ticket.
    pub fn receive_assistant_reply(&mut self, reply: AssistantReply) -> Option<&Message> {
        match &self.pending {
            Some(ticket) if ticket.id == reply.ticket_id => {}
            _ => {
                tracing::warn!(ticket = %reply.ticket_id, "Discarding reply for unknown ticket");
                return None;
            }
        }

        self.pending = None;
        self.state = ChatState::Idle;
        self.messages.push(Message::new(Role::Assistant, reply.content));
        self.messages.last()
    }

    pub fn cancel_pending(&mut self) {
        if let Some(ticket) = self.pending.take() {
            tracing::debug!(ticket = %ticket.id, "Cancelling pending reply");
            ticket.cancel.cancel();
        }
        self.state = ChatState::Idle;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        if let Some(ticket) = self.pending.take() {
            ticket.cancel.cancel();
        }
    }
}

/// Wait out the ticket's delay, then ask the provider for the reply.
///
/// Returns `None` when the ticket is cancelled first.
pub async fn run_reply(provider: Arc<dyn AiProvider>, ticket: ReplyTicket) -> Option<AssistantReply> {
    tokio::select! {
        biased;
        _ = ticket.cancel.cancelled() => {
            tracing::debug!(ticket = %ticket.id, "Reply cancelled");
            None
        }
        _ = tokio::time::sleep(ticket.delay) => {
            let content = provider.respond(&ticket.query).await;
            Some(AssistantReply {
                ticket_id: ticket.id,
                content,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::keyword::{BLOOD_REPLY, ORGAN_REPLY};
    use crate::providers::KeywordProvider;

    fn provider() -> Arc<dyn AiProvider> {
        Arc::new(KeywordProvider::new())
    }

    #[test]
    fn test_session_starts_with_welcome() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.state, ChatState::Idle);
        assert!(session.show_suggestions());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::default();
        assert!(session.append_user_message(None).is_none());
        session.set_input("   \t\n");
        assert!(session.append_user_message(None).is_none());
        assert!(session.append_user_message(Some("  ")).is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.state, ChatState::Idle);
    }

    #[test]
    fn test_append_uses_trimmed_input_and_clears_it() {
        let mut session = ChatSession::default();
        session.set_input("  blood please  ");
        let ticket = session.append_user_message(None).unwrap();

        assert_eq!(ticket.query, "blood please");
        assert_eq!(ticket.delay, DEFAULT_REPLY_DELAY);
        assert!(session.input.is_empty());
        assert!(session.is_composing());
        assert!(!session.show_suggestions());
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "blood please");
    }

    #[test]
    fn test_explicit_text_takes_precedence_over_input() {
        let mut session = ChatSession::default();
        session.set_input("draft");
        let ticket = session
            .append_user_message(Some(SUGGESTED_QUESTIONS[0]))
            .unwrap();
        assert_eq!(ticket.query, "How can I donate blood?");
        assert!(session.input.is_empty());
    }

    #[test]
    fn test_explicit_text_is_sent_verbatim() {
        let mut session = ChatSession::default();
        let ticket = session.append_user_message(Some(" Organ donation ")).unwrap();
        assert_eq!(ticket.query, " Organ donation ");
        assert_eq!(session.messages()[1].content, " Organ donation ");
    }

    #[test]
    fn test_second_message_blocked_while_composing() {
        let mut session = ChatSession::default();
        session.append_user_message(Some("hello")).unwrap();
        assert!(session.append_user_message(Some("again")).is_none());
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_organ_exchange_after_delay() {
        let mut session = ChatSession::default();
        let ticket = session.append_user_message(Some("organ")).unwrap();

        let started = tokio::time::Instant::now();
        let reply = run_reply(provider(), ticket).await.unwrap();
        assert!(started.elapsed() >= DEFAULT_REPLY_DELAY);

        let appended = session.receive_assistant_reply(reply).unwrap();
        assert_eq!(appended.content, ORGAN_REPLY);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "organ");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, ORGAN_REPLY);
        assert_eq!(session.state, ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_ready_before_delay() {
        let mut session = ChatSession::default();
        let ticket = session.append_user_message(Some("blood")).unwrap();

        let early = tokio::time::timeout(
            DEFAULT_REPLY_DELAY - Duration::from_millis(1),
            run_reply(provider(), ticket.clone()),
        )
        .await;
        assert!(early.is_err());

        let reply = run_reply(provider(), ticket).await.unwrap();
        assert_eq!(reply.content, BLOOD_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_ticket_yields_nothing() {
        let mut session = ChatSession::default();
        let ticket = session.append_user_message(Some("organ")).unwrap();
        session.cancel_pending();

        assert!(run_reply(provider(), ticket).await.is_none());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.state, ChatState::Idle);
    }

    #[test]
    fn test_dropping_session_cancels_pending_reply() {
        let mut session = ChatSession::default();
        let ticket = session.append_user_message(Some("organ")).unwrap();
        assert!(!ticket.cancel.is_cancelled());
        drop(session);
        assert!(ticket.cancel.is_cancelled());
    }

    #[test]
    fn test_stale_reply_is_discarded() {
        let mut session = ChatSession::default();
        session.append_user_message(Some("organ")).unwrap();

        let stale = AssistantReply {
            ticket_id: "not-a-ticket".to_string(),
            content: "late".to_string(),
        };
        assert!(session.receive_assistant_reply(stale).is_none());
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_composing());
    }
}

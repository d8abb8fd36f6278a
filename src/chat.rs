use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

pub const GREETING: &str = "Hi! How can I help you today?";

pub const CANNED_RESPONSES: [&str; 6] = [
    "I'm a frontend developer with 5+ years of experience.",
    "You can download my resume from the About page.",
    "I specialize in React, TypeScript, and UI/UX design.",
    "I'm currently available for freelance projects.",
    "Feel free to contact me via the Contact form!",
    "My portfolio showcases projects in web development and design.",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Failed to get a response. Please try again.")]
    NoResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub author: Author,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

/// Append-only message log for a single session.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u32,
    pending: usize,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
            pending: 0,
        };
        log.push(GREETING.to_string(), Author::Assistant);
        log
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> ChatState {
        if self.pending == 0 {
            ChatState::Idle
        } else {
            ChatState::AwaitingReply
        }
    }

    /// Appends a user message and marks a reply as outstanding.
    ///
    /// Blank input is dropped and `None` is returned. Sending while a reply is
    /// still pending is allowed; every send gets its own reply.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.pending += 1;
        log::debug!("chat: user message queued, {} pending", self.pending);
        Some(self.push(text.to_string(), Author::User))
    }

    /// Settles one outstanding reply, appending it when it succeeded.
    pub fn receive(&mut self, reply: Result<String, ChatError>) -> Result<&ChatMessage, ChatError> {
        self.pending = self.pending.saturating_sub(1);
        let text = reply?;
        Ok(self.push(text, Author::Assistant))
    }

    fn push(&mut self, text: String, author: Author) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, text, author });
        &self.messages[self.messages.len() - 1]
    }
}

/// Picks a canned reply uniformly at random.
///
/// Only fails if the canned set is empty.
pub fn canned_reply<R: Rng + ?Sized>(rng: &mut R) -> Result<String, ChatError> {
    CANNED_RESPONSES
        .choose(rng)
        .map(|s| s.to_string())
        .ok_or(ChatError::NoResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_new_log_has_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].id, 1);
        assert_eq!(log.messages()[0].text, GREETING);
        assert!(!log.messages()[0].is_user());
        assert_eq!(log.state(), ChatState::Idle);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut log = ChatLog::new();

        let sent = log.send("hello").expect("non-empty text is accepted").clone();
        assert_eq!(sent.text, "hello");
        assert!(sent.is_user());
        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.state(), ChatState::AwaitingReply);

        let reply = log
            .receive(canned_reply(&mut rng))
            .expect("canned replies never fail")
            .clone();
        assert_eq!(reply.author, Author::Assistant);
        assert!(CANNED_RESPONSES.contains(&reply.text.as_str()));
        assert_eq!(log.messages().len(), 3);
        assert_eq!(log.state(), ChatState::Idle);
    }

    #[test]
    fn test_blank_messages_are_dropped() {
        let mut log = ChatLog::new();
        assert!(log.send("").is_none());
        assert!(log.send("   \t\n").is_none());
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.state(), ChatState::Idle);
    }

    #[test]
    fn test_rapid_fire_ids_stay_increasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut log = ChatLog::new();
        log.send("first");
        log.send("second");
        assert_eq!(log.state(), ChatState::AwaitingReply);
        log.receive(canned_reply(&mut rng)).unwrap();
        assert_eq!(log.state(), ChatState::AwaitingReply);
        log.send("third");
        log.receive(canned_reply(&mut rng)).unwrap();
        log.receive(canned_reply(&mut rng)).unwrap();
        assert_eq!(log.state(), ChatState::Idle);

        let ids = log.messages().iter().map(|m| m.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_failed_reply_appends_nothing() {
        let mut log = ChatLog::new();
        log.send("hello");
        let res = log.receive(Err(ChatError::NoResponse));
        assert_eq!(res, Err(ChatError::NoResponse));
        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.state(), ChatState::Idle);
    }

    #[test]
    fn test_canned_reply_covers_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(canned_reply(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), CANNED_RESPONSES.len());
    }
}

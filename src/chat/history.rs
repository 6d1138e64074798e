//! Role-tagged message log for one dialogue.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single immutable chat message.
///
/// Serializes as `{"role": "...", "content": "..."}`, which is both the
/// transcript format and the chat-completions wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An ordered message log.
///
/// Holds at most one system message, and only at index 0. User and
/// assistant turns can only be appended; the log is rebuilt wholesale by
/// [`Conversation::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates a conversation seeded with a system prompt.
    pub fn new(system_prompt: &str) -> Self {
        Self {
            messages: vec![Message::new(Role::System, system_prompt)],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.append(Role::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.append(Role::Assistant, content.into());
    }

    fn append(&mut self, role: Role, content: String) {
        debug_assert_ne!(role, Role::System);
        self.messages.push(Message { role, content });
    }

    /// Drops every message and reinserts a single system message.
    pub fn reset(&mut self, system_prompt: &str) {
        self.messages.clear();
        self.messages.push(Message::new(Role::System, system_prompt));
    }

    /// Read-only view of the log, oldest first.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role == Role::System)
            .map(Message::content)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn system_count(conversation: &Conversation) -> usize {
        conversation
            .snapshot()
            .iter()
            .filter(|m| m.role() == Role::System)
            .count()
    }

    #[test]
    fn test_new_has_single_system_message() {
        let conversation = Conversation::new("be nice");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.system_prompt(), Some("be nice"));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new("sys");
        conversation.push_user("Hello");
        conversation.push_assistant("안녕하세요");
        conversation.push_user("Bye");

        let roles: Vec<Role> = conversation.snapshot().iter().map(Message::role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(conversation.snapshot()[2].content(), "안녕하세요");
    }

    #[test]
    fn test_reset_clears_turns() {
        let mut conversation = Conversation::new("old");
        conversation.push_user("a");
        conversation.push_assistant("b");

        conversation.reset("new");

        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.system_prompt(), Some("new"));
    }

    #[test]
    fn test_system_message_stays_first_and_unique() {
        let mut conversation = Conversation::new("sys");
        for i in 0..10 {
            if i % 4 == 3 {
                conversation.reset("sys2");
            }
            conversation.push_user(format!("u{i}"));
            conversation.push_assistant(format!("a{i}"));

            assert_eq!(system_count(&conversation), 1);
            assert_eq!(conversation.snapshot()[0].role(), Role::System);
        }
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let message = Message::new(Role::Assistant, "hi");
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}

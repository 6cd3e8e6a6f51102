use serde::{Deserialize, Serialize};

/// Автор сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    User,
    Bot,
}

impl ChatAuthor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatAuthor::User => "user",
            ChatAuthor::Bot => "bot",
        }
    }
}

/// One entry of the conversation log.
///
/// Fields are private: a message never changes after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    author: ChatAuthor,
    content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            author: ChatAuthor::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            author: ChatAuthor::Bot,
            content: content.into(),
        }
    }

    pub fn author(&self) -> ChatAuthor {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.author == ChatAuthor::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::bot("hi")).unwrap();
        assert_eq!(json, r#"{"author":"bot","content":"hi"}"#);
    }
}

//! Scripted chat consultant: first-match keyword lookup over a fixed FAQ.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const GREETING: &str = "Здравствуйте! Я помогу вам подобрать автомобиль. Что вас интересует?";
pub const FALLBACK_ANSWER: &str = "Спасибо за вопрос! Наш менеджер свяжется с вами в ближайшее время. Позвоните нам по телефону +7 (999) 123-45-67 для быстрой консультации.";

/// Keywords plus the canned answer they trigger
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl KeywordGroup {
    /// `input` must already be lowercased.
    fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|keyword| input.contains(keyword))
    }
}

// Order matters: the first matching group answers.
static KEYWORD_GROUPS: Lazy<Vec<KeywordGroup>> = Lazy::new(|| {
    vec![
        KeywordGroup {
            topic: "кредит",
            keywords: &["кредит", "рассрочка", "одобрение", "банк", "процент"],
            answer: "Мы предлагаем выгодные условия кредитования от 4.9% годовых. Одобрение за 5 минут без справок о доходах!",
        },
        KeywordGroup {
            topic: "trade-in",
            keywords: &["trade-in", "обмен", "зачет", "старый авто", "выкуп"],
            answer: "Программа Trade-in позволяет обменять ваш старый автомобиль на новый с доплатой. Оценка за 15 минут, выгода до 100 000 ₽!",
        },
        KeywordGroup {
            topic: "гарантия",
            keywords: &["гарантия", "страховка", "поломка", "ремонт", "обслуживание"],
            answer: "На все автомобили предоставляется гарантия до 3 лет или 100 000 км. Также доступны расширенные гарантийные программы.",
        },
        KeywordGroup {
            topic: "тест-драйв",
            keywords: &["тест-драйв", "покататься", "попробовать", "за рулем"],
            answer: "Записаться на тест-драйв можно прямо на сайте или по телефону. Доступен выездной тест-драйв в удобное для вас место.",
        },
        KeywordGroup {
            topic: "цена",
            keywords: &["цена", "стоимость", "сколько", "дешево", "дорого", "скидка"],
            answer: "У нас честные цены без скрытых платежей. Возможны скидки при покупке за наличные и специальные предложения по кредиту.",
        },
    ]
});

pub fn keyword_groups() -> &'static [KeywordGroup] {
    &KEYWORD_GROUPS
}

/// First group (in declaration order) with any keyword contained in the input.
pub fn find_group(input: &str) -> Option<&'static KeywordGroup> {
    let lowered = input.to_lowercase();
    KEYWORD_GROUPS.iter().find(|group| group.matches(&lowered))
}

/// Answer for free-text input, or the phone-number fallback.
pub fn respond(input: &str) -> &'static str {
    find_group(input).map(|group| group.answer).unwrap_or(FALLBACK_ANSWER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

/// Chat widget state: transcript, draft and replies waiting out the typing delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatState {
    pub open: bool,
    pub typing: bool,
    pub draft: String,
    pub messages: Vec<ChatMessage>,
    pending: VecDeque<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            typing: false,
            draft: String::new(),
            messages: vec![ChatMessage { author: Author::Bot, text: GREETING.to_string() }],
            pending: VecDeque::new(),
        }
    }
}

impl ChatState {
    /// Moves the trimmed draft into the transcript and queues its answer.
    /// Blank drafts are ignored and `false` is returned.
    pub fn send(&mut self) -> bool {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return false;
        }
        self.draft.clear();
        self.pending.push_back(respond(&text).to_string());
        self.messages.push(ChatMessage { author: Author::User, text });
        self.typing = true;
        true
    }

    /// Appends the oldest queued answer; the indicator stays on while more are queued.
    pub fn deliver_next(&mut self) -> Option<&str> {
        let text = self.pending.pop_front()?;
        self.messages.push(ChatMessage { author: Author::Bot, text });
        self.typing = !self.pending.is_empty();
        self.messages.last().map(|message| message.text.as_str())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(find_group("Какая ГАРАНТИЯ?").map(|g| g.topic), Some("гарантия"));
        assert_eq!(find_group("Trade-In возможен?").map(|g| g.topic), Some("trade-in"));
    }

    #[test]
    fn blank_draft_is_ignored() {
        let mut chat = ChatState::default();
        chat.draft = "   ".to_string();
        assert!(!chat.send());
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.typing);
    }

    #[test]
    fn reply_waits_for_delivery() {
        let mut chat = ChatState::default();
        chat.draft = "  Есть рассрочка? ".to_string();
        assert!(chat.send());
        assert_eq!(chat.messages.last().map(|m| m.text.as_str()), Some("Есть рассрочка?"));
        assert!(chat.typing);
        assert!(chat.draft.is_empty());

        let reply = chat.deliver_next().map(str::to_string);
        assert_eq!(reply.as_deref(), Some(keyword_groups()[0].answer));
        assert!(!chat.typing);
        assert_eq!(chat.deliver_next(), None);
    }
}

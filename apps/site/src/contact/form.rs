use serde::{Deserialize, Serialize};

/// The four-field record captured from the contact form.
///
/// Serializes to exactly `{ "name", "email", "phone", "message" }`, which is
/// the body the contact endpoint expects. Deserialized from the page's own
/// url-encoded form post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Ваше имя",
            Field::Email => "Email",
            Field::Phone => "Телефон",
            Field::Message => "Сообщение",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Иван Иванов",
            Field::Email => "ivan@example.com",
            Field::Phone => "+7 (900) 123-45-67",
            Field::Message => "Расскажите о вашем проекте и целях консультации",
        }
    }

    /// HTML input type; `None` for the multi-line message.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("text"),
            Field::Email => Some("email"),
            Field::Phone => Some("tel"),
            Field::Message => None,
        }
    }
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = FormState::default();
    }
}

/// Lifecycle of the submit control.
///
/// `Idle` is the only state in which a new submission may start. `Done`
/// covers the short window between the outcome arriving and the reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Done,
}

impl SubmissionStatus {
    /// Whether the submit control is disabled.
    pub fn is_busy(self) -> bool {
        self != SubmissionStatus::Idle
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionStatus::Submitting => "Отправка...",
            SubmissionStatus::Idle | SubmissionStatus::Done => "Отправить заявку",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Ivan".to_string(),
            email: "ivan@example.com".to_string(),
            phone: "+79001234567".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_endpoint_field_names() {
        let value = serde_json::to_value(filled()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "message", "name", "phone"]);
        assert_eq!(obj["email"], "ivan@example.com");
    }

    #[test]
    fn test_get_reads_each_field() {
        let form = filled();
        assert_eq!(form.get(Field::Name), "Ivan");
        assert_eq!(form.get(Field::Phone), "+79001234567");
        assert_eq!(form.get(Field::Message), "Hello");
    }

    #[test]
    fn test_missing_fields_treats_whitespace_as_empty() {
        let mut form = filled();
        form.phone = "   ".to_string();
        form.message.clear();
        assert_eq!(form.missing_fields(), vec![Field::Phone, Field::Message]);
        assert!(!form.is_complete());
        assert!(filled().is_complete());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, FormState::default());
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_status_busy_and_labels() {
        assert!(!SubmissionStatus::Idle.is_busy());
        assert!(SubmissionStatus::Submitting.is_busy());
        assert!(SubmissionStatus::Done.is_busy());
        assert_eq!(SubmissionStatus::Submitting.button_label(), "Отправка...");
        assert_eq!(SubmissionStatus::Idle.button_label(), "Отправить заявку");
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientField {
    To,
    Cc,
    Bcc,
}

impl RecipientField {
    pub const ALL: [RecipientField; 3] = [RecipientField::To, RecipientField::Cc, RecipientField::Bcc];

    pub fn id(&self) -> &'static str {
        match *self {
            RecipientField::To => "to",
            RecipientField::Cc => "cc",
            RecipientField::Bcc => "bcc",
        }
    }

    pub fn from_id(id: &str) -> Option<RecipientField> {
        match id {
            "to" => Some(RecipientField::To),
            "cc" => Some(RecipientField::Cc),
            "bcc" => Some(RecipientField::Bcc),
            _ => None
        }
    }
}

/// Draft being composed. Every edit derives a new value from the previous one.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EditedMessage {
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub content: String,
}

impl EditedMessage {
    pub fn recipients(&self, field: RecipientField) -> &[String] {
        match field {
            RecipientField::To => &self.to,
            RecipientField::Cc => &self.cc,
            RecipientField::Bcc => &self.bcc,
        }
    }

    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }

    /// Appends `address` to `field`. Duplicates are kept.
    pub fn with_address(&self, field: RecipientField, address: String) -> Self {
        let mut list = self.recipients(field).to_vec();
        list.push(address);
        self.with_recipients(field, list)
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range for `field`.
    pub fn without_address(&self, field: RecipientField, index: usize) -> Self {
        let mut list = self.recipients(field).to_vec();
        list.remove(index);
        self.with_recipients(field, list)
    }

    pub fn with_subject(&self, subject: String) -> Self {
        Self {
            subject,
            ..self.clone()
        }
    }

    pub fn with_content(&self, content: String) -> Self {
        Self {
            content,
            ..self.clone()
        }
    }

    fn with_recipients(&self, field: RecipientField, list: Vec<String>) -> Self {
        let mut next = self.clone();
        match field {
            RecipientField::To => next.to = list,
            RecipientField::Cc => next.cc = list,
            RecipientField::Bcc => next.bcc = list,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_cc() -> EditedMessage {
        EditedMessage {
            cc: vec!["a@x.com".to_string(), "b@x.com".to_string(), "c@x.com".to_string()],
            ..EditedMessage::default()
        }
    }

    #[test]
    fn field_ids_match_inputs() {
        for field in RecipientField::ALL {
            assert_eq!(RecipientField::from_id(field.id()), Some(field));
        }
        assert_eq!(RecipientField::from_id("subject"), None);
    }

    #[test]
    fn with_address_appends_and_keeps_duplicates() {
        let message = EditedMessage::default()
            .with_address(RecipientField::To, "a@x.com".to_string())
            .with_address(RecipientField::To, "a@x.com".to_string());
        assert_eq!(message.to, vec!["a@x.com", "a@x.com"]);
        assert!(message.cc.is_empty());
        assert_eq!(message.recipient_count(), 2);
    }

    #[test]
    fn with_address_leaves_previous_value_untouched() {
        let before = EditedMessage::default();
        let after = before.with_address(RecipientField::Bcc, "a@x.com".to_string());
        assert!(before.bcc.is_empty());
        assert_eq!(after.bcc, vec!["a@x.com"]);
    }

    #[test]
    fn without_address_removes_one_position() {
        let message = message_cc().without_address(RecipientField::Cc, 1);
        assert_eq!(message.cc, vec!["a@x.com", "c@x.com"]);
    }

    #[test]
    #[should_panic]
    fn without_address_out_of_range_panics() {
        message_cc().without_address(RecipientField::Cc, 3);
    }

    #[test]
    fn subject_and_content_replace_one_field() {
        let message = message_cc().with_subject("hi".to_string()).with_content("<p>x</p>".to_string());
        assert_eq!(message.subject, "hi");
        assert_eq!(message.content, "<p>x</p>");
        assert_eq!(message.cc.len(), 3);
    }

    #[test]
    fn serializes_field_names_for_the_wire() {
        let json = serde_json::to_value(&message_cc()).unwrap();
        assert_eq!(json["cc"][2], "c@x.com");
        assert_eq!(serde_json::to_value(RecipientField::Bcc).unwrap(), "bcc");
    }
}

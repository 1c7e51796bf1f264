//! Modal dialog collecting a contact's name and phone number.
//!
//! A dialog walks through two steps, name then phone number. Each step edits
//! its own buffer; confirming the last step yields a [`PromptOutcome`] and
//! closes the dialog. Cancelling at any step discards everything.
//!
//! ```text
//! Name ──Enter──▶ PhoneNumber ──Enter──▶ Submit(outcome)
//!   │                 │
//!   └──────Esc────────┴──────▶ dialog dropped, nothing dispatched
//! ```

use crate::domain::{Contact, ContactId};

/// What the dialog was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Add,
    Edit(ContactId),
}

/// The field currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Name,
    PhoneNumber,
}

/// State of an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDialog {
    pub kind: PromptKind,
    pub field: PromptField,
    pub name: String,
    pub phone_number: String,
}

/// Values collected by a confirmed dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Add {
        name: String,
        phone_number: String,
    },
    Edit {
        id: ContactId,
        name: String,
        phone_number: String,
    },
}

/// Result of confirming the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    /// The dialog moved on to its next field.
    Continue(PromptDialog),
    /// The last field was confirmed.
    Submit(PromptOutcome),
}

impl PromptDialog {
    /// A blank dialog for a new contact.
    #[must_use]
    pub const fn add() -> Self {
        Self {
            kind: PromptKind::Add,
            field: PromptField::Name,
            name: String::new(),
            phone_number: String::new(),
        }
    }

    /// A dialog pre-filled with `contact`'s current values.
    #[must_use]
    pub fn edit(contact: &Contact) -> Self {
        Self {
            kind: PromptKind::Edit(contact.id),
            field: PromptField::Name,
            name: contact.name.clone(),
            phone_number: contact.phone_number.clone(),
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Add => "Add Contact",
            PromptKind::Edit(_) => "Edit Contact",
        }
    }

    /// Question shown above the input line.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match (self.kind, self.field) {
            (PromptKind::Add, PromptField::Name) => "Enter name:",
            (PromptKind::Add, PromptField::PhoneNumber) => "Enter phone number:",
            (PromptKind::Edit(_), PromptField::Name) => "Enter new name:",
            (PromptKind::Edit(_), PromptField::PhoneNumber) => "Enter new phone number:",
        }
    }

    /// Contents of the field being edited.
    #[must_use]
    pub fn input(&self) -> &str {
        match self.field {
            PromptField::Name => &self.name,
            PromptField::PhoneNumber => &self.phone_number,
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.field {
            PromptField::Name => &mut self.name,
            PromptField::PhoneNumber => &mut self.phone_number,
        }
    }

    pub fn push(&mut self, c: char) {
        self.input_mut().push(c);
    }

    pub fn pop(&mut self) {
        self.input_mut().pop();
    }

    pub fn clear(&mut self) {
        self.input_mut().clear();
    }

    /// Confirms the current field.
    #[must_use]
    pub fn confirm(self) -> PromptStep {
        match self.field {
            PromptField::Name => PromptStep::Continue(Self {
                field: PromptField::PhoneNumber,
                ..self
            }),
            PromptField::PhoneNumber => PromptStep::Submit(match self.kind {
                PromptKind::Add => PromptOutcome::Add {
                    name: self.name,
                    phone_number: self.phone_number,
                },
                PromptKind::Edit(id) => PromptOutcome::Edit {
                    id,
                    name: self.name,
                    phone_number: self.phone_number,
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(dialog: &mut PromptDialog, text: &str) {
        text.chars().for_each(|c| dialog.push(c));
    }

    #[test]
    fn add_dialog_collects_name_then_phone() {
        let mut dialog = PromptDialog::add();
        assert_eq!(dialog.label(), "Enter name:");
        type_str(&mut dialog, "Ann Lee");

        let PromptStep::Continue(mut dialog) = dialog.confirm() else {
            panic!("expected the phone step");
        };
        assert_eq!(dialog.label(), "Enter phone number:");
        assert_eq!(dialog.input(), "");
        type_str(&mut dialog, "555");

        assert_eq!(
            dialog.confirm(),
            PromptStep::Submit(PromptOutcome::Add {
                name: "Ann Lee".to_string(),
                phone_number: "555".to_string(),
            })
        );
    }

    #[test]
    fn edit_dialog_is_prefilled() {
        let contact = Contact::new(ContactId(2), "Jane Smith", "987654321");
        let mut dialog = PromptDialog::edit(&contact);
        assert_eq!(dialog.title(), "Edit Contact");
        assert_eq!(dialog.label(), "Enter new name:");
        assert_eq!(dialog.input(), "Jane Smith");

        dialog.clear();
        type_str(&mut dialog, "Jane Doe");

        let PromptStep::Continue(dialog) = dialog.confirm() else {
            panic!("expected the phone step");
        };
        assert_eq!(dialog.label(), "Enter new phone number:");
        assert_eq!(dialog.input(), "987654321");

        assert_eq!(
            dialog.confirm(),
            PromptStep::Submit(PromptOutcome::Edit {
                id: ContactId(2),
                name: "Jane Doe".to_string(),
                phone_number: "987654321".to_string(),
            })
        );
    }

    #[test]
    fn backspace_edits_only_the_active_field() {
        let contact = Contact::new(ContactId(1), "John", "12");
        let mut dialog = PromptDialog::edit(&contact);
        dialog.pop();
        assert_eq!(dialog.name, "Joh");
        assert_eq!(dialog.phone_number, "12");
    }
}

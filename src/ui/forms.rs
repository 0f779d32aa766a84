use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::library::{BookInputs, LibraryError};

/// Focus targets on the library screen, in Tab order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum Focus {
    #[default]
    Title,
    Author,
    Status,
    Books,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Author,
            Focus::Author => Focus::Status,
            Focus::Status => Focus::Books,
            Focus::Books => Focus::Title,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::Books,
            Focus::Author => Focus::Title,
            Focus::Status => Focus::Author,
            Focus::Books => Focus::Status,
        }
    }
}

/// Presentation state of the book form. The values themselves live in the
/// library manager's [`BookInputs`]; this only tracks where keystrokes go.
#[derive(Default)]
pub(crate) struct BookForm {
    pub(crate) focus: Focus,
}

impl BookForm {
    /// Append a character to the focused text field.
    pub(crate) fn push_char(&self, inputs: &mut BookInputs, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.focus {
            Focus::Title => inputs.title.push(ch),
            Focus::Author => inputs.author.push(ch),
            Focus::Status | Focus::Books => return false,
        }
        true
    }

    /// Remove the last character from the focused text field.
    pub(crate) fn backspace(&self, inputs: &mut BookInputs) {
        match self.focus {
            Focus::Title => {
                inputs.title.pop();
            }
            Focus::Author => {
                inputs.author.pop();
            }
            Focus::Status | Focus::Books => {}
        }
    }

    /// Step the status picker when it has focus.
    pub(crate) fn cycle_status(&self, inputs: &mut BookInputs, forward: bool) -> bool {
        if self.focus != Focus::Status {
            return false;
        }
        inputs.status = if forward {
            inputs.status.next()
        } else {
            inputs.status.previous()
        };
        true
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, inputs: &BookInputs, field_name: &str, field: Focus) -> Line<'static> {
        let is_active = self.focus == field;
        let (display, is_empty) = match field {
            Focus::Title => placeholder_or(&inputs.title),
            Focus::Author => placeholder_or(&inputs.author),
            Focus::Status | Focus::Books => {
                if is_active {
                    (format!("< {} >", inputs.status), false)
                } else {
                    (inputs.status.to_string(), false)
                }
            }
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if is_empty {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character count for the requested field, used to place the cursor.
    pub(crate) fn value_len(inputs: &BookInputs, field: Focus) -> usize {
        match field {
            Focus::Title => inputs.title.chars().count(),
            Focus::Author => inputs.author.chars().count(),
            Focus::Status | Focus::Books => 0,
        }
    }
}

fn placeholder_or(value: &str) -> (String, bool) {
    if value.is_empty() {
        ("<required>".to_string(), true)
    } else {
        (value.to_string(), false)
    }
}

/// Blocking warning shown after a rejected operation.
pub(crate) struct Notice {
    pub(crate) heading: &'static str,
    pub(crate) message: String,
}

impl From<LibraryError> for Notice {
    fn from(err: LibraryError) -> Self {
        Self {
            heading: err.heading(),
            message: err.to_string(),
        }
    }
}

/// State for confirming that a non-empty library may be discarded.
pub(crate) struct ConfirmClose {
    pub(crate) count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::RecordAction;
    use crate::models::ReadingStatus;

    #[test]
    fn typing_only_reaches_text_fields() {
        let mut inputs = BookInputs::default();
        let mut form = BookForm::default();

        assert!(form.push_char(&mut inputs, 'D'));
        form.focus = Focus::Author;
        assert!(form.push_char(&mut inputs, 'H'));
        assert!(!form.push_char(&mut inputs, '\u{7}'));
        form.focus = Focus::Books;
        assert!(!form.push_char(&mut inputs, 'x'));

        assert_eq!(inputs.title, "D");
        assert_eq!(inputs.author, "H");
    }

    #[test]
    fn status_only_cycles_when_focused() {
        let mut inputs = BookInputs::default();
        let mut form = BookForm::default();
        assert!(!form.cycle_status(&mut inputs, true));

        form.focus = Focus::Status;
        assert!(form.cycle_status(&mut inputs, true));
        assert_eq!(inputs.status, ReadingStatus::InProgress);
        assert!(form.cycle_status(&mut inputs, false));
        assert!(form.cycle_status(&mut inputs, false));
        assert_eq!(inputs.status, ReadingStatus::Completed);
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        assert_eq!(Focus::Books.next(), Focus::Title);
        assert_eq!(Focus::Title.previous(), Focus::Books);
    }

    #[test]
    fn notice_carries_error_heading() {
        let notice = Notice::from(LibraryError::Selection {
            action: RecordAction::Delete,
        });
        assert_eq!(notice.heading, "Selection Error");
        assert_eq!(notice.message, "Please select a book to delete.");
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::library::{FormMode, LibraryManager};

use super::forms::{BookForm, Focus};

/// Core operations a key press on the library screen can ask for. Keys that
/// only move focus, edit text or move the highlight are handled in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LibraryAction {
    Add,
    Edit,
    Delete,
    DeleteHighlighted,
    Select,
    Clear,
    Close,
}

/// Everything behind one visit to the library screen. Dropping it discards
/// the books entered so far.
pub(crate) struct LibraryScreen {
    pub(crate) manager: LibraryManager,
    pub(crate) form: BookForm,
}

impl LibraryScreen {
    pub(crate) fn new() -> Self {
        Self {
            manager: LibraryManager::new(),
            form: BookForm::default(),
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<LibraryAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => Some(LibraryAction::Add),
                KeyCode::Char('e') => Some(LibraryAction::Edit),
                KeyCode::Char('d') => Some(LibraryAction::Delete),
                KeyCode::Char('n') => Some(LibraryAction::Clear),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus = self.form.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.form.focus = self.form.focus.previous();
                return None;
            }
            KeyCode::Esc => {
                return match self.manager.mode() {
                    FormMode::Editing(_) => Some(LibraryAction::Clear),
                    FormMode::Create => Some(LibraryAction::Close),
                };
            }
            _ => {}
        }

        let inputs = self.manager.inputs_mut();
        match self.form.focus {
            Focus::Title | Focus::Author => match key.code {
                KeyCode::Enter => Some(self.submit_action()),
                KeyCode::Backspace => {
                    self.form.backspace(inputs);
                    None
                }
                KeyCode::Char(ch) => {
                    self.form.push_char(inputs, ch);
                    None
                }
                _ => None,
            },
            Focus::Status => match key.code {
                KeyCode::Left => {
                    self.form.cycle_status(inputs, false);
                    None
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    self.form.cycle_status(inputs, true);
                    None
                }
                KeyCode::Enter => Some(self.submit_action()),
                _ => None,
            },
            Focus::Books => {
                let table = self.manager.table_mut();
                match key.code {
                    KeyCode::Up => table.move_cursor(-1),
                    KeyCode::Down => table.move_cursor(1),
                    KeyCode::PageUp => table.move_cursor(-5),
                    KeyCode::PageDown => table.move_cursor(5),
                    KeyCode::Home => table.select_first(),
                    KeyCode::End => table.select_last(),
                    KeyCode::Enter | KeyCode::Char(' ') => return Some(LibraryAction::Select),
                    KeyCode::Delete => return Some(LibraryAction::DeleteHighlighted),
                    _ => {}
                }
                None
            }
        }
    }

    /// Enter on the form adds a new book or saves the selected one.
    fn submit_action(&self) -> LibraryAction {
        match self.manager.mode() {
            FormMode::Create => LibraryAction::Add,
            FormMode::Editing(_) => LibraryAction::Edit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(screen: &mut LibraryScreen, code: KeyCode) -> Option<LibraryAction> {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(screen: &mut LibraryScreen, text: &str) {
        for ch in text.chars() {
            press(screen, KeyCode::Char(ch));
        }
    }

    #[test]
    fn enter_submits_as_add_in_create_mode() {
        let mut screen = LibraryScreen::new();
        type_text(&mut screen, "Dune");
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "Herbert");

        assert_eq!(press(&mut screen, KeyCode::Enter), Some(LibraryAction::Add));
        assert_eq!(screen.manager.inputs().title, "Dune");
        assert_eq!(screen.manager.inputs().author, "Herbert");
    }

    #[test]
    fn enter_submits_as_edit_after_selection() {
        let mut screen = LibraryScreen::new();
        type_text(&mut screen, "Dune");
        press(&mut screen, KeyCode::Tab);
        type_text(&mut screen, "Herbert");
        screen.manager.add_book().unwrap();
        screen.manager.select_cursor_row();

        assert_eq!(press(&mut screen, KeyCode::Enter), Some(LibraryAction::Edit));
        assert_eq!(press(&mut screen, KeyCode::Esc), Some(LibraryAction::Clear));
    }

    #[test]
    fn control_shortcuts_map_to_actions() {
        let mut screen = LibraryScreen::new();
        let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(ctrl('a')), Some(LibraryAction::Add));
        assert_eq!(screen.handle_key(ctrl('e')), Some(LibraryAction::Edit));
        assert_eq!(screen.handle_key(ctrl('d')), Some(LibraryAction::Delete));
        assert_eq!(screen.handle_key(ctrl('n')), Some(LibraryAction::Clear));
        assert!(screen.manager.inputs().title.is_empty());
    }

    #[test]
    fn books_focus_moves_cursor_and_selects() {
        let mut screen = LibraryScreen::new();
        for title in ["A", "B", "C"] {
            let inputs = screen.manager.inputs_mut();
            inputs.title = title.to_string();
            inputs.author = "Author".to_string();
            screen.manager.add_book().unwrap();
        }
        screen.form.focus = Focus::Books;

        press(&mut screen, KeyCode::Home);
        press(&mut screen, KeyCode::Down);
        assert_eq!(screen.manager.table().cursor(), 1);
        assert_eq!(press(&mut screen, KeyCode::Enter), Some(LibraryAction::Select));
        assert_eq!(
            press(&mut screen, KeyCode::Delete),
            Some(LibraryAction::DeleteHighlighted)
        );
        assert_eq!(press(&mut screen, KeyCode::Esc), Some(LibraryAction::Close));
    }
}

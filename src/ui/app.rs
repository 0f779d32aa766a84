use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::library::{FormMode, LibraryError};

use super::forms::{BookForm, ConfirmClose, Focus, Notice};
use super::helpers::{build_shelf_lines, centered_rect};
use super::screens::{LibraryAction, LibraryScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Form block height: three fields plus a hint line inside the border.
const FORM_HEIGHT: u16 = 6;
/// Bordered single-line bar holding the action buttons.
const BUTTON_BAR_HEIGHT: u16 = 3;

/// Top-level navigation: the welcome screen, or the library screen which owns
/// the books entered during this visit.
enum Screen {
    Welcome,
    Library(LibraryScreen),
}

/// Modal overlays drawn on top of the current screen.
enum Mode {
    Normal,
    Notice(Notice),
    ConfirmClose(ConfirmClose),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// What a library action produced, gathered while the screen is borrowed and
/// applied afterwards.
enum Outcome {
    Done(String),
    Rejected(LibraryError),
    Unavailable(&'static str),
    Close,
    ConfirmClose(usize),
}

/// Central application state shared across the TUI.
pub struct App {
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Dispatch one key press. Returns `true` once the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(key, &mut exit),
            Mode::Notice(notice) => self.handle_notice(key.code, notice),
            Mode::ConfirmClose(confirm) => self.handle_confirm_close(key.code, confirm),
        };

        exit
    }

    fn handle_normal_key(&mut self, key: KeyEvent, exit: &mut bool) -> Mode {
        match self.screen {
            Screen::Welcome => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        *exit = true;
                    }
                    KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char('L') => {
                        self.open_library();
                    }
                    _ => {}
                }
                Mode::Normal
            }
            Screen::Library(ref mut screen) => match screen.handle_key(key) {
                Some(action) => self.run_library_action(action),
                None => Mode::Normal,
            },
        }
    }

    fn handle_notice(&mut self, code: KeyCode, notice: Notice) -> Mode {
        match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Mode::Normal,
            _ => Mode::Notice(notice),
        }
    }

    fn handle_confirm_close(&mut self, code: KeyCode, confirm: ConfirmClose) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Library kept open.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.close_library();
                Mode::Normal
            }
            _ => Mode::ConfirmClose(confirm),
        }
    }

    fn run_library_action(&mut self, action: LibraryAction) -> Mode {
        let outcome = {
            let Screen::Library(screen) = &mut self.screen else {
                return Mode::Normal;
            };
            let manager = &mut screen.manager;

            match action {
                LibraryAction::Add => {
                    let title = manager.inputs().title.clone();
                    match manager.add_book() {
                        Ok(row) => {
                            screen.form.focus = Focus::Title;
                            Outcome::Done(format!("Added '{title}' as row {row}."))
                        }
                        Err(err) => Outcome::Rejected(err),
                    }
                }
                LibraryAction::Edit => match manager.edit_book() {
                    Ok(row) => {
                        screen.form.focus = Focus::Title;
                        Outcome::Done(format!("Updated row {row}."))
                    }
                    Err(err) => Outcome::Rejected(err),
                },
                LibraryAction::Delete => match manager.delete_book() {
                    Ok(removed) => Outcome::Done(format!("Deleted {}.", removed.display_title())),
                    Err(err) => Outcome::Rejected(err),
                },
                LibraryAction::DeleteHighlighted => match manager.delete_cursor_row() {
                    Ok(removed) => Outcome::Done(format!("Deleted {}.", removed.display_title())),
                    Err(err) => Outcome::Rejected(err),
                },
                LibraryAction::Select => match manager.select_cursor_row() {
                    Some(row) => {
                        screen.form.focus = Focus::Title;
                        Outcome::Done(format!("Editing row {row}."))
                    }
                    None => Outcome::Unavailable("No book to select."),
                },
                LibraryAction::Clear => {
                    manager.clear_inputs();
                    Outcome::Done("Inputs cleared.".to_string())
                }
                LibraryAction::Close => {
                    if manager.records().is_empty() {
                        Outcome::Close
                    } else {
                        Outcome::ConfirmClose(manager.records().len())
                    }
                }
            }
        };

        match outcome {
            Outcome::Done(message) => {
                self.set_status(message, StatusKind::Info);
                Mode::Normal
            }
            Outcome::Rejected(err) => {
                warn!(
                    "event=operation_rejected module=ui action={action:?} reason={}",
                    err.heading()
                );
                self.set_status(err.to_string(), StatusKind::Error);
                Mode::Notice(Notice::from(err))
            }
            Outcome::Unavailable(message) => {
                self.set_status(message, StatusKind::Error);
                Mode::Normal
            }
            Outcome::Close => {
                self.close_library();
                Mode::Normal
            }
            Outcome::ConfirmClose(count) => Mode::ConfirmClose(ConfirmClose { count }),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Welcome => self.draw_welcome(frame, content_area),
            Screen::Library(screen) => self.draw_library(frame, content_area, screen),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Notice(notice) => self.draw_notice(frame, area, notice),
            Mode::ConfirmClose(confirm) => self.draw_confirm_close(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Welcome to Book Buddy!",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let shelf = Paragraph::new(build_shelf_lines(chunks[1].width, chunks[1].height));
        frame.render_widget(shelf, chunks[1]);

        let button_style = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        let buttons = Paragraph::new(Line::from(vec![
            Span::styled(" [Your Library] ", button_style),
            Span::raw("   "),
            Span::styled(
                " [Exit] ",
                Style::default().fg(Color::White).bg(Color::Red),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(buttons, chunks[2]);
    }

    fn draw_library(&self, frame: &mut Frame, area: Rect, screen: &LibraryScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(BUTTON_BAR_HEIGHT),
                Constraint::Min(1),
            ])
            .split(area);

        self.draw_book_form(frame, chunks[0], screen);
        self.draw_button_bar(frame, chunks[1], screen);
        self.draw_book_table(frame, chunks[2], screen);
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, screen: &LibraryScreen) {
        let manager = &screen.manager;
        let form = &screen.form;
        let inputs = manager.inputs();

        let title = match manager.mode() {
            FormMode::Create => "New Book".to_string(),
            FormMode::Editing(row) => format!("Editing Row {row}"),
        };
        let mut block = Block::default().title(title).borders(Borders::ALL);
        if form.focus != Focus::Books {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let lines = vec![
            form.build_line(inputs, "Title", Focus::Title),
            form.build_line(inputs, "Author", Focus::Author),
            form.build_line(inputs, "Status", Focus::Status),
            Line::from(Span::styled(
                "Enter to save - Tab to switch - Esc to cancel",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor = match form.focus {
            Focus::Title => Some(("Title: ".len(), 0)),
            Focus::Author => Some(("Author: ".len(), 1)),
            Focus::Status | Focus::Books => None,
        };
        if let Some((prefix, line)) = cursor {
            // long values wrap, keep the cursor on the field line inside the border
            let offset = (prefix + BookForm::value_len(inputs, form.focus))
                .min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor_position((
                inner.x.saturating_add(offset),
                inner.y.saturating_add(line),
            ));
        }
    }

    fn draw_button_bar(&self, frame: &mut Frame, area: Rect, screen: &LibraryScreen) {
        let enabled = Style::default().add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);
        let needs_selection = match screen.manager.mode() {
            FormMode::Create => disabled,
            FormMode::Editing(_) => enabled,
        };
        let key_style = Style::default().fg(Color::Cyan);

        let line = Line::from(vec![
            Span::styled("[Add Book]", enabled),
            Span::styled(" ^A   ", key_style),
            Span::styled("[Edit Book]", needs_selection),
            Span::styled(" ^E   ", key_style),
            Span::styled("[Delete Book]", needs_selection),
            Span::styled(" ^D   ", key_style),
            Span::styled("[Exit]", enabled),
            Span::styled(" Esc", key_style),
        ]);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn draw_book_table(&self, frame: &mut Frame, area: Rect, screen: &LibraryScreen) {
        let table = screen.manager.table();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Books ({})", table.len()));
        if screen.form.focus == Focus::Books {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        if table.is_empty() {
            let message = Paragraph::new("No books yet. Fill in the form and press Enter to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let selected = screen.manager.mode().selected_row();
        let rows = table.rows().iter().map(|row| {
            let marker = if selected == Some(row.id) {
                format!("*{}", row.id)
            } else {
                row.id.to_string()
            };
            Row::new(vec![
                Cell::from(marker),
                Cell::from(row.record.title.clone()),
                Cell::from(row.record.author.clone()),
                Cell::from(row.record.status.label()),
            ])
        });
        let header = Row::new(vec!["#", "Title", "Author", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let widths = [
            Constraint::Length(5),
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Length(12),
        ];

        let widget = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(Some(table.cursor()));
        frame.render_stateful_widget(widget, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Notice(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Dismiss"),
            ]),
            (_, Mode::ConfirmClose(_)) => Line::from(vec![
                Span::styled("[y]", key_style),
                Span::raw(" Close   "),
                Span::styled("[n]", key_style),
                Span::raw(" Stay"),
            ]),
            (Screen::Library(screen), _) if screen.form.focus == Focus::Books => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Move   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Del]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Form   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back"),
            ]),
            (Screen::Library(_), _) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[←→]", key_style),
                Span::raw(" Status   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[^N]", key_style),
                Span::raw(" Clear   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[^C]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Welcome, _) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Your Library   "),
                Span::styled("[q]", key_style),
                Span::raw(" Exit"),
            ]),
        }
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, notice: &Notice) {
        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(notice.heading)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to continue.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_confirm_close(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmClose) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Close Library")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let noun = if confirm.count == 1 { "book" } else { "books" };
        let lines = vec![
            Line::from(format!("Close the library and discard {} {noun}?", confirm.count)),
            Line::from("Books are only kept for this session."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn open_library(&mut self) {
        self.screen = Screen::Library(LibraryScreen::new());
        info!("event=library_opened module=ui status=ok");
        self.set_status("Library opened. Add your first book.", StatusKind::Info);
    }

    fn close_library(&mut self) {
        if let Screen::Library(screen) = mem::replace(&mut self.screen, Screen::Welcome) {
            info!(
                "event=library_closed module=ui status=ok discarded={}",
                screen.manager.records().len()
            );
        }
        self.clear_status();
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

use crate::app::action::Action;
use crate::app::store::{LatestScreen, Store, TraceSubscriber};
use crate::app::view::{ResultRow, Screen};
use crate::domain::ports::{Clipboard, CurrencyFormatter};
use crate::tui::keymap::{self, Command};
use crate::tui::render;
use crate::utils::error::{Result, TipCalcError};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

/// Focusable widgets, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Amount,
    Percentage,
    Split,
    Row(usize),
}

const INPUT_WIDGETS: usize = 3;

impl Focus {
    fn index(self) -> usize {
        match self {
            Focus::Amount => 0,
            Focus::Percentage => 1,
            Focus::Split => 2,
            Focus::Row(i) => INPUT_WIDGETS + i,
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => Focus::Amount,
            1 => Focus::Percentage,
            2 => Focus::Split,
            n => Focus::Row(n - INPUT_WIDGETS),
        }
    }
}

/// Terminal-only state: which widget has focus and whether the copy menu is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
    pub menu_open: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn focus_next(&mut self, row_count: usize) {
        let len = INPUT_WIDGETS + row_count;
        self.focus = Focus::from_index((self.focus.index() + 1) % len);
    }

    pub fn focus_previous(&mut self, row_count: usize) {
        let len = INPUT_WIDGETS + row_count;
        self.focus = Focus::from_index((self.focus.index() + len - 1) % len);
    }

    /// Keeps focus on an existing row after the per-person row disappears.
    pub fn clamp(&mut self, row_count: usize) {
        if let Focus::Row(i) = self.focus {
            if i >= row_count {
                self.focus = match row_count {
                    0 => Focus::Split,
                    n => Focus::Row(n - 1),
                };
                self.menu_open = false;
            }
        }
    }

    pub fn focused_row<'a>(&self, screen: &'a Screen) -> Option<&'a ResultRow> {
        match self.focus {
            Focus::Row(i) => screen.result.rows.get(i),
            _ => None,
        }
    }
}

pub struct TuiApp<C: Clipboard, F: CurrencyFormatter> {
    store: Store<C, F>,
    latest: LatestScreen,
    ui: UiState,
}

impl<C: Clipboard, F: CurrencyFormatter> TuiApp<C, F> {
    pub fn new(mut store: Store<C, F>) -> Self {
        let latest = LatestScreen::new();
        store.subscribe(Box::new(latest.clone()));
        store.subscribe(Box::new(TraceSubscriber));

        Self {
            store,
            latest,
            ui: UiState::default(),
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// The screen last pushed by the store.
    pub fn screen(&self) -> Screen {
        self.latest.screen().unwrap_or_else(|| self.store.screen())
    }

    pub fn handle(&mut self, command: Command) {
        let row_count = self.screen().result.rows.len();

        match command {
            Command::Quit => self.ui.should_quit = true,
            Command::Dismiss => self.ui.menu_open = false,
            Command::FocusNext => self.ui.focus_next(row_count),
            Command::FocusPrevious => self.ui.focus_previous(row_count),
            Command::Increment => match self.ui.focus {
                Focus::Percentage => self.dispatch(Action::NextPercentage),
                Focus::Split => self.dispatch(Action::NextSplit),
                _ => {}
            },
            Command::Decrement => match self.ui.focus {
                Focus::Percentage => self.dispatch(Action::PreviousPercentage),
                Focus::Split => self.dispatch(Action::PreviousSplit),
                _ => {}
            },
            Command::Type(ch) => {
                self.ui.focus = Focus::Amount;
                self.dispatch(Action::InsertChar(ch));
            }
            Command::Backspace => {
                if self.ui.focus == Focus::Amount {
                    self.dispatch(Action::Backspace);
                }
            }
            Command::ClearAmount => self.dispatch(Action::ClearAmount),
            Command::Activate => self.activate(),
        }

        let row_count = self.screen().result.rows.len();
        self.ui.clamp(row_count);
    }

    fn activate(&mut self) {
        let Focus::Row(i) = self.ui.focus else {
            let row_count = self.screen().result.rows.len();
            self.ui.focus_next(row_count);
            return;
        };

        if !self.ui.menu_open {
            self.ui.menu_open = true;
            return;
        }

        self.ui.menu_open = false;
        if let Some(kind) = self.screen().result.rows.get(i).map(|row| row.kind) {
            self.dispatch(Action::Copy(kind));
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::try_init().map_err(|e| TipCalcError::TerminalError {
            message: e.to_string(),
        })?;
        tracing::info!("Terminal UI started");

        let result = self.event_loop(&mut terminal);

        ratatui::try_restore().map_err(|e| TipCalcError::TerminalError {
            message: format!("failed to restore terminal: {}", e),
        })?;
        tracing::info!("Terminal UI stopped");
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.ui.should_quit {
            let screen = self.screen();
            terminal.draw(|frame| render::draw(frame, &screen, &self.ui))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = keymap::map_key(key, self.ui.menu_open) {
                    self.handle(command);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clipboard::MemoryClipboard;
    use crate::adapters::currency::LocaleCurrencyFormatter;
    use crate::domain::model::RowKind;

    fn app() -> (TuiApp<MemoryClipboard, LocaleCurrencyFormatter>, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let store = Store::new(clipboard.clone(), LocaleCurrencyFormatter::fallback());
        (TuiApp::new(store), clipboard)
    }

    fn type_text(app: &mut TuiApp<MemoryClipboard, LocaleCurrencyFormatter>, text: &str) {
        for ch in text.chars() {
            app.handle(Command::Type(ch));
        }
    }

    #[test]
    fn test_typing_updates_results_immediately() {
        let (mut app, _) = app();
        type_text(&mut app, "100");
        let screen = app.screen();
        assert_eq!(screen.input.amount.prefix.as_deref(), Some("$"));
        assert_eq!(screen.row(RowKind::Total).unwrap().value, "$120.00");
    }

    #[test]
    fn test_focus_cycles_through_visible_rows() {
        let (mut app, _) = app();
        for _ in 0..6 {
            app.handle(Command::FocusNext);
        }
        // amount, percentage, split + three rows wraps back to amount
        assert_eq!(app.ui().focus, Focus::Amount);

        app.handle(Command::FocusPrevious);
        assert_eq!(app.ui().focus, Focus::Row(2));
    }

    #[test]
    fn test_copy_menu_flow() {
        let (mut app, clipboard) = app();
        type_text(&mut app, "90");
        app.handle(Command::FocusNext);
        app.handle(Command::Decrement);
        app.handle(Command::FocusNext);
        app.handle(Command::Increment);
        app.handle(Command::Increment);
        app.handle(Command::FocusPrevious);
        app.handle(Command::FocusPrevious);
        app.handle(Command::FocusPrevious);
        assert_eq!(app.ui().focus, Focus::Row(3));

        app.handle(Command::Activate);
        assert!(app.ui().menu_open);
        assert_eq!(clipboard.contents(), None);

        app.handle(Command::Activate);
        assert!(!app.ui().menu_open);
        assert_eq!(clipboard.contents().as_deref(), Some("$34.50"));
    }

    #[test]
    fn test_clamp_after_per_person_row_hides() {
        let mut ui = UiState {
            focus: Focus::Row(3),
            menu_open: true,
            should_quit: false,
        };
        ui.clamp(3);
        assert_eq!(ui.focus, Focus::Row(2));
        assert!(!ui.menu_open);

        ui.clamp(3);
        assert_eq!(ui.focus, Focus::Row(2));
    }

    #[test]
    fn test_dismiss_closes_menu_without_copy() {
        let (mut app, clipboard) = app();
        app.ui.focus = Focus::Row(0);
        app.handle(Command::Activate);
        app.handle(Command::Dismiss);
        assert!(!app.ui().menu_open);
        assert_eq!(clipboard.contents(), None);
    }
}

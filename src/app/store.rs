use crate::app::action::Action;
use crate::app::state::FormState;
use crate::app::view::{self, ResultRow, Screen};
use crate::domain::model::RowKind;
use crate::domain::ports::{Clipboard, CurrencyFormatter};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the freshly rendered screen after every dispatched action.
pub trait Subscriber {
    fn on_render(&mut self, screen: &Screen);

    /// Called after a row was sent to the clipboard. No visible confirmation
    /// is wired to this; implementations may log it.
    fn on_copied(&mut self, _row: &ResultRow) {}
}

/// Unidirectional data flow: `dispatch` mutates the single [`FormState`],
/// re-renders with [`view::render`] and notifies subscribers, all before
/// returning.
pub struct Store<C: Clipboard, F: CurrencyFormatter> {
    state: FormState,
    clipboard: C,
    formatter: F,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl<C: Clipboard, F: CurrencyFormatter> Store<C, F> {
    pub fn new(clipboard: C, formatter: F) -> Self {
        Self::with_state(FormState::default(), clipboard, formatter)
    }

    pub fn with_state(state: FormState, clipboard: C, formatter: F) -> Self {
        Self {
            state,
            clipboard,
            formatter,
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber and hands it the current screen right away.
    pub fn subscribe(&mut self, mut subscriber: Box<dyn Subscriber>) {
        subscriber.on_render(&self.screen());
        self.subscribers.push(subscriber);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Renders the current state. Calling it repeatedly without dispatching
    /// yields identical screens.
    pub fn screen(&self) -> Screen {
        view::render(&self.state, &self.formatter)
    }

    pub fn dispatch(&mut self, action: Action) -> Screen {
        tracing::debug!("Dispatching {:?}", action);

        match action {
            Action::Copy(kind) => self.copy_row(kind),
            other => self.state.apply(&other),
        }

        let screen = self.screen();
        for subscriber in &mut self.subscribers {
            subscriber.on_render(&screen);
        }
        screen
    }

    fn copy_row(&mut self, kind: RowKind) {
        let screen = self.screen();
        let Some(row) = screen.row(kind) else {
            tracing::debug!("Row {} is not shown, nothing to copy", kind);
            return;
        };

        self.clipboard.copy(&row.value);
        tracing::info!("Copied {} ({})", row.title, row.value);

        for subscriber in &mut self.subscribers {
            subscriber.on_copied(row);
        }
    }
}

/// Keeps the most recent screen for a view that paints on its own schedule.
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct LatestScreen {
    inner: Rc<RefCell<LatestInner>>,
}

#[derive(Debug, Default)]
struct LatestInner {
    screen: Option<Screen>,
    renders: usize,
    copies: usize,
}

impl LatestScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Option<Screen> {
        self.inner.borrow().screen.clone()
    }

    /// Number of renders delivered so far.
    pub fn renders(&self) -> usize {
        self.inner.borrow().renders
    }

    pub fn copies(&self) -> usize {
        self.inner.borrow().copies
    }
}

impl Subscriber for LatestScreen {
    fn on_render(&mut self, screen: &Screen) {
        let mut inner = self.inner.borrow_mut();
        inner.screen = Some(screen.clone());
        inner.renders += 1;
    }

    fn on_copied(&mut self, _row: &ResultRow) {
        self.inner.borrow_mut().copies += 1;
    }
}

/// Logs every render at trace level.
#[derive(Debug, Default)]
pub struct TraceSubscriber;

impl Subscriber for TraceSubscriber {
    fn on_render(&mut self, screen: &Screen) {
        let values: Vec<&str> = screen.result.rows.iter().map(|r| r.value.as_str()).collect();
        tracing::trace!("Rendered {} rows: {:?}", values.len(), values);
    }

    fn on_copied(&mut self, row: &ResultRow) {
        tracing::debug!("{} copied", row.title);
    }
}

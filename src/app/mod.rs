pub mod action;
pub mod state;
pub mod store;
pub mod view;

pub use action::Action;
pub use state::FormState;
pub use store::{LatestScreen, Store, Subscriber, TraceSubscriber};
pub use view::{ResultRow, Screen};

use crate::domain::model::RowKind;
use crate::domain::ports::{Clipboard, CurrencyFormatter};

/// One-shot evaluation: feeds `amount` through the store, optionally copies a
/// row, and returns the resulting screen.
pub fn run_once<C, F>(store: &mut Store<C, F>, amount: &str, copy: Option<RowKind>) -> Screen
where
    C: Clipboard,
    F: CurrencyFormatter,
{
    let mut screen = store.dispatch(Action::SetAmount(amount.to_string()));
    if let Some(kind) = copy {
        screen = store.dispatch(Action::Copy(kind));
    }
    screen
}

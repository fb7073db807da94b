use crate::app::view::{Picker, ResultRow, Screen, COPY_ACTION};
use crate::tui::app::{Focus, UiState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

const HELP: &str = "Tab/↑↓ move  ←/→ change  Enter copy  Del clear  q quit";
const FOCUS_MARKER: &str = "› ";
const NO_MARKER: &str = "  ";

fn secondary() -> Style {
    Style::new().fg(Color::DarkGray)
}

fn emphasized() -> Style {
    Style::new().add_modifier(Modifier::BOLD)
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled(FOCUS_MARKER, Style::new().fg(Color::Cyan))
    } else {
        Span::raw(NO_MARKER)
    }
}

/// Left spans flush left, right spans flush right within `width` columns.
fn spaced_line<'a>(mut left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: usize) -> Line<'a> {
    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    left.push(Span::raw(" ".repeat(width.saturating_sub(used).max(1))));
    left.extend(right);
    Line::from(left)
}

pub fn draw(frame: &mut Frame, screen: &Screen, ui: &UiState) {
    let row_count = screen.result.rows.len() as u16;
    let [title_area, input_area, result_area, _, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(row_count + 2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::styled(screen.title.as_str(), emphasized())),
        title_area,
    );
    draw_input(frame, screen, ui, input_area);
    draw_result(frame, screen, ui, result_area);

    let footer = ui
        .focused_row(screen)
        .map(|row| row.hint.as_str())
        .unwrap_or(HELP);
    frame.render_widget(Paragraph::new(footer).style(secondary()), footer_area);

    if ui.menu_open {
        if let (Focus::Row(index), Some(row)) = (ui.focus, ui.focused_row(screen)) {
            draw_copy_menu(frame, row, index, result_area);
        }
    }
}

fn draw_input(frame: &mut Frame, screen: &Screen, ui: &UiState, area: Rect) {
    let block = Block::bordered().title(screen.input.heading.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let amount = &screen.input.amount;
    let amount_focused = ui.focus == Focus::Amount;

    let mut spans = vec![marker(amount_focused)];
    match &amount.prefix {
        Some(prefix) => {
            spans.push(Span::styled(format!("{} ", prefix), secondary()));
            spans.push(Span::raw(amount.text.as_str()));
        }
        None => spans.push(Span::styled(amount.placeholder.as_str(), secondary())),
    }
    if amount_focused {
        spans.push(Span::styled("▏", Style::new().fg(Color::Cyan)));
    }

    let lines = vec![
        Line::from(spans),
        picker_line(&screen.input.percentage, ui.focus == Focus::Percentage, width),
        picker_line(&screen.input.split, ui.focus == Focus::Split, width),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn picker_line(picker: &Picker, focused: bool, width: usize) -> Line<'_> {
    let value = if focused {
        format!("◀ {} ▶", picker.selected_label())
    } else {
        picker.selected_label().to_string()
    };

    spaced_line(
        vec![marker(focused), Span::raw(picker.label.as_str())],
        vec![Span::raw(value)],
        width,
    )
}

fn draw_result(frame: &mut Frame, screen: &Screen, ui: &UiState, area: Rect) {
    let block = Block::bordered().title(screen.result.heading.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line> = screen
        .result
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| result_line(row, ui.focus == Focus::Row(i), width))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn result_line(row: &ResultRow, focused: bool, width: usize) -> Line<'_> {
    let (mut title_style, value_style) = if row.emphasized {
        (emphasized(), emphasized())
    } else {
        (Style::new(), secondary())
    };
    if focused {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }

    spaced_line(
        vec![marker(focused), Span::styled(row.title.as_str(), title_style)],
        vec![Span::styled(row.value.as_str(), value_style)],
        width,
    )
}

/// One-item context menu drawn just below the focused row.
fn draw_copy_menu(frame: &mut Frame, row: &ResultRow, index: usize, result_area: Rect) {
    let bounds = frame.area();
    let width = (Span::raw(row.title.as_str()).width() as u16 + 4)
        .max(12)
        .min(bounds.width);
    let height = 3.min(bounds.height);
    let x = (result_area.x + 2).min(bounds.right().saturating_sub(width));
    let y = (result_area.y + 2 + index as u16).min(bounds.bottom().saturating_sub(height));
    let area = Rect::new(x, y, width, height);

    let menu = Paragraph::new(Line::from(vec![
        Span::styled(FOCUS_MARKER, Style::new().fg(Color::Cyan)),
        Span::styled(COPY_ACTION, emphasized()),
    ]))
    .block(Block::bordered().title(row.title.as_str()));

    frame.render_widget(Clear, area);
    frame.render_widget(menu, area);
}

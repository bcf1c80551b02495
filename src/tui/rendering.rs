use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::BangDefinition;

/// What the lower pane is currently showing
pub enum ListContent<'a> {
    /// Web suggestions for the current input
    Suggestions(&'a [String]),
    /// Bang shortcuts, shown while the input starts with `!` and matches
    Bangs(&'a [BangDefinition]),
    /// Recent searches, shown when the input is empty
    History(&'a [String]),
}

/// Snapshot of app state handed to the renderer
pub struct RenderState<'a> {
    pub input: &'a str,
    pub matched_bang: Option<&'a BangDefinition>,
    pub chips: &'a [BangDefinition],
    pub selected_chip: Option<usize>,
    pub list: ListContent<'a>,
    pub selected_row: Option<usize>,
    pub fetching: bool,
    pub status_message: Option<&'a StatusMessage>,
    pub registry_len: usize,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state);
    render_chips(frame, layout.chips_area, state.chips, state.selected_chip);
    render_list(frame, layout.list_area, state);
    render_status_bar(frame, layout.status_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut spans = Vec::new();

    // When the typed trigger resolves, show the provider name as a chip
    // before the input text
    if let Some(bang) = state.matched_bang {
        spans.push(Span::styled(
            format!(" {} ", bang.name),
            Style::default()
                .fg(Color::Rgb(24, 24, 27))
                .bg(Color::Rgb(16, 185, 129))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    if state.input.is_empty() {
        spans.push(Span::styled(
            "Search the web or use !bangs...",
            Style::default().fg(Color::Rgb(113, 113, 122)),
        ));
    } else {
        spans.push(Span::raw(state.input));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Search "),
    );
    frame.render_widget(paragraph, area);
}

fn render_chips(frame: &mut Frame, area: Rect, chips: &[BangDefinition], selected: Option<usize>) {
    let mut spans = Vec::new();
    for (idx, chip) in chips.iter().enumerate() {
        let style = if selected == Some(idx) {
            Style::default()
                .fg(Color::Rgb(250, 250, 250))
                .bg(Color::Rgb(16, 185, 129))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(161, 161, 170))
        };
        spans.push(Span::styled(format!(" !{} {} ", chip.trigger, chip.name), style));
        spans.push(Span::raw(" "));
    }

    if spans.is_empty() {
        spans.push(Span::styled(
            "Type to see matching bangs",
            Style::default().fg(Color::Rgb(113, 113, 122)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Bangs "),
    );
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (title, labels): (&str, Vec<String>) = match &state.list {
        ListContent::Suggestions(rows) => (" Suggestions ", rows.to_vec()),
        ListContent::History(rows) => (" History ", rows.to_vec()),
        ListContent::Bangs(bangs) => (
            " Bang Shortcuts ",
            bangs
                .iter()
                .map(|bang| {
                    format!("!{:<10} {:<20} {}", bang.trigger, bang.name, bang.domain)
                })
                .collect(),
        ),
    };

    let items: Vec<ListItem> = labels
        .into_iter()
        .enumerate()
        .map(|(idx, label)| {
            let style = if state.selected_row == Some(idx) {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250))
                    .bg(Color::Rgb(16, 185, 129))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(161, 161, 170))
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(title),
    );
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => Color::Rgb(16, 185, 129),
            MessageType::Error => Color::Rgb(239, 68, 68),
        };
        (
            format!(" {} ", msg.text),
            Style::default().fg(color).bg(Color::Rgb(24, 24, 27)),
        )
    } else {
        let mut parts = vec![format!("{} bangs", state.registry_len)];
        if state.fetching {
            parts.push("fetching suggestions...".to_string());
        }
        parts.push("Enter: search".to_string());
        parts.push("Tab: cycle bangs".to_string());
        parts.push("Esc: clear".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

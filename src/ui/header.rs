use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, TEXT_DIM};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen_title: &str, item_count: usize) -> Paragraph<'static> {
        let brand_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(TEXT_DIM);
        let line = Line::from(vec![
            Span::styled("  beautycart", brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(screen_title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} products", item_count), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

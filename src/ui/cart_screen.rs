use crate::ui::app::App;
use crate::ui::theme::{
    swatch_color, ACCENT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT, ROW_HIGHLIGHT, TEXT_DIM,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Cart screen: the catalog as rows, plus the promo-code and checkout
/// placeholders below the list.
pub fn render_cart_screen(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Product List",
        Style::default().fg(TEXT_DIM),
    )));
    frame.render_widget(title, chunks[0]);

    render_product_rows(frame, chunks[1], app);

    // Promo code input. Placeholder only — not wired to state.
    let promo = Paragraph::new(Line::from(Span::styled(
        " Enter promo code ",
        Style::default().fg(TEXT_DIM),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(promo, chunks[2]);

    // Checkout button. Label is display formatting only — no handler.
    let checkout = Paragraph::new(Line::from(Span::styled(
        format!("Check out for {}", app.session().subtotal()),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(checkout, chunks[3]);
}

fn render_product_rows(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let visible_rows = area.height as usize;
    if visible_rows == 0 {
        return;
    }

    let cursor = app.cart_cursor();
    let scroll_offset = (cursor + 1).saturating_sub(visible_rows);
    let inner_width = area.width as usize;

    let lines: Vec<Line> = app
        .catalog()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(index, product)| {
            let swatch_style = Style::default().fg(swatch_color(product.image.key()));
            let name_style = Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD);
            let description_style = Style::default().fg(TEXT_DIM);
            let price_style = Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD);

            let left_text = format!("{}  {}", product.name, product.description);
            let price = product.price.to_string();
            let badge = format!("×{}", product.quantity_available);
            let padding = inner_width
                .saturating_sub(4) // swatch and margins
                .saturating_sub(left_text.chars().count())
                .saturating_sub(price.chars().count())
                .saturating_sub(badge.chars().count() + 2);

            let mut line = Line::from(vec![
                Span::styled(" ▐▌ ", swatch_style),
                Span::styled(product.name.clone(), name_style),
                Span::styled("  ", description_style),
                Span::styled(product.description.clone(), description_style),
                Span::styled(" ".repeat(padding.max(1)), description_style),
                Span::styled(price, price_style),
                Span::styled("  ", description_style),
                Span::styled(badge, description_style),
            ]);
            if index == cursor {
                line = line.style(Style::default().bg(ROW_HIGHLIGHT));
            }
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

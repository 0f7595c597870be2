use crate::catalog::Product;
use crate::ui::app::App;
use crate::ui::theme::{
    swatch_color, ACCENT, HEADER_TEXT, PRICE_TEXT, STAR_FILLED, TEXT_DIM,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Detail screen for one product: placeholder art, name/price, the static
/// rating row, description, and the session quantity stepper.
pub fn render_detail_screen(frame: &mut Frame<'_>, area: Rect, app: &App, product: &Product) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    render_image_placeholder(frame, chunks[0], product);
    render_info(frame, chunks[1], app, product);
}

fn render_image_placeholder(frame: &mut Frame<'_>, area: Rect, product: &Product) {
    let vertical_center = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..vertical_center).map(|_| Line::from("")).collect();
    lines.push(Line::from(format!("[ {} ]", product.image.key())));

    let placeholder = Paragraph::new(lines).alignment(Alignment::Center).style(
        Style::default()
            .bg(swatch_color(product.image.key()))
            .fg(HEADER_TEXT),
    );
    frame.render_widget(placeholder, area);
}

fn render_info(frame: &mut Frame<'_>, area: Rect, app: &App, product: &Product) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let name_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let price_style = Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(TEXT_DIM);

    // Name left, price right.
    let price = product.price.to_string();
    let name_padding = inner_width
        .saturating_sub(product.name.chars().count())
        .saturating_sub(price.chars().count());
    let name_line = Line::from(vec![
        Span::styled(" ", name_style),
        Span::styled(product.name.clone(), name_style),
        Span::styled(" ".repeat(name_padding.max(1)), dim_style),
        Span::styled(price, price_style),
    ]);

    // Rating is a fixed placeholder: four of five stars, regardless of
    // product. There is no per-product rating data.
    let rating_line = Line::from(vec![
        Span::styled(" ", dim_style),
        Span::styled("★★★★", Style::default().fg(STAR_FILLED)),
        Span::styled("☆", dim_style),
        Span::styled(" 4.5", name_style),
        Span::styled(" (5 Reviews)", dim_style),
    ]);

    let quantity = app.session().quantity(&product.name);
    let stepper_text = format!(" [-]  {}  [+]", quantity);
    let add_to_cart = "[ Add to the Cart ]";
    let stepper_padding = inner_width
        .saturating_sub(stepper_text.chars().count())
        .saturating_sub(add_to_cart.chars().count());
    // Add-to-cart stays a placeholder; only the stepper is wired.
    let stepper_line = Line::from(vec![
        Span::styled(stepper_text, name_style),
        Span::styled(" ".repeat(stepper_padding.max(1)), dim_style),
        Span::styled(add_to_cart, Style::default().fg(ACCENT)),
    ]);

    let lines = vec![
        Line::from(""),
        name_line,
        rating_line,
        Line::from(""),
        Line::from(Span::styled(" Description", dim_style)),
        Line::from(vec![
            Span::styled(" ", dim_style),
            Span::styled(product.description.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled(" In stock: ", dim_style),
            Span::styled(product.quantity_available.to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        stepper_line,
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

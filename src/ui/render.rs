use crate::ui::app::App;
use crate::ui::cart_screen::render_cart_screen;
use crate::ui::detail_screen::render_detail_screen;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screen::ScreenState;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let screen_title = match app.screen() {
        ScreenState::Cart => "Cart",
        ScreenState::Detail { .. } => "Product",
    };
    frame.render_widget(
        Header::new().widget(screen_title, app.catalog().len()),
        header,
    );

    frame.render_widget(Clear, body);
    match app.screen() {
        ScreenState::Cart => render_cart_screen(frame, body, app),
        ScreenState::Detail { product } => render_detail_screen(frame, body, app, product),
    }

    frame.render_widget(Footer::new().widget(footer, app.screen()), footer);
}

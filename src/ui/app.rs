use crate::cart::SessionCart;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};
use tracing::debug;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level state container.
///
/// Owns the immutable catalog, the session cart, and the screen state.
/// Screen transitions go through the reducer; everything else here is
/// resource plumbing around it.
pub struct App {
    should_quit: bool,
    catalog: Catalog,
    session: SessionCart,
    /// Screen navigation state (MVI pattern).
    screen: ScreenState,
    /// Cursor row on the cart list. Survives a detail round-trip but is
    /// not a product selection.
    cart_cursor: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let catalog = config.catalog();
        let session = SessionCart::new(&catalog);
        Self {
            should_quit: false,
            catalog,
            session,
            screen: ScreenState::default(),
            cart_cursor: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionCart {
        &self.session
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn cart_cursor(&self) -> usize {
        self.cart_cursor
    }

    pub fn on_tick(&mut self) {}

    /// Open the detail screen for the cursor row.
    pub fn select_cursor_product(&mut self) {
        let Some(product) = self.catalog.get(self.cart_cursor) else {
            return;
        };
        let product = product.clone();
        debug!(product = %product.name, "select product");
        self.dispatch_screen(ScreenIntent::SelectProduct { product });
    }

    /// Return to the cart list.
    pub fn go_back(&mut self) {
        debug!("back to cart");
        self.dispatch_screen(ScreenIntent::GoBack);
    }

    /// Move the cart cursor with wrap-around at both ends.
    pub fn move_cart_cursor(&mut self, direction: i32) {
        if self.catalog.is_empty() {
            self.cart_cursor = 0;
            return;
        }

        let len = self.catalog.len();
        let current = self.cart_cursor.min(len.saturating_sub(1));
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.cart_cursor = next;
    }

    /// Stepper on the detail screen. No-op on the cart screen.
    pub fn increment_quantity(&mut self) {
        if let Some(name) = self.detail_product_name() {
            self.session.increment(&name);
        }
    }

    /// Stepper on the detail screen; the line floors at zero.
    pub fn decrement_quantity(&mut self) {
        if let Some(name) = self.detail_product_name() {
            self.session.decrement(&name);
        }
    }

    fn detail_product_name(&self) -> Option<String> {
        self.screen.selected_product().map(|p| p.name.clone())
    }

    fn dispatch_screen(&mut self, intent: ScreenIntent) {
        dispatch_mvi!(self, screen, ScreenReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProductEntry;

    fn make_app() -> App {
        App::new(&Config::default())
    }

    // -- initial state -----------------------------------------------------

    #[test]
    fn starts_on_cart_with_cursor_at_zero() {
        let app = make_app();
        assert!(app.screen().is_cart());
        assert_eq!(app.cart_cursor(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn no_selection_without_an_explicit_select() {
        let app = make_app();
        assert!(app.screen().selected_product().is_none());
    }

    // -- cursor movement ---------------------------------------------------

    #[test]
    fn cursor_wraps_at_both_ends() {
        let mut app = make_app();
        app.move_cart_cursor(-1);
        assert_eq!(app.cart_cursor(), 2);
        app.move_cart_cursor(1);
        assert_eq!(app.cart_cursor(), 0);
        app.move_cart_cursor(1);
        app.move_cart_cursor(1);
        app.move_cart_cursor(1);
        assert_eq!(app.cart_cursor(), 0);
    }

    #[test]
    fn cursor_stays_put_on_empty_catalog() {
        let config = Config {
            products: Some(vec![]),
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.move_cart_cursor(1);
        assert_eq!(app.cart_cursor(), 0);
    }

    // -- selection and back ------------------------------------------------

    #[test]
    fn select_opens_detail_for_cursor_row() {
        let mut app = make_app();
        app.move_cart_cursor(1);
        app.select_cursor_product();
        let selected = app.screen().selected_product().expect("detail shown");
        assert_eq!(selected.name, "Lotion");
    }

    #[test]
    fn select_on_empty_catalog_is_a_noop() {
        let config = Config {
            products: Some(vec![]),
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.select_cursor_product();
        assert!(app.screen().is_cart());
    }

    #[test]
    fn go_back_returns_to_cart_without_selection() {
        let mut app = make_app();
        app.select_cursor_product();
        app.go_back();
        assert!(app.screen().is_cart());
        assert!(app.screen().selected_product().is_none());
    }

    // -- quantity stepper --------------------------------------------------

    #[test]
    fn stepper_only_acts_on_detail_screen() {
        let mut app = make_app();
        app.increment_quantity();
        assert_eq!(app.session().quantity("Make up fix"), 1);

        app.select_cursor_product();
        app.increment_quantity();
        assert_eq!(app.session().quantity("Make up fix"), 2);
    }

    #[test]
    fn stepper_touches_only_the_selected_line() {
        let mut app = make_app();
        app.select_cursor_product();
        app.increment_quantity();
        assert_eq!(app.session().quantity("Make up fix"), 2);
        assert_eq!(app.session().quantity("Lotion"), 1);
        assert_eq!(app.session().quantity("Cleansing Foam"), 1);
    }

    #[test]
    fn custom_catalog_drives_cart_lines() {
        let config = Config {
            products: Some(vec![ProductEntry {
                name: "Serum".to_string(),
                description: "vitamin c".to_string(),
                price: 29.5,
                image: "serum".to_string(),
                quantity: 9,
            }]),
            ..Config::default()
        };
        let mut app = App::new(&config);
        assert_eq!(app.catalog().len(), 1);
        app.select_cursor_product();
        app.decrement_quantity();
        assert_eq!(app.session().quantity("Serum"), 0);
    }
}

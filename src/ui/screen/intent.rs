use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    /// A cart row was activated; show that product's detail screen.
    SelectProduct { product: Product },
    /// Leave the detail screen and return to the cart list.
    GoBack,
}

impl Intent for ScreenIntent {}

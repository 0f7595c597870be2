use crate::catalog::Product;
use crate::ui::mvi::UiState;

/// The mutually exclusive UI mode currently presented.
///
/// `Detail` owns its product, so a detail screen with nothing selected
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    #[default]
    Cart,
    Detail {
        product: Product,
    },
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn is_cart(&self) -> bool {
        matches!(self, Self::Cart)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        match self {
            Self::Cart => None,
            Self::Detail { product } => Some(product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn cart_is_default() {
        assert_eq!(ScreenState::default(), ScreenState::Cart);
    }

    #[test]
    fn cart_has_no_selection() {
        assert!(ScreenState::Cart.selected_product().is_none());
    }

    #[test]
    fn detail_exposes_its_product() {
        let catalog = Catalog::sample();
        let product = catalog.get(0).unwrap().clone();
        let state = ScreenState::Detail {
            product: product.clone(),
        };
        assert!(!state.is_cart());
        assert_eq!(state.selected_product(), Some(&product));
    }
}

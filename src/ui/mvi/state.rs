/// Marker trait for UI state objects.
///
/// A state is a plain value: cloned to build successors, compared to detect
/// changes, and `Default` before any intent has been processed.
pub trait UiState: Clone + PartialEq + Default {}

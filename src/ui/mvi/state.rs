/// Marker trait for view state.
///
/// `Default` is the resting state; `PartialEq` lets callers detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

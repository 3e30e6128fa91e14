//! State and action contracts.

use std::fmt::Debug;

/// Marker trait for values a store can hold.
///
/// A state is an immutable-by-convention value: the store never mutates
/// it in place, it only swaps its reference to the current one. Any type
/// that is comparable, debuggable and shareable across threads qualifies.
///
/// `PartialEq` backs [`NotifyPolicy::OnChange`](crate::store::NotifyPolicy)
/// and test assertions; `Debug` backs diagnostics.
pub trait State: PartialEq + Debug + Send + Sync + 'static {}

impl<T> State for T where T: PartialEq + Debug + Send + Sync + 'static {}

/// Trait for actions that describe an intended state change.
///
/// Actions are tagged values. The tag is exposed through [`Action::kind`]
/// so the store can name what it is dispatching without knowing the
/// concrete type.
///
/// # Example
///
/// ```rust
/// use unistore::core::Action;
///
/// #[derive(Debug)]
/// enum Toggle {
///     Flip,
///     Unknown,
/// }
///
/// impl Action for Toggle {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Flip => "FLIP",
///             Self::Unknown => "UNKNOWN",
///         }
///     }
/// }
///
/// assert_eq!(Toggle::Flip.kind(), "FLIP");
/// ```
pub trait Action: Debug + Send + Sync {
    /// The discriminant name, e.g. `"ADD"`.
    fn kind(&self) -> &str;
}

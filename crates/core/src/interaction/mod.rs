//! Rendering-free interaction state: the floating action button menu, the tab bar
//! with its long-press toast, and the declarative animation timelines they drive.
//!
//! State flips happen immediately. Animations are sampled by whichever surface draws
//! them and may still be in flight when the next transition arrives.

pub mod animation;
pub mod fab;
pub mod navigation;
pub mod toast;

pub use animation::{Animator, Property, Step, Timeline, Tween};
pub use fab::{CreateTaskIntent, FabAction, FabController, FabState};
pub use navigation::{
    default_routes, tab_label, NavigationHost, NavigationState, Route, TabBar, TabEvent,
    TabEventKind, TabNavigator,
};
pub use toast::{Toast, ToastPhase};

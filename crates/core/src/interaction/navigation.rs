use std::fmt;
use std::time::Instant;

use tracing::debug;

use super::toast::Toast;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub key: String,
    pub name: String,
    pub title: String,
}

impl Route {
    pub fn new(key: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            title: title.into(),
        }
    }
}

/// The four tab screens in display order.
pub fn default_routes() -> Vec<Route> {
    ["Focused", "Backlogs", "Goals", "Progress"]
        .iter()
        .map(|name| Route::new(format!("{}-tab", name.to_ascii_lowercase()), *name, *name))
        .collect()
}

/// Display name for a tab; unknown routes show their own name.
pub fn tab_label(route_name: &str) -> &str {
    match route_name {
        "Focused" => "Focused",
        "Backlogs" => "Backlogs",
        "Goals" => "Goals",
        "Progress" => "Progress",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub routes: Vec<Route>,
    pub index: usize,
}

impl NavigationState {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes, index: 0 }
    }

    pub fn focused_route(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn position(&self, route_name: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.name == route_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEventKind {
    TabPress,
    TabLongPress,
}

impl TabEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabEventKind::TabPress => "tabPress",
            TabEventKind::TabLongPress => "tabLongPress",
        }
    }
}

impl fmt::Display for TabEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEvent {
    pub kind: TabEventKind,
    /// Key of the route the event is about.
    pub target: String,
    pub can_prevent_default: bool,
    default_prevented: bool,
}

impl TabEvent {
    pub fn new(kind: TabEventKind, target: impl Into<String>, can_prevent_default: bool) -> Self {
        Self {
            kind,
            target: target.into(),
            can_prevent_default,
            default_prevented: false,
        }
    }

    /// Suppress the default action. Has no effect on events that cannot be prevented.
    pub fn prevent_default(&mut self) {
        if self.can_prevent_default {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The container that owns routing and receives tab bar events.
pub trait NavigationHost {
    fn state(&self) -> &NavigationState;

    /// Deliver `event` to interested listeners and hand it back, possibly prevented.
    fn emit(&mut self, event: TabEvent) -> TabEvent;

    fn navigate(&mut self, route_name: &str) -> bool;
}

type Listener = Box<dyn FnMut(&mut TabEvent)>;

/// In-process [`NavigationHost`] with a fixed route list.
pub struct TabNavigator {
    state: NavigationState,
    listeners: Vec<Listener>,
}

impl TabNavigator {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            state: NavigationState::new(routes),
            listeners: Vec::new(),
        }
    }

    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&mut TabEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}

impl NavigationHost for TabNavigator {
    fn state(&self) -> &NavigationState {
        &self.state
    }

    fn emit(&mut self, mut event: TabEvent) -> TabEvent {
        for listener in &mut self.listeners {
            listener(&mut event);
        }
        debug!(
            kind = event.kind.as_str(),
            target = event.target.as_str(),
            prevented = event.is_default_prevented(),
            "tab event emitted"
        );
        event
    }

    fn navigate(&mut self, route_name: &str) -> bool {
        match self.state.position(route_name) {
            Some(index) => {
                self.state.index = index;
                debug!(route = route_name, "navigated");
                true
            }
            None => false,
        }
    }
}

/// Tab bar behavior: press to navigate, long-press to flash the tab's name.
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    toast: Toast,
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the press changed the focused route.
    pub fn press<H>(&mut self, host: &mut H, index: usize) -> bool
    where
        H: NavigationHost + ?Sized,
    {
        let Some(route) = host.state().routes.get(index).cloned() else {
            return false;
        };
        let is_focused = host.state().is_focused(index);

        let event = host.emit(TabEvent::new(TabEventKind::TabPress, route.key, true));
        if !is_focused && !event.is_default_prevented() {
            return host.navigate(&route.name);
        }
        false
    }

    pub fn long_press<H>(&mut self, host: &mut H, index: usize, now: Instant) -> bool
    where
        H: NavigationHost + ?Sized,
    {
        let Some(route) = host.state().routes.get(index).cloned() else {
            return false;
        };

        self.toast.show(tab_label(&route.name), now);
        host.emit(TabEvent::new(TabEventKind::TabLongPress, route.key, false));
        true
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(now)
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }
}

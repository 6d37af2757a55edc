//! Page-visit lifecycle of the dashboard.
//!
//! A view starts `NotReady` and shows only the loading screen. `mount` moves
//! it to `Ready` once; only then does `authorize` look at the session and
//! settle on `Redirected` or `Authorized`.

use crate::auth::session::{MARKER_KEYS, MarkerStore, SessionContext};

pub const ROOT_PATH: &str = "/";

/// A request to move the browser elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn to(path: &str) -> Self {
        Self { location: path.to_string() }
    }
}

/// The member the dashboard is rendered for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visitor {
    /// Empty when the session carries no email.
    pub email: String,
}

impl Visitor {
    /// Uppercased first character of the email, empty when there is none.
    pub fn avatar_initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    NotReady,
    Ready,
    Redirected(Navigation),
    Authorized(Visitor),
}

/// What the page should show for the current phase.
#[derive(Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    Redirect(&'a Navigation),
    Dashboard(&'a Visitor),
}

#[derive(Debug)]
pub struct DashboardView {
    phase: Phase,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self { phase: Phase::NotReady }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// NotReady -> Ready. Any later call is ignored.
    pub fn mount(&mut self) {
        if self.phase == Phase::NotReady {
            self.phase = Phase::Ready;
        }
    }

    /// Settle the view for `ctx`. Does nothing unless the view is `Ready`.
    pub fn authorize(&mut self, ctx: &SessionContext) -> &Phase {
        if self.phase == Phase::Ready {
            self.phase = match authorize(ctx) {
                Ok(visitor) => Phase::Authorized(visitor),
                Err(nav) => Phase::Redirected(nav),
            };
        }
        &self.phase
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.phase {
            Phase::NotReady | Phase::Ready => Screen::Loading,
            Phase::Redirected(nav) => Screen::Redirect(nav),
            Phase::Authorized(visitor) => Screen::Dashboard(visitor),
        }
    }
}

/// Anything but the exact visitor role, including no role, goes back to root.
pub fn authorize(ctx: &SessionContext) -> Result<Visitor, Navigation> {
    if !ctx.is_visitor() {
        return Err(Navigation::to(ROOT_PATH));
    }
    Ok(Visitor {
        email: ctx.email.clone().unwrap_or_default(),
    })
}

/// Drop every session marker and head back to root.
pub fn logout(store: &impl MarkerStore) -> Navigation {
    for key in MARKER_KEYS {
        store.clear(key);
    }
    Navigation::to(ROOT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::memory::MemoryStore;
    use crate::auth::session::{USER_EMAIL, USER_NAME, USER_TYPE};

    fn ctx(role: Option<&str>, email: Option<&str>) -> SessionContext {
        SessionContext {
            role: role.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn new_view_shows_loading() {
        let view = DashboardView::new();
        assert_eq!(view.phase(), &Phase::NotReady);
        assert_eq!(view.screen(), Screen::Loading);
    }

    #[test]
    fn authorize_before_mount_is_ignored() {
        let mut view = DashboardView::new();
        view.authorize(&ctx(Some("user"), Some("ana@academia.co")));
        assert_eq!(view.phase(), &Phase::NotReady);
        assert_eq!(view.screen(), Screen::Loading);
    }

    #[test]
    fn mounted_view_still_loading_until_authorized() {
        let mut view = DashboardView::new();
        view.mount();
        assert_eq!(view.phase(), &Phase::Ready);
        assert_eq!(view.screen(), Screen::Loading);
    }

    #[test]
    fn visitor_role_is_authorized() {
        let mut view = DashboardView::new();
        view.mount();
        let phase = view.authorize(&ctx(Some("user"), Some("ana@academia.co"))).clone();
        let visitor = Visitor { email: "ana@academia.co".into() };
        assert_eq!(phase, Phase::Authorized(visitor.clone()));
        assert_eq!(view.screen(), Screen::Dashboard(&visitor));
    }

    #[test]
    fn missing_email_degrades_to_empty() {
        let visitor = authorize(&ctx(Some("user"), None)).unwrap();
        assert_eq!(visitor.email, "");
        assert_eq!(visitor.avatar_initial(), "");
    }

    #[test]
    fn other_roles_redirect_to_root() {
        for role in [None, Some("admin"), Some(""), Some("USER")] {
            let mut view = DashboardView::new();
            view.mount();
            view.authorize(&ctx(role, Some("ana@academia.co")));
            assert_eq!(view.phase(), &Phase::Redirected(Navigation::to("/")), "{role:?}");
            assert!(matches!(view.screen(), Screen::Redirect(nav) if nav.location == "/"));
        }
    }

    #[test]
    fn terminal_phase_is_sticky() {
        let mut view = DashboardView::new();
        view.mount();
        view.authorize(&ctx(None, None));
        view.mount();
        view.authorize(&ctx(Some("user"), None));
        assert_eq!(view.phase(), &Phase::Redirected(Navigation::to("/")));
    }

    #[test]
    fn avatar_initial_uppercases() {
        let visitor = Visitor { email: "ana@academia.co".into() };
        assert_eq!(visitor.avatar_initial(), "A");
        let visitor = Visitor { email: "ñandú@academia.co".into() };
        assert_eq!(visitor.avatar_initial(), "Ñ");
    }

    #[test]
    fn logout_clears_markers_and_later_visits_redirect() {
        let store = MemoryStore::with(&[
            (USER_TYPE, "user"),
            (USER_EMAIL, "ana@academia.co"),
            (USER_NAME, "Ana"),
        ]);
        assert!(authorize(&SessionContext::load(&store)).is_ok());

        let nav = logout(&store);
        assert_eq!(nav, Navigation::to("/"));
        assert!(store.is_empty());

        let mut view = DashboardView::new();
        view.mount();
        view.authorize(&SessionContext::load(&store));
        assert_eq!(view.phase(), &Phase::Redirected(Navigation::to("/")));
    }
}

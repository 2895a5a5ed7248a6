//! URL-path routing for the single-page frontend.
//!
//! Pure logic, no I/O: maps a path to one of the named pages and decides
//! whether the shared chrome (header, footer, floating assistant) is shown.
//! Pages are fetched on demand by the frontend shell; this crate only owns
//! the mapping. The admin dashboard sits behind [`guard::RouteGuard`].

pub mod guard;

pub use guard::{GuardState, RouteGuard, TokenVerifier};

/// Every page the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Portfolio,
    Gallery,
    Blogs,
    Events,
    Testimonials,
    Contact,
    Feedback,
    AdminLogin,
    AdminDashboard,
    NotFound,
}

/// A resolved route: which page, and whether the shared chrome is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub page: Page,
    /// False on the `/admin*` path family, which renders without the shared
    /// header/footer/floating-assistant chrome.
    pub chrome: bool,
}

/// Map a URL path to a page. Unknown paths resolve to [`Page::NotFound`]
/// (which still renders inside the normal chrome).
pub fn resolve(path: &str) -> ResolvedRoute {
    let normalized = path.trim_end_matches('/');
    let normalized = if normalized.is_empty() { "/" } else { normalized };

    let page = match normalized {
        "/" => Page::Home,
        "/about" => Page::About,
        "/services" => Page::Services,
        "/portfolio" => Page::Portfolio,
        "/gallery" => Page::Gallery,
        "/blogs" => Page::Blogs,
        "/events" => Page::Events,
        "/testimonials" => Page::Testimonials,
        "/contact" => Page::Contact,
        "/feedback" => Page::Feedback,
        "/admin" => Page::AdminLogin,
        "/admin/dashboard" => Page::AdminDashboard,
        _ => Page::NotFound,
    };

    ResolvedRoute {
        page,
        chrome: !path.starts_with("/admin"),
    }
}

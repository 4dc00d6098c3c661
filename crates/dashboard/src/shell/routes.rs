//! Route table and guards.
//!
//! | path                                   | access         |
//! |----------------------------------------|----------------|
//! | `/login`                               | public         |
//! | `/dashboard`, `/leads`, `/leads/:id`   | authenticated  |
//! | `/sales-tools/*`                       | authenticated  |
//! | everything else                        | admin, manager |
//!
//! Unauthenticated visits to a guarded path go to `/login`, signed-in
//! visits to `/login` go to `/dashboard`, and a signed-in user without a
//! staff role is sent back to `/dashboard`.

use std::fmt;

use eduadmin_client::session::{SessionStore, SessionUser};
use eduadmin_core::error::CoreError;
use eduadmin_core::types::EntityId;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

// ---------------------------------------------------------------------------
// Route model
// ---------------------------------------------------------------------------

/// A CRUD section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Courses,
    Videos,
    Faqs,
    Testimonials,
    ReferPartners,
    Blogs,
    StudyAbroad,
    Colleges,
    Trainers,
    Bookings,
    Users,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Self::Courses,
        Self::Videos,
        Self::Faqs,
        Self::Testimonials,
        Self::ReferPartners,
        Self::Blogs,
        Self::StudyAbroad,
        Self::Colleges,
        Self::Trainers,
        Self::Bookings,
        Self::Users,
    ];

    /// First path segment of the section.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Videos => "videos",
            Self::Faqs => "faqs",
            Self::Testimonials => "testimonials",
            Self::ReferPartners => "refer-partners",
            Self::Blogs => "blogs",
            Self::StudyAbroad => "study-abroad",
            Self::Colleges => "colleges",
            Self::Trainers => "trainers",
            Self::Bookings => "trainer-bookings",
            Self::Users => "users",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Path of the section's list page.
    pub fn list_path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn view_path(self, id: &str) -> String {
        format!("/{}/{}", self.slug(), id)
    }

    pub fn edit_path(self, id: &str) -> String {
        format!("/{}/{}/edit", self.slug(), id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    List,
    New,
    View(EntityId),
    Edit(EntityId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Leads,
    LeadView(EntityId),
    SalesTool(String),
    Resource(Section, PageKind),
    TrainerCalendar(EntityId),
    TrainerAvailability(EntityId),
}

/// Guard applied to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Staff,
}

impl Route {
    /// Match a path (query string and trailing slash ignored).
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["login"] => Route::Login,
            ["leads"] => Route::Leads,
            ["leads", id] => Route::LeadView(id.to_string()),
            ["sales-tools", rest @ ..] if !rest.is_empty() => Route::SalesTool(rest.join("/")),
            ["trainers", id, "calendar"] => Route::TrainerCalendar(id.to_string()),
            ["trainers", id, "availability"] => Route::TrainerAvailability(id.to_string()),
            [section, rest @ ..] => {
                let section = Section::from_slug(section)?;
                let page = match rest {
                    [] => PageKind::List,
                    ["new"] => PageKind::New,
                    [id] => PageKind::View(id.to_string()),
                    [id, "edit"] => PageKind::Edit(id.to_string()),
                    _ => return None,
                };
                Route::Resource(section, page)
            }
        };
        Some(route)
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Login => Access::Public,
            Self::Dashboard | Self::Leads | Self::LeadView(_) | Self::SalesTool(_) => {
                Access::Authenticated
            }
            Self::Resource(..) | Self::TrainerCalendar(_) | Self::TrainerAvailability(_) => {
                Access::Staff
            }
        }
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Self::Login => LOGIN_PATH.to_string(),
            Self::Dashboard => HOME_PATH.to_string(),
            Self::Leads => "/leads".to_string(),
            Self::LeadView(id) => format!("/leads/{id}"),
            Self::SalesTool(tool) => format!("/sales-tools/{tool}"),
            Self::TrainerCalendar(id) => format!("/trainers/{id}/calendar"),
            Self::TrainerAvailability(id) => format!("/trainers/{id}/availability"),
            Self::Resource(section, page) => match page {
                PageKind::List => section.list_path(),
                PageKind::New => format!("/{}/new", section.slug()),
                PageKind::View(id) => section.view_path(id),
                PageKind::Edit(id) => section.edit_path(id),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Who is asking: whether a token is stored and the stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visitor {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
}

impl Visitor {
    pub fn from_session(session: &SessionStore) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            user: session.user(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }
}

/// Requires a stored token.
pub fn require_auth(visitor: &Visitor) -> Result<(), CoreError> {
    if !visitor.authenticated {
        return Err(CoreError::Unauthorized("Sign in required".into()));
    }
    Ok(())
}

/// Requires a token and an `admin` or `manager` profile.
pub fn require_staff(visitor: &Visitor) -> Result<(), CoreError> {
    require_auth(visitor)?;
    match &visitor.user {
        Some(user) if user.is_staff() => Ok(()),
        _ => Err(CoreError::Forbidden("Admin or Manager role required".into())),
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(String),
    NotFound,
}

/// Resolve `path` for `visitor`.
pub fn resolve(path: &str, visitor: &Visitor) -> RouteDecision {
    let Some(route) = Route::parse(path) else {
        tracing::debug!(path, "No route matches");
        return RouteDecision::NotFound;
    };

    let guard = match route.access() {
        Access::Public => {
            if route == Route::Login && visitor.authenticated {
                return RouteDecision::Redirect(HOME_PATH.to_string());
            }
            Ok(())
        }
        Access::Authenticated => require_auth(visitor),
        Access::Staff => require_staff(visitor),
    };

    match guard {
        Ok(()) => RouteDecision::Render(route),
        Err(CoreError::Unauthorized(_)) => RouteDecision::Redirect(LOGIN_PATH.to_string()),
        Err(e) => {
            tracing::info!(path, error = %e, "Route denied");
            RouteDecision::Redirect(HOME_PATH.to_string())
        }
    }
}

//! `eduadmin-dashboard` -- headless driver for the dashboard view-models.
//!
//! Resolves a dashboard path for the stored session and loads that page,
//! logging what a browser would render.
//!
//! ```text
//! eduadmin-dashboard /trainers/<id>/calendar
//! ```

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eduadmin_core::pagination::ListQuery;
use eduadmin_dashboard::app::{App, AppConfig};
use eduadmin_dashboard::booking::calendar::TrainerCalendar;
use eduadmin_dashboard::pages::detail::Detail;
use eduadmin_dashboard::pages::list::ListPage;
use eduadmin_dashboard::pages::view::ViewPage;
use eduadmin_dashboard::shell::routes::{PageKind, Route, RouteDecision, Section, HOME_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eduadmin_dashboard=info,eduadmin_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(base_url = %config.client.base_url, "Loaded configuration");
    let app = App::from_config(config)?;

    let path = std::env::args().nth(1).unwrap_or_else(|| HOME_PATH.into());
    match app.resolve(&path) {
        RouteDecision::NotFound => tracing::warn!(path, "Page not found"),
        RouteDecision::Redirect(to) => tracing::info!(from = %path, to, "Redirected"),
        RouteDecision::Render(route) => render(&app, route).await,
    }
    Ok(())
}

async fn render(app: &App, route: Route) {
    match route {
        Route::TrainerCalendar(id) => {
            let today = Utc::now().date_naive();
            let mut calendar =
                TrainerCalendar::new(app.client.trainers(), app.ctx.clone(), id, today);
            calendar.load().await;
            tracing::info!(month = %calendar.title(), "Trainer calendar");
            for (day, bookings) in calendar.days() {
                tracing::info!(day = %day, bookings = bookings.len(), "Day");
            }
        }
        Route::Leads => {
            let mut page = ListPage::new(app.client.leads().records().clone(), app.ctx.clone())
                .with_query(ListQuery::default());
            page.load().await;
            tracing::info!(rows = page.rows().len(), "Leads");
        }
        Route::Resource(Section::Trainers, PageKind::List) => {
            let mut page =
                ListPage::new(app.client.trainers().records().clone(), app.ctx.clone());
            page.load().await;
            tracing::info!(rows = page.rows().len(), "Trainers");
        }
        Route::Resource(Section::Courses, PageKind::View(id)) => {
            let mut page = ViewPage::new(app.client.courses(), app.ctx.clone(), id);
            page.load().await;
            if let Some(course) = page.record() {
                tracing::info!(heading = %course.heading(), "Course");
            }
        }
        other => tracing::info!(route = %other, "Page resolved"),
    }
}

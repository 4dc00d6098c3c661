//! Month calendar of a trainer's bookings.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use eduadmin_client::models::booking::TrainerBooking;
use eduadmin_client::services::TrainerService;
use eduadmin_core::calendar::{group_by_day, CalendarMonth};

use crate::context::PageContext;
use crate::pages::scope::PageScope;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub bookings: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

pub struct TrainerCalendar {
    trainers: TrainerService,
    ctx: PageContext,
    scope: PageScope,
    trainer_id: String,
    today: NaiveDate,
    month: CalendarMonth,
    days: BTreeMap<NaiveDate, Vec<TrainerBooking>>,
    selected: Option<NaiveDate>,
    loading: bool,
}

impl TrainerCalendar {
    pub fn new(
        trainers: TrainerService,
        ctx: PageContext,
        trainer_id: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            trainers,
            ctx,
            scope: PageScope::new(),
            trainer_id: trainer_id.into(),
            today,
            month: CalendarMonth::containing(today),
            days: BTreeMap::new(),
            selected: None,
            loading: false,
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn title(&self) -> String {
        self.month.title()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    /// Bookings grouped by UTC day.
    pub fn days(&self) -> &BTreeMap<NaiveDate, Vec<TrainerBooking>> {
        &self.days
    }

    pub fn bookings_on(&self, date: NaiveDate) -> &[TrainerBooking] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Bookings of the selected day.
    pub fn selected_bookings(&self) -> &[TrainerBooking] {
        match self.selected {
            Some(date) => self.bookings_on(date),
            None => &[],
        }
    }

    /// Sunday-first month grid with per-day counts.
    pub fn grid(&self) -> Vec<[Option<DayCell>; 7]> {
        self.month
            .weeks()
            .into_iter()
            .map(|week| {
                week.map(|day| {
                    day.map(|date| DayCell {
                        date,
                        bookings: self.bookings_on(date).len(),
                        is_today: date == self.today,
                        is_selected: self.selected == Some(date),
                    })
                })
            })
            .collect()
    }

    /// Fetch the displayed month. An unusable trainer id shows an empty
    /// month without a request.
    pub async fn load(&mut self) {
        self.days.clear();
        if self.trainer_id.trim().is_empty() {
            return;
        }

        let (start, end) = self.month.utc_range();
        self.loading = true;
        let result = self
            .scope
            .run(self.trainers.get_calendar(&self.trainer_id, start, end))
            .await;
        self.loading = false;

        match result {
            None => {}
            Some(Ok(payload)) => {
                tracing::debug!(
                    trainer_id = %self.trainer_id,
                    month = %self.month.title(),
                    bookings = payload.data.len(),
                    "Calendar loaded"
                );
                self.days = group_by_day(payload.data, |b| b.start_time);
            }
            Some(Err(e)) => self.ctx.fail("trainer.calendar", &e),
        }
    }

    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub async fn prev_month(&mut self) {
        self.show(self.month.prev()).await;
    }

    pub async fn next_month(&mut self) {
        self.show(self.month.next()).await;
    }

    /// Jump back to the month containing today and select today.
    pub async fn go_to_today(&mut self) {
        self.selected = Some(self.today);
        self.show(CalendarMonth::containing(self.today)).await;
    }

    pub fn close(&self) {
        self.scope.close();
    }

    async fn show(&mut self, month: CalendarMonth) {
        self.month = month;
        if self.selected.is_some_and(|d| !month.contains(d)) {
            self.selected = None;
        }
        self.load().await;
    }
}

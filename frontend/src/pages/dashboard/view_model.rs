use crate::api::{ApiClient, AttendanceRecord, AttendanceStat, TimeSlot, TimeSlotParseError};
use crate::config;
use crate::pages::dashboard::{
    repository::{DashboardRepository, DashboardSnapshot},
    summary::{self, DashboardSummary, TopPerformer, TOP_PERFORMER_LIMIT},
    utils::TimeSlotFilter,
};
use crate::state::toast::Notifier;
use crate::utils::{poll::PollingTask, time::today_in_app_tz};
use chrono::{DateTime, Utc};
use leptos::{ev::MouseEvent, *};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadOutcome {
    Applied,
    Failed,
    Stale,
}

#[derive(Clone)]
pub struct DashboardViewModel {
    repository: DashboardRepository,
    notifier: Notifier,
    pub loading: RwSignal<bool>,
    pub stats: RwSignal<Vec<AttendanceStat>>,
    pub records: RwSignal<Vec<AttendanceRecord>>,
    pub filter: RwSignal<TimeSlotFilter>,
    pub slot_options: RwSignal<Vec<TimeSlot>>,
    pub last_updated: RwSignal<Option<DateTime<Utc>>>,
    /// Period of the running poll, `None` while stopped.
    pub polling_every: RwSignal<Option<Duration>>,
    poll_period: Option<Duration>,
    generation: Rc<Cell<u64>>,
    in_flight: Rc<Cell<u32>>,
    disposed: Rc<Cell<bool>>,
    poller: Rc<RefCell<PollingTask>>,
}

impl DashboardViewModel {
    /// Polls at the configured interval, read each time polling (re)starts.
    pub fn new(repository: DashboardRepository, notifier: Notifier) -> Self {
        Self::build(repository, notifier, None)
    }

    pub fn with_poll_period(
        repository: DashboardRepository,
        notifier: Notifier,
        period: Duration,
    ) -> Self {
        Self::build(repository, notifier, Some(period))
    }

    fn build(
        repository: DashboardRepository,
        notifier: Notifier,
        poll_period: Option<Duration>,
    ) -> Self {
        Self {
            repository,
            notifier,
            loading: create_rw_signal(false),
            stats: create_rw_signal(Vec::new()),
            records: create_rw_signal(Vec::new()),
            filter: create_rw_signal(TimeSlotFilter::All),
            slot_options: create_rw_signal(Vec::new()),
            last_updated: create_rw_signal(None),
            polling_every: create_rw_signal(None),
            poll_period,
            generation: Rc::new(Cell::new(0)),
            in_flight: Rc::new(Cell::new(0)),
            disposed: Rc::new(Cell::new(false)),
            poller: Rc::new(RefCell::new(PollingTask::new())),
        }
    }

    pub fn summary(&self) -> Signal<DashboardSummary> {
        let (stats, records) = (self.stats, self.records);
        Signal::derive(move || {
            stats.with(|stats| records.with(|records| summary::summarize(stats, records)))
        })
    }

    pub fn top_performers(&self) -> Signal<Vec<TopPerformer>> {
        let stats = self.stats;
        Signal::derive(move || {
            stats.with(|stats| summary::top_performers(stats, TOP_PERFORMER_LIMIT))
        })
    }

    /// Starts a fresh cycle for `filter`: supersedes in-flight responses,
    /// restarts the poller and loads stats plus today's records.
    pub async fn activate(&self, filter: TimeSlotFilter) {
        if self.disposed.get() {
            log::debug!("ignoring activation of disposed dashboard ({})", filter);
            return;
        }
        let generation = self.next_generation();
        self.restart_polling(filter.clone(), generation);
        self.load(filter, generation).await;
    }

    pub async fn refresh(&self) {
        let filter = self.filter.get_untracked();
        if self.load(filter, self.generation.get()).await == LoadOutcome::Applied {
            self.notifier.success("Dashboard refreshed");
        }
    }

    pub async fn poll_today(&self, filter: &TimeSlotFilter, generation: u64) {
        let result = self
            .repository
            .fetch_today_records(filter, today_in_app_tz())
            .await;
        if !self.is_current(generation) {
            log::debug!("dropping polled records for superseded filter {}", filter);
            return;
        }
        match result {
            Ok(records) => {
                self.records.set(records);
                self.last_updated.set(Some(Utc::now()));
            }
            Err(err) => log::warn!("Polling today's attendance ({}) failed: {}", filter, err),
        }
    }

    pub fn select_filter(&self, raw: &str) -> Result<(), TimeSlotParseError> {
        let next: TimeSlotFilter = raw.parse()?;
        if self.filter.get_untracked() != next {
            self.filter.set(next);
        }
        Ok(())
    }

    pub fn on_filter_change(&self) -> impl Fn(String) {
        let vm = self.clone();
        move |raw: String| {
            if let Err(err) = vm.select_filter(&raw) {
                log::warn!("Ignoring time slot selection: {}", err);
            }
        }
    }

    pub fn on_refresh(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            if vm.loading.get_untracked() {
                return;
            }
            let vm = vm.clone();
            spawn_local(async move { vm.refresh().await });
        }
    }

    /// Supersedes every outstanding response and stops polling.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.next_generation();
        self.poller.borrow_mut().cancel();
        let _ = self.polling_every.try_set(None);
    }

    pub fn is_polling(&self) -> bool {
        self.poller.borrow().is_running()
    }

    pub fn polling_runs(&self) -> u32 {
        self.poller.borrow().runs()
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.get()
    }

    fn restart_polling(&self, filter: TimeSlotFilter, generation: u64) {
        if self.disposed.get() {
            return;
        }
        let period = self.poll_period.unwrap_or_else(config::poll_interval);
        let vm = self.clone();
        self.poller.borrow_mut().restart(period, move || {
            let vm = vm.clone();
            let filter = filter.clone();
            spawn_local(async move { vm.poll_today(&filter, generation).await });
        });
        self.polling_every.set(Some(period));
    }

    async fn load(&self, filter: TimeSlotFilter, generation: u64) -> LoadOutcome {
        self.begin_loading();
        let result = self
            .repository
            .fetch_snapshot(&filter, today_in_app_tz())
            .await;
        self.end_loading();

        if !self.is_current(generation) {
            log::debug!("dropping dashboard data for superseded filter {}", filter);
            return LoadOutcome::Stale;
        }
        match result {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                LoadOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to load dashboard data ({}): {}", filter, err);
                self.notifier
                    .error(format!("Failed to load dashboard data: {}", err));
                LoadOutcome::Failed
            }
        }
    }

    fn apply_snapshot(&self, snapshot: DashboardSnapshot) {
        self.slot_options
            .set(summary::collect_time_slots(&snapshot.stats));
        self.stats.set(snapshot.stats);
        self.records.set(snapshot.records);
        self.last_updated.set(Some(Utc::now()));
    }

    fn begin_loading(&self) {
        self.in_flight.set(self.in_flight.get() + 1);
        let _ = self.loading.try_set(true);
    }

    fn end_loading(&self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            let _ = self.loading.try_set(false);
        }
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

/// Builds the view model for the mounted dashboard and ties its polling
/// cycle to the owning scope. Every filter value, the initial one included,
/// activates exactly once.
pub fn use_dashboard_view_model(notifier: Notifier) -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = DashboardViewModel::new(DashboardRepository::new_with_client(Rc::new(api)), notifier);

    {
        let vm = vm.clone();
        let filter = vm.filter;
        create_isomorphic_effect(move |_| {
            let selected = filter.get();
            let vm = vm.clone();
            spawn_local(async move { vm.activate(selected).await });
        });
    }
    {
        let vm = vm.clone();
        on_cleanup(move || vm.dispose());
    }

    vm
}

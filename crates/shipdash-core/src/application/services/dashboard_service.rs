use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::timeout;

use crate::application::view_model::{
    DashboardSnapshot,
    LoadPhase,
    OverviewView,
    TableView,
};
use crate::domain::{
    average_cost_by_carrier,
    fit_line,
    on_time_vs_delayed,
    overall_average_cost,
    paging,
    priority_by_status,
    query::QuerySpec,
    scatter_points,
    top_expensive,
    validate_filter_value,
    validate_pagination,
    DomainError,
    DomainResult,
    FilterState,
    PageState,
    ShipmentSource,
    SortDirection,
    SortField,
    ALL_SENTINEL,
};
use crate::event::{
    CoreEvent,
    EventBus,
};
use crate::infrastructure::config::DashboardConfig;

const TOP_EXPENSIVE_LIMIT: usize = 5;

struct DashboardState {
    filters: FilterState,
    page: PageState,
    phase: LoadPhase,
    table: TableView,
    overview: OverviewView,
}

/// Coordinates the dashboard: owns filter/page state, issues queries
/// through the query builder, pipes responses through the reshaper and
/// regression estimator, and publishes plain-data view-models.
///
/// Every issued fetch carries a sequence number; a fetch that resolves
/// after a newer one was issued is discarded, so a stale response can
/// never overwrite state produced by a more recent mutation. Table and
/// overview loads are sequenced independently since they can be refreshed
/// independently.
pub struct DashboardService {
    source: Arc<dyn ShipmentSource>,
    event_bus: Arc<dyn EventBus>,
    config: DashboardConfig,
    state: Arc<RwLock<DashboardState>>,
    table_seq: AtomicU64,
    overview_seq: AtomicU64,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn ShipmentSource>, event_bus: Arc<dyn EventBus>, config: DashboardConfig,
    ) -> Self {
        let state = DashboardState {
            filters: FilterState::default(),
            page: PageState::new(config.default_page_size),
            phase: LoadPhase::Idle,
            table: TableView::empty(),
            overview: OverviewView::empty(),
        };

        Self {
            source,
            event_bus,
            config,
            state: Arc::new(RwLock::new(state)),
            table_seq: AtomicU64::new(0),
            overview_seq: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.read().await;
        DashboardSnapshot {
            filters: state.filters.clone(),
            page: state.page,
            phase: state.phase.clone(),
            table: state.table.clone(),
            overview: state.overview.clone(),
        }
    }

    pub async fn phase(&self) -> LoadPhase {
        self.state.read().await.phase.clone()
    }

    pub async fn set_carrier(&self, value: Option<&str>) -> DomainResult<()> {
        validate_selection("carrier", value)?;
        {
            let mut state = self.state.write().await;
            state.filters.set_carrier(value);
            state.page.current_page = 1;
        }
        self.event_bus.emit(CoreEvent::FiltersChanged).await;
        self.refresh().await
    }

    pub async fn set_status(&self, value: Option<&str>) -> DomainResult<()> {
        validate_selection("status", value)?;
        {
            let mut state = self.state.write().await;
            state.filters.set_status(value);
            state.page.current_page = 1;
        }
        self.event_bus.emit(CoreEvent::FiltersChanged).await;
        self.refresh().await
    }

    pub async fn set_service_type(&self, value: Option<&str>) -> DomainResult<()> {
        validate_selection("serviceType", value)?;
        {
            let mut state = self.state.write().await;
            state.filters.set_service_type(value);
            state.page.current_page = 1;
        }
        self.event_bus.emit(CoreEvent::FiltersChanged).await;
        self.refresh().await
    }

    /// Sorting only reorders the table, so the overview is left alone.
    pub async fn set_sort(
        &self, field: Option<SortField>, direction: Option<SortDirection>,
    ) -> DomainResult<()> {
        {
            let mut state = self.state.write().await;
            state.filters.set_sort(field, direction);
            state.page.current_page = 1;
        }
        self.event_bus.emit(CoreEvent::FiltersChanged).await;
        self.load_table().await
    }

    pub async fn set_page(&self, page: usize) -> DomainResult<()> {
        {
            let mut state = self.state.write().await;
            state.page.validate_target(page)?;
            state.page.current_page = page;
        }
        self.event_bus.emit(CoreEvent::PageChanged { page }).await;
        self.load_table().await
    }

    pub async fn set_page_size(&self, page_size: usize) -> DomainResult<()> {
        validate_pagination(1, page_size)?;
        {
            let mut state = self.state.write().await;
            state.page.page_size = page_size;
            state.page.current_page = 1;
        }
        self.load_table().await
    }

    pub async fn refresh(&self) -> DomainResult<()> {
        let (table, overview) = futures::join!(self.load_table(), self.load_overview());
        table.and(overview)
    }

    pub async fn load_table(&self) -> DomainResult<()> {
        let seq = self.next_seq(&self.table_seq);

        let spec = {
            let mut state = self.state.write().await;
            state.phase = LoadPhase::Loading;
            QuerySpec::build(
                &state.filters,
                &state.page,
                self.config.default_sort_direction,
            )
        };

        let params = spec.to_params();
        let fetch = self.source.fetch_shipments(&params);
        let outcome = match timeout(self.request_timeout(), fetch).await {
            Ok(result) => result,
            Err(_elapsed) => Err(DomainError::NetworkError(
                "Collection endpoint did not respond in time".to_string(),
            )),
        };

        match outcome {
            Ok(collection) => {
                let total_count = collection.total_count;
                {
                    let mut state = self.state.write().await;
                    if seq != self.table_seq.load(Ordering::SeqCst) {
                        tracing::debug!(seq = seq, "Discarding stale table fetch");
                        return Ok(());
                    }

                    state.page.total_count = total_count;
                    let total_pages = state.page.total_pages();
                    // The source count is authoritative; if the result set
                    // shrank below the current page, snap back into range.
                    if total_pages == 0 {
                        state.page.current_page = 1;
                    } else if state.page.current_page > total_pages {
                        state.page.current_page = total_pages;
                    }

                    state.table = TableView {
                        records: collection.items,
                        window: paging::page_window_with(
                            total_pages,
                            state.page.current_page,
                            self.config.window_max_visible,
                            self.config.window_edge_threshold,
                        ),
                    };
                    state.phase = LoadPhase::Ready;
                }

                self.event_bus
                    .emit(CoreEvent::TableUpdated {
                        total_count,
                        timestamp: now_millis(),
                    })
                    .await;

                Ok(())
            }
            Err(e) => self.fail_if_latest(&self.table_seq, seq, e).await,
        }
    }

    /// Assembles the multi-chart overview from a concurrent batch of
    /// aggregate queries. All-or-nothing: a failure in any query fails the
    /// whole batch, so a partially composed view-model is never published.
    pub async fn load_overview(&self) -> DomainResult<()> {
        let seq = self.next_seq(&self.overview_seq);

        let spec = {
            let mut state = self.state.write().await;
            state.phase = LoadPhase::Loading;
            QuerySpec::build(
                &state.filters,
                &state.page,
                self.config.default_sort_direction,
            )
        };

        let filter_params = spec.filter_params();
        let mut window_params = filter_params.clone();
        window_params.push((
            "windowDays".to_string(),
            self.config.trailing_window_days.to_string(),
        ));

        let batch = async {
            futures::try_join!(
                self.source.fetch_summary(&filter_params),
                self.source.fetch_carrier_averages(&filter_params),
                self.source.fetch_priority_matrix(&filter_params),
                self.source.fetch_express_correlation(&filter_params),
                self.source.fetch_unique_carriers(),
                self.source.fetch_orders_window(&window_params),
                self.source.fetch_delayed_window(&window_params),
            )
        };

        let outcome = match timeout(self.batch_timeout(), batch).await {
            Ok(result) => result,
            Err(_elapsed) => Err(DomainError::NetworkError(
                "Overview batch did not complete in time".to_string(),
            )),
        };

        match outcome {
            Ok((summary, averages, matrix, correlation, carriers, orders, delayed)) => {
                let scatter = scatter_points(Some(&correlation));
                let regression = fit_line(&scatter);
                let carrier_costs = average_cost_by_carrier(Some(&averages));

                let overview = OverviewView {
                    total_shipments: summary.total_shipments,
                    delivery_split: on_time_vs_delayed(
                        summary.total_shipments,
                        summary.total_delayed,
                    ),
                    recent_window: on_time_vs_delayed(orders.count, delayed.count),
                    overall_average_cost: overall_average_cost(&carrier_costs),
                    carrier_costs,
                    priority_matrix: priority_by_status(Some(&matrix)),
                    scatter,
                    regression,
                    carriers,
                    top_expensive: top_expensive(&summary.top_expensive, TOP_EXPENSIVE_LIMIT),
                };

                {
                    let mut state = self.state.write().await;
                    if seq != self.overview_seq.load(Ordering::SeqCst) {
                        tracing::debug!(seq = seq, "Discarding stale overview batch");
                        return Ok(());
                    }
                    state.overview = overview;
                    state.phase = LoadPhase::Ready;
                }

                self.event_bus
                    .emit(CoreEvent::OverviewUpdated {
                        timestamp: now_millis(),
                    })
                    .await;

                Ok(())
            }
            Err(e) => self.fail_if_latest(&self.overview_seq, seq, e).await,
        }
    }

    fn next_seq(&self, counter: &AtomicU64) -> u64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn fail_if_latest(
        &self, counter: &AtomicU64, seq: u64, error: DomainError,
    ) -> DomainResult<()> {
        {
            let mut state = self.state.write().await;
            if seq != counter.load(Ordering::SeqCst) {
                tracing::debug!(seq = seq, error = %error, "Discarding stale failed fetch");
                return Ok(());
            }
            // The last-known view-model is retained; only the phase flips.
            state.phase = LoadPhase::Failed {
                error: error.to_string(),
            };
        }

        self.event_bus
            .emit(CoreEvent::FetchFailed {
                error: error.to_string(),
            })
            .await;

        Err(error)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs)
    }

    fn batch_timeout(&self) -> Duration {
        Duration::from_secs(self.config.batch_timeout_secs)
    }
}

fn validate_selection(field: &str, value: Option<&str>) -> DomainResult<()> {
    if let Some(v) = value {
        if v != ALL_SENTINEL {
            validate_filter_value(field, v)?;
        }
    }
    Ok(())
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

use {
    super::{
        messages::{JobRequest, JobResult},
        worker,
    },
    crate::{
        config::{DATA, SNIPER},
        data::{MarketData, MarketDataProvider},
        models::{ChartData, RadarReport},
        utils::AppInstant,
    },
    std::{
        sync::mpsc::{Receiver, Sender, channel},
        time::Duration,
    },
};

/// UI-side handle to the radar worker.
///
/// Requests are fire-and-forget; `update` drains finished results once per frame.
/// While a job is running, new requests are coalesced so only the latest one runs next.
pub struct RadarEngine {
    job_tx: Sender<JobRequest>,
    result_rx: Receiver<JobResult>,

    pub report: RadarReport,
    pub chart: Option<ChartData>,

    in_flight: bool,
    pending: Option<JobRequest>,

    last_dispatch: Option<AppInstant>,
    pub last_duration_ms: Option<u128>,
    pub auto_refresh_interval: Duration,
}

impl RadarEngine {
    /// Spawn the worker with the given data source.
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();

        worker::spawn_worker_thread(MarketData::new(provider), SNIPER, job_rx, result_tx);

        Self {
            job_tx,
            result_rx,
            report: RadarReport::default(),
            chart: None,
            in_flight: false,
            pending: None,
            last_dispatch: None,
            last_duration_ms: None,
            auto_refresh_interval: DATA.auto_refresh_interval,
        }
    }

    /// Queue a refresh. `clear_cache` forces fresh downloads for every symbol.
    pub fn request_refresh(
        &mut self,
        symbols: Vec<String>,
        chart_symbol: Option<String>,
        clear_cache: bool,
    ) {
        let mut req = JobRequest {
            symbols,
            chart_symbol,
            clear_cache,
        };

        if self.in_flight {
            // A pending cache clear must survive being superseded.
            if let Some(prev) = self.pending.take() {
                req.clear_cache |= prev.clear_cache;
            }
            self.pending = Some(req);
            return;
        }
        self.dispatch(req);
    }

    /// Drain finished jobs and start the next pending one. Returns true when new data arrived.
    pub fn update(&mut self) -> bool {
        let mut updated = false;
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_job_result(result);
            updated = true;
        }

        if !self.in_flight {
            if let Some(req) = self.pending.take() {
                self.dispatch(req);
            }
        }
        updated
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight || self.pending.is_some()
    }

    pub fn has_refreshed(&self) -> bool {
        self.last_dispatch.is_some()
    }

    pub fn is_refresh_due(&self) -> bool {
        self.is_refresh_due_at(AppInstant::now())
    }

    /// Auto-refresh timer check. Never due while a job is outstanding.
    pub fn is_refresh_due_at(&self, now: AppInstant) -> bool {
        if self.is_busy() {
            return false;
        }
        match self.last_dispatch {
            Some(last) => now.saturating_duration_since(last) >= self.auto_refresh_interval,
            None => true,
        }
    }

    /// Time left until the next auto-refresh, for repaint scheduling.
    pub fn time_until_refresh(&self) -> Duration {
        self.last_dispatch
            .map(|last| self.auto_refresh_interval.saturating_sub(last.elapsed()))
            .unwrap_or_default()
    }

    fn dispatch(&mut self, req: JobRequest) {
        #[cfg(debug_assertions)]
        log::info!(
            "ENGINE: dispatching refresh for {:?} (chart {:?}, clear cache {})",
            req.symbols,
            req.chart_symbol,
            req.clear_cache
        );

        match self.job_tx.send(req) {
            Ok(()) => {
                self.in_flight = true;
                self.last_dispatch = Some(AppInstant::now());
            }
            Err(e) => log::error!("ENGINE: worker is gone, dropping request: {}", e),
        }
    }

    fn handle_job_result(&mut self, result: JobResult) {
        self.in_flight = false;
        self.last_duration_ms = Some(result.duration_ms);

        if !result.report.skipped.is_empty() {
            log::warn!("No data for: {}", result.report.skipped.join(", "));
        }

        self.report = result.report;
        self.chart = result.chart;
    }
}

use crate::domain::model::Measurement;
use crate::domain::ports::Workload;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;

pub struct BenchEngine<W: Workload> {
    workload: W,
    monitor: SystemMonitor,
}

impl<W: Workload> BenchEngine<W> {
    pub fn new(workload: W) -> Self {
        Self::new_with_monitoring(workload, false)
    }

    pub fn new_with_monitoring(workload: W, enable_monitoring: bool) -> Self {
        Self {
            workload,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    /// Runs the workload once. Only the workload itself sits between the two
    /// clock reads; monitor sampling happens outside the timed window.
    pub fn run(&mut self) -> Measurement<W::Output> {
        tracing::debug!("Starting workload '{}'", self.workload.name());
        self.monitor.log_stats("Before run");

        let start_time = Instant::now();
        let value = self.workload.execute();
        let elapsed = start_time.elapsed();

        self.monitor.log_stats("After run");
        self.monitor.log_final_stats();
        tracing::debug!("Workload '{}' finished in {:?}", self.workload.name(), elapsed);

        Measurement { value, elapsed }
    }

    pub fn run_and_report(&mut self, out: &mut dyn Write) -> Result<Measurement<W::Output>>
    where
        W::Output: Serialize,
    {
        let measurement = self.run();

        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!("Measurement: {}", serde_json::to_string(&measurement)?);
        }

        self.workload.report(&measurement, out)?;
        out.flush()?;
        Ok(measurement)
    }
}

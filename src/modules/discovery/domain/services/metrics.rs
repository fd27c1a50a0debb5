use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Metrics for one discovery pipeline run
///
/// Tracks performance and throughput of each stage for observability.
#[derive(Debug, Clone)]
pub struct PipelineMetrics {
    /// Total duration of the entire pipeline
    pub total_duration: Duration,

    /// Duration of each stage by name
    pub stage_durations: HashMap<String, Duration>,

    /// Number of clubs input to the pipeline
    pub input_count: usize,

    /// Number of candidates after the matching stage
    pub matched_count: usize,

    /// Number of candidates removed by the filter stage
    pub filtered_count: usize,

    /// Number of results output from the pipeline
    pub output_count: usize,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            total_duration: Duration::ZERO,
            stage_durations: HashMap::new(),
            input_count: 0,
            matched_count: 0,
            filtered_count: 0,
            output_count: 0,
        }
    }

    /// Percentage of inputs dropped by text matching
    pub fn match_rate(&self) -> f32 {
        if self.input_count == 0 {
            return 0.0;
        }
        (self.matched_count as f32 / self.input_count as f32) * 100.0
    }

    /// Percentage of matched candidates removed by filters
    pub fn filter_rate(&self) -> f32 {
        if self.matched_count == 0 {
            return 0.0;
        }
        (self.filtered_count as f32 / self.matched_count as f32) * 100.0
    }

    /// Throughput (results per second)
    pub fn throughput(&self) -> f32 {
        if self.total_duration.is_zero() {
            return 0.0;
        }
        self.output_count as f32 / self.total_duration.as_secs_f32()
    }

    /// Generate a human-readable report
    pub fn report(&self) -> String {
        let mut lines = vec![
            "=== Pipeline Metrics ===".to_string(),
            format!("Total Duration: {:.2}ms", self.total_duration.as_millis()),
            format!("Input Count: {}", self.input_count),
            format!("Matched: {} ({:.1}%)", self.matched_count, self.match_rate()),
            format!(
                "Filtered Out: {} ({:.1}%)",
                self.filtered_count,
                self.filter_rate()
            ),
            format!("Output Count: {}", self.output_count),
            format!("Throughput: {:.1} results/sec", self.throughput()),
            "".to_string(),
            "Stage Durations:".to_string(),
        ];

        // Sort stages by duration (slowest first)
        let mut stages: Vec<_> = self.stage_durations.iter().collect();
        stages.sort_by(|a, b| b.1.cmp(a.1));

        for (stage, duration) in stages {
            let percentage = if !self.total_duration.is_zero() {
                (duration.as_secs_f64() / self.total_duration.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {}: {:.2}ms ({:.1}%)",
                stage,
                duration.as_millis(),
                percentage
            ));
        }

        lines.join("\n")
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for timing pipeline stages
pub struct StageTimer {
    stage_name: String,
    start: Instant,
}

impl StageTimer {
    pub fn start(stage_name: impl Into<String>) -> Self {
        Self {
            stage_name: stage_name.into(),
            start: Instant::now(),
        }
    }

    /// Stop timing and record duration in the metrics builder
    pub fn stop_builder(self, builder: &mut MetricsBuilder) -> Duration {
        let duration = self.start.elapsed();
        builder.add_stage(self.stage_name, duration);
        duration
    }

    pub fn stage_name(&self) -> &str {
        &self.stage_name
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Builder for constructing metrics incrementally
pub struct MetricsBuilder {
    metrics: PipelineMetrics,
    pipeline_start: Option<Instant>,
}

impl MetricsBuilder {
    pub fn new() -> Self {
        Self {
            metrics: PipelineMetrics::new(),
            pipeline_start: None,
        }
    }

    pub fn start_pipeline(&mut self) {
        self.pipeline_start = Some(Instant::now());
    }

    pub fn stop_pipeline(&mut self) {
        if let Some(start) = self.pipeline_start.take() {
            self.metrics.total_duration = start.elapsed();
        }
    }

    pub fn add_stage(&mut self, name: impl Into<String>, duration: Duration) {
        self.metrics.stage_durations.insert(name.into(), duration);
    }

    pub fn input_count(&mut self, count: usize) {
        self.metrics.input_count = count;
    }

    pub fn matched_count(&mut self, count: usize) {
        self.metrics.matched_count = count;
    }

    pub fn filtered_count(&mut self, count: usize) {
        self.metrics.filtered_count = count;
    }

    pub fn output_count(&mut self, count: usize) {
        self.metrics.output_count = count;
    }

    pub fn build(self) -> PipelineMetrics {
        self.metrics
    }
}

impl Default for MetricsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_with_zero_inputs() {
        let metrics = PipelineMetrics::new();
        assert_eq!(metrics.match_rate(), 0.0);
        assert_eq!(metrics.filter_rate(), 0.0);
        assert_eq!(metrics.throughput(), 0.0);
    }

    #[test]
    fn test_builder_accumulates_counts() {
        let mut builder = MetricsBuilder::new();
        builder.start_pipeline();
        builder.input_count(20);
        builder.matched_count(10);
        builder.filtered_count(4);
        builder.output_count(6);
        builder.add_stage("Matching", Duration::from_millis(3));
        builder.stop_pipeline();

        let metrics = builder.build();
        assert_eq!(metrics.input_count, 20);
        assert_eq!(metrics.matched_count, 10);
        assert_eq!(metrics.filtered_count, 4);
        assert_eq!(metrics.output_count, 6);
        assert_eq!(metrics.match_rate(), 50.0);
        assert_eq!(metrics.filter_rate(), 40.0);
        assert!(metrics.stage_durations.contains_key("Matching"));
    }

    #[test]
    fn test_report_lists_stages() {
        let mut builder = MetricsBuilder::new();
        builder.add_stage("Matching", Duration::from_millis(5));
        builder.add_stage("Filtering", Duration::from_millis(1));
        let report = builder.build().report();

        assert!(report.contains("Matching"));
        assert!(report.contains("Filtering"));
    }

    #[test]
    fn test_stage_timer_records_elapsed() {
        let mut builder = MetricsBuilder::new();
        let timer = StageTimer::start("Sorting");
        assert_eq!(timer.stage_name(), "Sorting");
        timer.stop_builder(&mut builder);

        assert!(builder.build().stage_durations.contains_key("Sorting"));
    }
}

use crate::{logging, profiling};

/// Process-wide configuration applied by [`Config::apply`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Filter directives for the log subscriber. `None` defers to `RUST_LOG`
    /// and then [`logging::DEFAULT_FILTER`].
    pub log_filter: Option<String>,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: None,
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling is disabled
    Off,
    /// Profiling scopes are recorded and served to `puffin_viewer` on the given address
    Http(String),
}

impl Config {
    pub fn with_log_filter(mut self, directives: impl Into<String>) -> Self {
        self.log_filter = Some(directives.into());
        self
    }

    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }

    /// Install logging and start profiling as configured.
    pub fn apply(&self) {
        match &self.log_filter {
            Some(directives) => logging::init_with_filter(directives),
            None => logging::init(),
        }

        if let ProfilingMode::Http(addr) = &self.profiling {
            profiling::init_profiling(addr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_quiet() {
        let config = Config::default();
        assert!(config.log_filter.is_none());
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_log_filter("sortable_ui=trace")
            .with_profiling(ProfilingMode::Http(profiling::DEFAULT_PROFILING_ADDR.into()));
        assert_eq!(config.log_filter.as_deref(), Some("sortable_ui=trace"));
        assert_eq!(
            config.profiling,
            ProfilingMode::Http("0.0.0.0:8585".to_string())
        );
    }
}

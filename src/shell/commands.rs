//! Lookup and suggestion commands backed by a [`DomainApi`]

use crate::api::DomainApi;
use crate::error::Result;
use crate::render;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Executes network-backed shell commands and renders their results
#[derive(Clone)]
pub struct Commands {
    api: Arc<dyn DomainApi>,
    show_spinner: bool,
}

impl Commands {
    pub fn new(api: Arc<dyn DomainApi>) -> Self {
        Self {
            api,
            show_spinner: false,
        }
    }

    /// Show a spinner on stderr while requests are in flight
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.show_spinner = enabled;
        self
    }

    /// Check availability of a single domain
    pub async fn search(&self, domain: &str) -> Result<String> {
        tracing::debug!(domain = %domain, "Checking availability");
        let response = self
            .with_progress(
                format!("Checking {}...", domain),
                self.api.check_availability(domain),
            )
            .await?;
        Ok(render::render_lookup(&response))
    }

    /// List available alternatives for a query
    pub async fn suggest(&self, domain: &str) -> Result<String> {
        tracing::debug!(domain = %domain, "Fetching suggestions");
        let response = self
            .with_progress(
                format!("Finding suggestions for {}...", domain),
                self.api.suggest_domains(domain),
            )
            .await?;
        Ok(render::render_suggestions(domain, &response))
    }

    pub fn help(&self) -> String {
        render::render_help()
    }

    async fn with_progress<T, F>(&self, message: String, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if !self.show_spinner {
            return request.await;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = request.await;
        spinner.finish_and_clear();
        result
    }
}

use common::{HandlerConfig, InvocationContext, ResponseEnvelope, Result};
use serde_json::Value;
use tracing::{debug, info, info_span};

use crate::data::{DataSource, StaticDataSource};
use crate::table::AugmentedTable;

/// Stateless request handler: load rows, add the moving average column,
/// wrap the rows in a response envelope
pub struct Handler<S> {
    config: HandlerConfig,
    source: S,
}

impl Default for Handler<StaticDataSource> {
    fn default() -> Self {
        Self::new(HandlerConfig::default(), StaticDataSource::sample())
    }
}

impl<S: DataSource> Handler<S> {
    pub fn new(config: HandlerConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Run a single invocation. The event is accepted but not inspected.
    pub fn invoke(&self, _event: &Value, context: &InvocationContext) -> Result<ResponseEnvelope> {
        let span = info_span!(
            "invoke",
            request_id = %context.request_id,
            function = %context.function_name
        );
        let _guard = span.enter();

        self.config.validate()?;

        let rows = self.source.load()?;
        debug!(rows = rows.len(), period = self.config.sma_period, "computing moving average");

        let table = AugmentedTable::build(&rows, self.config.sma_period);
        let body = serde_json::to_value(&table)?;

        info!(
            rows = table.len(),
            column = table.column(),
            status = self.config.status_code,
            "invocation complete"
        );

        Ok(ResponseEnvelope::new(self.config.status_code, body))
    }
}

/// Entry point with the default configuration and the sample rows
pub fn handle(event: &Value, context: &InvocationContext) -> Result<ResponseEnvelope> {
    Handler::<StaticDataSource>::default().invoke(event, context)
}

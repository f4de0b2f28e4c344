use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::info;

use sma_handler::{
    init_logging, Handler, HandlerConfig, InvocationContext, LoggingConfig, StaticDataSource,
};

#[derive(Parser, Debug)]
#[command(name = "sma-handler")]
#[command(version = "0.1.0")]
#[command(about = "Invoke the moving-average handler locally", long_about = None)]
struct Args {
    /// Event payload file (JSON). Reads stdin when omitted.
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Request id passed in the invocation context
    #[arg(long, default_value = "local")]
    request_id: String,

    /// Function name passed in the invocation context
    #[arg(long, default_value = "sma-handler")]
    function_name: String,

    /// SMA period
    #[arg(long, default_value = "5")]
    sma_period: usize,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,
}

fn read_event(path: Option<&PathBuf>) -> Result<Value> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading event from {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LoggingConfig::from_env())?;

    let event = read_event(args.event.as_ref())?;
    let context = InvocationContext {
        request_id: args.request_id,
        function_name: args.function_name,
        deadline_ms: None,
    };

    let config = HandlerConfig::default().with_sma_period(args.sma_period);
    let handler = Handler::new(config, StaticDataSource::sample());
    let response = handler.invoke(&event, &context)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    info!(request_id = %context.request_id, "response written");
    Ok(())
}

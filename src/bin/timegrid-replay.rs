//! Replay a scripted pointer gesture through the creation controller and
//! print every emitted event as one JSON line.
//!
//! ```text
//! timegrid-replay gesture.json [--config creation.json] [--pretty]
//! ```
//!
//! Set `RUST_LOG=timegrid_creation=debug` to see session transitions.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use serde::Deserialize;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use timegrid_creation::datetime;
use timegrid_creation::{
    ColumnCollection, CreationConfig, CreationEvent, DragInput, DragSource, Element, PointerEvent,
    TimeCreation,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "timegrid-replay", about = "Replay a drag gesture over a time grid")]
struct Cli {
    /// Gesture script (JSON)
    script: PathBuf,

    /// Controller config (JSON); overrides the script's embedded config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print each event
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    config: Option<CreationConfig>,
    /// One column per day, in order
    days: Vec<NaiveDate>,
    #[serde(default)]
    top: f64,
    height: f64,
    signals: Vec<ScriptSignal>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ScriptSignal {
    DragStart {
        /// Class attribute of the element under the pointer
        target: String,
        /// Class attribute of its parent, if any
        #[serde(default)]
        parent: Option<String>,
        #[serde(default)]
        x: f64,
        y: f64,
    },
    Drag {
        #[serde(default)]
        x: f64,
        y: f64,
    },
    DragEnd {
        #[serde(default)]
        x: f64,
        y: f64,
    },
    Click {
        #[serde(default)]
        x: f64,
        y: f64,
    },
    InvokeClick {
        at: NaiveDateTime,
    },
}

fn target_element(target: String, parent: Option<String>) -> Element {
    match parent {
        Some(parent) => Element::child_of(&Rc::new(Element::new(parent)), target),
        None => Element::new(target),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let content = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script: Script = serde_json::from_str(&content).context("Invalid gesture script")?;
    if script.days.is_empty() {
        bail!("Script must declare at least one day column");
    }

    let config = match &cli.config {
        Some(path) => CreationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => script.config.unwrap_or_default(),
    };

    let days = script.days.iter().copied().map(datetime::date_to_millis);
    let columns = ColumnCollection::from_days(days, script.top, script.height, &config);
    let source = Rc::new(DragSource::new());
    let mut creation = TimeCreation::new(config, columns, Rc::clone(&source))?;

    let emitted: Rc<RefCell<Vec<CreationEvent>>> = Rc::default();
    let sink = Rc::clone(&emitted);
    creation.on_any(move |event| sink.borrow_mut().push(event.clone()));

    for (index, signal) in script.signals.into_iter().enumerate() {
        let input = match signal {
            ScriptSignal::DragStart { target, parent, x, y } => DragInput::Start {
                target: target_element(target, parent),
                event: PointerEvent::new(x, y),
            },
            ScriptSignal::Drag { x, y } => DragInput::Drag { event: PointerEvent::new(x, y) },
            ScriptSignal::DragEnd { x, y } => DragInput::End { event: PointerEvent::new(x, y) },
            ScriptSignal::Click { x, y } => DragInput::Click { event: PointerEvent::new(x, y) },
            ScriptSignal::InvokeClick { at } => {
                creation
                    .invoke_creation_click(at.and_utc().timestamp_millis())
                    .with_context(|| format!("Signal #{index} failed"))?;
                continue;
            }
        };
        source
            .dispatch(&mut creation, &input)
            .with_context(|| format!("Signal #{index} failed"))?;
    }
    creation.destroy();

    for event in emitted.borrow().iter() {
        let line = if cli.pretty {
            serde_json::to_string_pretty(event)?
        } else {
            serde_json::to_string(event)?
        };
        println!("{line}");
    }
    Ok(())
}

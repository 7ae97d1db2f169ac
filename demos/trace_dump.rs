//! Renders a few frames of a TXML/TSS pair against a recording backend and
//! prints the call trace.
//!
//! ```sh
//! cargo run --example trace_dump                       # bundled settings form
//! cargo run --example trace_dump -- form.txml form.tss
//! ```
//!
//! The second frame simulates typing into the first input and clicking the
//! first button, so handler dispatch shows up in the log file.

use std::fs;

use trema_rs::prelude::*;
use trema_rs::testing::{RecordingBackend, RecordingTrace};
use trema_rs::{init_logger, log};

const SETTINGS_TXML: &str = include_str!("settings.txml");
const SETTINGS_TSS: &str = include_str!("settings.tss");

fn load(path: Option<String>, fallback: &str) -> trema_rs::Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(fallback.to_string()),
    }
}

fn main() -> trema_rs::Result<()> {
    init_logger("trace_dump.log", log::LevelFilter::Debug)?;

    let mut args = std::env::args().skip(1);
    let txml = load(args.next(), SETTINGS_TXML)?;
    let tss = load(args.next(), SETTINGS_TSS)?;

    let backend = RecordingBackend::new();
    let trace = RecordingTrace::new();
    let mut renderer = Renderer::new();
    renderer.set_backend(backend.clone());
    renderer.set_trace_logger(trace.clone());

    for name in ["renamed", "save", "reset"] {
        renderer.register_event_handler(name, move || log::info!("handler '{name}' fired"));
    }

    let status = renderer.render(&txml, &tss);
    log::info!("first frame: {status:?}");

    backend.type_text("Name", "Ada");
    backend.click("Save");
    let status = renderer.render(&txml, &tss);
    log::info!("second frame: {status:?}");

    println!("{}", trace.to_text());
    Ok(())
}

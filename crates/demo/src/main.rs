// File: crates/demo/src/main.rs
// Summary: Demo loads an indicator CSV, prints the grouped menu, applies selections and writes series JSON.

use anyhow::{Context, Result};
use indicator_core::{read_source, GroupAnchor, LoadOptions, Session};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/indicators.csv");

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // Args: [--leading] [csv path] [selection...]
    let mut opts = LoadOptions::default();
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--leading" {
            opts = opts.with_grouping(GroupAnchor::Leading);
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();
    let path = positional.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));
    let selections: Vec<String> = positional.collect();

    info!(path = %path.display(), grouping = ?opts.grouping, "loading indicators");
    // A failed read is logged inside the session, which then stays empty.
    let mut session = Session::from_source(read_source(&path), &opts);
    println!("Loaded {} rows", session.dataset().len());

    print_menu(&session);
    print_visible(&session);

    for input in &selections {
        if session.select(input) {
            print_visible(&session);
        } else {
            warn!(input = %input, "not a row index; keeping current selection");
        }
    }

    let out = out_name(&path);
    let json = session.view().to_json()?;
    std::fs::write(&out, json).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn print_menu(session: &Session) {
    let menu = &session.view().menu;
    if menu.is_empty() {
        println!("(no menu)");
        return;
    }
    for group in menu {
        println!("[{}]", group.label);
        for opt in &group.options {
            let mark = if opt.selected { '*' } else { ' ' };
            println!("  {} {:>3}  {}", mark, opt.index, opt.display_name);
        }
    }
}

fn print_visible(session: &Session) {
    let idx = session.selection().index();
    let mut any = false;
    for s in session.visible_series() {
        any = true;
        let points = s.points();
        let first = points.first().copied();
        let last = points.last().copied();
        println!("Selected #{idx}: {} ({} points)", s.name, s.values.len());
        if let (Some((x0, y0)), Some((x1, y1))) = (first, last) {
            println!("  {x0}: {y0} .. {x1}: {y1}");
        }
    }
    if !any {
        println!("Selected #{idx}: nothing to chart");
    }
}

/// Produce output file name like target/out/series_<stem>.json
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("series_{}.json", stem));
    out
}

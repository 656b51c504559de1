//! vpad - replay touch scripts through a virtual gamepad layout
//!
//! Loads a YAML layout, optionally plays a CSV touch script through it, and
//! prints what game code would see after every frame.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use virtual_gamepad::replay::{replay, FrameReport, TouchScript};
use virtual_gamepad::GamepadLayout;

/// Virtual gamepad layout checker and touch replayer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to layout file
    #[arg(short, long, default_value = "layout.yaml")]
    layout: String,

    /// CSV touch script to replay
    #[arg(short, long)]
    script: Option<String>,

    /// Print one JSON document per frame instead of text
    #[arg(long)]
    json: bool,

    /// Only validate the layout and print a summary
    #[arg(long)]
    check: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'v', long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level, args.log_json)?;

    info!("Layout file: {}", args.layout);
    let layout = GamepadLayout::load(&args.layout)
        .with_context(|| format!("Failed to load layout: {}", args.layout))?;

    let script_path = match args.script.as_deref() {
        Some(path) if !args.check => path,
        _ => {
            print_summary(&layout);
            return Ok(());
        }
    };

    let mut pad = layout.build().context("Failed to build gamepad from layout")?;
    let mut watchdog = layout.watchdog.map(|w| w.build());

    let script = TouchScript::load(script_path)
        .with_context(|| format!("Failed to load touch script: {}", script_path))?;
    info!("Replaying {} touches", script.len());

    let reports = replay(&layout, &mut pad, &script, watchdog.as_mut());

    for report in &reports {
        if args.json {
            println!("{}", serde_json::to_string(report).context("Failed to serialize frame report")?);
        } else {
            print_frame(report);
        }
    }

    Ok(())
}

fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init();
    }

    Ok(())
}

fn print_summary(layout: &GamepadLayout) {
    println!("\n{}", "=== Gamepad Layout ===".bold().cyan());
    println!(
        "  Atlas: {}x{} ({} regions)",
        layout.atlas.width,
        layout.atlas.height,
        layout.atlas.regions.len().to_string().green()
    );
    println!("  Max contacts: {}", layout.max_contacts.to_string().green());
    if let Some(w) = &layout.watchdog {
        println!("  Watchdog: release after {} ms idle", w.stale_after_ms.to_string().yellow());
    }

    println!("\n{}", "Buttons (priority order):".bold());
    for (idx, b) in layout.buttons.iter().enumerate() {
        let r = b.region;
        println!(
            "  {} {} at ({}, {}) {}x{}",
            format!("[{}]", idx).dimmed(),
            b.name.yellow(),
            r.x,
            r.y,
            r.width,
            r.height
        );
    }

    println!("\n{}", "Joysticks:".bold());
    for (idx, j) in layout.joysticks.iter().enumerate() {
        println!(
            "  {} {} anchored at ({}, {}) radius {}",
            format!("[{}]", idx).dimmed(),
            j.name.yellow(),
            j.inner.x,
            j.inner.y,
            j.radius
        );
    }

    println!("\n{}", "✅ Layout is valid".green().bold());
}

fn print_frame(report: &FrameReport) {
    let buttons: Vec<String> = report
        .buttons
        .iter()
        .map(|b| {
            if b.pressed {
                b.name.bright_green().to_string()
            } else {
                b.name.bright_black().to_string()
            }
        })
        .collect();

    let sticks: Vec<String> = report
        .joysticks
        .iter()
        .map(|j| {
            let dir = format!("({:+.2}, {:+.2})", j.direction.x, j.direction.y);
            if j.active {
                format!("{}={}", j.name, dir.bright_cyan())
            } else {
                format!("{}={}", j.name, dir.bright_black())
            }
        })
        .collect();

    print!(
        "[frame {}] {} | {} | {} draws",
        format!("{:05}", report.frame).dimmed(),
        buttons.join(" "),
        sticks.join(" "),
        report.draws.len()
    );

    if !report.released_stale.is_empty() {
        let ids: Vec<String> = report.released_stale.iter().map(|c| c.to_string()).collect();
        print!(" {}", format!("stale released: {}", ids.join(", ")).bright_red());
    }

    println!();
}

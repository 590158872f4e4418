// SPDX-License-Identifier: MPL-2.0

//! Demo program: a three-stage light show on the all-lights group.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example lightshow -- <config.json>
//! ```
//!
//! # Example
//!
//! ```bash
//! cargo run --example lightshow -- config.json
//! ```
//!
//! The configuration document must define the colors RED, GREEN, and BLUE,
//! plus the brightness and transition labels used below.

use std::env;
use std::time::Duration;

use lumen_lib::types::GroupId;
use lumen_lib::{Bridge, LightController, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example lightshow -- config.json");
        std::process::exit(1);
    }

    // A bad path or malformed document aborts here
    let settings = Settings::load(&args[1])?;

    let bridge = Bridge::from_settings(&settings)?;
    let controller = LightController::new(&settings, bridge);
    let group = GroupId::all();

    println!("Turning lights on...");
    controller.turn_on(group).await?;

    for (color, brightness, transition) in [
        ("RED", "VERY_BRIGHT", "VERY_SHORT"),
        ("GREEN", "VERY_DIM", "SHORT"),
        ("BLUE", "VERY_BRIGHT", "VERY_SHORT"),
    ] {
        println!("Stage: {color} at {brightness}");
        controller
            .set_lighting(group, color, brightness, transition)
            .await?;
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    println!("Turning lights off...");
    controller.turn_off_with(group, "SHORT").await?;

    Ok(())
}

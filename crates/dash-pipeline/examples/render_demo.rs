//! Render a sample commute for every catalogue profile and write the
//! encoded zones and full frames to `target/render-demo/`.
//!
//! ```bash
//! cargo run -p dash-pipeline --example render_demo
//! RUST_LOG=dash_pipeline=debug cargo run -p dash-pipeline --example render_demo
//! ```

use std::fs;
use std::path::PathBuf;

use dash_model::{DashboardSnapshot, JourneyLeg, LegKind, LegState, StatusKind, WeatherSummary};
use dash_pipeline::{EncodedFormat, Pipeline, ZoneUpdate};
use dash_specs::all_profiles;
use tracing_subscriber::EnvFilter;

fn sample_snapshot() -> DashboardSnapshot {
    let mut snap = DashboardSnapshot {
        location: "FLEMINGTON".into(),
        destination: "PARLIAMENT".into(),
        current_time: "8:42".into(),
        am_pm: "AM".into(),
        day: "WEDNESDAY".into(),
        date: "6 AUG".into(),
        weather: WeatherSummary {
            temperature: "14C".into(),
            condition: "SHOWERS".into(),
            needs_umbrella: true,
        },
        status: StatusKind::Delay,
        arrive_by: "9:02".into(),
        leave_in_minutes: Some(7),
        legs: vec![
            JourneyLeg::new(LegKind::Walk, "WALK TO STOP", 5),
            {
                let mut coffee = JourneyLeg::new(LegKind::Coffee, "COFFEE AT MARKET", 5);
                coffee.state = LegState::Skip;
                coffee
            },
            {
                let mut tram = JourneyLeg::new(LegKind::Tram, "ROUTE 57", 12);
                tram.subtitle = "TO ELIZABETH ST".into();
                tram.next_departures = vec![3, 10, 17];
                tram
            },
            {
                let mut train = JourneyLeg::new(LegKind::Train, "CRAIGIEBURN LINE", 15);
                train.subtitle = "PLATFORM 2".into();
                train.state = LegState::Delayed;
                train.delay_minutes = Some(6);
                train.depart_time = Some("8:51".into());
                train
            },
            JourneyLeg::new(LegKind::Walk, "WALK TO OFFICE", 5),
        ],
        ..DashboardSnapshot::default()
    };
    snap.coffee.can_get = true;
    snap.coffee.urgent = true;
    snap.normalize_journey();
    snap
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let out_dir = PathBuf::from("target/render-demo");
    fs::create_dir_all(&out_dir)?;

    let pipeline = Pipeline::new();
    let snapshot = sample_snapshot();

    for profile in all_profiles() {
        let response = pipeline.render_all(&snapshot, profile.id, false)?;
        for (zone, update) in &response.zones {
            let ZoneUpdate::Rendered(encoded) = update else {
                continue;
            };
            let ext = match encoded.format {
                EncodedFormat::Bmp1 => "bmp",
                EncodedFormat::Png => "png",
            };
            let path = out_dir.join(format!("{}-{zone}.{ext}", profile.id));
            fs::write(&path, &encoded.bytes)?;
            println!(
                "{:11} {:8} {:>4}x{:<3} {:>6} bytes  {}",
                profile.id,
                zone.to_string(),
                encoded.width,
                encoded.height,
                encoded.bytes.len(),
                path.display()
            );
        }
        for failure in &response.failed {
            eprintln!("zone {} failed: {}", failure.zone, failure.error);
        }

        let frame = pipeline.render_frame(&snapshot, profile.id)?;
        let ext = match frame.format {
            EncodedFormat::Bmp1 => "bmp",
            EncodedFormat::Png => "png",
        };
        let path = out_dir.join(format!("{}-frame.{ext}", profile.id));
        fs::write(&path, &frame.bytes)?;
        println!(
            "{:11} {:8} {:>4}x{:<3} {:>6} bytes  {}",
            profile.id,
            "frame",
            frame.width,
            frame.height,
            frame.bytes.len(),
            path.display()
        );
    }

    Ok(())
}

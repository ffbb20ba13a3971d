//! Interaction groups demo
//!
//! Runs a seeded scene with a few groups and logs their state changes.
//!
//! Usage: `interaction-groups [config.json] [seed]`

use std::collections::HashMap;

use glam::Vec2;

use interaction_groups::consts::{MAX_HUMAN_SPEED, SIM_DT};
use interaction_groups::sim::{
    Footprint, GroupKind, GroupLayout, GroupPhase, Human, HumanLaptop, Obstacle, ObstacleKind,
    Policy, Scene, StraightLine, tick,
};
use interaction_groups::{GroupConfig, GroupResult};

/// Simulated duration of the demo (seconds)
const DEMO_SECONDS: f32 = 60.0;

fn main() {
    env_logger::init();
    log::info!("Interaction groups demo starting...");

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> GroupResult<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GroupConfig::load(path)?,
        None => GroupConfig {
            noise_variance: 0.02,
            ..Default::default()
        },
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    log::info!("Scene seed: {}", seed);

    let mut scene = Scene::new(config, seed)?;
    for (center, kind, members, radius) in [
        (Vec2::new(-4.0, -4.0), "moving", 3, 0.9),
        (Vec2::new(4.0, 3.0), "moving", 2, 0.6),
        (Vec2::new(0.0, 5.0), "stationary", 4, 1.1),
    ] {
        let kind: GroupKind = kind.parse()?;
        let id = scene.spawn_group(GroupLayout {
            center,
            kind,
            members,
            radius,
        })?;
        log::info!("Spawned {} group {} at ({:.1}, {:.1})", kind.as_str(), id, center.x, center.y);
    }

    let table = scene.next_entity_id();
    scene.add_obstacle(Obstacle::new(
        table,
        ObstacleKind::Table,
        Footprint::rect(Vec2::new(-1.0, 0.0), 1.6, 0.9, 0.3),
    ));
    let laptop = scene.next_entity_id();
    let pairing = scene.next_entity_id();
    let mut worker = Human::new(0, 0.0, scene.config.human_width, None, Policy::Sfm);
    worker.pos = Vec2::new(-1.0, -0.8);
    worker.set_orientation(std::f32::consts::FRAC_PI_2);
    scene.add_pairing(HumanLaptop::new(
        pairing,
        worker,
        Obstacle::new(laptop, ObstacleKind::Laptop, Footprint::rect(Vec2::new(-1.0, -0.2), 0.35, 0.25, 0.3)),
    ));

    let policy = StraightLine {
        max_speed: MAX_HUMAN_SPEED,
    };
    let mut phases: HashMap<u32, GroupPhase> =
        scene.groups.iter().map(|g| (g.id, g.phase())).collect();
    let mut contact_ticks = 0u32;

    let ticks = (DEMO_SECONDS / SIM_DT).round() as u32;
    for _ in 0..ticks {
        tick(&mut scene, &policy, SIM_DT)?;

        for group in &scene.groups {
            let phase = group.phase();
            if phases.insert(group.id, phase) != Some(phase) {
                let c = group.center();
                log::info!(
                    "t={:.1}s group {} -> {:?} at ({:.2}, {:.2})",
                    scene.clock,
                    group.id,
                    phase,
                    c.x,
                    c.y
                );
            }
        }

        let contacts = scene.collisions();
        if !contacts.is_empty() {
            contact_ticks += 1;
            log::debug!("t={:.1}s contacts: {:?}", scene.clock, contacts);
        }
    }

    for group in &scene.groups {
        let c = group.center();
        println!(
            "group {} ({}): {:?}, center ({:.2}, {:.2}), anomalies {}",
            group.id,
            group.kind().as_str(),
            group.phase(),
            c.x,
            c.y,
            group.consecutive_anomalies()
        );
    }
    println!("{} of {} ticks had contacts", contact_ticks, ticks);
    Ok(())
}

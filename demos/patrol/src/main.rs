//! patrol — nurses on patrol in a frozen region.
//!
//! Runs the standard nurse controller over a generated world, writes CSV
//! output and streams every event through a broadcast gateway.  A console
//! observer task prints deliveries and deaths as JSON lines.
//!
//! ```text
//! patrol [CONFIG.json] [--realtime] [--out DIR]
//! ```
//!
//! Without `--realtime` the simulation runs as fast as it can; with it,
//! simulated time is paced against the wall clock one movement period at a
//! time.  Set `RUST_LOG=debug` for per-delivery logs.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ns_agent::NurseStore;
use ns_behavior::{CureDelivered, EventSink, LocationUpdate, NurseController};
use ns_core::{SimConfig, Tick};
use ns_gateway::{Connection, Envelope, Gateway, GatewayObserver};
use ns_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ns_sim::{SimBuilder, SimObserver, SimStats};
use ns_world::WorldState;

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    config:   Option<PathBuf>,
    realtime: bool,
    out:      PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config: None, realtime: false, out: PathBuf::from("output/patrol") };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--realtime" => args.realtime = true,
            "--out" => {
                args.out = it.next().map(PathBuf::from).context("--out needs a directory")?;
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening config {}", path.display()))?;
    let config: SimConfig = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds both the CSV writer and the live gateway.
struct Fanout<W: OutputWriter> {
    csv:     SimOutputObserver<W>,
    gateway: GatewayObserver,
}

impl<W: OutputWriter> EventSink for Fanout<W> {
    fn location_update(&mut self, update: &LocationUpdate) {
        self.csv.location_update(update);
        self.gateway.location_update(update);
    }

    fn cure_delivered(&mut self, delivery: &CureDelivered) {
        self.csv.cure_delivered(delivery);
        self.gateway.cure_delivered(delivery);
    }
}

impl<W: OutputWriter> SimObserver for Fanout<W> {
    fn on_snapshot(&mut self, now: Tick, nurses: &NurseStore, world: &WorldState) {
        self.csv.on_snapshot(now, nurses, world);
        info!(
            now    = %now,
            living = nurses.living_count(),
            cured  = world.cured_count(),
            "progress"
        );
    }

    fn on_sim_end(&mut self, now: Tick, stats: &SimStats) {
        self.csv.on_sim_end(now, stats);
        self.gateway.on_sim_end(now, stats);
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Print the greeting summary, then every delivery and death, until the
/// gateway closes.
async fn console(mut conn: Connection) -> usize {
    println!(
        "observer connected: {} hospitals, {} houses",
        conn.greeting.hospitals.len(),
        conn.greeting.houses.len()
    );

    let mut printed = 0;
    while let Some(envelope) = conn.recv().await {
        let interesting = match &envelope {
            Envelope::CureDelivered(_) => true,
            Envelope::LocationUpdate(u) => !u.alive,
            _ => false,
        };
        if !interesting {
            continue;
        }
        match envelope.to_json() {
            Ok(line) => {
                println!("{line}");
                printed += 1;
            }
            Err(e) => warn!("failed to serialize envelope: {e}"),
        }
    }
    printed
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    println!("=== patrol: nurse patrol simulation ===");
    println!(
        "Nurses: {}  |  Hospitals: {}  |  Houses: {}  |  Seed: {}",
        config.nurse_count, config.hospital_count, config.house_count, config.seed
    );
    println!(
        "Duration: {} s simulated  |  movement every {} ms, survival every {} ms",
        config.duration_ms / 1_000,
        config.movement_period_ms,
        config.survival_period_ms
    );
    println!();

    // 1. Build sim.
    let controller = NurseController::new(config.tuning.clone());
    let mut sim = SimBuilder::new(config.clone(), controller).build()?;

    // 2. Gateway with one console observer.
    let gateway = Gateway::new();
    let console_task = tokio::spawn(console(gateway.connect(&sim.world)));

    // An external reporter shares the channel with the simulation.
    let reported = gateway
        .handle_report(r#"{"agentId":"field-unit-1","lat":64.2,"lon":-110.5}"#)
        .await?;
    info!(agent = %reported.agent_id, "external location accepted");

    // 3. Output.
    let writer = CsvWriter::new(&args.out)?;
    let mut obs = Fanout {
        csv:     SimOutputObserver::new(writer),
        gateway: GatewayObserver::new(gateway.clone()),
    };

    // 4. Run.
    let t0 = Instant::now();
    let stats = if args.realtime {
        let period = config.movement_period_ms;
        let mut interval = tokio::time::interval(Duration::from_millis(period));
        let end = config.end_tick();
        let mut target = Tick::ZERO;
        while target < end {
            interval.tick().await;
            target = Tick((target.0 + period).min(end.0));
            sim.run_until(target, &mut obs);
        }
        let stats = sim.stats();
        obs.on_sim_end(sim.clock.now, &stats);
        stats
    } else {
        sim.run(&mut obs)
    };
    let elapsed = t0.elapsed();

    if let Some(e) = obs.csv.take_error() {
        eprintln!("output error: {e}");
    }

    // Dropping every gateway handle closes the console stream.
    drop(obs);
    drop(gateway);
    let printed = console_task.await?;

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s (clock {})", elapsed.as_secs_f64(), sim.clock);
    println!("  living nurses : {}/{}", stats.living, config.nurse_count);
    println!("  deaths        : {}", stats.deaths);
    println!("  cured houses  : {}/{}", stats.cured_houses, sim.world.houses().len());
    println!("  deliveries    : {}", stats.deliveries);
    println!("  jobs run      : {}", stats.jobs_run);
    println!("  events shown  : {printed}");
    println!("  output        : {}", args.out.display());
    println!();

    println!("{:<10} {:<6} {:<10} {:<6} {:<14}", "Nurse", "Alive", "Countdown", "Stock", "Task");
    println!("{}", "-".repeat(50));
    for agent in sim.nurses.agent_ids() {
        let n = sim.nurse(agent)?;
        println!(
            "{:<10} {:<6} {:<10} {:<6} {:<14}",
            agent.label(),
            if n.alive { "yes" } else { "no" },
            n.countdown,
            n.hot_chocolate,
            n.task.as_str(),
        );
    }

    Ok(())
}

use crossbeam_channel::Sender;
use std::path::PathBuf;

use windmill::{
    rendering::export::{run_directory_name, save_frame},
    simulation::{control_channel, ControlEvent, Pacing, ReadoutRecorder},
    AnimationScheduler, PixmapSurface, SimError, SimulationConfig, SimulationRunner,
};

struct CliArgs {
    config: Option<PathBuf>,
    ticks: u64,
    radius: Option<f64>,
    mass: Option<f64>,
    sweep: bool,
    frames: Option<PathBuf>,
    frame_every: u64,
    readouts: Option<PathBuf>,
    pacing: Pacing,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            ticks: 240,
            radius: None,
            mass: None,
            sweep: false,
            frames: None,
            frame_every: 1,
            readouts: None,
            pacing: Pacing::RealTime,
        }
    }
}

fn print_help() {
    println!("Windmill angular momentum simulator");
    println!();
    println!("Usage: windmill_run [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config PATH      YAML simulation config");
    println!("  -n, --ticks N          Number of ticks to run (default: 240)");
    println!("  -r, --radius R         Blade radius slider value");
    println!("  -m, --mass M           Blade mass slider value");
    println!("      --sweep            Ramp the radius slider across its range during the run");
    println!("      --frames DIR       Write PNG frames to DIR ('auto' for a timestamped dir)");
    println!("      --frame-every N    Only write every Nth frame (default: 1)");
    println!("      --readouts PATH    Write per-tick readouts as JSON");
    println!("      --unpaced          Do not sleep between ticks");
    println!("  -h, --help             Show this help");
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, SimError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| SimError::InvalidConfig(format!("{flag} expects a value")))
}

fn number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, SimError> {
    raw.parse()
        .map_err(|_| SimError::InvalidConfig(format!("{flag}: cannot parse '{raw}'")))
}

fn parse_args() -> Result<CliArgs, SimError> {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "-c" => {
                cli.config = Some(PathBuf::from(value(&args, i, flag)?));
                i += 1;
            }
            "--ticks" | "-n" => {
                cli.ticks = number(value(&args, i, flag)?, flag)?;
                i += 1;
            }
            "--radius" | "-r" => {
                cli.radius = Some(number(value(&args, i, flag)?, flag)?);
                i += 1;
            }
            "--mass" | "-m" => {
                cli.mass = Some(number(value(&args, i, flag)?, flag)?);
                i += 1;
            }
            "--sweep" => cli.sweep = true,
            "--frames" => {
                let dir = value(&args, i, flag)?;
                cli.frames = Some(if dir == "auto" {
                    PathBuf::from(run_directory_name())
                } else {
                    PathBuf::from(dir)
                });
                i += 1;
            }
            "--frame-every" => {
                cli.frame_every = number::<u64>(value(&args, i, flag)?, flag)?.max(1);
                i += 1;
            }
            "--readouts" => {
                cli.readouts = Some(PathBuf::from(value(&args, i, flag)?));
                i += 1;
            }
            "--unpaced" => cli.pacing = Pacing::Unpaced,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                return Err(SimError::InvalidConfig(format!("unknown argument '{other}'")));
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn send(tx: &Sender<ControlEvent>, event: ControlEvent) -> Result<(), SimError> {
    tx.send(event)
        .map_err(|e| SimError::ChannelError(e.to_string()))
}

fn main() -> Result<(), SimError> {
    env_logger::init();
    let cli = parse_args()?;

    let config = match &cli.config {
        Some(path) => {
            let config = SimulationConfig::load(path)?;
            log::info!("Loaded simulation config from {}", path.display());
            config
        }
        None => SimulationConfig::default(),
    };

    let surface = PixmapSurface::new(config.render.screen_width, config.render.screen_height)?;
    let scheduler = AnimationScheduler::new(config)?;

    let (tx, rx) = control_channel();
    if let Some(radius) = cli.radius {
        send(&tx, ControlEvent::SetRadius(radius))?;
    }
    if let Some(mass) = cli.mass {
        send(&tx, ControlEvent::SetMass(mass))?;
    }
    send(&tx, ControlEvent::Toggle)?;

    let mut runner =
        SimulationRunner::new(scheduler, surface, ReadoutRecorder::new(), rx).with_pacing(cli.pacing);

    runner.draw_initial()?;
    if let Some(dir) = &cli.frames {
        save_frame(runner.surface().pixmap(), dir, 0)?;
        log::info!("Writing frames to {}", dir.display());
    }

    let [radius_lo, radius_hi] = runner.panel().radius_range();
    let total = cli.ticks.max(1) as f64;
    let summary = runner.run(Some(cli.ticks), |tick, surface| {
        if cli.sweep {
            let progress = (tick as f64 / total).min(1.0);
            send(
                &tx,
                ControlEvent::SetRadius(radius_lo + (radius_hi - radius_lo) * progress),
            )?;
        }
        if let Some(dir) = &cli.frames {
            if tick % cli.frame_every == 0 {
                save_frame(surface.pixmap(), dir, tick)?;
            }
        }
        Ok(())
    })?;

    if let Some(last) = runner.display().last() {
        let labels = last.labels();
        log::info!(
            "Final readout after {} ticks: r = {}, m = {}, ω = {}, I = {}, L = {}",
            summary.ticks,
            labels.radius,
            labels.mass,
            labels.angular_velocity,
            labels.moment_of_inertia,
            labels.angular_momentum
        );
    }

    if let Some(path) = &cli.readouts {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, runner.display().readouts())?;
        log::info!("Readouts written to {}", path.display());
    }

    Ok(())
}

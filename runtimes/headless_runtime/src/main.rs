mod script;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use vr_simulator::controller_visuals::InMemoryAssets;
use vr_simulator::input_mappings::{register_simulator_mappings, FileInputSettings};
use vr_simulator::time::Time;
use vr_simulator::{LoggingHandListener, PlayerInput, SimulatorConfig, SimulatorPawn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input settings file the simulator mappings are merged into
    #[arg(long, default_value = "vr_simulator_input.json")]
    settings: PathBuf,

    /// Simulator config; defaults are used when omitted
    #[arg(short, long, default_value = None)]
    config: Option<PathBuf>,

    /// Scripted input session to replay
    #[arg(short, long, default_value = None)]
    session: Option<PathBuf>,

    /// Only register the input mappings, then exit
    #[arg(long = "register-only")]
    register_only: bool,
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulatorConfig::default(),
    };

    let mut settings = FileInputSettings::open(&args.settings).with_context(|| {
        format!("opening input settings {}", args.settings.display())
    })?;
    register_simulator_mappings(&mut settings).context("registering input mappings")?;

    if args.register_only {
        return Ok(());
    }

    let session_path = args
        .session
        .context("a --session is required unless --register-only is set")?;
    let session = script::load_session(&session_path)?;

    let assets = InMemoryAssets::with_controller_assets(&config);
    let mut pawn = SimulatorPawn::new(config, &assets);
    pawn.add_listener(Box::new(LoggingHandListener));
    let mut player_input = PlayerInput::from_settings(&settings);

    let mut time = Time::default();
    for (frame, session_frame) in session.frames.iter().enumerate() {
        time = time
            .advance(session_frame.delta_seconds)
            .with_context(|| format!("advancing to frame {frame}"))?;
        player_input.process_frame(&mut pawn, &session_frame.raw_events(), &time);
        debug!("frame {frame}: mode {:?}", pawn.mode());
    }

    info!(
        "replayed {} frames ({:?} simulated)",
        session.frames.len(),
        time.total
    );
    println!("mode: {:?}", pawn.mode());
    println!("{:#?}", pawn.input_context());
    Ok(())
}

//! Brickfall headless runner
//!
//! Drives sessions with a built-in autopilot standing in for the pointer, the
//! way a host would: input goes into the shared slot, the clock releases ticks,
//! and each outcome is reported. Frames can be dumped as JSON lines.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use brickfall::consts::SIM_DT;
use brickfall::platform::{InputSlot, TickClock};
use brickfall::sim::{Frame, Outcome, Tick};
use brickfall::{EngineError, Session, Settings};

#[derive(Parser, Debug)]
#[command(name = "brickfall", about = "Headless ball and paddle simulation")]
struct Args {
    /// JSON settings file (defaults to the scored game)
    #[arg(long)]
    settings: Option<std::path::PathBuf>,

    /// Use the classic variant (slow ball, simple paddle, bouncing floor)
    #[arg(long, default_value_t = false)]
    classic: bool,

    /// Request quit after this many ticks
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Sessions to play back to back
    #[arg(long, default_value_t = 1)]
    sessions: u32,

    /// Pace ticks at 60 Hz instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Print every frame as a JSON line
    #[arg(long, default_value_t = false)]
    dump_frames: bool,
}

/// Demo-mode pointer: follow the ball with a slow wobble so it leaves the
/// paddle from both halves
fn autopilot_pointer(frame: &Frame, tick: Tick) -> Option<f32> {
    let ball = frame.ball()?;
    let t = tick.0 as f32 * 0.01;
    let offset = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * 60.0;
    Some(ball.rect().center().x + offset)
}

struct Runner {
    args: Args,
    session: Session,
    host_input: InputSlot,
    clock: TickClock,
}

impl Runner {
    fn play(&mut self) -> Result<u64, EngineError> {
        self.session.start();
        self.clock.reset();
        let mut last_time = Instant::now();
        let mut ticks_run = 0u64;

        loop {
            let due = if self.args.realtime {
                std::thread::sleep(Duration::from_secs_f32(SIM_DT));
                let now = Instant::now();
                let dt = (now - last_time).as_secs_f32();
                last_time = now;
                self.clock.update(dt)
            } else {
                vec![Tick(ticks_run)]
            };

            for tick in due {
                if ticks_run >= self.args.max_ticks {
                    self.host_input.request_quit();
                }
                ticks_run += 1;

                match self.session.on_tick(tick)? {
                    Outcome::Frame(frame) => {
                        if self.args.dump_frames {
                            match serde_json::to_string(&frame) {
                                Ok(json) => println!("{json}"),
                                Err(e) => log::warn!("Frame not serializable: {e}"),
                            }
                        }
                        if let Some(x) = autopilot_pointer(&frame, tick) {
                            self.host_input.set_pointer(x);
                        }
                    }
                    Outcome::GameOver { final_score } => {
                        log::info!("Game over after {ticks_run} ticks");
                        return Ok(final_score);
                    }
                }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let settings = match (&args.settings, args.classic) {
        (Some(path), _) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                eprintln!("brickfall: {e}");
                return ExitCode::FAILURE;
            }
        },
        (None, true) => Settings::classic(),
        (None, false) => Settings::default(),
    };
    let host_input = InputSlot::new();
    let sessions = args.sessions.max(1);
    let mut runner = Runner {
        session: Session::new(settings, host_input.clone()),
        host_input,
        clock: TickClock::new(),
        args,
    };

    let settings = runner.session.settings();
    log::info!(
        "Brickfall starting ({} paddle, {} floor, speed {})",
        settings.paddle_policy.as_str(),
        settings.bottom_wall.as_str(),
        settings.ball_speed
    );

    for n in 1..=sessions {
        match runner.play() {
            Ok(score) => println!("session {n}: final score {score}"),
            Err(e) => {
                log::error!("Session {n} aborted: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use voltas_lib::constants::STATE_BITS;
use voltas_lib::pulse::parse_timings;
use voltas_lib::{FanSpeed, Mode, PulseRecorder, State, TransmitConfig, Voltas, decode_voltas};

/// Build, inspect and decode Voltas A/C infrared commands.
#[derive(Parser, Debug)]
#[command(name = "voltas", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Optional path to a file to write logs to, in addition to the console.
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show what a 10-byte hex state means.
    Describe {
        /// State as 20 hex digits, e.g. 3328881A3B3B3B110040
        state: String,
        /// Print the vendor-neutral view as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Build a state and print the pulse timings that would be sent.
    Encode(EncodeArgs),
    /// Decode a captured list of microsecond timings.
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Start from this hex state instead of all zeroes.
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    power: Option<Toggle>,
    #[arg(long)]
    mode: Option<ModeArg>,
    /// Temperature in °C (clamped to 16-30).
    #[arg(long)]
    temp: Option<u8>,
    #[arg(long)]
    fan: Option<FanArg>,
    #[arg(long)]
    turbo: Option<Toggle>,
    #[arg(long)]
    econo: Option<Toggle>,
    #[arg(long)]
    wifi: Option<Toggle>,
    #[arg(long)]
    light: Option<Toggle>,
    #[arg(long)]
    swing_h: Option<Toggle>,
    /// Off timer in minutes, 0 disables it.
    #[arg(long)]
    off_timer: Option<u16>,
    /// Extra copies to send after the first.
    #[arg(short, long, default_value_t = 0)]
    repeat: u16,
    /// GPIO of the IR emitter.
    #[arg(long, default_value_t = 0)]
    pin: u16,
    /// Drive the emitter active-low.
    #[arg(long)]
    inverted: bool,
    /// Send without the 38kHz carrier.
    #[arg(long)]
    no_modulation: bool,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Comma/space separated durations in µs, alternating mark and space.
    #[arg(required_unless_present = "file")]
    timings: Option<String>,
    /// Read the timings from a file instead.
    #[arg(short, long, conflicts_with = "timings")]
    file: Option<PathBuf>,
    /// Index of the first mark.
    #[arg(long, default_value_t = 0)]
    offset: usize,
    /// Number of data bits to expect.
    #[arg(long, default_value_t = STATE_BITS)]
    bits: u16,
    /// Accept any bit count and ignore the checksum.
    #[arg(long)]
    lenient: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(t: Toggle) -> Self {
        t == Toggle::On
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeArg {
    Fan,
    Heat,
    Dry,
    Cool,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Fan => Mode::Fan,
            ModeArg::Heat => Mode::Heat,
            ModeArg::Dry => Mode::Dry,
            ModeArg::Cool => Mode::Cool,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FanArg {
    Low,
    Med,
    High,
    Auto,
}

impl From<FanArg> for FanSpeed {
    fn from(f: FanArg) -> Self {
        match f {
            FanArg::Low => FanSpeed::Low,
            FanArg::Med => FanSpeed::Med,
            FanArg::High => FanSpeed::High,
            FanArg::Auto => FanSpeed::Auto,
        }
    }
}

fn setup_logging(log_file_path: Option<&PathBuf>, verbosity: &Verbosity<InfoLevel>) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = if let Some(path) = log_file_path {
        let log_file =
            File::create(path).with_context(|| format!("Failed to create log file at: {:?}", path))?;
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(log_file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .with_target(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    // -v raises INFO to DEBUG, -vv to TRACE; RUST_LOG still wins
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn describe(hex: &str, json: bool) -> Result<String> {
    let state = State::from_hex(hex).context("Not a Voltas state")?;
    let mut out = String::new();
    writeln!(out, "{}", state)?;
    let expected = voltas_lib::calc_checksum(state.as_bytes());
    if state.has_valid_checksum() {
        writeln!(out, "Checksum: {:#04x} (valid)", state.checksum())?;
    } else {
        writeln!(out, "Checksum: {:#04x} (invalid, expected {:#04x})", state.checksum(), expected)?;
    }
    if state.off_timer() > 0 {
        writeln!(out, "Off timer: {} min", state.off_timer())?;
    }
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&state.to_common())?)?;
    }
    Ok(out)
}

fn encode(args: &EncodeArgs) -> Result<String> {
    let config = TransmitConfig {
        pin: args.pin,
        inverted: args.inverted,
        use_modulation: !args.no_modulation,
    };
    let mut ac = Voltas::new(config, PulseRecorder::new());
    ac.begin();
    if let Some(hex) = &args.from {
        let start = State::from_hex(hex).context("Invalid --from state")?;
        ac.set_raw(start.as_bytes())?;
    }

    let state = ac.state_mut();
    if let Some(v) = args.power {
        state.set_power(v.into());
    }
    if let Some(v) = args.mode {
        state.set_mode(Mode::from(v));
    }
    if let Some(v) = args.temp {
        state.set_temp(v);
    }
    if let Some(v) = args.fan {
        state.set_fan(FanSpeed::from(v));
    }
    if let Some(v) = args.turbo {
        state.set_turbo(v.into());
    }
    if let Some(v) = args.econo {
        state.set_econo(v.into());
    }
    if let Some(v) = args.wifi {
        state.set_wifi(v.into());
    }
    if let Some(v) = args.light {
        state.set_light(v.into());
    }
    if let Some(v) = args.swing_h {
        state.set_swing_h(v.into());
    }
    if let Some(v) = args.off_timer {
        state.set_off_timer(v);
    }

    ac.send(args.repeat);
    let raw = ac.raw();
    let summary = ac.to_string();
    let rec = ac.into_transmitter();
    debug!(samples = rec.timings().len(), duration_us = rec.duration_us(), "Recorded transmission");

    let timings = rec.timings().iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
    let mut out = String::new();
    writeln!(out, "State: {}", hex::encode_upper(raw))?;
    writeln!(out, "{}", summary)?;
    writeln!(
        out,
        "Carrier: {} Hz, {} samples, {} us",
        rec.carrier_hz(),
        rec.timings().len(),
        rec.duration_us()
    )?;
    writeln!(out, "{}", timings)?;
    Ok(out)
}

fn decode(args: &DecodeArgs) -> Result<String> {
    let text = match (&args.timings, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?,
        (None, None) => bail!("No timings given"),
    };
    let raw = parse_timings(&text)?;
    info!(samples = raw.len(), offset = args.offset, "Decoding capture");

    let decoded = decode_voltas(&raw, args.offset, args.bits, !args.lenient).context("Capture is not a Voltas message")?;
    let mut out = String::new();
    writeln!(out, "State: {} ({} bits)", decoded.state.to_hex(), decoded.bits)?;
    writeln!(out, "{}", decoded.state)?;
    if !decoded.state.has_valid_checksum() {
        writeln!(out, "Warning: checksum does not match")?;
    }
    Ok(out)
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Describe { state, json } => describe(state, *json),
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_file.as_ref(), &cli.verbose)?;

    // `_guard` has to drop before the process exits or the log file stays empty
    let out = run(&cli).inspect_err(|e| error!("{:#}", e))?;
    print!("{}", out);
    Ok(())
}

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use engtoolkit::calc::{self, ColorBand, OhmsInputs, OhmsMode, RcLowPass, Waveform};
use engtoolkit::config::ToolkitConfig;
use engtoolkit::diagnostics::{self, Verdict};
use engtoolkit::export::{self, ExportFormat};
use engtoolkit::input::Prompter;
use engtoolkit::output::{self, ReportFormat, format_resistance};
use engtoolkit::units::EngValue;
use engtoolkit::Menu;

#[derive(Parser, Debug)]
#[command(name = "engtoolkit")]
#[command(about = "Calculator toolkit for basic electronics formulas", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Run one calculation instead of the interactive menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a resistor color code (digits or color names)
    Resistor {
        band1: ColorBand,
        band2: ColorBand,
        multiplier: ColorBand,
    },

    /// Solve Ohm's law for one quantity
    Ohms {
        /// Quantity to solve for
        #[arg(value_enum)]
        solve: OhmsMode,

        /// Voltage in volts
        #[arg(short = 'V', long, allow_negative_numbers = true)]
        voltage: Option<EngValue>,

        /// Current in amperes
        #[arg(short = 'I', long, allow_negative_numbers = true)]
        current: Option<EngValue>,

        /// Resistance in ohms
        #[arg(short = 'R', long, allow_negative_numbers = true)]
        resistance: Option<EngValue>,
    },

    /// Mean and RMS of up to 100 samples
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        samples: Vec<EngValue>,
    },

    /// Cutoff frequency of an RC low-pass filter
    Rc {
        /// Resistance in ohms (e.g. 10k)
        resistance: EngValue,
        /// Capacitance in farads (e.g. 100n)
        capacitance: EngValue,
        /// Also report gain and phase at this frequency in Hz
        #[arg(long)]
        at: Option<EngValue>,
    },

    /// Equivalent resistance of resistors in parallel
    Parallel {
        #[arg(required = true, allow_negative_numbers = true)]
        resistors: Vec<EngValue>,
    },

    /// Export a sine waveform sampled at 1 kHz
    Waveform {
        /// Frequency in Hz
        #[arg(short, long, allow_negative_numbers = true)]
        frequency: EngValue,

        /// Peak amplitude in volts
        #[arg(short, long, allow_negative_numbers = true)]
        amplitude: EngValue,

        /// Duration in seconds
        #[arg(short, long, default_value = "1")]
        duration: EngValue,

        /// Output file (default from config, else waveform.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Run the self-diagnostic suite
    SelfTest {
        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Directory for the file round-trip check
        #[arg(long)]
        scratch_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.config {
        Some(path) => ToolkitConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ToolkitConfig::default(),
    };

    match args.command {
        None => {
            let mut menu = Menu::new(Prompter::stdio(), config);
            menu.run().context("interactive session failed")?;
        }
        Some(command) => run_command(command, config, args.verbose > 0)?,
    }

    Ok(())
}

fn required(value: Option<EngValue>, name: &str, mode: OhmsMode) -> anyhow::Result<f64> {
    match value {
        Some(v) => Ok(v.value()),
        None => bail!("--{} is required to solve for {}", name, mode),
    }
}

fn run_command(command: Command, mut config: ToolkitConfig, verbose: bool) -> anyhow::Result<()> {
    match command {
        Command::Resistor {
            band1,
            band2,
            multiplier,
        } => {
            let ohms = calc::resistor::decode(band1, band2, multiplier);
            println!(
                "{}-{}-{}: {} ({} ohms)",
                band1,
                band2,
                multiplier,
                format_resistance(ohms),
                ohms
            );
        }

        Command::Ohms {
            solve,
            voltage,
            current,
            resistance,
        } => {
            let mut inputs = OhmsInputs::default();
            if solve != OhmsMode::Voltage {
                inputs.voltage = required(voltage, "voltage", solve)?;
            }
            if solve != OhmsMode::Current {
                inputs.current = required(current, "current", solve)?;
            }
            if solve != OhmsMode::Resistance {
                inputs.resistance = required(resistance, "resistance", solve)?;
            }
            let value = calc::ohms::solve(solve, inputs)?;
            println!("{} = {:.4} {}", solve, value, solve.unit());
        }

        Command::Stats { samples } => {
            let samples: Vec<f64> = samples.into_iter().map(f64::from).collect();
            let summary = calc::summarize(&samples)?;
            println!("Samples: {}", summary.count);
            println!("Mean:    {:.4}", summary.mean);
            println!("RMS:     {:.4}", summary.rms);
            println!("Min:     {:.4}", summary.min);
            println!("Max:     {:.4}", summary.max);
            println!("Std dev: {:.4}", summary.std_dev);
        }

        Command::Rc {
            resistance,
            capacitance,
            at,
        } => {
            let filter = RcLowPass::new(resistance.value(), capacitance.value())?;
            println!("Cut-off frequency: {:.2} Hz", filter.cutoff_hz());
            println!("Time constant:     {:.6} s", filter.time_constant());
            if let Some(freq) = at {
                println!(
                    "At {:.2} Hz: {:.2} dB, {:.1} degrees",
                    freq.value(),
                    filter.gain_db(freq.value()),
                    filter.phase_degrees(freq.value())
                );
            }
        }

        Command::Parallel { resistors } => {
            let resistors: Vec<f64> = resistors.into_iter().map(f64::from).collect();
            let total = calc::parallel_resistance(&resistors)?;
            println!("Total parallel resistance: {:.2} Ohms", total);
        }

        Command::Waveform {
            frequency,
            amplitude,
            duration,
            output,
            format,
        } => {
            if let Some(path) = output {
                config.waveform.output_path = path;
            }
            if let Some(format) = format {
                config.waveform.format = format;
            }
            let path = &config.waveform.output_path;
            let wave = Waveform::sine(frequency.value(), amplitude.value(), duration.value());
            let written = export::save_waveform(path, &wave, config.waveform.format)
                .with_context(|| format!("could not create {}", path.display()))?;
            println!("Saved {} samples to {}", written, path.display());
        }

        Command::SelfTest {
            format,
            scratch_dir,
        } => {
            if let Some(format) = format {
                config.diagnostics.format = format;
            }
            if let Some(dir) = scratch_dir {
                config.diagnostics.scratch_dir = dir;
            }
            let report = diagnostics::run_self_test(&config.diagnostics);
            let formatter = output::create_formatter(config.diagnostics.format, verbose);
            println!("{}", formatter.format(&report));
            if report.verdict() != Verdict::Nominal {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

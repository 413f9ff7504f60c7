//! Interactive calculator menu

use std::io::{BufRead, Write};

use crate::calc::{self, ColorBand, OhmsInputs, OhmsMode, RcLowPass, SampleBuffer, Waveform};
use crate::config::ToolkitConfig;
use crate::constants::MAX_SAMPLES;
use crate::diagnostics;
use crate::error::{Result, ToolkitError};
use crate::export;
use crate::input::{Prompter, is_end_of_input};
use crate::output::{self, format_resistance};

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ResistorDecoder,
    CircuitAnalyser,
    SignalStatistics,
    RcFilter,
    ParallelResistors,
    WaveformGenerator,
    SelfDiagnostic,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 8] = [
        MenuOption::ResistorDecoder,
        MenuOption::CircuitAnalyser,
        MenuOption::SignalStatistics,
        MenuOption::RcFilter,
        MenuOption::ParallelResistors,
        MenuOption::WaveformGenerator,
        MenuOption::SelfDiagnostic,
        MenuOption::Exit,
    ];

    pub fn from_selection(selection: i64) -> Option<Self> {
        usize::try_from(selection)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::ResistorDecoder => "Resistor Colour Decoder",
            MenuOption::CircuitAnalyser => "Circuit Analyser (Ohm's Law)",
            MenuOption::SignalStatistics => "Signal Statistics (Mean/RMS)",
            MenuOption::RcFilter => "RC Filter Calculator",
            MenuOption::ParallelResistors => "Parallel Resistor Calc",
            MenuOption::WaveformGenerator => "Waveform Generator (File I/O)",
            MenuOption::SelfDiagnostic => "System Self-Diagnostic",
            MenuOption::Exit => "Exit",
        }
    }
}

/// Menu loop over a prompter
///
/// Calculator errors are printed and the menu is shown again; only end of
/// input, the Exit option, or a failure to write output end the loop.
pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    config: ToolkitConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(prompter: Prompter<R, W>, config: ToolkitConfig) -> Self {
        Self { prompter, config }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let reply = match self.prompter.line("Select an option: ") {
                Ok(reply) => reply,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            };

            let Some(option) = reply.trim().parse::<i64>().ok().and_then(MenuOption::from_selection)
            else {
                log::debug!("Invalid menu selection {:?}", reply);
                writeln!(self.out(), "Invalid selection. Try 1-{}.", MenuOption::ALL.len())?;
                continue;
            };

            if option == MenuOption::Exit {
                writeln!(self.out(), "Exiting application.")?;
                break;
            }

            match self.dispatch(option) {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => {
                    log::debug!("{} failed: {}", option.label(), e);
                    writeln!(self.out(), "Error: {}", e)?;
                }
            }
        }
        Ok(())
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn print_menu(&mut self) -> Result<()> {
        let out = self.out();
        writeln!(out)?;
        writeln!(out, "=========================================")?;
        writeln!(out, "       ENGINEERING ASSISTANT TOOLKIT     ")?;
        writeln!(out, "=========================================")?;
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, option.label())?;
        }
        writeln!(out, "-----------------------------------------")?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::ResistorDecoder => self.resistor_decoder(),
            MenuOption::CircuitAnalyser => self.circuit_analyser(),
            MenuOption::SignalStatistics => self.signal_statistics(),
            MenuOption::RcFilter => self.rc_filter(),
            MenuOption::ParallelResistors => self.parallel_resistors(),
            MenuOption::WaveformGenerator => self.waveform_generator(),
            MenuOption::SelfDiagnostic => self.self_diagnostic(),
            MenuOption::Exit => Ok(()),
        }
    }

    fn resistor_decoder(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Resistor Colour Code Decoder ---")?;
        writeln!(self.out(), "Codes: {}", ColorBand::legend())?;

        let band1 = self.prompter.integer("Enter Band 1 (0-9): ")?;
        let band2 = self.prompter.integer("Enter Band 2 (0-9): ")?;
        let multiplier = self.prompter.integer("Enter Multiplier (0-9): ")?;

        let ohms = calc::decode_bands(band1, band2, multiplier)?;
        writeln!(self.out(), ">> Resistance: {}", format_resistance(ohms))?;
        Ok(())
    }

    fn circuit_analyser(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Basic Circuit Analyser (Ohm's Law) ---")?;
        for mode in OhmsMode::ALL {
            writeln!(
                self.out(),
                "{}. Calculate {} ({})",
                mode.selector(),
                mode,
                mode.unit()
            )?;
        }

        let selection = self.prompter.integer("Select calculation (1-3): ")?;
        let mode = OhmsMode::try_from(selection)?;

        let mut inputs = OhmsInputs::default();
        if mode != OhmsMode::Voltage {
            inputs.voltage = self.prompter.float("Voltage (V): ")?;
        }
        if mode != OhmsMode::Current {
            inputs.current = self.prompter.float("Current (A): ")?;
        }
        if mode != OhmsMode::Resistance {
            inputs.resistance = self.prompter.float("Resistance (Ohms): ")?;
        }

        let value = calc::ohms::solve(mode, inputs)?;
        writeln!(self.out(), ">> {} = {:.2} {}", mode, value, mode.unit())?;
        Ok(())
    }

    fn signal_statistics(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Signal Statistics (Mean & RMS) ---")?;

        let n = self
            .prompter
            .integer(&format!("Enter number of samples (max {}): ", MAX_SAMPLES))?;
        if n <= 0 || n > MAX_SAMPLES as i64 {
            return Err(ToolkitError::invalid(format!(
                "please enter a size between 1 and {}",
                MAX_SAMPLES
            )));
        }

        let mut samples = SampleBuffer::new();
        for i in 0..n {
            let value = self.prompter.float(&format!("Sample {}: ", i + 1))?;
            samples.push(value)?;
        }

        let summary = calc::summarize(samples.as_slice())?;
        let out = self.out();
        writeln!(out, ">> Mean Value: {:.4}", summary.mean)?;
        writeln!(out, ">> RMS Value:  {:.4}", summary.rms)?;
        writeln!(
            out,
            "   (min {:.4}, max {:.4}, std dev {:.4})",
            summary.min, summary.max, summary.std_dev
        )?;
        Ok(())
    }

    fn rc_filter(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- RC Low-Pass Filter Calculator ---")?;

        let r = self.prompter.float("Resistance (Ohms): ")?;
        let c = self.prompter.float("Capacitance (Farads): ")?;

        let filter = RcLowPass::new(r, c)?;
        writeln!(self.out(), ">> Cut-off Frequency: {:.2} Hz", filter.cutoff_hz())?;
        writeln!(
            self.out(),
            "   (time constant {:.6} s)",
            filter.time_constant()
        )?;
        Ok(())
    }

    fn parallel_resistors(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Parallel Resistor Calculator ---")?;

        let n = self.prompter.integer("How many resistors are in parallel? ")?;
        let count = usize::try_from(n).unwrap_or(0);

        let prompter = &mut self.prompter;
        let result = calc::parallel_from_source(count, |i| {
            prompter.float(&format!("Enter Resistor {} value (Ohms): ", i + 1))
        });

        match result {
            Ok(total) => {
                writeln!(self.out(), ">> Total Parallel Resistance: {:.2} Ohms", total)?;
            }
            Err(e @ ToolkitError::InvalidResistor { .. }) => {
                writeln!(self.out(), "Error: {}", e)?;
            }
            Err(e) => return Err(e),
        }
        writeln!(self.out(), "(Memory freed)")?;
        Ok(())
    }

    fn waveform_generator(&mut self) -> Result<()> {
        let waveform_config = self.config.waveform.clone();
        writeln!(self.out(), "\n--- Sine Wave Generator ---")?;

        let freq = self.prompter.float("Enter Frequency (Hz): ")?;
        let amp = self.prompter.float("Enter Amplitude (V): ")?;
        let duration = self.prompter.float("Enter Duration (s): ")?;

        let wave = Waveform::sine(freq, amp, duration);
        let path = &waveform_config.output_path;
        let written = export::save_waveform(path, &wave, waveform_config.format)
            .inspect_err(|_| {
                log::warn!("Waveform export to {} failed", path.display());
            })?;

        writeln!(
            self.out(),
            ">> Success! {} samples saved to '{}'.",
            written,
            path.display()
        )?;
        Ok(())
    }

    fn self_diagnostic(&mut self) -> Result<()> {
        let report = diagnostics::run_self_test(&self.config.diagnostics);
        let formatter = output::create_formatter(self.config.diagnostics.format, false);
        writeln!(self.out(), "\n{}", formatter.format(&report))?;
        Ok(())
    }
}

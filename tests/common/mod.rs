use std::io::Cursor;

use engtoolkit::input::Prompter;
use engtoolkit::{Menu, ToolkitConfig};

/// Feed `lines` to an interactive menu session and return everything it
/// printed. Each entry is one line of user input.
pub fn run_session(lines: &[&str], config: ToolkitConfig) -> String {
    let mut script = lines.join("\n");
    script.push('\n');
    run_script(script.as_bytes(), config)
}

/// Feed raw bytes to an interactive menu session and return everything it
/// printed
pub fn run_script(script: &[u8], config: ToolkitConfig) -> String {
    let prompter = Prompter::new(Cursor::new(script.to_vec()), Vec::new());
    let mut menu = Menu::new(prompter, config);
    menu.run().expect("menu session failed");

    String::from_utf8(menu.into_prompter().into_output()).expect("menu output not UTF-8")
}

/// Configuration that keeps every file the session touches inside `dir`
#[allow(dead_code)]
pub fn config_in(dir: &std::path::Path) -> ToolkitConfig {
    let mut config = ToolkitConfig::default();
    config.waveform.output_path = dir.join("waveform.csv");
    config.diagnostics.scratch_dir = dir.to_path_buf();
    config
}

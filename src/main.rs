//! QPong circuit grid driver
//!
//! Headless front end for the grid engine: applies key names read from
//! stdin (or an attract-mode stream), then prints the grid, the OpenQASM
//! program and the JSON circuit description for the state engine.
//!
//! Usage: `qpong [settings.json] [--attract N]`

use std::io::{self, Read};
use std::process::ExitCode;

use qpong::{Action, AttractMode, GridController, Settings};

struct Args {
    settings_path: Option<String>,
    attract_steps: Option<usize>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        attract_steps: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--attract" => {
                let steps = iter
                    .next()
                    .ok_or("--attract needs a step count")?
                    .parse()
                    .map_err(|e| format!("bad --attract step count: {}", e))?;
                args.attract_steps = Some(steps);
            }
            _ if args.settings_path.is_none() => args.settings_path = Some(arg),
            _ => return Err(format!("unexpected argument `{}`", arg)),
        }
    }
    Ok(args)
}

fn run_keys(grid: &mut GridController, input: &str) {
    for key in input.split_whitespace() {
        match Action::from_key(key) {
            Some(action) => grid.handle(action),
            None => log::warn!("Ignoring unknown key `{}`", key),
        }
    }
}

fn run_attract(grid: &mut GridController, settings: &Settings, steps: usize) {
    log::info!("Attract mode: {} actions, seed {}", steps, settings.attract_seed);
    let actions = AttractMode::with_rotation_step(settings.attract_seed, settings.rotation_step);
    for action in actions.take(steps) {
        log::debug!("{:?}", action);
        grid.handle(action);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("QPong circuit grid starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: qpong [settings.json] [--attract N]");
            return ExitCode::from(2);
        }
    };

    let settings = args
        .settings_path
        .as_deref()
        .map(|path| Settings::load(path))
        .unwrap_or_default();
    let mut grid = settings.build_controller();

    match args.attract_steps {
        Some(steps) => run_attract(&mut grid, &settings, steps),
        None => {
            let mut input = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut input) {
                log::error!("Failed to read keys from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            run_keys(&mut grid, &input);
        }
    }

    let model = grid.model();
    let cursor = grid.cursor();
    println!("{}", model);
    println!("cursor: wire {}, column {}\n", cursor.wire, cursor.column);

    let circuit = model.construct_circuit();
    println!("{}", circuit.to_qasm());
    match serde_json::to_string_pretty(&circuit) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize circuit: {}", e),
    }

    if let Err(e) = model.validate() {
        log::error!("Circuit grid invalid: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

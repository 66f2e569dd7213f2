//! soroban-gen: headless problem generator.
//!
//! Usage:
//!   soroban-gen --kind addsub --mode mixed --digits 2 --terms 5 --count 10 --seed lesson-3
//!   soroban-gen --config batch.json --answers --layout horizontal
//!   soroban-gen --layout flash --play --flash-speed 600
//!   soroban-gen --ipc-mode

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use soroban_core::{
    flash::{FlashDeck, FlashFrame},
    generate_batch,
    stopwatch::{format_elapsed, Stopwatch},
    types::Layout,
    Batch, BatchConfig,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::thread;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Generate {
        #[serde(default)]
        config: BatchConfig,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = has_flag(&args, "--ipc-mode");

    if ipc_mode {
        return run_ipc_loop();
    }

    let config = build_config(&args)?;
    let batch = generate_batch(&config)?;

    if has_flag(&args, "--json") {
        println!("{}", batch.to_json()?);
    } else if config.layout == Layout::Flash && has_flag(&args, "--play") {
        play_flash(&batch, config.flash.speed_ms)?;
    } else {
        println!("{}", batch.meta);
        println!();
        println!("{}", batch.render_text());
    }

    Ok(())
}

/// Start from --config (or defaults) and overlay individual flags.
fn build_config(args: &[String]) -> Result<BatchConfig> {
    let mut config = match arg_value(args, "--config") {
        Some(path) => BatchConfig::load(path)?,
        None => BatchConfig::default(),
    };

    if let Some(kind) = arg_value(args, "--kind") {
        config.kind = parse_enum(kind).context("--kind expects addsub, mul or div")?;
    }
    if let Some(layout) = arg_value(args, "--layout") {
        config.layout =
            parse_enum(layout).context("--layout expects vertical, horizontal or flash")?;
    }
    if let Some(mode) = arg_value(args, "--mode") {
        config.addsub.mode = parse_enum(mode).context("--mode expects add, sub or mixed")?;
    }
    if let Some(seed) = arg_value(args, "--seed") {
        config.seed = Some(seed.to_string());
    }

    config.count = parse_arg(args, "--count", config.count);
    config.show_answers |= has_flag(args, "--answers");

    let addsub = &mut config.addsub;
    addsub.digits = parse_arg(args, "--digits", addsub.digits);
    addsub.terms = parse_arg(args, "--terms", addsub.terms);
    addsub.subtract_ratio = parse_arg(args, "--sub-ratio", addsub.subtract_ratio);
    if has_flag(args, "--allow-negative") {
        addsub.forbid_negative = false;
    }
    if has_flag(args, "--loose") {
        addsub.exact_digits = false;
        config.mul.a.exact_digits = false;
        config.mul.b.exact_digits = false;
    }
    if has_flag(args, "--allow-zero") {
        addsub.allow_zero = true;
        config.mul.a.allow_zero = true;
        config.mul.b.allow_zero = true;
        config.div.allow_zero = true;
    }

    config.mul.a.digits = parse_arg(args, "--mul-a", config.mul.a.digits);
    config.mul.b.digits = parse_arg(args, "--mul-b", config.mul.b.digits);
    config.div.divisor_digits = parse_arg(args, "--div-divisor", config.div.divisor_digits);
    config.div.quotient_digits = parse_arg(args, "--div-quotient", config.div.quotient_digits);
    if has_flag(args, "--div-remainder") {
        config.div.exact = false;
    }
    config.flash.speed_ms = parse_arg(args, "--flash-speed", config.flash.speed_ms);

    Ok(config)
}

fn run_ipc_loop() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Generate { config } => match generate_batch(&config) {
                Ok(batch) => writeln!(stdout, "{}", batch.to_json()?)?,
                Err(e) => {
                    log::warn!("ipc generate failed: {e}");
                    write_error(&mut stdout, &e.to_string())?;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{err_json}")?;
    out.flush()?;
    Ok(())
}

/// Show each problem's operands in place, then its answer and time.
fn play_flash(batch: &Batch, speed_ms: u64) -> Result<()> {
    let mut deck = FlashDeck::from_problems(&batch.problems);
    let mut stdout = io::stdout();
    println!("{}", batch.meta);

    for _ in 0..deck.len() {
        let Some(schedule) = deck.schedule(speed_ms) else { break };
        println!();
        println!("{}", deck.progress());

        let mut watch = Stopwatch::new();
        watch.start();
        for frame in &schedule.frames {
            match frame {
                FlashFrame::Number { text, .. } => write!(stdout, "\r{text:>16}")?,
                FlashFrame::Blank { .. } => write!(stdout, "\r{:>16}", "")?,
            }
            stdout.flush()?;
            thread::sleep(frame.duration());
        }
        watch.stop();
        writeln!(stdout, "\r{:>16}", "")?;

        if batch.meta.show_answers {
            if let Some(answer) = deck.answer_text() {
                println!("{answer}");
            }
        }
        println!("Time: {}", format_elapsed(watch.elapsed()));
        deck.next_problem();
    }
    Ok(())
}

fn parse_enum<T: DeserializeOwned>(value: &str) -> Result<T> {
    Ok(serde_json::from_value(serde_json::Value::String(value.to_string()))?)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

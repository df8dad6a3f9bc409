use std::io::{self, BufRead, Write};

use log::{error, info};

use chess_rules::config::SessionConfig;
use chess_rules::orchestrator::Orchestrator;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("bad configuration: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    info!("session config: {:?}", config);

    if let Err(e) = run(Orchestrator::new(config)) {
        error!("terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}

fn run(mut orchestrator: Orchestrator) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        orchestrator.run_line(&line, &mut stdout)?;
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

//! # Modelline Main Entry Point
//!
//! Submits text to the distributed model service and prints the result.

use anyhow::Result;
use modelline::cmd_args::CommandLineArgs;
use modelline::config;
use modelline::{
    ControllerEvent, HttpService, RequestController, TerminalRenderer, ViewRenderer,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing(cmd_args.verbose());

    let profile_path = config::get_profile_path();
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?.with_overrides(
        cmd_args.endpoint(),
        cmd_args.mode(),
        cmd_args.timeout_ms(),
    );
    tracing::info!(
        "Using endpoint {} in {} mode",
        profile.endpoint,
        profile.mode
    );

    let service = HttpService::new(&profile.endpoint)?;
    let mut controller = RequestController::new(Arc::new(service), profile.mode);
    controller.set_timeout(profile.timeout);

    let use_color = atty::is(atty::Stream::Stdout);
    let mut renderer = TerminalRenderer::new(std::io::stdout(), use_color);

    if let Some(input) = cmd_args.input() {
        let succeeded = submit_and_render(&mut controller, &mut renderer, input).await?;
        if !succeeded {
            std::process::exit(1);
        }
        return Ok(());
    }

    renderer.render_notice(&format!(
        "Distributed Model Interface ({}), enter a prompt per line, Ctrl+D to quit",
        profile.mode
    ))?;
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        submit_and_render(&mut controller, &mut renderer, &line).await?;
        prompt()?;
    }

    Ok(())
}

/// Run one submission and render its outcome; returns whether it succeeded
async fn submit_and_render(
    controller: &mut RequestController,
    renderer: &mut impl ViewRenderer,
    input: &str,
) -> Result<bool> {
    controller.update_input(input);

    let Some(started) = controller.submit() else {
        renderer.render_notice("Input is empty, nothing submitted")?;
        return Ok(false);
    };
    renderer.render_event(&started)?;

    let succeeded = matches!(
        controller.wait_for_outcome().await,
        Some(ControllerEvent::SubmissionSucceeded { .. })
    );
    renderer.render_full(&controller.snapshot())?;
    Ok(succeeded)
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

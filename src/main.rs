use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use booster::banner::{BannerInfo, print_banner, print_session_summary};
use booster::commands::{CommandResult, SessionInfo, handle_command};
use booster::consts::{DEFAULT_BIND, DEFAULT_ENDPOINT};
use booster::controller::RequestController;
use booster::enhancer::http::HttpEnhancer;
use booster::service::polish::{GeminiPolisher, Passthrough, Polisher};
use booster::service::{AppState, serve};
use booster::surface::console::ConsoleSurface;

#[derive(Parser)]
#[command(name = "booster", version, about = "One-click prompt enhancement.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the enhancement service
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Enhance a single prompt and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the enhancement service
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: String,

        /// Gemini model used for polishing
        #[arg(long)]
        model: Option<String>,

        /// Skip the polishing model; return the heuristic enrichment as-is
        #[arg(long, default_value_t = false)]
        no_polish: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Serve {
        bind,
        model,
        no_polish,
    }) = cli.command
    {
        return run_service(&bind, model, no_polish).await;
    }

    let enhancer = Box::new(HttpEnhancer::new(cli.endpoint.clone()));
    let surface = Box::new(ConsoleSurface::new());
    let mut controller = RequestController::new(enhancer, surface);

    // Single prompt mode
    if let Some(prompt) = cli.run {
        controller.activate(&prompt).await;
        print_session_summary(controller.stats());
        return Ok(());
    }

    print_banner(&BannerInfo {
        endpoint: &cli.endpoint,
        mode: "interactive",
    });

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nbooster> ");
        io::stdout().flush()?;

        // Read next line, interruptible by Ctrl+C
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();

        match handle_command(
            input,
            &SessionInfo {
                endpoint: &cli.endpoint,
                stats: controller.stats(),
            },
        ) {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NotACommand => {}
        }

        // One activation per line. The request is never cancelled
        // mid-flight, so the loading indicator always gets cleared.
        controller.activate(input).await;
    }

    print_session_summary(controller.stats());
    Ok(())
}

async fn run_service(bind: &str, model: Option<String>, no_polish: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let polisher: Box<dyn Polisher> = if no_polish {
        Box::new(Passthrough)
    } else {
        Box::new(GeminiPolisher::from_env(model)?)
    };

    serve(bind, AppState { polisher }).await
}

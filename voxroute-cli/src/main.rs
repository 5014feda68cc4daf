use std::sync::Arc;

use clap::{Parser, Subcommand};
use voxroute_dispatch::{DispatchRequest, Dispatcher};
use voxroute_http::HttpRuntime;
use voxroute_tools::{StubExecutor, ToolRegistry};

#[derive(Parser, Debug)]
#[command(name = "voxroute", version)]
#[command(about = "Voxroute - voice-driven command dispatcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Dispatch a single utterance and print the structured response
    Dispatch {
        /// The utterance to classify and dispatch
        input: String,
        /// Restrict dispatch to this tool (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,
    },
    /// Print the tool catalogue
    Tools,
}

#[tokio::main]
async fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => {
            if let Err(e) = serve(&addr).await {
                tracing::error!(error = %e, "server failed");
                std::process::exit(1);
            }
        }
        Commands::Dispatch { input, tools } => {
            let registry = Arc::new(ToolRegistry::builtin());
            let executor = Arc::new(StubExecutor::new(Arc::clone(&registry)));
            let dispatcher = Dispatcher::new(registry, executor);

            let request = DispatchRequest::new(&input).with_allowed_tools(tools);
            match dispatcher.process(request).await {
                Ok(response) => {
                    let rendered = serde_json::to_string_pretty(&response)
                        .unwrap_or_else(|_| response.response.clone());
                    println!("{rendered}");
                }
                Err(e) => {
                    tracing::error!(error = %e, "dispatch failed");
                    std::process::exit(1);
                }
            }
        }
        Commands::Tools => {
            let registry = ToolRegistry::builtin();
            match serde_json::to_string_pretty(&registry.list()) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    tracing::error!(error = %e, "failed to render catalogue");
                    std::process::exit(1);
                }
            }
        }
    }
}

async fn serve(addr: &str) -> Result<(), std::io::Error> {
    let app = HttpRuntime::with_builtin_tools().router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "voxroute listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
    }
}

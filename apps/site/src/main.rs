mod config;
mod contact;
mod content;
mod errors;
mod navigation;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::notification::ConsoleNotifier;
use crate::contact::{ContactForm, FormState, HttpContactSubmitter, SubmitOutcome};
use crate::navigation::{NavState, Section};
use crate::render::{write_page, PageView};
use crate::routes::build_router;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "cfo-site", version, about = "CFO portfolio page and contact form")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the rendered page for local preview.
    Serve {
        #[arg(long, help = "Port to listen on (overrides PORT)")]
        port: Option<u16>,
    },
    /// Write the static page to a file.
    Render {
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
        #[arg(long, help = "Section id to mark active in the nav bar")]
        section: Option<String>,
    },
    /// Send one consultation request to the contact endpoint.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
        #[arg(long, help = "Contact endpoint URL (overrides CONTACT_ENDPOINT)")]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Serve { port } => serve(config, port).await,
        Command::Render { out, section } => render(&out, section.as_deref()),
        Command::Submit {
            name,
            email,
            phone,
            message,
            endpoint,
        } => {
            let endpoint = endpoint.unwrap_or(config.contact_endpoint);
            let form = FormState {
                name,
                email,
                phone,
                message,
            };
            submit(endpoint, form).await
        }
    }
}

async fn serve(config: Config, port: Option<u16>) -> Result<()> {
    info!("Starting CFO site v{}", env!("CARGO_PKG_VERSION"));

    let port = port.unwrap_or(config.port);
    let app = build_router(AppState::from_config(config)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn render(out: &std::path::Path, section: Option<&str>) -> Result<()> {
    let mut nav = NavState::default();
    if let Some(id) = section {
        nav.select(Section::from_id(id).ok_or_else(|| anyhow!("Unknown section '{id}'"))?);
    }

    write_page(
        out,
        &PageView {
            nav,
            ..PageView::default()
        },
    )?;
    info!(
        "Page written to {} (active section: {})",
        out.display(),
        nav.active().id()
    );
    Ok(())
}

async fn submit(endpoint: String, form: FormState) -> Result<()> {
    info!("Submitting contact request to {endpoint}");

    let controller = ContactForm::new(
        Arc::new(HttpContactSubmitter::new(endpoint)),
        Arc::new(ConsoleNotifier),
    );
    controller.load(form);

    let outcome = controller.submit().await;
    debug!(status = ?controller.status(), "Submission settled");

    match outcome {
        SubmitOutcome::Sent => Ok(()),
        SubmitOutcome::Failed => bail!(
            "Contact request from {} was not sent",
            controller.form().email
        ),
        SubmitOutcome::Ignored => bail!("A contact request is already in flight"),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_args_parse() {
        let cli = Cli::try_parse_from([
            "cfo-site",
            "submit",
            "--name",
            "Ivan",
            "--email",
            "ivan@example.com",
            "--phone",
            "+79001234567",
            "--message",
            "Hello",
        ])
        .unwrap();
        match cli.command {
            Command::Submit { name, endpoint, .. } => {
                assert_eq!(name, "Ivan");
                assert!(endpoint.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_render_rejects_unknown_section() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&dir.path().join("index.html"), Some("pricing")).unwrap_err();
        assert!(err.to_string().contains("pricing"));
    }

    #[test]
    fn test_render_marks_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        render(&path, Some("about")).unwrap();
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("href=\"?section=about#about\" class=\"active\""));
    }
}

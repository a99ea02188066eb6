//! sk editor entry point
//!
//! Runs the editor headless: builds the scene, replays an optional event
//! script one tick per event and logs where everything ended up.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sk_editor::{Editor, EditorConfig, events};

#[derive(Parser)]
#[command(name = "sk")]
#[command(about = "Scene editor interaction core")]
struct Cli {
    /// RON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RON list of events to replay
    #[arg(long)]
    script: Option<PathBuf>,
    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sk_editor=debug,sk_viewport=debug,sk_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting sk editor");

    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let script = match &cli.script {
        Some(path) => events::load_script(path)
            .with_context(|| format!("failed to load script {}", path.display()))?,
        None => Vec::new(),
    };

    let mut editor = Editor::new(&config);
    for event in script {
        editor.queue_event(event);
        editor.tick(cli.dt);
    }

    report(&editor);
    Ok(())
}

fn report(editor: &Editor) {
    let name_of = |id| editor.scene().get(id).map(|o| o.name.as_str());

    tracing::info!(
        "Selected: {:?}, hovered: {:?}, hovered gizmo: {:?}, mode: {:?}",
        editor.selected_object().and_then(name_of),
        editor.hovered_object().and_then(name_of),
        editor.hovered_gizmo(),
        editor.active_gizmo_mode(),
    );
    for object in editor.scene().iter() {
        tracing::info!(
            "{} {} at {:?}, orientation {:?}, scale {:?}",
            object.name,
            object.primitive,
            object.position(),
            object.orientation(),
            object.scale(),
        );
    }
}

//! Kestrel CLI
//!
//! Inspects the theme catalog, resolves key styles for a configured keyboard
//! context and replays host syncs against it.

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::KestrelConfig;
use kestrel_context::{ContextChanges, ContextSynchronizer, KeyboardContext};
use kestrel_core::EdgeInsets;
use kestrel_style::{
    ActionCalloutStyle, AutocompleteToolbarStyle, Background, ButtonStyle, CalloutStyle,
    InputCalloutStyle, KeyboardAction, KeyboardStyleProvider, LayoutConfiguration,
};
use kestrel_theme::Theme;
use logging::Verbosity;
use serde::Serialize;
use std::path::PathBuf;

/// Keyboard context and style inspector
#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(about = "Inspect Kestrel keyboard themes, styles and context syncs")]
#[command(version)]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the theme catalog
    Themes {
        /// Print the palettes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve button styles for actions such as `backspace` or `character:a`
    Resolve {
        /// Configuration file (kestrel.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Resolve the pressed state
        #[arg(long)]
        pressed: bool,

        /// Also resolve keyboard, callout and toolbar styles
        #[arg(long)]
        containers: bool,

        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        actions: Vec<String>,
    },

    /// Apply the configured host snapshot twice and report each change set
    Sync {
        /// Configuration file (kestrel.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    match cli.command {
        Commands::Themes { json } => cmd_themes(json),
        Commands::Resolve {
            config,
            pressed,
            containers,
            json,
            actions,
        } => cmd_resolve(config, pressed, containers, json, &actions),
        Commands::Sync { config, json } => cmd_sync(config, json),
    }
}

fn cmd_themes(json: bool) -> Result<()> {
    let themes = Theme::all();
    if json {
        println!("{}", serde_json::to_string_pretty(themes)?);
        return Ok(());
    }

    for theme in themes {
        println!(
            "{:<24} {:<24} {}",
            theme.name,
            theme.display_name(),
            theme.keyboard_background_color.to_css()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ResolvedKey {
    action: String,
    text: Option<String>,
    image: Option<&'static str>,
    content_bottom_margin: f32,
    style: ButtonStyle,
}

#[derive(Serialize)]
struct ContainerStyles {
    background: Background,
    callout: CalloutStyle,
    action_callout: ActionCalloutStyle,
    input_callout: InputCalloutStyle,
    autocomplete_toolbar: AutocompleteToolbarStyle,
    edge_insets: EdgeInsets,
    layout: LayoutConfiguration,
    image_scale_factor: f32,
}

#[derive(Serialize)]
struct ResolveOutput {
    keys: Vec<ResolvedKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    containers: Option<ContainerStyles>,
}

fn cmd_resolve(
    config: Option<PathBuf>,
    pressed: bool,
    containers: bool,
    json: bool,
    actions: &[String],
) -> Result<()> {
    let config = KestrelConfig::load(config.as_deref())?;
    let context = config.keyboard_context()?;
    let provider = KeyboardStyleProvider::standard();

    let keys = actions
        .iter()
        .map(|raw| {
            let action: KeyboardAction = raw
                .parse()
                .with_context(|| format!("Invalid action `{raw}`"))?;
            Ok(ResolvedKey {
                action: action.to_string(),
                text: provider.button_text(&context, &action),
                image: provider.button_image(&action),
                content_bottom_margin: provider.button_content_bottom_margin(&action),
                style: provider.button_style(&context, &action, pressed),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let output = ResolveOutput {
        keys,
        containers: containers.then(|| container_styles(&provider, &context)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_resolved(&output);
    }
    Ok(())
}

fn container_styles(provider: &KeyboardStyleProvider, context: &KeyboardContext) -> ContainerStyles {
    ContainerStyles {
        background: provider.background_style(context),
        callout: provider.callout_style(context),
        action_callout: provider.action_callout_style(context),
        input_callout: provider.input_callout_style(context),
        autocomplete_toolbar: provider.autocomplete_toolbar_style(context),
        edge_insets: provider.keyboard_edge_insets(context),
        layout: provider.layout_configuration(context),
        image_scale_factor: provider.button_image_scale_factor(context),
    }
}

fn print_resolved(output: &ResolveOutput) {
    for key in &output.keys {
        let style = &key.style;
        let label = key.text.as_deref().or(key.image).unwrap_or("-");
        println!("{} ({label})", key.action);
        println!("  background  {}", style.background_color.to_css());
        println!("  foreground  {}", style.foreground_color.to_css());
        match style.font.weight {
            Some(weight) => println!("  font        {} {weight:?}", style.font.size),
            None => println!("  font        {}", style.font.size),
        }
        println!("  radius      {}", style.corner_radius);
        println!(
            "  border      {} {}",
            style.border.width,
            style.border.color.to_css()
        );
        if style.shadow.is_none() {
            println!("  shadow      none");
        } else {
            println!(
                "  shadow      {} {} {} {}",
                style.shadow.offset_x,
                style.shadow.offset_y,
                style.shadow.blur,
                style.shadow.color.to_css()
            );
        }
    }

    if let Some(containers) = &output.containers {
        match containers.background {
            Background::Standard => println!("keyboard background  standard"),
            Background::Color(color) => println!("keyboard background  {}", color.to_css()),
        }
        println!(
            "callout              {} on {}",
            containers.callout.text_color.to_css(),
            containers.callout.background_color.to_css()
        );
        let insets = containers.edge_insets;
        println!(
            "edge insets          {} {} {} {}",
            insets.top, insets.leading, insets.bottom, insets.trailing
        );
        println!("row height           {}", containers.layout.row_height);
    }
}

#[derive(Serialize)]
struct SyncPass {
    pass: usize,
    generation: u64,
    changes: Option<ContextChanges>,
}

fn cmd_sync(config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = KestrelConfig::load(config.as_deref())?;
    let mut store = config.store()?;
    let snapshot = config.host_snapshot();

    store.subscribe(|changes, _| {
        tracing::info!(generation = changes.generation(), fields = changes.len(), "context changed");
    });

    let passes: Vec<SyncPass> = (1..=2)
        .map(|pass| {
            let changes = ContextSynchronizer::sync(&mut store, &snapshot);
            SyncPass {
                pass,
                generation: store.generation(),
                changes,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&passes)?);
        return Ok(());
    }

    for pass in &passes {
        match &pass.changes {
            Some(changes) => {
                let fields: Vec<String> =
                    changes.fields().iter().map(|field| format!("{field:?}")).collect();
                println!(
                    "pass {} (generation {}): {}",
                    pass.pass,
                    pass.generation,
                    fields.join(", ")
                );
            }
            None => println!("pass {} (generation {}): no changes", pass.pass, pass.generation),
        }
    }
    Ok(())
}

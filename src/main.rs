//! iframed command-line tool.
//!
//! Loads a configuration and runs the resolver and rewriter against URLs
//! given on the command line, so mappings can be checked without a running
//! application.
//!
//! ```text
//! iframed --config iframed.toml check
//! iframed --config iframed.toml resolve --referer 'http://parent.com/page?id=/sub'
//! iframed --config iframed.toml rewrite /app/sub --referer 'http://parent.com/page'
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use iframed::config::{load_config, IframedConfig, ObservabilityConfig};
use iframed::observability::logging::init_logging;
use iframed::resolve::{InboundOutcome, Iframed, OutboundOutcome};

#[derive(Parser)]
#[command(name = "iframed")]
#[command(about = "Check iframe path mappings", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and print a summary
    Check,
    /// Resolve a referer URL to the internal path it dispatches to
    Resolve {
        #[arg(short, long)]
        referer: String,
    },
    /// Rewrite an application URL for the embedding page
    Rewrite {
        /// Absolute URL as generated by the application (e.g. /app/view/1)
        url: String,

        /// Referer of the originating request
        #[arg(short, long)]
        referer: Option<String>,

        /// Build on the configured default base
        #[arg(long)]
        default_base: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_config(path).map_err(|e| (path.clone(), e)),
        None => Ok(IframedConfig::default()),
    };

    let observability = loaded
        .as_ref()
        .map(|config| config.observability.clone())
        .unwrap_or_else(|_| ObservabilityConfig::default());
    if let Err(e) = init_logging(&observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match loaded {
        Ok(config) => config,
        Err((path, e)) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let iframed = Iframed::from_config(&config);
    match cli.command {
        Commands::Check => check(&config, cli.json),
        Commands::Resolve { referer } => resolve(&iframed, &referer, cli.json),
        Commands::Rewrite {
            url,
            referer,
            default_base,
        } => rewrite(&iframed, &url, referer.as_deref(), default_base, cli.json),
    }
    ExitCode::SUCCESS
}

fn check(config: &IframedConfig, as_json: bool) {
    if as_json {
        let summary = json!({
            "query_id": config.query_id,
            "default_base": config.default_base,
            "script_prefix": config.script_prefix,
            "dispatch_aliased": config.dispatch_aliased,
            "mappings": config.mappings,
            "aliases": config.aliases,
            "rewrites": config.rewrites,
        });
        println!("{}", summary);
        return;
    }

    println!("query id:       {}", config.query_id);
    println!(
        "default base:   {}",
        config.default_base.as_deref().unwrap_or("(none)")
    );
    println!("script prefix:  {}", config.script_prefix);
    println!("mappings:");
    for mapping in &config.mappings {
        println!("  {} <-> {}", mapping.internal, mapping.external);
    }
    for (from, to) in &config.aliases {
        println!("alias:   {} -> {}", from, to);
    }
    for (from, to) in &config.rewrites {
        println!("rewrite: {} -> {}", from, to);
    }
}

fn resolve(iframed: &Iframed, referer: &str, as_json: bool) {
    let outcome = iframed.inbound_outcome(Some(referer));
    let label = outcome.label();

    match outcome {
        InboundOutcome::Resolved(resolution) => {
            if as_json {
                let result = json!({
                    "outcome": label,
                    "internal_path": resolution.internal_path,
                    "aliased_path": resolution.context.aliased_path(),
                    "dispatched": !resolution.aliased || iframed.dispatch_aliased(),
                });
                println!("{}", result);
            } else {
                println!("{}", resolution.internal_path);
            }
        }
        _ => {
            if as_json {
                println!("{}", json!({ "outcome": label }));
            } else {
                println!("no rewrite ({})", label);
            }
        }
    }
}

fn rewrite(iframed: &Iframed, url: &str, referer: Option<&str>, default_base: bool, as_json: bool) {
    let context = referer
        .and_then(|referer| iframed.resolve_inbound(Some(referer)))
        .map(|resolution| resolution.context);
    if referer.is_some() && context.is_none() {
        tracing::warn!("Referer does not match any mapping; rewriting without it");
    }

    let outcome = iframed.outbound_outcome(url, context.as_ref(), default_base);
    let label = outcome.label();
    let is_fallback = matches!(outcome, OutboundOutcome::Fallback);
    let rewritten = outcome.into_url(url);

    if as_json {
        println!("{}", json!({ "outcome": label, "url": rewritten }));
    } else if is_fallback {
        println!("{} (unchanged)", rewritten);
    } else {
        println!("{}", rewritten);
    }
}

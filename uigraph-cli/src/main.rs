use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};

#[derive(Parser, Debug)]
#[command(name = "uigraph", version)]
struct Cli {
    /// Log render diagnostics to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a UI graph to HTML or to the JSON visual tree.
    Render(RenderArgs),
    /// Check a UI graph and report every structural problem.
    Validate(ValidateArgs),
    /// List every type name the standard registry dispatches.
    Types,
    /// Print the curated component catalog.
    Catalog(CatalogArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input graph JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Input is raw model output; strip markdown code fences before parsing.
    #[arg(long, default_value_t = false)]
    model_output: bool,

    /// Data model JSON that `path` bindings resolve against.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Root node id (defaults to the first node).
    #[arg(long)]
    root: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Maximum reference nesting.
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Disable reference cycle detection (the depth limit still applies).
    #[arg(long, default_value_t = false)]
    no_cycle_check: bool,

    /// Render a diagnostic for a missing root instead of falling back to the first node.
    #[arg(long, default_value_t = false)]
    strict_root: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input graph JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Also require a non-empty graph, single-type components and registered types.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Emit the catalog as JSON instead of prompt-ready markdown.
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Logs every action fired through the session. Installing a handler is what makes renderers
/// emit their `data-on-*` event bindings.
struct LogActions;

impl uigraph::ActionHandler for LogActions {
    fn on_action(&self, name: &str, context: &Map<String, Value>) {
        tracing::info!(action = name, ?context, "action");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Types => cmd_types(),
        Command::Catalog(args) => cmd_catalog(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_graph(path: &Path, model_output: bool) -> anyhow::Result<uigraph::Graph> {
    if !model_output {
        return Ok(uigraph::Graph::from_path(path)?);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read model output '{}'", path.display()))?;
    Ok(uigraph::Graph::from_model_output(&text)?)
}

fn load_data(path: Option<&Path>) -> anyhow::Result<uigraph::DataModel> {
    let Some(path) = path else {
        return Ok(Value::Null);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read data model '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse data model '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let graph = load_graph(&args.in_path, args.model_output)?;
    let data = load_data(args.data.as_deref())?;

    let opts = uigraph::RenderSessionOpts {
        max_depth: args.max_depth,
        detect_cycles: !args.no_cycle_check,
        strict_root: args.strict_root,
    };
    let actions = LogActions;
    let root = uigraph::RenderSession::for_graph(&graph, &data)
        .with_opts(opts)
        .with_action_handler(&actions)
        .render(args.root.as_deref());

    let diagnostics = root.diagnostics();
    if !diagnostics.is_empty() {
        tracing::warn!(count = diagnostics.len(), "rendered with diagnostics");
        for d in diagnostics {
            tracing::debug!(kind = ?d.kind, id = %d.id, "{}", d.message());
        }
    }

    let body = match args.format {
        Format::Html => uigraph::to_html(&root),
        Format::Json => root.to_json_pretty()?,
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, body.as_bytes())
                .with_context(|| format!("write output '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{body}").context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read graph '{}'", args.in_path.display()))?;
    let raw: Value = serde_json::from_str(&text)
        .with_context(|| format!("parse graph JSON '{}'", args.in_path.display()))?;

    if let Err(errs) = uigraph::validate_graph_json(&raw, args.strict) {
        anyhow::bail!("{} problem(s):\n{errs}", errs.errors.len());
    }
    let graph = uigraph::Graph::from_value(raw)?;
    let checked = if args.strict {
        uigraph::validate_graph_with(&graph, uigraph::standard_registry())
    } else {
        uigraph::validate_graph(&graph)
    };
    if let Err(errs) = checked {
        anyhow::bail!("{} problem(s):\n{errs}", errs.errors.len());
    }

    println!("ok: {} node(s)", graph.len());
    Ok(())
}

fn cmd_types() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for name in uigraph::standard_registry().list_types() {
        writeln!(stdout, "{name}").context("write stdout")?;
    }
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let body = if args.json {
        serde_json::to_string_pretty(uigraph::CATALOG).context("serialize catalog")?
    } else {
        uigraph::catalog_for_prompt()
    };
    println!("{body}");
    Ok(())
}

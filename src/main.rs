use std::fs;

use clap::{Parser, ValueEnum};
use ebpl::{CompileResult, catalog, compile};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// ebpl translates EBPL, a controlled-English teaching language, into a
/// target script and previews what the script prints.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ebpl to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Compiles a built-in example by name instead of CONTENTS.
    #[arg(short, long, conflicts_with_all = ["contents", "file"])]
    example: Option<String>,

    /// Lists the built-in examples and exits.
    #[arg(short, long)]
    list_examples: bool,

    /// Prints the complete compile result as JSON.
    #[arg(short, long)]
    json: bool,

    /// Which part of a successful compilation to print.
    #[arg(short, long, value_enum, default_value_t = View::Output)]
    show: View,

    /// Log filter such as `debug` or `ebpl=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Writes logs as JSON lines.
    #[arg(long)]
    log_json: bool,

    /// EBPL source, or a path with `--file`. Defaults to the Hello World
    /// example.
    contents: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    /// The simulated output trace.
    Output,
    /// The token listing.
    Tokens,
    /// The emitted target script.
    Generated,
    /// All of the above.
    All,
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref(), args.log_json);

    if args.list_examples {
        for (category, example) in catalog::all() {
            println!("[{}] {}: {}", category.key, example.name, example.description);
        }
        return;
    }

    let source = read_source(&args);
    if source.trim().is_empty() {
        eprintln!("Please enter some EBPL code!");
        std::process::exit(1);
    }

    let result = compile(&source);
    info!(success = result.success, "compiled");

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize the compile result: {e}");
                std::process::exit(1);
            },
        }
    } else if result.success {
        print_views(&result, args.show);
    } else {
        eprintln!("Compilation Error: {}",
                  result.error_message.as_deref().unwrap_or("Compilation failed"));
    }

    if !result.success {
        std::process::exit(1);
    }
}

fn init_logging(level: Option<&str>, json: bool) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter)
                                           .with_target(false)
                                           .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_source(args: &Args) -> String {
    if let Some(name) = &args.example {
        let Some(example) = catalog::find(name) else {
            eprintln!("Unknown example '{name}'. Use --list-examples to see them all.");
            std::process::exit(1);
        };
        return example.code.to_string();
    }

    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{path}'. \
                                                  Perhaps this file does not exist?");
                                       std::process::exit(1);
                                   }),
        Some(script) => script.clone(),
        None => catalog::default_example().code.to_string(),
    }
}

fn print_views(result: &CompileResult, view: View) {
    let tokens = || {
        result.tokens_display
              .as_ref()
              .filter(|tokens| !tokens.is_empty())
              .map_or_else(|| "No tokens generated.".to_string(), |tokens| tokens.join("\n"))
    };
    let generated = || result.emitted_text.clone().unwrap_or_default();

    match view {
        View::Output => println!("{}", output_text(result)),
        View::Tokens => println!("{}", tokens()),
        View::Generated => println!("{}", generated()),
        View::All => {
            println!("=== Tokens ===\n{}\n", tokens());
            println!("=== Generated ===\n{}\n", generated());
            println!("=== Output ===\n{}", output_text(result));
        },
    }
}

fn output_text(result: &CompileResult) -> String {
    match (result.output_trace.as_deref(), result.simulation_error.as_deref()) {
        (Some(trace), _) if !trace.trim().is_empty() => trace.to_string(),
        (_, Some(error)) if !error.trim().is_empty() => format!("Execution Error:\n{error}"),
        _ => "Compilation successful! No output generated.".to_string(),
    }
}

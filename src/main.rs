use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};
use dsc_expression::cli::{self, CliError, Command, CommandOptions, CommandOutput};
use dsc_expression::{DEFAULT_MAX_DEPTH, ParserConfig};
use std::io::{self, Read};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "dscexpr")]
#[command(about = "Classify and parse bracketed expressions in configuration string values")]
#[command(version)]
struct Cli {
    /// Trace level written to stderr
    #[arg(long, value_enum, default_value_t = TraceLevel::Warn, global = true)]
    trace_level: TraceLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TraceLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Args)]
struct StatementArgs {
    /// The statement to classify (reads from stdin if not provided)
    statement: Option<String>,

    /// Deepest allowed expression nesting
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the classified statement as JSON
    Parse {
        #[command(flatten)]
        args: StatementArgs,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Only validate syntax
    Check {
        #[command(flatten)]
        args: StatementArgs,
    },

    /// Print the canonical form of the statement
    Format {
        #[command(flatten)]
        args: StatementArgs,
    },

    /// List the function names an expression references
    Functions {
        #[command(flatten)]
        args: StatementArgs,
    },

    /// Show the syntax reference, or one topic of it
    Docs {
        /// Topic name (omit to list topics)
        topic: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    enable_tracing(cli.trace_level);

    let result = match cli.command {
        Commands::Parse { args, pretty } => run(Command::Parse, args, pretty),
        Commands::Check { args } => run(Command::Check, args, false),
        Commands::Format { args } => run(Command::Format, args, false),
        Commands::Functions { args } => run(Command::Functions, args, false),
        Commands::Docs { topic: None } => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Docs { topic: Some(topic) } => cli::get_doc_topic(&topic).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn enable_tracing(trace_level: TraceLevel) {
    let level = match trace_level {
        TraceLevel::Error => Level::ERROR,
        TraceLevel::Warn => Level::WARN,
        TraceLevel::Info => Level::INFO,
        TraceLevel::Debug => Level::DEBUG,
        TraceLevel::Trace => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let with_source = level >= Level::DEBUG;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(with_source)
        .with_line_number(with_source)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to set global default tracing subscriber. Tracing is disabled.");
    }
}

fn run(command: Command, args: StatementArgs, pretty: bool) -> Result<(), CliError> {
    let statement = match args.statement {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(cli::strip_line_break(&buffer).to_string())
        }
        None => None,
    };

    let options = CommandOptions {
        command,
        statement,
        config: ParserConfig::default().with_max_depth(args.max_depth),
        pretty,
    };

    match cli::execute(&options)? {
        CommandOutput::Json(json) => println!("{}", json),
        CommandOutput::SyntaxValid => println!("Syntax is valid"),
        CommandOutput::Formatted(text) => println!("{}", text),
        CommandOutput::FunctionNames(names) => {
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

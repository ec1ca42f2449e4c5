// monkey-front: token and syntax-tree inspector for Monkey source files

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;

use monkey_front::parser::lexer::Lexer;
use monkey_front::ui::App;

#[derive(Debug, Error)]
enum CliError {
    #[error("No input file provided")]
    MissingInput,

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Could not read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// What to do with the parsed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Inspect,
    Tokens,
    Ast,
}

struct Options {
    mode: Mode,
    path: PathBuf,
}

fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let mut mode = Mode::Inspect;
    let mut path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" => mode = Mode::Tokens,
            "--ast" => mode = Mode::Ast,
            opt if opt.starts_with("--") => return Err(CliError::UnknownOption(opt.to_string())),
            file => path = Some(PathBuf::from(file)),
        }
    }

    let path = path.ok_or(CliError::MissingInput)?;
    Ok(Options { mode, path })
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens | --ast] <file.monkey>", program_name);
    eprintln!();
    eprintln!("  (no option)  open the interactive inspector");
    eprintln!("  --tokens     print the token stream and exit");
    eprintln!("  --ast        print the parsed program and diagnostics and exit");
}

fn run_inspector(source: String) -> Result<(), CliError> {
    let mut app = App::new(source);

    eprintln!(
        "Parsed {} statement(s), {} diagnostic(s).",
        app.program.len(),
        app.errors.len()
    );
    for err in &app.errors {
        eprintln!("  - {} (at {})", err, err.location());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(CliError::from)
}

fn run(options: Options) -> Result<ExitCode, CliError> {
    let source = fs::read_to_string(&options.path).map_err(|source| CliError::Read {
        path: options.path.clone(),
        source,
    })?;

    eprintln!("Parsing {}...", options.path.display());

    match options.mode {
        Mode::Tokens => {
            for token in Lexer::new(&source).tokenize() {
                println!("{:>8}  {:<14}{}", token.location.to_string(), token.kind.to_string(), token.literal);
            }
            Ok(ExitCode::SUCCESS)
        }
        Mode::Ast => {
            let (program, errors) = monkey_front::parse(&source);
            for stmt in &program.statements {
                println!("{}", stmt);
            }
            if errors.is_empty() {
                eprintln!("Parsed {} statement(s).", program.len());
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Parser errors:");
                for err in &errors {
                    eprintln!("  - {} (at {})", err, err.location());
                }
                Ok(ExitCode::FAILURE)
            }
        }
        Mode::Inspect => {
            run_inspector(source)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("monkey-front");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            return ExitCode::FAILURE;
        }
    };

    match run(options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

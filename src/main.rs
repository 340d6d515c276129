use std::{fs, io, process::ExitCode};

use clap::Parser;
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, ExampleHighlighter, IdeMenu,
    KeyCode, KeyModifiers, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use waixg::{
    Session,
    error::Error,
    interpreter::evaluator::{
        core::{DEFAULT_MAX_DEPTH, EvalConfig},
        function::builtin::STANDARD_BUILTINS,
    },
};

const KEYWORDS: &[&str] = &["fn", "let", "true", "false", "if", "else", "return"];

/// waixg is a small, expression-oriented scripting language with integers,
/// booleans, strings and first-class closures.
///
/// Without a script, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells waixg to read `contents` as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not print the value of the script.
    #[arg(short, long)]
    quiet: bool,

    contents: Option<String>,
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, e.g.
/// `RUST_LOG=waixg=trace`. Nothing is installed when the variable is unset.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let config = EvalConfig { max_depth: args.max_depth };

    let Some(contents) = args.contents else {
        return match repl(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        let Ok(script) = fs::read_to_string(&contents) else {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        script
    } else {
        contents
    };

    match Session::with_config(config).run(&script) {
        Ok(value) => {
            if !args.quiet {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Builds the line editor: keywords and builtin names are highlighted and
/// offered as Tab completions.
fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let words: Vec<String> = KEYWORDS.iter()
                                     .copied()
                                     .chain(STANDARD_BUILTINS.iter().map(|builtin| builtin.name))
                                     .map(String::from)
                                     .collect();

    let mut completer = DefaultCompleter::with_inclusions(&['_']);
    completer.insert(words.clone());

    let completion_menu = IdeMenu::default().with_name("completion_menu")
                                            .with_min_completion_width(0)
                                            .with_max_completion_width(50)
                                            .with_padding(0)
                                            .with_description_mode(DescriptionMode::PreferRight);

    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(KeyModifiers::NONE,
                            KeyCode::Tab,
                            ReedlineEvent::UntilFound(vec![ReedlineEvent::Menu("completion_menu".to_string()),
                                                           ReedlineEvent::MenuNext]));

    let line_editor = Reedline::create().with_highlighter(Box::new(ExampleHighlighter::new(words)))
                                        .with_completer(Box::new(completer))
                                        .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
                                        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic(String::from("waixg")),
                                    DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

/// Reads lines from the terminal and evaluates each in one session until
/// Ctrl+D or Ctrl+C.
fn repl(config: EvalConfig) -> io::Result<()> {
    let user = std::env::var("USER").unwrap_or_else(|_| String::from("there"));
    println!("Hello {user}! This is the waixg programming language!");
    println!("Feel free to type in commands");

    let (mut line_editor, prompt) = setup_reedline();
    let mut session = Session::with_config(config);

    loop {
        match line_editor.read_line(&prompt)? {
            Signal::Success(line) => match session.run(&line) {
                Ok(value) => println!("{value}"),
                Err(Error::Parse(errors)) => {
                    for error in errors {
                        println!("\t{error}");
                    }
                },
                Err(Error::Runtime(error)) => println!("ERROR: {error}"),
            },
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            },
        }
    }
}

mod highlighter;

use clap::{Parser, ValueEnum};
use intlang::{EvaluatorOptions, Grammar, evaluate_with_options, render_error, render_result};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, Emacs, IdeMenu, KeyCode, KeyModifiers,
    Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use std::io::{BufRead, BufReader, Write};

use crate::highlighter::Highlighter;

const KEYWORDS: &[&str] = &["integer", "print", "while", "do", "if", "else"];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GrammarArg {
    /// Declarations, loops and conditionals
    Full,
    /// Assignment and print only, flat precedence
    Reduced,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Full => Grammar::Full,
            GrammarArg::Reduced => Grammar::Reduced,
        }
    }
}

/// intlang - evaluate one tiny integer program per line
#[derive(Parser, Debug)]
#[command(name = "intlang")]
#[command(about = "Evaluate intlang programs, one per line", long_about = None)]
struct Args {
    /// Language configuration
    #[arg(long, value_enum, default_value = "full")]
    grammar: GrammarArg,

    /// Explain syntax errors on stderr
    #[arg(long)]
    explain: bool,

    /// Maximum nesting of parentheses and blocks
    #[arg(long)]
    max_depth: Option<usize>,

    /// Program to evaluate (if not provided, reads lines from stdin)
    program: Option<String>,
}

impl Args {
    fn options(&self) -> EvaluatorOptions {
        let mut options = EvaluatorOptions::new(self.grammar.into());
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        options
    }
}

/// Whether `line` ends the input.
///
/// The full grammar stops only on a truly empty line; the reduced one also
/// stops on a line holding nothing but whitespace.
fn is_end_of_input(grammar: Grammar, line: &str) -> bool {
    match grammar {
        Grammar::Full => line.is_empty(),
        Grammar::Reduced => line.trim().is_empty(),
    }
}

fn interpret_line(
    out: &mut impl Write,
    options: &EvaluatorOptions,
    line: &str,
    explain: bool,
) -> Result<()> {
    let result = evaluate_with_options(line, options);

    if let (Err(err), true) = (&result, explain) {
        render_error(line, err);
    }
    if let Some(rendered) = render_result(&result) {
        writeln!(out, "{rendered}").into_diagnostic()?;
    }
    Ok(())
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline(grammar: Grammar) -> (Reedline, DefaultPrompt) {
    let keywords: Vec<String> = KEYWORDS.iter().map(|k| k.to_string()).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&[]);
        completions.insert(keywords);
        completions
    });

    let completion_menu = Box::new(IdeMenu::default().with_name("completion_menu"));

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter::new(grammar)))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("intlang".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level, default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = args.options();
    tracing::debug!(?options, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Check if we have a direct program argument
    if let Some(program) = &args.program {
        return interpret_line(&mut out, &options, program, args.explain);
    }

    if atty::is(atty::Stream::Stdin) {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(options.grammar);

        writeln!(
            out,
            "intlang REPL - one program per line (empty line, Ctrl+D or Ctrl+C to exit)"
        )
        .into_diagnostic()?;

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;
            match sig {
                Signal::Success(buffer) => {
                    if is_end_of_input(options.grammar, &buffer) {
                        return Ok(());
                    }
                    interpret_line(&mut out, &options, &buffer, args.explain)?;
                    out.flush().into_diagnostic()?;
                }
                Signal::CtrlD | Signal::CtrlC => {
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if is_end_of_input(options.grammar, &line) {
                break;
            }
            interpret_line(&mut out, &options, &line, args.explain)?;
        }
    }

    Ok(())
}

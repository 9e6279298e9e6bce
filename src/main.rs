use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use lexis::{
    display_error,
    errors::errors::Error,
    lexer::{
        grammars::{Grammar, JSON_GRAMMAR, SEXPR_GRAMMAR},
        lexer::{tokenize_with, LexerOptions},
        tokens::Token,
    },
};

const JSON_SAMPLES: [&str; 2] = [
    r#"{"nome": "Fabio", "idade": 38, "turmas": ["Compiladores 1", "Fisica para Jogos"]}"#,
    r#"[1, 2.0, 3e4, 5.0e-6, "7",  true, false, null]"#,
];

const SEXPR_SAMPLES: [&str; 1] = ["(define (square x)\n  (* x x)) ; squares a number\n(display \"done\" #t)"];

#[derive(Clone, Copy, ValueEnum)]
enum GrammarChoice {
    Json,
    Sexpr,
}

impl GrammarChoice {
    fn grammar(self) -> &'static Grammar {
        match self {
            GrammarChoice::Json => &JSON_GRAMMAR,
            GrammarChoice::Sexpr => &SEXPR_GRAMMAR,
        }
    }

    fn samples(self) -> &'static [&'static str] {
        match self {
            GrammarChoice::Json => &JSON_SAMPLES,
            GrammarChoice::Sexpr => &SEXPR_SAMPLES,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Tokenize structured literals or s-expressions")]
struct Cli {
    /// Grammar used to scan the input
    #[arg(short, long, value_enum, default_value = "json")]
    grammar: GrammarChoice,
    /// Reject inputs longer than this many bytes
    #[arg(long)]
    max_len: Option<usize>,
    /// Print how long each scan took
    #[arg(long)]
    timings: bool,
    /// Files to tokenize (`-` reads stdin); the built-in samples are used when empty
    files: Vec<PathBuf>,
}

enum Source {
    Sample(&'static str),
    File(PathBuf),
    Stdin,
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Sample(_) => String::from("<sample>"),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => String::from("<stdin>"),
        }
    }

    fn read(&self) -> io::Result<String> {
        match self {
            Source::Sample(text) => Ok(text.to_string()),
            Source::File(path) => fs::read_to_string(path),
            Source::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("    {}", token);
    }
}

fn run(source: &Source, grammar: &Grammar, options: &LexerOptions, timings: bool) -> Result<(), ()> {
    let label = source.label();
    let text = source.read().map_err(|err| eprintln!("Error: could not read {}: {}", label, err))?;

    if let Source::Sample(_) = source {
        println!("{}", text);
    } else {
        println!("{}:", label);
    }

    let start = Instant::now();
    let result: Result<Vec<Token>, Error> = tokenize_with(&text, grammar, options);

    match result {
        Ok(tokens) => {
            print_tokens(&tokens);
            if timings {
                println!("Tokenized in {:?}", start.elapsed());
            }
            println!();
            Ok(())
        }
        Err(error) => {
            eprint!("{}", display_error(&error, &text, &label));
            Err(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let grammar = cli.grammar.grammar();
    let options = LexerOptions { max_input_len: cli.max_len };

    let sources: Vec<Source> = if cli.files.is_empty() {
        cli.grammar.samples().iter().map(|text| Source::Sample(*text)).collect()
    } else {
        cli.files
            .into_iter()
            .map(|path| if path.as_os_str() == "-" { Source::Stdin } else { Source::File(path) })
            .collect()
    };

    let mut failed = false;
    for source in &sources {
        failed |= run(source, grammar, &options, cli.timings).is_err();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

mod debug_report;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sentrie::{DateFormat, FieldSummary, LayerConfig, Options, Quoting, summarize, tokenize, tokenize_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let summary = run(&config);
    debug_report::print_fields(&config.input, config.kind.name(), &summary, config.color);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    String,
    Int,
    Float,
    Bool,
    Date,
    Time,
    DateTime,
}

impl Kind {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "string" | "str" => Ok(Kind::String),
            "int" => Ok(Kind::Int),
            "float" => Ok(Kind::Float),
            "bool" => Ok(Kind::Bool),
            "date" => Ok(Kind::Date),
            "time" => Ok(Kind::Time),
            "datetime" => Ok(Kind::DateTime),
            _ => Err(format!("error: unknown --type '{value}'")),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Date => "date",
            Kind::Time => "time",
            Kind::DateTime => "datetime",
        }
    }
}

struct CliConfig {
    input: String,
    options: Options,
    kind: Kind,
    format: Option<DateFormat>,
    color: bool,
}

fn run(config: &CliConfig) -> Vec<FieldSummary> {
    let input = config.input.trim_end_matches(['\n', '\r']).as_bytes();
    let opts = &config.options;
    let len = input.len();

    match (config.kind, &config.format) {
        (Kind::String, _) => summarize(&tokenize::<String>(input, opts), len),
        (Kind::Int, _) => summarize(&tokenize::<i64>(input, opts), len),
        (Kind::Float, _) => summarize(&tokenize::<f64>(input, opts), len),
        (Kind::Bool, _) => summarize(&tokenize::<bool>(input, opts), len),
        (Kind::Date, Some(fmt)) => summarize(&tokenize_with::<NaiveDate>(input, opts, fmt), len),
        (Kind::Date, None) => summarize(&tokenize::<NaiveDate>(input, opts), len),
        (Kind::Time, Some(fmt)) => summarize(&tokenize_with::<NaiveTime>(input, opts, fmt), len),
        (Kind::Time, None) => summarize(&tokenize::<NaiveTime>(input, opts), len),
        (Kind::DateTime, Some(fmt)) => summarize(&tokenize_with::<NaiveDateTime>(input, opts, fmt), len),
        (Kind::DateTime, None) => summarize(&tokenize::<NaiveDateTime>(input, opts), len),
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut delimiters: Vec<String> = Vec::new();
    let mut sentinels: Vec<String> = Vec::new();
    let mut quote: Option<u8> = None;
    let mut escape: Option<u8> = None;
    let mut collapse = false;
    let mut strip = false;
    let mut ignore_case = false;
    let mut kind = Kind::String;
    let mut format: Option<DateFormat> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("sentrie {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--collapse" => collapse = true,
            "--strip" => strip = true,
            "--ignore-case" => ignore_case = true,
            "-d" | "--delim" => delimiters.push(expect_value(&mut args, "--delim")?),
            "-s" | "--sentinel" => sentinels.push(expect_value(&mut args, "--sentinel")?),
            "-q" | "--quote" => quote = Some(single_byte(&expect_value(&mut args, "--quote")?, "--quote")?),
            "--escape" => escape = Some(single_byte(&expect_value(&mut args, "--escape")?, "--escape")?),
            "-t" | "--type" => kind = Kind::parse(&expect_value(&mut args, "--type")?)?,
            "-f" | "--format" => {
                let spec = expect_value(&mut args, "--format")?;
                format = Some(DateFormat::new(&spec).map_err(|err| format!("error: invalid --format: {err}"))?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let mut layers = LayerConfig::new().collapse_delimiters(collapse).strip_whitespace(strip).ignore_case(ignore_case);
    if !delimiters.is_empty() {
        layers = layers.delimiters(&delimiters);
    }
    if !sentinels.is_empty() {
        layers = layers.sentinels(&sentinels);
    }
    if let Some(q) = quote {
        let quoting = Quoting::new(q);
        layers = layers.quoting(escape.map_or(quoting, |e| quoting.with_escape(e)));
    }

    Ok(CliConfig { input, options: Options::from(layers), kind, format, color })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn single_byte(value: &str, flag: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [b] => Ok(*b),
        _ => Err(format!("error: {flag} expects a single ASCII character")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "sentrie {version}

Split one row of delimited text into typed fields and report each field's status.

Usage:
  sentrie [OPTIONS] [--] <input...>

Options:
  -d, --delim <s>            Field delimiter (repeatable). Default: none, the
                             row is a single field.
  --collapse                 Treat runs of delimiters as one.
  -q, --quote <c>            Quote character.
  --escape <c>               Escape character inside quotes. Default: the quote.
  --strip                    Trim spaces and tabs around fields.
  -s, --sentinel <s>         Sentinel string marking a missing value (repeatable).
                             Pass an empty string to treat empty fields as missing.
  --ignore-case              Match sentinels case-insensitively.
  -t, --type <kind>          string | int | float | bool | date | time | datetime.
                             Default: string
  -f, --format <spec>        Date/time format, e.g. yyyy-mm-dd or %d.%m.%Y.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  SENTRIE_DEBUG=1            Print conversion traces to stderr.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use flutter_rn_skill::logging::{init_logging, LoggingConfig};
use flutter_rn_skill::{handle_json, run, SkillOptions, SkillRequest};

/// Convert a Flutter widget expression to React Native JSX.
#[derive(Debug, Parser)]
#[command(name = "flutter-rn", version, about)]
struct Cli {
    /// Source file; reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Treat the input as a JSON skill request and print the JSON response.
    #[arg(long)]
    json: bool,

    /// Prepend React / React Native imports.
    #[arg(long)]
    include_imports: bool,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = flutter_rn_skill::indent::DEFAULT_INDENT)]
    indent_size: usize,

    /// Print the supported widgets and what each becomes, then exit.
    #[arg(long)]
    list_widgets: bool,

    /// Log filter, e.g. `debug` or `flutter_rn_core=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_filter(cli.log.clone()));

    if cli.list_widgets {
        io::stdout()
            .lock()
            .write_all(flutter_rn_core::widget_reference().as_bytes())
            .context("writing widget list")?;
        return Ok(());
    }

    let source = read_input(cli.input.as_ref())?;
    let mut stdout = io::stdout().lock();

    if cli.json {
        let reply = handle_json(&source);
        writeln!(stdout, "{}", reply).context("writing response")?;
        return Ok(());
    }

    let request = SkillRequest {
        flutter_code: source.trim().to_string(),
        options: SkillOptions { include_imports: cli.include_imports, indent_size: cli.indent_size },
    };
    if request.flutter_code.is_empty() {
        bail!("{}", flutter_rn_skill::request::CODE_EMPTY);
    }

    // Unknown-widget warnings already reach stderr through the logger.
    let response = run(&request);
    match response.output {
        Some(output) if response.success => {
            stdout.write_all(output.as_bytes()).context("writing output")?;
            Ok(())
        }
        _ => bail!("{}", response.error.unwrap_or_else(|| "conversion failed".into())),
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use zmadmin_wire::config::cli::{read_input, Command, CliConfig};
use zmadmin_wire::core::registry;
use zmadmin_wire::utils::{logger, validation::Validate};
use zmadmin_wire::{TomlConfig, WireFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => TomlConfig::default(),
    };

    let level = if cli.verbose { "debug" } else { settings.logging.level.as_str() };
    logger::init_logger(level, settings.logging.json);
    tracing::debug!("CLI config: {:?}", cli);

    settings.validate().context("invalid settings file")?;
    cli.validate().context("invalid arguments")?;

    match cli.command {
        Command::Convert {
            input,
            to,
            type_name,
            raw,
            pretty,
            indent,
            strict,
            output,
        } => {
            let mut converter = settings.converter();
            converter.pretty |= pretty;
            converter.strict |= strict;
            if let Some(indent) = indent {
                converter.indent = indent;
            }

            let text = read_input(input.as_deref())?;
            let from = WireFormat::detect(&text)?;
            let to = to.or(settings.output.format).unwrap_or(match from {
                WireFormat::Xml => WireFormat::Json,
                WireFormat::Json => WireFormat::Xml,
            });

            let converted = match (&type_name, raw) {
                (Some(name), _) => converter.convert(&text, to, Some(registry::find(name)?))?,
                (None, true) => converter.convert(&text, to, None)?,
                (None, false) => converter.convert_detected(&text, to)?,
            };

            let target = output.or_else(|| {
                settings
                    .output_directory()
                    .map(|dir| dir.join(output_name(input.as_deref(), to)))
            });
            match target {
                Some(path) => {
                    write_output(&path, &converted)?;
                    tracing::info!("Wrote {} to {}", to, path.display());
                }
                None => println!("{converted}"),
            }
        }
        Command::Check {
            input,
            type_name,
            strict,
        } => {
            let converter = settings.converter().with_strict(settings.schema.strict || strict);
            let text = read_input(input.as_deref())?;
            let ty = match type_name {
                Some(name) => registry::find(&name)?,
                None => {
                    let (_, root) = converter.parse(&text)?;
                    match registry::for_root(&root) {
                        Some(ty) => ty,
                        None => bail!("no registered message for <{}>, pass --type", root.name()),
                    }
                }
            };

            let report = converter.check(&text, ty)?;
            for finding in &report.findings {
                println!("{finding}");
            }
            if let Some(error) = &report.decode_error {
                println!("error: {error}");
            }
            if !report.passed() {
                bail!("{} check failed", ty.name);
            }
            println!("ok: {} ({})", ty.name, report.format);
        }
        Command::Describe { name } => match name {
            Some(name) => print!("{}", registry::find(&name)?.describe()),
            None => {
                for ty in registry::all() {
                    let marker = if ty.is_message() { "message" } else { "type" };
                    println!("{:<8} {:<28} <{}>", marker, ty.name, ty.element);
                }
            }
        },
        Command::Lookup { vocabulary, value } => match vocabulary.lookup(&value) {
            Ok(canonical) => println!("{canonical}"),
            Err(e) => {
                eprintln!("{e}");
                eprintln!("valid values: {}", vocabulary.values().join(", "));
                std::process::exit(2);
            }
        },
    }

    Ok(())
}

fn output_name(input: Option<&Path>, format: WireFormat) -> PathBuf {
    let stem = input
        .filter(|path| *path != Path::new("-"))
        .and_then(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string());
    PathBuf::from(format!("{stem}.{}", format.extension()))
}

fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

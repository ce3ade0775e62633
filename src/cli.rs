//! Minimal CLI: relaxed JSON → TypeScript declarations
use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser};
use colored::Colorize;
use rayon::prelude::*;
use tracing::{debug, info};

use json_to_ts::{InferError, InferOptions, infer_type_with};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer TypeScript type declarations from sample JSON / JSON5 documents
#[derive(Parser, Debug)]
#[command(name = "json-to-ts", version)]
pub struct CommandLineInterface {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// Zero or more inputs. May be literal paths or quoted glob patterns; '-' or nothing reads stdin
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// name of the declaration describing the whole document
    #[arg(long, default_value = "ResponseData")]
    root_type: String,

    /// spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// suffix colliding hoisted type names (User, User2) instead of repeating them
    #[arg(long, default_value_t = false)]
    unique_names: bool,
}

/// Where one document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Stdin,
    File(PathBuf),
}

/// One document to infer from.
#[derive(Debug)]
struct Source {
    label: String,
    text: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Inputs in command-line order; `-` stands for stdin in place.
    fn origins(&self) -> Result<Vec<Origin>> {
        if self.input.is_empty() {
            return Ok(vec![Origin::Stdin]);
        }
        if self.input.iter().filter(|x| *x == "-").count() > 1 {
            bail!("stdin ('-') can only be given once");
        }
        let mut origins = Vec::new();
        for raw in &self.input {
            if raw == "-" {
                origins.push(Origin::Stdin);
            } else {
                origins.extend(resolve_file_path_patterns([raw])?.into_iter().map(Origin::File));
            }
        }
        Ok(origins)
    }

    fn load_sources(&self) -> Result<Vec<Source>> {
        self.origins()?
            .into_iter()
            .map(|origin| match origin {
                Origin::Stdin => {
                    let mut text = String::new();
                    std::io::stdin()
                        .read_to_string(&mut text)
                        .context("failed to read stdin")?;
                    Ok(Source { label: String::from("<stdin>"), text })
                }
                Origin::File(source_path) => {
                    let label = source_path.to_string_lossy().to_string();
                    let text = std::fs::read_to_string(&source_path)
                        .with_context(|| format!("failed to read source file {label}"))?;
                    Ok(Source { label, text })
                }
            })
            .collect()
    }
}

impl OutputSettings {
    fn to_options(&self, pointer: Option<String>) -> InferOptions {
        InferOptions {
            root_name: self.root_type.clone(),
            indent_width: self.indent,
            unique_names: self.unique_names,
            pointer,
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Returns `Ok(false)` when at least one document failed; the others are
    /// still written.
    pub fn run(&self) -> Result<bool> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(true)
        }

        let options = self.output_settings.to_options(self.input_settings.json_pointer.clone());
        let sources = self.input_settings.load_sources()?;
        debug!(count = sources.len(), "loaded sources");

        let results: Vec<(&str, Result<String, InferError>)> = sources
            .par_iter()
            .map(|source| (source.label.as_str(), infer_type_with(&source.text, &options)))
            .collect();

        let labelled = results.len() > 1;
        let mut rendered = String::new();
        let mut failures = 0usize;
        for (label, result) in results {
            match result {
                Ok(src) => {
                    if labelled {
                        if !rendered.is_empty() {
                            rendered.push('\n');
                        }
                        writeln!(rendered, "// {label}")?;
                    }
                    rendered.push_str(&src);
                }
                Err(error) => {
                    failures += 1;
                    eprintln!("{} {label}: {error}", "error:".red().bold());
                }
            }
        }

        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, &rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), "wrote declarations");
        } else {
            print!("{rendered}");
        }
        Ok(failures == 0)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))? {
                out.push(entry?);
            }
            if out.len() == before {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let cli = CommandLineInterface::try_parse_from([
            "json-to-ts", "--root-type", "Payload", "--indent", "4", "--unique-names",
            "--json-pointer", "/data", "a.json",
        ]).unwrap();
        let options = cli.output_settings.to_options(cli.input_settings.json_pointer.clone());
        assert_eq!(options, InferOptions {
            root_name: "Payload".into(),
            indent_width: 4,
            unique_names: true,
            pointer: Some("/data".into()),
        });
        assert_eq!(cli.input_settings.input, ["a.json"]);
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli = CommandLineInterface::try_parse_from(["json-to-ts"]).unwrap();
        assert_eq!(cli.output_settings.to_options(None), InferOptions::default());
    }

    #[test]
    fn literal_paths_pass_through() {
        let paths = resolve_file_path_patterns(["a.json", "dir/b.json5"]).unwrap();
        assert_eq!(paths, [PathBuf::from("a.json"), PathBuf::from("dir/b.json5")]);
    }

    fn origins_of(args: &[&str]) -> Result<Vec<Origin>> {
        let cli = CommandLineInterface::try_parse_from(
            std::iter::once("json-to-ts").chain(args.iter().copied()),
        )?;
        cli.input_settings.origins()
    }

    #[test]
    fn stdin_is_read_in_place_of_dash() {
        assert_eq!(origins_of(&[]).unwrap(), [Origin::Stdin]);
        assert_eq!(origins_of(&["-"]).unwrap(), [Origin::Stdin]);
        assert_eq!(origins_of(&["a.json", "-", "b.json5"]).unwrap(), [
            Origin::File(PathBuf::from("a.json")),
            Origin::Stdin,
            Origin::File(PathBuf::from("b.json5")),
        ]);
        assert!(origins_of(&["-", "-"]).is_err());
    }

    #[test]
    fn empty_glob_is_an_error() {
        assert!(resolve_file_path_patterns(["/definitely/not/here/*.json"]).is_err());
    }
}

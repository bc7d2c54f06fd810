//! Export fragment dumps to plain-text transcripts.
//!
//! Reads one fragment dump (a JSON array of pages, as produced by a layout
//! extractor) or a directory of dumps, reconstructs paragraphs, and writes a
//! `.txt` file next to each input.
//!
//! Usage:
//!   export_transcript <path> [--line-numbers] [--qa-tags] [--no-page-markers]
//!                     [--date] [--bottom-margin <units>]

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use transcript_oxide::converters::{render_transcript, RenderOptions};
use transcript_oxide::layout::Page;
use transcript_oxide::{extract_paragraphs, MinerConfig};

struct ExportConfig {
    path: PathBuf,
    miner: MinerConfig,
    options: RenderOptions,
}

impl ExportConfig {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut path: Option<PathBuf> = None;
        let mut miner = MinerConfig::default();
        let mut options = RenderOptions::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--line-numbers" => {
                    options = options.with_line_numbers(true);
                },
                "--qa-tags" => {
                    options = options.with_question_answer_tag(true);
                },
                "--no-page-markers" => {
                    options = options.with_page_markers(false);
                },
                "--date" => {
                    options = options.with_date_on_page_markers(true);
                },
                "--bottom-margin" => {
                    i += 1;
                    let margin = args.get(i).and_then(|v| v.parse::<f32>().ok())?;
                    miner = miner.with_bottom_margin(margin);
                },
                other if path.is_none() => {
                    path = Some(PathBuf::from(other));
                },
                _ => return None,
            }
            i += 1;
        }

        Some(Self {
            path: path?,
            miner,
            options,
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(config) = ExportConfig::from_args() else {
        eprintln!(
            "usage: export_transcript <path> [--line-numbers] [--qa-tags] \
             [--no-page-markers] [--date] [--bottom-margin <units>]"
        );
        return ExitCode::FAILURE;
    };

    let dumps = if config.path.is_dir() {
        discover_dumps(&config.path)
    } else {
        vec![config.path.clone()]
    };

    if dumps.is_empty() {
        eprintln!("no fragment dumps found under {}", config.path.display());
        return ExitCode::FAILURE;
    }

    // One malformed document must not abort the batch.
    let mut failures = 0;
    for dump in &dumps {
        match convert_file(dump, &config.miner, &config.options) {
            Ok(paragraphs) => {
                println!("{}: {} paragraphs", dump.display(), paragraphs);
            },
            Err(err) => {
                log::error!("unable to process {}: {}", dump.display(), err);
                eprintln!("error: {}: {}", dump.display(), err);
                failures += 1;
            },
        }
    }

    if failures == dumps.len() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn discover_dumps(dir: &Path) -> Vec<PathBuf> {
    let mut dumps = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("error reading {}: {}", dir.display(), err);
            return dumps;
        },
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            dumps.extend(discover_dumps(&path));
        } else if path.extension().is_some_and(|ext| ext == "json") {
            dumps.push(path);
        }
    }

    dumps.sort();
    dumps
}

fn convert_file(
    path: &Path,
    miner: &MinerConfig,
    options: &RenderOptions,
) -> transcript_oxide::Result<usize> {
    log::info!("processing {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let pages: Vec<Page> = serde_json::from_reader(reader)?;

    let transcript = extract_paragraphs(&pages, miner)?;

    let out_path = path.with_extension("txt");
    let mut out = BufWriter::new(File::create(&out_path)?);
    out.write_all(render_transcript(&transcript, options).as_bytes())?;
    out.flush()?;

    Ok(transcript.paragraphs.len())
}

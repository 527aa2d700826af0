use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use smap_mappings::{ParseOutcome, Rejection, SegmentShape, parse_mappings, unescape};
use smap_vlq::{decode, encode, is_canonical};
use tracing::{info, info_span, warn};

use smap_cli::output::{
    NO_MAPPINGS_MESSAGE, build_table, rejection_to_json, summary_line, to_json, write_csv,
};
use smap_cli::view::{DisplayMode, StartOffsets};

use crate::cli::{DecodeArgs, EncodeArgs, MappingsArgs, OffsetArgs, OutputFormatArg};

/// Decode a mappings string and print it. Returns false when the input was
/// rejected as a whole.
pub fn run_mappings(args: &MappingsArgs) -> Result<bool> {
    let input = read_input(args)?;
    let span = info_span!("mappings", bytes = input.len());
    let _guard = span.enter();

    let set = match parse_mappings(&input) {
        ParseOutcome::Mappings(set) => set,
        ParseOutcome::NoMappings(rejection) => {
            match rejection {
                Rejection::Empty => warn!("no mappings input"),
                Rejection::InvalidCharacter { character, offset } => {
                    warn!(%character, offset, "input is not a mappings string");
                }
            }
            match args.format {
                OutputFormatArg::Table => println!("{NO_MAPPINGS_MESSAGE}"),
                OutputFormatArg::Json => println!("{}", rejection_to_json(&rejection)?),
                OutputFormatArg::Csv => eprintln!("{NO_MAPPINGS_MESSAGE}"),
            }
            return Ok(false);
        }
    };
    let invalid = set.invalid_count();
    info!(
        records = set.len(),
        lines = set.line_count,
        invalid,
        "decoded mappings"
    );
    if invalid > 0 {
        warn!(invalid, "mappings contain invalid segments");
    }

    let mode = if args.delta {
        DisplayMode::Delta
    } else {
        DisplayMode::Absolute
    };
    let offsets = start_offsets(args.offsets);
    match args.format {
        OutputFormatArg::Table => {
            println!("{}", summary_line(&set));
            if !set.is_empty() {
                println!("{}", build_table(&set, mode, &offsets));
            }
        }
        OutputFormatArg::Json => println!("{}", to_json(&set)?),
        OutputFormatArg::Csv => write_csv(io::stdout().lock(), &set, mode, &offsets)?,
    }
    Ok(true)
}

/// Decode one segment. Returns true if it is a valid, canonical segment.
pub fn run_decode(args: &DecodeArgs) -> Result<bool> {
    let segment = unescape(args.segment.trim());
    let values =
        decode(&segment).with_context(|| format!("decode segment {:?}", &*segment))?;
    let shape = SegmentShape::from_len(values.len());
    let canonical = is_canonical(&segment, &values);
    info!(segment = %segment, ?shape, canonical, "decoded segment");

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("values: [{}]", rendered.join(", "));
    println!("shape: {shape}");
    if canonical {
        println!("canonical: yes");
    } else {
        println!("canonical: no (expected {:?})", encode(&values));
    }
    Ok(canonical && shape.is_supported())
}

pub fn run_encode(args: &EncodeArgs) {
    let segment = encode(&args.values);
    info!(values = args.values.len(), %segment, "encoded segment");
    println!("{segment}");
}

fn read_input(args: &MappingsArgs) -> Result<String> {
    let raw = if let Some(mappings) = &args.mappings {
        mappings.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read mappings from stdin")?;
        buf
    };
    Ok(raw.trim().to_string())
}

fn start_offsets(args: OffsetArgs) -> StartOffsets {
    StartOffsets {
        generated_line: args.generated_line,
        generated_column: args.generated_column,
        original_line: args.original_line,
        original_column: args.original_column,
    }
}

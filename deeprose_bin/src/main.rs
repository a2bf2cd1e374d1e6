use crate::args::Args;
use crate::util::{manifest_find_read_parse, ErrorExit, FoundManifest};
use clap::Parser;
use deeprose_std::embed::{check, embed_with_settings, header_path, CheckOutcome, EmbedStats};
use deeprose_std::settings::EmbedSettings;
use deeprose_util::constants::STDLIB_DEFAULT_INPUT;
use std::path::PathBuf;
use std::process::ExitCode;

mod args;
mod util;

fn main() -> ExitCode {
    let args = Args::parse();
    match main_inner(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ErrorExit) => ExitCode::FAILURE,
    }
}

fn main_inner(args: Args) -> Result<(), ErrorExit> {
    // interpret args
    let Args {
        output_dir,
        input,
        manifest,
        format,
        newlines,
        check: check_only,
        verbose,
    } = args;

    // combine manifest and command line, the command line wins
    let manifest = manifest_find_read_parse(manifest)?;
    let (manifest_input, mut settings) = match &manifest {
        None => (None, EmbedSettings::default()),
        Some(FoundManifest {
            path,
            path_parent,
            parsed,
        }) => {
            if verbose {
                eprintln!("Using manifest {}", path.display());
            }
            (parsed.embed.input_path(path_parent), parsed.embed.settings())
        }
    };
    if let Some(format) = format {
        settings.format = format.into();
    }
    if let Some(newlines) = newlines {
        settings.newlines = newlines.into();
    }
    let input = input
        .or(manifest_input)
        .unwrap_or_else(|| PathBuf::from(STDLIB_DEFAULT_INPUT));

    if check_only {
        let outcome = check(&input, &output_dir, &settings).map_err(|e| {
            eprintln!("Error: {e}");
            ErrorExit
        })?;

        let output_path = header_path(&output_dir);
        match outcome {
            CheckOutcome::UpToDate => {
                if verbose {
                    eprintln!("{}: up to date", output_path.display());
                }
                Ok(())
            }
            CheckOutcome::Differs => {
                eprintln!("{}: out of date, rerun without --check", output_path.display());
                Err(ErrorExit)
            }
            CheckOutcome::Missing => {
                eprintln!("{}: missing, rerun without --check", output_path.display());
                Err(ErrorExit)
            }
        }
    } else {
        let stats = embed_with_settings(&input, &output_dir, &settings).map_err(|e| {
            eprintln!("Error: {e}");
            ErrorExit
        })?;

        if verbose {
            eprintln!("{}", stats_message(&input, &stats));
        }
        Ok(())
    }
}

fn stats_message(input: &std::path::Path, stats: &EmbedStats) -> String {
    let &EmbedStats {
        ref output_path,
        input_bytes,
        output_bytes,
        escaped_bytes,
        stripped_bytes,
    } = stats;

    let mut msg = format!(
        "Embedded {} into {}: {input_bytes} byte{} in, {output_bytes} bytes out, {escaped_bytes} escaped",
        input.display(),
        output_path.display(),
        if input_bytes == 1 { "" } else { "s" },
    );
    if stripped_bytes > 0 {
        msg.push_str(&format!(", {stripped_bytes} comment bytes stripped"));
    }
    msg
}

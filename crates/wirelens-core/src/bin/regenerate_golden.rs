use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wirelens_core::{MessageFamily, Normalizer, NullSink};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.bin");
        if !input.exists() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let family = family_for_dir(&name)
            .ok_or_else(|| format!("no message family matches golden dir {name}"))?;
        let output = path.join("expected.json");
        regenerate_one(family, &input, &output)?;
    }

    Ok(())
}

/// Golden dirs are named after their family, optionally with a `_<case>` suffix.
fn family_for_dir(name: &str) -> Option<MessageFamily> {
    MessageFamily::ALL
        .into_iter()
        .filter(|family| {
            name == family.name()
                || name
                    .strip_prefix(family.name())
                    .is_some_and(|rest| rest.starts_with('_'))
        })
        .max_by_key(|family| family.name().len())
}

fn regenerate_one(family: MessageFamily, input: &Path, output: &Path) -> Result<(), String> {
    let payload =
        fs::read(input).map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let record = Normalizer::with_sink(NullSink)
        .decode(family, &payload)
        .ok_or_else(|| format!("{} does not decode as {}", input.display(), family))?;
    let json = serde_json::to_string_pretty(&record)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json + "\n")
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}

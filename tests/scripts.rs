use std::{fs, path::Path};

use kirlang::{interpreter::console::BufferConsole, run_file};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Every `scripts/*.kir` program is run with the lines of its `.in` file as
/// console input. Its output must equal the `.out` file; if an `.err` file
/// exists, the run must fail with that message.
#[test]
fn bundled_scripts_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "kir"))
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in scripts/");
}

fn check_script(path: &Path) {
    let input = read_optional(&path.with_extension("in")).map(|text| {
                                                             text.lines()
                                                                 .map(str::to_string)
                                                                 .collect::<Vec<_>>()
                                                         })
                                                         .unwrap_or_default();
    let expected_output = read_optional(&path.with_extension("out"))
        .unwrap_or_else(|| panic!("Missing expected output for {}", path.display()));
    let expected_error = read_optional(&path.with_extension("err"));

    let mut console = BufferConsole::with_input(input);
    let result = run_file(path, &mut console);

    assert_eq!(console.output(),
               expected_output,
               "output of {}",
               path.display());

    match (result, expected_error) {
        (Ok(()), None) => {},
        (Err(e), Some(expected)) => {
            assert_eq!(e.to_string(), expected.trim_end(), "error of {}", path.display());
        },
        (Ok(()), Some(expected)) => {
            panic!("{} succeeded but was expected to fail with: {expected}",
                   path.display())
        },
        (Err(e), None) => panic!("{} failed: {e}", path.display()),
    }
}

fn read_optional(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    Some(fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}")))
}

#[test]
fn missing_files_are_source_errors() {
    let mut console = BufferConsole::new();
    let result = run_file(Path::new("scripts/does_not_exist.kir"), &mut console);

    assert!(matches!(result, Err(kirlang::error::Error::Source(_))));
}

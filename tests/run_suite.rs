mod common;

use std::path::PathBuf;
use std::process::Output;

use common::command;
use regex::Regex;
use test_generator::test_resources;

struct Expected {
    args: Vec<String>,
    out: Vec<String>,
    scan_err: Vec<String>,
}

#[test_resources("tests/suite/*/*.lox")]
fn scan_file_test(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = parse_comments(&path);
    let output = command()
        .args(&expected.args)
        .arg(&path)
        .output()
        .expect("Command execution error.");

    let out: Vec<String> = String::from_utf8(output.stdout.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();
    let err: Vec<String> = String::from_utf8(output.stderr.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();

    run_assertions(expected, output, out, err);
}

fn parse_comments(path: &PathBuf) -> Expected {
    let args_re = Regex::new(r"^// args: (.+)$").expect("Invalid regex.");
    let output_re = Regex::new(r"^// expect: ?(.*)$").expect("Invalid regex.");
    let error_re = Regex::new(r"^// expect error: (.+)$").expect("Invalid regex.");

    let mut expected = Expected {
        args: vec![],
        out: vec![],
        scan_err: vec![],
    };

    println!("{}", path.display());
    let bytes = std::fs::read(path).expect("Could not read path.");
    let content = String::from_utf8_lossy(&bytes);
    for line in content.lines() {
        if let Some(m) = args_re.captures(line) {
            expected
                .args
                .extend(m[1].split_whitespace().map(|arg| arg.to_owned()));
        }
        if let Some(m) = output_re.captures(line) {
            expected.out.push(m[1].to_owned());
        }
        if let Some(m) = error_re.captures(line) {
            expected.scan_err.push(m[1].to_owned());
        }
    }
    expected
}

fn run_assertions(expected: Expected, output: Output, out: Vec<String>, err: Vec<String>) {
    match expected.scan_err.is_empty() {
        true => assert!(
            output.status.success(),
            "Program exited with failure, expected success"
        ),
        false => {
            assert_eq!(
                output
                    .status
                    .code()
                    .expect("Process terminated by a signal."),
                65,
                "Scan errors should have error code 65"
            );
            assert!(out.is_empty(), "No tokens should be printed after a scan error");
        }
    }

    assert_eq!(expected.scan_err, err, "Scan error should match");
    assert_eq!(expected.out, out, "Output should match");
}

use super::args::CliArgs;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn parses_paths_and_short_flags() {
    let args = CliArgs::try_parse_from(["relaymod", "-d", "-p", "-v", "src", "a.json"]).unwrap();
    assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("a.json")]);
    assert!(args.dry);
    assert!(args.print);
    assert!(args.verbose);
    assert_eq!(args.pretty_override(), None);
}

#[test]
fn requires_at_least_one_path() {
    assert!(CliArgs::try_parse_from(["relaymod", "--dry"]).is_err());
}

#[test]
fn parses_discovery_options() {
    let args = CliArgs::try_parse_from([
        "relaymod",
        "--extensions",
        "json,estree",
        "--ignore-pattern",
        "**/generated/**",
        "--ignore-pattern",
        "*.min.json",
        "--out-dir",
        "out",
        "-c",
        "custom.json",
        ".",
    ])
    .unwrap();
    assert_eq!(
        args.extensions,
        Some(vec!["json".to_string(), "estree".to_string()])
    );
    assert_eq!(args.ignore_pattern, vec!["**/generated/**", "*.min.json"]);
    assert_eq!(args.out_dir, Some(PathBuf::from("out")));
    assert_eq!(args.config, Some(PathBuf::from("custom.json")));
}

#[test]
fn pretty_and_compact_conflict() {
    let args = CliArgs::try_parse_from(["relaymod", "--compact", "--indent", "4", "a.json"]).unwrap();
    assert_eq!(args.pretty_override(), Some(false));
    assert_eq!(args.indent, Some(4));

    let args = CliArgs::try_parse_from(["relaymod", "--pretty", "a.json"]).unwrap();
    assert_eq!(args.pretty_override(), Some(true));

    assert!(CliArgs::try_parse_from(["relaymod", "--pretty", "--compact", "a.json"]).is_err());
}

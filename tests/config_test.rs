use clap::{Args, Command, FromArgMatches};
use kbdmini::config::EmbedConfig;
use kbdmini::embed::Anchor;
use kbdmini::error::KbdMiniError;
use kbdmini::layouts::OsTarget;
use std::fs;

fn parse_cli(args: &[&str]) -> (EmbedConfig, clap::ArgMatches) {
    let cmd = EmbedConfig::augment_args(Command::new("emit"));
    let matches = cmd.try_get_matches_from(args).unwrap();
    let config = EmbedConfig::from_arg_matches(&matches).unwrap();
    (config, matches)
}

#[test]
fn test_cli_defaults_match_serde_defaults() {
    let (cli, _) = parse_cli(&["emit"]);
    assert_eq!(cli, EmbedConfig::default());
    let from_json: EmbedConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(from_json, EmbedConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embed.json");
    fs::write(
        &path,
        r#"{"os":"win","speed":2,"position":"top-left","width":300,"height":"200","draggable":true,"label":"Undo"}"#,
    )
    .unwrap();

    let config = EmbedConfig::load_from_file(&path).unwrap();
    assert_eq!(config.os_target().unwrap(), OsTarget::Win);
    assert_eq!(config.speed, 2.0);
    assert_eq!(config.width.as_deref(), Some("300"));
    assert_eq!(config.height.as_deref(), Some("200"));

    let opts = config.layout_options();
    assert_eq!(opts.position, Anchor::TopLeft);
    assert_eq!((opts.width, opts.height), (300, 200));
    assert!(opts.draggable);
    assert_eq!(opts.label, "Undo");
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EmbedConfig::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, KbdMiniError::Config(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = EmbedConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, KbdMiniError::Json(_)));
}

#[test]
fn test_cli_flags_override_file_but_defaults_do_not() {
    let mut file_config = EmbedConfig {
        os: "win".into(),
        speed: 2.0,
        label: "From file".into(),
        width: Some("400".into()),
        ..Default::default()
    };
    let (cli, matches) = parse_cli(&["emit", "--label", "From CLI", "--draggable"]);
    file_config.merge_from_cli(&cli, &matches);

    assert_eq!(file_config.label, "From CLI");
    assert!(file_config.draggable);
    // Not typed: the file wins over clap defaults.
    assert_eq!(file_config.os, "win");
    assert_eq!(file_config.speed, 2.0);
    assert_eq!(file_config.width.as_deref(), Some("400"));
}

#[test]
fn test_unknown_os_is_rejected() {
    let config = EmbedConfig {
        os: "linux".into(),
        ..Default::default()
    };
    assert!(matches!(
        config.os_target(),
        Err(KbdMiniError::UnknownPlatform(_))
    ));
}

#[test]
fn test_out_of_range_values_are_clamped_not_rejected() {
    let (cli, _) = parse_cli(&["emit", "--width", "5000", "--height", "tall", "--position", "nowhere"]);
    let opts = cli.layout_options();
    assert_eq!(opts.width, 520);
    assert_eq!(opts.height, 260);
    assert_eq!(opts.position, Anchor::BottomLeft);
}

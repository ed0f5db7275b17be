use crate::cli::Cli;

use clap::Parser;

#[test]
fn test_submit_with_coordinates_parses() {
    let result = Cli::try_parse_from([
        "civic",
        "report",
        "submit",
        "--title",
        "Illegal dumping",
        "--description",
        "Bags by the canal",
        "--lat",
        "30.1",
        "--lng",
        "69.2",
    ]);
    assert!(result.is_ok());
}

#[test]
fn test_submit_rejects_two_location_producers() {
    let result = Cli::try_parse_from([
        "civic",
        "report",
        "submit",
        "--title",
        "t",
        "--description",
        "d",
        "--lat",
        "30.1",
        "--lng",
        "69.2",
        "--search",
        "Lahore",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_submit_lat_requires_lng() {
    let result = Cli::try_parse_from([
        "civic",
        "report",
        "submit",
        "--title",
        "t",
        "--description",
        "d",
        "--lat",
        "30.1",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_submit_rejects_unknown_category() {
    let result = Cli::try_parse_from([
        "civic",
        "report",
        "submit",
        "--title",
        "t",
        "--description",
        "d",
        "--category",
        "noise",
        "--locate",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_list_rejects_unknown_status() {
    let result = Cli::try_parse_from(["civic", "report", "list", "--status", "done"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_parse_after_subcommand() {
    let cli = Cli::try_parse_from([
        "civic",
        "auth",
        "whoami",
        "--pretty",
        "--server",
        "http://127.0.0.1:9999",
    ]);
    let cli = cli.unwrap();
    assert!(cli.pretty);
    assert_eq!(cli.server.as_deref(), Some("http://127.0.0.1:9999"));
}

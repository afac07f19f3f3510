use anyhow::{bail, Context, Result};
use std::env;
use std::io::{self, Write};
use std::path::Path;

use roster::{apply_each, format_roster, load_csv, logging, sample_students, select, share, DriverConfig, Student, VERSION};

/// Parsed command line: `roster [--json] [--version] [FILE.csv]`
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    json: bool,
    version: bool,
    csv_path: Option<String>,
}

fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();

    for arg in args {
        match arg.as_str() {
            "--json" => cli.json = true,
            "--version" => cli.version = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ if cli.csv_path.is_none() => cli.csv_path = Some(arg.clone()),
            _ => bail!("Unexpected argument: {}", arg),
        }
    }

    Ok(cli)
}

fn main() -> Result<()> {
    logging::init();

    let cli = parse_args(env::args().skip(1))?;
    if cli.version {
        println!("roster {}", VERSION);
        return Ok(());
    }

    let students = match &cli.csv_path {
        Some(path) => load_csv(Path::new(path))?,
        None => sample_students(),
    };

    let config = DriverConfig::from_env();
    tracing::debug!(?config, count = students.len(), json = cli.json, "starting roster run");

    let stdout = io::stdout();
    run(students, &config, cli.json, &mut stdout.lock())
}

fn run(students: Vec<Student>, config: &DriverConfig, json: bool, out: &mut impl Write) -> Result<()> {
    // 1. Select by grade
    let selected = select(&students, |s| s.grade == config.target_grade);

    // 2. Upgrade every grade through shared handles
    let handles = share(students);
    apply_each(&handles, |s| s.upgrade(&config.upgrade_suffix));
    let upgraded: Vec<Student> = handles.iter().map(|h| h.borrow().clone()).collect();

    if json {
        let output = serde_json::json!({
            "selected": selected,
            "upgraded": upgraded,
        });
        let text = serde_json::to_string_pretty(&output).context("Failed to render JSON output")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    writeln!(
        out,
        "All the students whose grade is {}\n {}",
        config.target_grade,
        format_roster(&selected)
    )?;
    writeln!(out, "Now every students' grade should be upgrade")?;
    for student in &upgraded {
        writeln!(out, "{}", student)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_args_json_and_path() {
        let cli = parse_args(args(&["--json", "students.csv"])).unwrap();

        assert!(cli.json);
        assert!(!cli.version);
        assert_eq!(cli.csv_path.as_deref(), Some("students.csv"));
    }

    #[test]
    fn test_parse_args_version() {
        assert!(parse_args(args(&["--version"])).unwrap().version);
    }

    #[test]
    fn test_parse_args_rejects_unknown_option() {
        let err = parse_args(args(&["--jsn"])).unwrap_err();
        assert!(err.to_string().contains("Unknown option: --jsn"));
    }

    #[test]
    fn test_parse_args_rejects_second_path() {
        let err = parse_args(args(&["a.csv", "b.csv"])).unwrap_err();
        assert!(err.to_string().contains("Unexpected argument: b.csv"));
    }

    fn render(students: Vec<Student>, config: &DriverConfig, json: bool) -> String {
        let mut buf = Vec::new();
        run(students, config, json, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_prints_selection_then_upgrades() {
        let output = render(sample_students(), &DriverConfig::default(), false);

        assert_eq!(
            output,
            "All the students whose grade is B\n \
             [{Nikofl Inno B Japan} {Kiturl Deropmerl B Greek}]\n\
             Now every students' grade should be upgrade\n\
             {Nikofl Inno B+ Japan}\n\
             {James Leborn A+ America}\n\
             {Kiturl Deropmerl B+ Greek}\n"
        );
    }

    #[test]
    fn test_run_uses_configured_grade_and_suffix() {
        let config = DriverConfig {
            target_grade: "A".to_string(),
            upgrade_suffix: "-".to_string(),
        };
        let output = render(sample_students(), &config, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "All the students whose grade is A");
        assert_eq!(lines[1], " [{James Leborn A America}]");
        assert_eq!(lines[3], "{Nikofl Inno B- Japan}");
    }

    #[test]
    fn test_run_empty_roster() {
        let output = render(Vec::new(), &DriverConfig::default(), false);

        assert_eq!(
            output,
            "All the students whose grade is B\n []\nNow every students' grade should be upgrade\n"
        );
    }

    #[test]
    fn test_run_json_output() {
        let output = render(sample_students(), &DriverConfig::default(), true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let selected = value["selected"].as_array().unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0]["First_Name"], "Nikofl");
        assert_eq!(selected[1]["First_Name"], "Kiturl");
        assert_eq!(selected[0]["Grade"], "B");

        let grades: Vec<&str> = value["upgraded"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["Grade"].as_str().unwrap())
            .collect();
        assert_eq!(grades, vec!["B+", "A+", "B+"]);
    }
}

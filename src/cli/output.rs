use crate::convention::Convention;
use crate::CheckResult;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonSplit<'a> {
    input: &'a str,
    fields: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    convention: Convention,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonDetection<'a> {
    input: &'a str,
    conventions: &'a [Convention],
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    expected: Convention,
    total_findings: usize,
    results: Vec<&'a CheckResult>,
}

pub fn print_splits(
    splits: &[(&str, Vec<&str>)],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (input, fields) in splits {
                let joined = if colored_output {
                    fields
                        .iter()
                        .map(|f| format!("[{}]", f.cyan()))
                        .collect::<Vec<_>>()
                        .join(" ")
                } else {
                    fields
                        .iter()
                        .map(|f| format!("[{}]", f))
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                println!("{} {} {}", input, arrow(colored_output), joined);
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = splits
                .iter()
                .map(|(input, fields)| JsonSplit { input, fields })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn print_conversions(
    conversions: &[(String, String)],
    convention: Convention,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        // Plain text prints only the result so it composes in pipelines
        OutputFormat::Text => {
            for (_, output) in conversions {
                if colored_output {
                    println!("{}", output.green());
                } else {
                    println!("{}", output);
                }
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = conversions
                .iter()
                .map(|(input, output)| JsonConversion {
                    input,
                    convention,
                    output,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn print_detections(
    detections: &[(String, Vec<Convention>)],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (input, conventions) in detections {
                let names = if conventions.is_empty() {
                    let none = "(none)";
                    if colored_output {
                        none.dimmed().to_string()
                    } else {
                        none.to_string()
                    }
                } else {
                    let names = conventions
                        .iter()
                        .map(|c| c.name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    if colored_output {
                        names.green().to_string()
                    } else {
                        names
                    }
                };
                println!("{} {} {}", input, arrow(colored_output), names);
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = detections
                .iter()
                .map(|(input, conventions)| JsonDetection { input, conventions })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn print_check_report(
    results: &[CheckResult],
    expected: Convention,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    let total: usize = results.iter().map(|r| r.findings.len()).sum();

    match format {
        OutputFormat::Text => {
            for result in results {
                print_text_findings(result, colored_output);
            }
            print_check_summary(total, results.len(), expected, colored_output);
        }
        OutputFormat::Json => {
            let report = JsonReport {
                files_checked: results.len(),
                expected,
                total_findings: total,
                results: results.iter().filter(|r| !r.findings.is_empty()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn print_text_findings(result: &CheckResult, colored_output: bool) {
    if result.findings.is_empty() {
        return;
    }

    let file_name = result.file.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for finding in &result.findings {
        let line_info = format!("{}:{}", finding.line, finding.column);
        let detected = describe_detected(&finding.detected);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                finding.identifier.red().bold(),
                detected.dimmed()
            );
            println!("    {} {}", "→".dimmed(), finding.suggestion.green());
        } else {
            println!("  {} {} {}", line_info, finding.identifier, detected);
            println!("    → {}", finding.suggestion);
        }
    }
}

fn describe_detected(detected: &[Convention]) -> String {
    if detected.is_empty() {
        "(no convention)".to_string()
    } else {
        let names = detected.iter().map(|c| c.name()).collect::<Vec<_>>();
        format!("({})", names.join(", "))
    }
}

fn arrow(colored_output: bool) -> String {
    if colored_output {
        "→".dimmed().to_string()
    } else {
        "→".to_string()
    }
}

pub fn print_check_summary(total: usize, files: usize, expected: Convention, colored: bool) {
    println!();
    let file_word = if files == 1 { "file" } else { "files" };
    if total == 0 {
        let message = format!("✓ All identifiers are {} case", expected);
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let finding_word = if total == 1 { "identifier" } else { "identifiers" };
        if colored {
            println!(
                "{} {} {} not {} case in {} {}",
                "✗".red().bold(),
                total.to_string().red().bold(),
                finding_word,
                expected,
                files,
                file_word
            );
        } else {
            println!(
                "✗ {} {} not {} case in {} {}",
                total, finding_word, expected, files, file_word
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_describe_detected() {
        assert_eq!(describe_detected(&[]), "(no convention)");
        assert_eq!(
            describe_detected(&[Convention::Camel, Convention::Flat]),
            "(camel, flat)"
        );
    }
}

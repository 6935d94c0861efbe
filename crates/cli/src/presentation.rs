// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use word_freq_engine::report::SourceReport;

/// Render every report on stdout in the configured format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_results(reports: &[SourceReport], config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => print_text(reports, config),
        OutputFormat::Json => print_json(reports)?,
        OutputFormat::Jsonl => print_jsonl(reports)?,
        OutputFormat::Csv => print_csv(reports),
    }
    Ok(())
}

/// The reference rendering: one line per peak line, holding that line's most
/// frequent words and nothing else. A source header is added only when more
/// than one source was analyzed.
fn print_text(reports: &[SourceReport], config: &Config) {
    let with_headers = reports.len() > 1;

    for report in reports {
        if with_headers {
            println!("== {}", report.source);
        }
        for line in &report.peak_lines {
            println!("{}", line.highest_wf_words.join(" "));
            if config.show_lines {
                println!(
                    "line {}: {}",
                    line.line_number,
                    line.content.trim_end_matches(['\n', '\r'])
                );
            }
        }
    }
}

fn print_json(reports: &[SourceReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

fn print_jsonl(reports: &[SourceReport]) -> Result<()> {
    for report in reports {
        println!("{}", serde_json::to_string(report)?);
    }
    Ok(())
}

fn print_csv(reports: &[SourceReport]) {
    println!("source,line_number,highest_wf_count,words");
    for report in reports {
        for line in &report.peak_lines {
            println!(
                "{},{},{},{}",
                csv_field(&report.source),
                line.line_number,
                report.highest_count,
                csv_field(&line.highest_wf_words.join(" "))
            );
        }
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

//! `pl validate` — load a timeline data file and report whether it passes
//! the store's construction invariants.

use crate::output::{pretty_kv, pretty_section, render_error, render_mode, CliError, OutputMode};
use crate::store_source::{load_store, DataSource};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct ValidateArgs {}

#[derive(Debug, Serialize)]
pub struct ValidateView {
    pub source: String,
    pub valid: bool,
    pub patches: usize,
    pub threads: usize,
    pub questions: usize,
}

fn source_label(source: &DataSource) -> String {
    match source {
        DataSource::File(path) => path.display().to_string(),
        DataSource::Bundled => "bundled".to_string(),
    }
}

/// Execute `pl validate`.
///
/// Invalid data is this command's subject matter, not a crash: the failure
/// is reported in the requested format and surfaces as a nonzero exit code.
///
/// # Errors
///
/// Returns an error only if output rendering fails.
pub fn run_validate(
    _args: &ValidateArgs,
    output: OutputMode,
    source: &DataSource,
) -> anyhow::Result<ExitCode> {
    match load_store(source) {
        Ok(store) => {
            let view = ValidateView {
                source: source_label(source),
                valid: true,
                patches: store.len(),
                threads: store.threads().len(),
                questions: store
                    .patches()
                    .iter()
                    .filter_map(|p| p.breakthrough.as_ref())
                    .map(|b| b.follow_up_questions.len())
                    .sum(),
            };
            render_mode(
                output,
                &view,
                |view, w| render_validate_text(view, w),
                |view, w| render_validate_pretty(view, w),
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    format!("{err:#}"),
                    "fix the data file and run `pl validate` again",
                    "data_file_invalid",
                ),
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn render_validate_pretty(view: &ValidateView, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Timeline data check")?;
    pretty_kv(w, "source", &view.source)?;
    pretty_kv(w, "valid", "yes")?;
    pretty_kv(w, "patches", view.patches.to_string())?;
    pretty_kv(w, "threads", view.threads.to_string())?;
    pretty_kv(w, "questions", view.questions.to_string())
}

fn render_validate_text(view: &ValidateView, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "valid\t{}\tpatches={}\tthreads={}\tquestions={}",
        view.source, view.patches, view.threads, view.questions
    )
}

#[cfg(test)]
mod tests {
    use super::{run_validate, source_label, ValidateArgs, ValidateView};
    use crate::output::OutputMode;
    use crate::store_source::DataSource;
    use std::io::Write as _;
    use std::path::PathBuf;
    use std::process::ExitCode;

    #[test]
    fn bundled_data_reports_success() {
        let code = run_validate(&ValidateArgs {}, OutputMode::Text, &DataSource::Bundled)
            .expect("renders");
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn missing_file_reports_failure_without_crashing() {
        let source = DataSource::File(PathBuf::from("/no/such/timeline.json"));
        let code =
            run_validate(&ValidateArgs {}, OutputMode::Json, &source).expect("renders the error");
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn invalid_data_reports_failure() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"{{"subject":"s","mission":"m","owner":"o","patches":[
                {{"id":"a","timestamp":"2024-03-18T09:30:00Z","focusQuestion":"q","narrative":"n","confidence":1.4}}
            ]}}"#
        )
        .expect("write");

        let source = DataSource::File(file.path().to_path_buf());
        let code = run_validate(&ValidateArgs {}, OutputMode::Text, &source).expect("renders");
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn pretty_report_counts_everything() {
        let view = ValidateView {
            source: "bundled".into(),
            valid: true,
            patches: 3,
            threads: 2,
            questions: 6,
        };
        let mut buf = Vec::new();
        super::render_validate_pretty(&view, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("valid:"));
        assert!(out.contains("questions:"));
    }

    #[test]
    fn source_labels_are_stable() {
        assert_eq!(source_label(&DataSource::Bundled), "bundled");
        assert_eq!(
            source_label(&DataSource::File(PathBuf::from("/tmp/t.json"))),
            "/tmp/t.json"
        );
    }
}

use is_terminal::IsTerminal;

use metamodel::MetamodelError;

use crate::ui::json::events::ErrorEvent;

/// Stable code for JSON consumers.
fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<MetamodelError>() {
        Some(MetamodelError::UnknownClass { .. }) => "UNKNOWN_CLASS",
        Some(MetamodelError::IllegalState { .. }) => "ILLEGAL_STATE",
        Some(MetamodelError::ModelInvalid(_)) => "MODEL_INVALID",
        Some(MetamodelError::Parse { .. }) => "PARSE_ERROR",
        Some(MetamodelError::DirectoryNotFound { .. }) => "DIRECTORY_NOT_FOUND",
        Some(MetamodelError::Io(_)) => "IO_ERROR",
        None => "ERROR",
    }
}

fn error_help(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<MetamodelError>()? {
        MetamodelError::ModelInvalid(_) => Some(
            "Fix the failures above, or set `validation.fail_on_invalid = false` in metamodel.toml"
                .to_string(),
        ),
        MetamodelError::DirectoryNotFound { .. } => Some(
            "Set `introspection.model_dir` in metamodel.toml or METAMODEL_MODEL_DIR".to_string(),
        ),
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, color: bool) -> String {
    let label = if color { "\x1b[31merror\x1b[0m" } else { "error" };
    let mut out = format!("{}: {:#}\n", label, err);
    if let Some(help) = error_help(err) {
        out.push_str(&format!("  help: {}\n", help));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    format_error_with(err, color)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut event = ErrorEvent::new(error_code(err), format!("{:#}", err));
        if let Some(help) = error_help(err) {
            event = event.with_help(help);
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_class_has_stable_code() {
        let err = anyhow::Error::new(MetamodelError::UnknownClass {
            class_name: "acme.Nobody".into(),
        });
        assert_eq!(error_code(&err), "UNKNOWN_CLASS");
        assert_eq!(error_help(&err), None);
    }

    #[test]
    fn context_does_not_hide_the_code() {
        let err = anyhow::Error::new(MetamodelError::illegal_state("boom")).context("loading");
        assert_eq!(error_code(&err), "ILLEGAL_STATE");
        assert_eq!(error_code(&anyhow::anyhow!("plain")), "ERROR");
    }

    #[test]
    fn plain_format_has_no_escape_codes() {
        let err = anyhow::anyhow!("something broke");
        let rendered = format_error_with(&err, false);
        assert_eq!(rendered, "error: something broke\n");
        assert!(format_error_with(&err, true).contains("\x1b[31m"));
    }
}

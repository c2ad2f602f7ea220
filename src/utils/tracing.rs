/// Log an error together with its whole chain of sources.
///
/// Expands to a block, so it can stand as a match arm.
#[macro_export]
macro_rules! tracing_report {
    ($error:expr) => {{
        tracing::error!(err = %snafu::Report::from_error(&$error));
    }};
    ($error:expr, $message:literal) => {{
        tracing::error!(err = %snafu::Report::from_error(&$error), $message);
    }};
}

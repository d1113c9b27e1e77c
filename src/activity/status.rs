/// Label shown when no submission has arrived; also the fallback for any
/// status code this layer does not recognize.
pub const NOT_RECEIVED: &str = "não recebida";

/// Maps a backend submission status code to its user-facing label.
///
/// Total over arbitrary input: unrecognized codes fall through to the
/// "not received" label instead of failing.
pub fn status_label(code: &str) -> &'static str {
    match code {
        "evaluated" => "avaliada",
        "submitted" => "recebida",
        "submitted_external" => "recebida em outro canal",
        "pending" => NOT_RECEIVED,
        _ => NOT_RECEIVED,
    }
}

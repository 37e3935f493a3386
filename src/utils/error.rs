/// Collapses a collaborator error into a single bounded line for reports and logs.
///
/// JSON-RPC transports tend to embed the whole response body (`text: ...`) and an
/// `anyhow` backtrace in their `Display`; neither belongs in a check report.
pub fn compact_error_message(message: &str, max_len: usize) -> String {
    let mut raw = message;
    if let Some((prefix, _)) = raw.split_once("Stack backtrace:") {
        raw = prefix;
    }
    let elided;
    if let Some((prefix, _)) = raw.split_once(" text: ") {
        elided = format!("{prefix} text=<omitted>");
        raw = &elided;
    }

    let mut compact = String::with_capacity(raw.len().min(max_len.saturating_add(16)));
    let mut pending_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = !compact.is_empty();
            continue;
        }
        if pending_space {
            compact.push(' ');
            pending_space = false;
        }
        compact.push(ch);
        if compact.len() > max_len {
            break;
        }
    }
    if compact.len() <= max_len {
        return compact;
    }
    let mut cut = max_len;
    while !compact.is_char_boundary(cut) {
        cut -= 1;
    }
    compact.truncate(cut);
    compact.push_str("...(truncated)");
    compact
}

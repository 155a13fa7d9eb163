/// Extract clean error message from database error strings
///
/// Removes technical prefixes and driver error codes like:
/// "error returned from database: (code: 2067) UNIQUE constraint failed: wallet_transaction.uuid"
///
/// Returns only the meaningful error message:
/// "UNIQUE constraint failed: wallet_transaction.uuid"
pub fn extract_clean_error(error_msg: &str) -> String {
    let msg = match error_msg.find("error returned from database: ") {
        Some(idx) => &error_msg[idx + "error returned from database: ".len()..],
        None => error_msg,
    };

    // SQLite driver messages lead with "(code: NNNN) "
    let msg = if msg.starts_with("(code: ") {
        match msg.find(") ") {
            Some(idx) => &msg[idx + 2..],
            None => msg,
        }
    } else {
        msg
    };

    msg.trim().to_string()
}

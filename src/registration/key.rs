//! Record identifiers

/// Namespace prefix of every node identifier
pub const ID_NAMESPACE: &str = "rcs";

/// Builds the node identifier `rcs.<key>.<lang>`.
///
/// Neither part is validated.
pub fn make_id(key: &str, lang: &str) -> String {
    format!("{}.{}.{}", ID_NAMESPACE, key, lang)
}

//! Output handler capability.

/// Consumes decoded records and accumulates them into a caller-visible result.
///
/// Implementations are invoked once per record, in the order the records were
/// read from the stream. They are moved into the task that drains a command's
/// output, hence `Send + 'static`.
///
/// Implementations must tolerate seeing the same record twice; nothing in the
/// contract relies on counting deliveries.
pub trait OutputHandler: Send + 'static {
    /// Handle one record.
    ///
    /// # Arguments
    /// * `target` - Machine the record concerns, empty for global records.
    /// * `kind` - Record type, see [`crate::kinds`].
    /// * `fields` - Unescaped payload fields.
    fn handle_output(&mut self, target: &str, kind: &str, fields: &[String]);

    /// Error announced by an `error-exit` record, if one was seen.
    fn terminal_error(&self) -> Option<&str> {
        None
    }
}

/// ProgressReporter port for reporting progress during a roll-up
///
/// This port abstracts user-facing progress output (e.g., to stderr).
/// It is separate from diagnostic logging, which goes through `tracing`.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress of the traversal
    ///
    /// # Arguments
    /// * `current` - Edges walked so far
    /// * `total` - Total number of edges
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}

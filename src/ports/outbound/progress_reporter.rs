/// ProgressReporter port for reporting progress during a compiler run
///
/// This port abstracts all user-facing log output. Domain services never log;
/// use cases translate their diagnostics into calls on this port.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a detail message, shown only in verbose mode
    fn report_debug(&self, message: &str);

    /// Reports progress over the component classes of a run
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

/// ProgressReporter port for reporting progress during a search
///
/// This port abstracts user feedback (e.g., to stderr) while the two
/// network round trips are in flight. Implementations must never include
/// credential material in any reported message.
pub trait ProgressReporter: Send + Sync {
    /// Reports a plain progress message
    fn report(&self, message: &str);

    /// Reports entering one of the pipeline's sequential steps
    ///
    /// # Arguments
    /// * `current` - 1-based index of the step being entered
    /// * `total` - Total number of steps in the pipeline
    /// * `message` - Short label for the step
    fn report_step(&self, current: usize, total: usize, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the search
    fn report_completion(&self, message: &str);
}

/// Classification for retry policy.
///
/// Used by callers to decide whether offering a reload makes sense.
///
/// | Class | Reload likely to help? |
/// |-------|------------------------|
/// | `Never` | No |
/// | `Transient` | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The request is fundamentally invalid (bad configuration, payload the
    /// client cannot decode, client-side HTTP status).
    Never,

    /// Timeouts, connection failures and server-side HTTP statuses.
    Transient,
}

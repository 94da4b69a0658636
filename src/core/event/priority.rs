/// Delivery priority attached to a domain event. Informational only — the
/// bus makes no ordering or retry guarantees based on it; subscribers may
/// use it to prioritise their own processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Normal,
    High,
    Critical,
}

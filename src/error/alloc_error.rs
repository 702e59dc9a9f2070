#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents a failed arena allocation.
pub enum AllocError {
    /// The backing storage for an arena could not be reserved.
    Backing {
        /// The capacity that was requested, in entries.
        capacity: usize,
    },
    /// An arena has no room left for another entry.
    Exhausted {
        /// The fixed capacity of the arena, in entries.
        capacity: usize,
    },
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backing { capacity } => {
                write!(
                    f,
                    "Error: Unable to reserve arena storage for {capacity} entries."
                )
            },
            Self::Exhausted { capacity } => {
                write!(f, "Error: Arena capacity of {capacity} entries exhausted.")
            },
        }
    }
}

impl std::error::Error for AllocError {}

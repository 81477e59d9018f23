//! Filter types for shift queries.

/// Conjunctive filter set for listing shifts.
///
/// Filters are applied in declaration order; a shift must satisfy every
/// selected predicate to be returned.
#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    /// Only shifts the caller is covering.
    pub mine: bool,
    /// Only shifts flagged as emergencies.
    pub emergency: bool,
    /// Only shifts with this exact status code; `0` disables the filter.
    /// Codes that map to no known status match nothing.
    pub status: i32,
    /// Only shifts assigned to the caller.
    pub assigned: bool,
}

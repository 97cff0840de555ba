/// Errors raised by the hull pipeline.
///
/// Everything else is total on finite input: empty and degenerate point sets
/// produce empty or degenerate hulls rather than errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// An input coordinate is NaN or infinite. Reported before any recursion starts.
    #[error("invalid input: point {index} has a non-finite coordinate")]
    InvalidInput { index: usize },

    /// A line intersection has no unique answer (zero denominator or non-finite result).
    ///
    /// The driver only merges strictly x-separated halves, so this surfaces only when the
    /// tangent finder or `crossing_height` are called directly on overlapping input.
    #[error("degenerate geometry: {what}")]
    DegenerateGeometry { what: &'static str },
}

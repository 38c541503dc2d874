/// Describes a Fretboard specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the invalid input (e.g. malformed admin form payload).
    ClientError,
    /// Error caused by a reference to the record that doesn't exist.
    NotFound,
    /// Unknown error.
    Unknown,
}

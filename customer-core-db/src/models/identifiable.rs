/// Trait for records that carry the identity callers address them by
pub trait Identifiable {
    /// Returns the identity of the record
    fn get_identity(&self) -> &str;
}

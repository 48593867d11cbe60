/// Dense document identifier in [0, max_doc)
/// The calling runtime keeps max_doc within i32::MAX, so ids always fit
pub type DocId = u32;

/// Stored ordinal reserved for "document has no value for this field"
/// Real terms are stored shifted by +1, so stored values span 0..=num_terms_in_field
pub const MISSING_ORD: usize = 0;

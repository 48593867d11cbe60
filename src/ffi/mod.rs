//! Raw entry points for the calling runtime
//!
//! Buffers cross this boundary as addresses plus explicit lengths, with
//! small integer tags selecting the set representation and ordinal width.
//! Every address must reference a buffer valid and unmoved for the call's
//! duration. Only the three essential fill_counts buffers are null-checked;
//! no other validation happens here, and nothing is allocated or freed.

use libc::{c_int, c_longlong, c_void};

use crate::core::format::{BaseFormat, OrdFormat};
use crate::core::types::DocId;
use crate::docset::DocSetRef;
use crate::docset::bits::BitDocSet;
use crate::docset::sorted::SortedDocSet;
use crate::facet::counts::{FacetRequest, fill_counts};
use crate::facet::ordinals::OrdinalsRef;
use crate::ops::dedup::sort_dedup;
use crate::ops::intersect::intersection_size;

/// Intersection cardinality of two sorted, deduplicated doc id arrays
/// Pass the smaller set first
///
/// # Safety
/// `a` and `b` must each reference as many 32-bit elements as their size
/// arguments claim whenever those sizes are positive.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docset_intersection_size(
    a: *const DocId,
    a_size: c_int,
    b: *const DocId,
    b_size: c_int,
) -> c_int {
    // either side empty: answer before the adaptive step divides by a_size
    if a_size <= 0 || b_size <= 0 {
        return 0;
    }
    let a = unsafe { std::slice::from_raw_parts(a, a_size as usize) };
    let b = unsafe { std::slice::from_raw_parts(b, b_size as usize) };
    intersection_size(a, b) as c_int
}

/// Sort a doc id array ascending and drop duplicates in place
/// Returns the deduplicated length
///
/// # Safety
/// `docs` must reference `n` writable 32-bit elements when `n` is positive.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docset_sort_dedup(docs: *mut DocId, n: c_int) -> c_int {
    if docs.is_null() || n <= 0 {
        return 0;
    }
    let docs = unsafe { std::slice::from_raw_parts_mut(docs, n as usize) };
    sort_dedup(docs) as c_int
}

/// Facet counting over a raw document set and ordinal array
///
/// `base_size` counts 64-bit words for a BITS set and elements for an INT32
/// set. `ord_size` is the ordinal element count, one per document. The
/// counts buffer holds end_term_index - start_term_index buckets. `offset`
/// and `limit` are reserved. A null base, ordinal, or counts address and an
/// unknown format tag both return with the counts buffer untouched.
///
/// # Safety
/// Non-null addresses must match the sizes and format tags they are passed
/// with, and the counts buffer must be writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docset_fill_counts(
    base_addr: *const c_void,
    base_format: c_int,
    base_size: c_longlong,
    ord_addr: *const c_void,
    ord_format: c_int,
    ord_size: c_longlong,
    num_terms_in_field: c_int,
    start_term_index: c_int,
    end_term_index: c_int,
    offset: c_int,
    limit: c_int,
    counts_addr: *mut u32,
) {
    if base_addr.is_null() || ord_addr.is_null() || counts_addr.is_null() {
        return;
    }
    let Ok(base_format) = BaseFormat::from_tag(base_format) else {
        return;
    };
    let Ok(ord_format) = OrdFormat::from_tag(ord_format) else {
        return;
    };

    let n_terms = end_term_index - start_term_index;
    if n_terms <= 0 || base_size < 0 || ord_size < 0 {
        return;
    }

    let docs = match base_format {
        BaseFormat::Bits => DocSetRef::Bits(BitDocSet::new(unsafe {
            std::slice::from_raw_parts(base_addr as *const u64, base_size as usize)
        })),
        BaseFormat::Int32 => DocSetRef::Sorted(SortedDocSet::new(unsafe {
            std::slice::from_raw_parts(base_addr as *const DocId, base_size as usize)
        })),
    };
    let ords = unsafe {
        OrdinalsRef::from_raw(ord_addr as *const u8, ord_format, ord_size as usize)
    };
    let counts = unsafe { std::slice::from_raw_parts_mut(counts_addr, n_terms as usize) };

    let request = FacetRequest {
        num_terms_in_field,
        start_term_index,
        end_term_index,
        offset,
        limit,
    };
    fill_counts(&docs, &ords, &request, counts);
}

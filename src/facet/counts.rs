use serde::{Serialize, Deserialize};

use crate::core::types::DocId;
use crate::docset::DocSetRef;
use crate::facet::ordinals::{OrdinalWord, OrdinalsRef};

/// Parameters of one facet counting call
/// Term indices are user-facing: 0 is the first real term and -1 selects
/// the missing bucket, so the full range is start=-1, end=num_terms_in_field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetRequest {
    pub num_terms_in_field: i32,
    pub start_term_index: i32,
    pub end_term_index: i32,
    /// Reserved - accepted across the call boundary but not applied
    pub offset: i32,
    /// Reserved - accepted across the call boundary but not applied
    pub limit: i32,
}

/// Count term occurrences for every document in the set
/// Increments the caller-sized counts buffer in place; the caller sizes it
/// to end_term_index - start_term_index buckets
pub fn fill_counts(
    docs: &DocSetRef,
    ords: &OrdinalsRef,
    request: &FacetRequest,
    counts: &mut [u32],
) {
    match docs {
        DocSetRef::Bits(bits) => fill_counts_ords(bits.iter(), ords, request, counts),
        DocSetRef::Sorted(sorted) => fill_counts_ords(sorted.iter(), ords, request, counts),
    }
}

fn fill_counts_ords<I>(docs: I, ords: &OrdinalsRef, request: &FacetRequest, counts: &mut [u32])
where
    I: Iterator<Item = DocId>,
{
    match ords {
        OrdinalsRef::U8(ords) => fill_counts_inner(docs, *ords, request, counts),
        OrdinalsRef::U16(ords) => fill_counts_inner(docs, *ords, request, counts),
        OrdinalsRef::U32(ords) => fill_counts_inner(docs, *ords, request, counts),
        OrdinalsRef::U64(ords) => fill_counts_inner(docs, *ords, request, counts),
    }
}

/// Per-document loop, monomorphic per set representation and ordinal width
fn fill_counts_inner<I, W>(docs: I, ords: &[W], request: &FacetRequest, counts: &mut [u32])
where
    I: Iterator<Item = DocId>,
    W: OrdinalWord,
{
    // Stored ordinals use 0 for missing with real terms shifted by +1,
    // while user-facing term indices start at 0 for the first real term
    let adjustment = (request.start_term_index + 1) as isize;
    let n_terms = (request.end_term_index - request.start_term_index) as isize;

    if n_terms == request.num_terms_in_field as isize + 1 {
        // Full range including the missing bucket: every stored ordinal is
        // in range by construction, so skip the bounds check
        for doc in docs {
            let term = ords[doc as usize].ord();
            counts[term] += 1;
        }
    } else {
        for doc in docs {
            let term = ords[doc as usize].ord() as isize;
            let idx = term - adjustment;
            if idx >= 0 && idx < n_terms {
                counts[idx as usize] += 1;
            }
        }
    }
}

use crate::core::types::DocId;

/// Count of values present in both sorted arrays, without materializing
/// the intersection
/// Precondition: both arrays strictly ascending with no duplicates;
/// violations give unspecified results
/// Callers should pass the smaller set as `a` - the adaptive step sizes
/// probes into `b` from the ratio of the lengths, which affects speed
/// but not the result
pub fn intersection_size(a: &[DocId], b: &[DocId]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // The next match in b sits much closer to the previous low bound than
    // to the midpoint, so probe ahead by a function of the size ratio.
    // Most probes land short of the target, so double the step to land
    // past it and drop the upper bound in one jump.
    let step = (b.len() / a.len() + 1) * 2;

    let mut count = 0;
    let mut low: isize = 0;
    let max = b.len() as isize - 1;

    for &doc_a in a {
        // high can end up at -1, so the bounds stay signed
        let mut high = max;

        let mut probe = low + step as isize;
        if probe < high {
            if b[probe as usize] >= doc_a {
                high = probe;
            } else {
                low = probe + 1;

                // probe once more from the new low bound
                probe = low + step as isize;
                if probe < high {
                    if b[probe as usize] >= doc_a {
                        high = probe;
                    } else {
                        low = probe + 1;
                    }
                }
            }
        }

        // Binary search the narrowed range
        while low <= high {
            let mid = ((low + high) as usize) >> 1;
            let doc_b = b[mid];

            if doc_b < doc_a {
                low = mid as isize + 1;
            } else if doc_b > doc_a {
                high = mid as isize - 1;
            } else {
                count += 1;
                low = mid as isize + 1;  // matched, continue strictly past it
                break;
            }
        }
        // On a miss low sits on the insertion point, which is where the
        // search for the next element of a starts
    }

    count
}

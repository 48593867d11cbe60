pub mod core;
pub mod docset;
pub mod facet;
pub mod ffi;
pub mod ops;

/*
┌────────────────────────────────────────────────────────────────────────────┐
│                        DOCSET KERNEL ARCHITECTURE                          │
└────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ────────────────────────────────┐
│                                                                            │
│  ┌──────────────────┐  ┌──────────────────────┐  ┌──────────────────────┐  │
│  │ type DocId = u32 │  │ enum BaseFormat      │  │ struct Error         │  │
│  │ // dense space   │  │ • Bits               │  │ • kind: ErrorKind    │  │
│  │ // [0, max_doc)  │  │ • Int32              │  │ • context: String    │  │
│  └──────────────────┘  └──────────────────────┘  └──────────────────────┘  │
│                                                                            │
│  ┌──────────────────────┐  ┌──────────────────────────────────────────┐    │
│  │ enum OrdFormat       │  │ const FORMAT_BITS/INT8/INT16/INT32/INT64 │    │
│  │ • Int8..Int64        │  │ // raw tags shared with the runtime      │    │
│  └──────────────────────┘  └──────────────────────────────────────────┘    │
└────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── DOCSET LAYER ───────────────────────────────┐
│                                                                            │
│  ┌────────────────────────────┐  ┌───────────────────────────────────┐     │
│  │ struct BitDocSet<'a>       │  │ struct SortedDocSet<'a>           │     │
│  │ • words: &'a [u64]         │  │ • docs: &'a [DocId]               │     │
│  │ • next_set_bit()           │  │ • iter() // raw sequential        │     │
│  │ • iter() -> BitSetIter     │  └───────────────────────────────────┘     │
│  └────────────────────────────┘                                            │
│                                                                            │
│  ┌────────────────────────────────────────────────────────────────────┐    │
│  │ enum DocSetRef<'a>   // tagged dispatch, matched once per call     │    │
│  │ • Bits(BitDocSet) | Sorted(SortedDocSet)                           │    │
│  └────────────────────────────────────────────────────────────────────┘    │
└────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── KERNEL LAYER ──────────────────────────────┐
│                                                                            │
│  ┌────────────────────────────┐  ┌───────────────────────────────────┐     │
│  │ ops::intersection_size()   │  │ ops::sort_dedup()                 │     │
│  │ // adaptive galloping      │  │ // in-place sort + compaction     │     │
│  └────────────────────────────┘  └───────────────────────────────────┘     │
│                                                                            │
│  ┌────────────────────────────────────────────────────────────────────┐    │
│  │ facet::fill_counts(docs, ords, request, counts)                    │    │
│  │ // 2 representations x 4 ordinal widths, monomorphic inner loops   │    │
│  └────────────────────────────────────────────────────────────────────┘    │
└────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────── RAW BOUNDARY ─────────────────────────────┐
│                                                                            │
│  ffi::docset_intersection_size(addr, len, addr, len)                       │
│  ffi::docset_sort_dedup(addr, len)                                         │
│  ffi::docset_fill_counts(base, tag, len, ords, tag, len, ..., counts)      │
│  // addresses + lengths + small integer tags, null-checked, no ownership   │
└────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── RELATIONSHIPS ─────────────────────────────┐
│                                                                            │
│  ffi ──parses──> BaseFormat/OrdFormat ──selects──> DocSetRef/OrdinalsRef   │
│   │                                                                        │
│   └──borrows──> caller buffers ──views──> BitDocSet/SortedDocSet           │
│                                                                            │
│  fill_counts ──iterates──> DocSetRef ──indexes──> OrdinalsRef              │
│       │                                                                    │
│       └──increments──> caller counts buffer                                │
└────────────────────────────────────────────────────────────────────────────┘
*/

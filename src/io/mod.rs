//! Mesh file decoding and encoding.

pub use self::stl::{
    write_stl, NativeStlParser, RawTriangle, StlError, StlLoader, StlParser,
    DEFAULT_MERGE_DECIMALS,
};

mod stl;

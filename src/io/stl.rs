//! STL (stereolithography) decoding and encoding.
//!
//! Both standard STL sub-encodings are supported:
//! - binary: an 80-byte header, a little-endian `u32` triangle count, then one
//!   50-byte record per triangle (a 3-float normal, three 3-float vertices,
//!   and a 2-byte attribute count, all little-endian);
//! - ASCII: line-oriented, with vertices declared as `vertex x y z` tokens,
//!   three per triangle.

use crate::math::{Point, Real, Vector};
use crate::mesh::SurfaceMesh;
use crate::utils::round_to_decimals;
use ordered_float::OrderedFloat;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Size of the binary sub-format header, in bytes.
const HEADER_LEN: usize = 80;
/// Size of one triangle record of the binary sub-format, in bytes.
const RECORD_LEN: usize = 50;

/// Default rounding precision (decimal places) used to merge coincident
/// vertices.
pub const DEFAULT_MERGE_DECIMALS: u32 = 12;

/// Indicates a failure to decode a byte stream as STL.
#[derive(thiserror::Error, Debug)]
pub enum StlError {
    /// The file could not be read.
    #[error("failed to read STL file: {0}")]
    Io(#[from] std::io::Error),
    /// Neither sub-format yielded any triangle.
    #[error("no triangles could be decoded from either STL sub-format")]
    NoTriangles,
}

/// A triangle as decoded from an STL stream: three vertices, no connectivity.
pub type RawTriangle = [Point<Real>; 3];

/// Decodes raw bytes into a triangle soup.
///
/// The built-in implementation is [`NativeStlParser`]. Callers that prefer to
/// delegate decoding to an external mesh library can implement this trait and
/// configure the loader with [`StlLoader::with_parser`].
pub trait StlParser {
    /// Decodes `data` into a list of triangles.
    fn parse(&self, data: &[u8]) -> Result<Vec<RawTriangle>, StlError>;
}

/// The built-in STL parser.
///
/// Attempts the binary sub-format first, then falls back to ASCII.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeStlParser;

impl StlParser for NativeStlParser {
    fn parse(&self, data: &[u8]) -> Result<Vec<RawTriangle>, StlError> {
        if let Some(triangles) = parse_binary(data) {
            return Ok(triangles);
        }
        parse_ascii(data)
    }
}

/// Decodes the binary sub-format, or returns `None` when `data` is not an
/// exact binary STL stream.
fn parse_binary(data: &[u8]) -> Option<Vec<RawTriangle>> {
    if data.len() < HEADER_LEN + 4 {
        return None;
    }

    let count_bytes: [u8; 4] = data[HEADER_LEN..HEADER_LEN + 4].try_into().ok()?;
    let count = u32::from_le_bytes(count_bytes) as usize;

    let expected = HEADER_LEN + 4 + RECORD_LEN * count;
    if data.len() != expected {
        log::debug!(
            "binary STL length mismatch (expected {expected} bytes for {count} triangles, got \
             {}); trying the ASCII sub-format",
            data.len()
        );
        return None;
    }

    let mut triangles = Vec::with_capacity(count);
    for record in data[HEADER_LEN + 4..].chunks_exact(RECORD_LEN) {
        // The 12-byte facet normal and the trailing attribute count are
        // discarded.
        triangles.push([
            read_vertex(&record[12..24]),
            read_vertex(&record[24..36]),
            read_vertex(&record[36..48]),
        ]);
    }

    Some(triangles)
}

/// Reads one vertex from 12 bytes (three little-endian `f32`).
fn read_vertex(buf: &[u8]) -> Point<Real> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point::new(x as Real, y as Real, z as Real)
}

/// Decodes the ASCII sub-format.
///
/// Only `vertex x y z` lines matter; a triangle is flushed every three
/// well-formed vertex lines. A vertex line with malformed coordinates is
/// skipped, not fatal.
fn parse_ascii(data: &[u8]) -> Result<Vec<RawTriangle>, StlError> {
    let text = String::from_utf8_lossy(data);

    let mut triangles = Vec::new();
    let mut pending: Vec<Point<Real>> = Vec::with_capacity(3);

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(tok) if tok.eq_ignore_ascii_case("vertex") => {}
            _ => continue,
        }

        let coords = (|| {
            let x: Real = tokens.next()?.parse().ok()?;
            let y: Real = tokens.next()?.parse().ok()?;
            let z: Real = tokens.next()?.parse().ok()?;
            Some(Point::new(x, y, z))
        })();

        match coords {
            Some(pt) => pending.push(pt),
            None => {
                log::debug!("skipping malformed STL vertex line: {line:?}");
                continue;
            }
        }

        if pending.len() == 3 {
            triangles.push([pending[0], pending[1], pending[2]]);
            pending.clear();
        }
    }

    if triangles.is_empty() {
        return Err(StlError::NoTriangles);
    }

    Ok(triangles)
}

/// Decodes STL files into indexed [`SurfaceMesh`]es.
///
/// The loader is configured at construction time: which [`StlParser`] decodes
/// the byte stream, whether coincident vertices are merged, and at which
/// rounding precision coordinates are considered coincident.
pub struct StlLoader {
    parser: Box<dyn StlParser>,
    merge_vertices: bool,
    decimals: u32,
}

impl Default for StlLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StlLoader {
    /// A loader using the built-in parser, merging coincident vertices at the
    /// default rounding precision.
    pub fn new() -> Self {
        Self {
            parser: Box::new(NativeStlParser),
            merge_vertices: true,
            decimals: DEFAULT_MERGE_DECIMALS,
        }
    }

    /// Replaces the parser decoding the byte stream.
    pub fn with_parser(mut self, parser: Box<dyn StlParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Enables or disables vertex merging.
    ///
    /// When disabled, every decoded vertex is kept distinct and the triangles
    /// index consecutive vertex triples.
    pub fn with_merge_vertices(mut self, merge_vertices: bool) -> Self {
        self.merge_vertices = merge_vertices;
        self
    }

    /// Sets the rounding precision (decimal places) at which merged vertex
    /// coordinates are considered coincident.
    pub fn with_merge_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Loads an STL file from `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SurfaceMesh, StlError> {
        let data = std::fs::read(path)?;
        self.load_from_bytes(&data)
    }

    /// Decodes an STL byte stream already resident in memory.
    pub fn load_from_bytes(&self, data: &[u8]) -> Result<SurfaceMesh, StlError> {
        let triangles = self.parser.parse(data)?;

        if self.merge_vertices {
            Ok(merge_triangle_soup(&triangles, self.decimals))
        } else {
            Ok(split_triangle_soup(&triangles))
        }
    }
}

/// Indexes a triangle soup, merging vertices whose coordinates coincide once
/// rounded to `decimals` decimal places.
///
/// The canonical vertex order is the order of first appearance.
fn merge_triangle_soup(triangles: &[RawTriangle], decimals: u32) -> SurfaceMesh {
    let mut vtx_to_id = HashMap::new();
    let mut vertices = Vec::new();
    let mut indices = Vec::with_capacity(triangles.len());

    fn resolve_coord_id(
        pt: &Point<Real>,
        decimals: u32,
        vtx_to_id: &mut HashMap<[OrderedFloat<Real>; 3], u32>,
        vertices: &mut Vec<Point<Real>>,
    ) -> u32 {
        let key = [
            OrderedFloat(round_to_decimals(pt.x, decimals)),
            OrderedFloat(round_to_decimals(pt.y, decimals)),
            OrderedFloat(round_to_decimals(pt.z, decimals)),
        ];

        match vtx_to_id.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id = vertices.len() as u32;
                vertices.push(*pt);
                let _ = entry.insert(id);
                id
            }
        }
    }

    for tri in triangles {
        indices.push([
            resolve_coord_id(&tri[0], decimals, &mut vtx_to_id, &mut vertices),
            resolve_coord_id(&tri[1], decimals, &mut vtx_to_id, &mut vertices),
            resolve_coord_id(&tri[2], decimals, &mut vtx_to_id, &mut vertices),
        ]);
    }

    vertices.shrink_to_fit();
    SurfaceMesh::from_parts(vertices, indices)
}

/// Indexes a triangle soup without merging: the triangles index consecutive
/// vertex triples.
fn split_triangle_soup(triangles: &[RawTriangle]) -> SurfaceMesh {
    let mut vertices = Vec::with_capacity(triangles.len() * 3);
    let mut indices = Vec::with_capacity(triangles.len());

    for tri in triangles {
        let base = vertices.len() as u32;
        vertices.extend_from_slice(tri);
        indices.push([base, base + 1, base + 2]);
    }

    SurfaceMesh::from_parts(vertices, indices)
}

/// Encodes `mesh` as binary STL into `w`.
///
/// Facet normals are recomputed from the triangle winding; a degenerate
/// triangle gets a zero normal.
pub fn write_stl<W: Write>(mesh: &SurfaceMesh, w: &mut W) -> std::io::Result<()> {
    let mut header = [0u8; HEADER_LEN];
    let tag = b"binary STL; exported by grainshape";
    header[..tag.len()].copy_from_slice(tag);
    w.write_all(&header)?;
    w.write_all(&(mesh.indices().len() as u32).to_le_bytes())?;

    for idx in mesh.indices() {
        let a = mesh.vertices()[idx[0] as usize];
        let b = mesh.vertices()[idx[1] as usize];
        let c = mesh.vertices()[idx[2] as usize];

        let v = (b - a).cross(&(c - a));
        let norm = v.norm();
        let n = if norm > 0.0 { v / norm } else { Vector::zeros() };

        for val in [n.x, n.y, n.z] {
            w.write_all(&(val as f32).to_le_bytes())?;
        }
        for pt in [a, b, c] {
            for val in [pt.x, pt.y, pt.z] {
                w.write_all(&(val as f32).to_le_bytes())?;
            }
        }
        w.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

impl SurfaceMesh {
    /// Writes this mesh as a binary STL file at the given path.
    pub fn to_stl_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut bytes = Vec::new();
        write_stl(self, &mut bytes)?;
        std::fs::write(path, bytes)
    }
}

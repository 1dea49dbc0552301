//! Mesh blob loading
//!
//! Geometry arrives as one binary blob of three ordered chunks: interleaved
//! vertex records, a flat name-character buffer, and an index mapping name
//! ranges to vertex ranges. Any structural problem is a fatal load error;
//! the simulation must not start on a corrupt blob.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use bytemuck::{Pod, Zeroable};

/// One interleaved vertex record as stored in the `dat0` chunk.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexRecord {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [u8; 4],
}

const _: () = assert!(size_of::<VertexRecord>() == 28);

/// One `idx0` entry: a name substring mapped to a vertex range.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct IndexEntry {
    name_begin: u32,
    name_end: u32,
    vertex_begin: u32,
    vertex_end: u32,
}

const _: () = assert!(size_of::<IndexEntry>() == 16);

/// A contiguous vertex range within the loaded library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh {
    pub first: u32,
    pub count: u32,
}

/// All vertex data plus the name index, loaded once at startup.
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    vertices: Vec<VertexRecord>,
    index: HashMap<String, Mesh>,
}

impl MeshLibrary {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading mesh blob {}", path.display()))?;
        Self::from_bytes(&bytes)
    }

    /// Parse the three-chunk blob. Chunks must appear in order; every index
    /// entry is validated against the name and vertex buffers.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = bytes;

        let vertex_bytes = read_chunk(&mut cursor, b"dat0")?;
        ensure!(
            vertex_bytes.len() % size_of::<VertexRecord>() == 0,
            "vertex chunk is {} bytes, not a whole number of records",
            vertex_bytes.len()
        );
        let vertices: Vec<VertexRecord> = vertex_bytes
            .chunks_exact(size_of::<VertexRecord>())
            .map(bytemuck::pod_read_unaligned)
            .collect();

        let names = read_chunk(&mut cursor, b"str0")?;

        let index_bytes = read_chunk(&mut cursor, b"idx0")?;
        ensure!(
            index_bytes.len() % size_of::<IndexEntry>() == 0,
            "index chunk is {} bytes, not a whole number of entries",
            index_bytes.len()
        );
        if !cursor.is_empty() {
            log::warn!("{} trailing bytes after mesh index", cursor.len());
        }

        let mut index = HashMap::new();
        for chunk in index_bytes.chunks_exact(size_of::<IndexEntry>()) {
            let entry: IndexEntry = bytemuck::pod_read_unaligned(chunk);
            ensure!(
                entry.name_begin <= entry.name_end && entry.name_end as usize <= names.len(),
                "invalid name range {}..{} (name buffer holds {} bytes)",
                entry.name_begin,
                entry.name_end,
                names.len()
            );
            ensure!(
                entry.vertex_begin <= entry.vertex_end
                    && entry.vertex_end as usize <= vertices.len(),
                "invalid vertex range {}..{} ({} vertices loaded)",
                entry.vertex_begin,
                entry.vertex_end,
                vertices.len()
            );

            let name = std::str::from_utf8(&names[entry.name_begin as usize..entry.name_end as usize])
                .context("mesh name is not valid UTF-8")?
                .to_string();
            let mesh = Mesh {
                first: entry.vertex_begin,
                count: entry.vertex_end - entry.vertex_begin,
            };
            if index.insert(name.clone(), mesh).is_some() {
                bail!("duplicate mesh name {name:?} in index");
            }
        }

        Ok(Self { vertices, index })
    }

    /// Exact-name lookup.
    pub fn lookup(&self, name: &str) -> Result<Mesh> {
        self.index
            .get(name)
            .copied()
            .with_context(|| format!("mesh named {name:?} does not appear in index"))
    }

    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    pub fn mesh_count(&self) -> usize {
        self.index.len()
    }
}

/// Read one `[tag][u32 size][payload]` chunk, advancing the cursor.
fn read_chunk<'a>(cursor: &mut &'a [u8], tag: &[u8; 4]) -> Result<&'a [u8]> {
    ensure!(
        cursor.len() >= 8,
        "blob truncated before {:?} chunk header",
        String::from_utf8_lossy(tag)
    );
    let (header, rest) = cursor.split_at(8);
    ensure!(
        &header[..4] == tag,
        "expected chunk {:?}, found {:?}",
        String::from_utf8_lossy(tag),
        String::from_utf8_lossy(&header[..4])
    );
    let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
    ensure!(
        rest.len() >= size,
        "chunk {:?} claims {size} bytes but only {} remain",
        String::from_utf8_lossy(tag),
        rest.len()
    );
    let (payload, remainder) = rest.split_at(size);
    *cursor = remainder;
    Ok(payload)
}

/// The named meshes the game draws, resolved once at startup. A missing
/// name is a fatal error, the same as a corrupt blob.
#[derive(Debug, Clone)]
pub struct GameMeshes {
    /// White aim bar
    pub cursor: Mesh,
    /// Red charge-meter bar
    pub cursor_red: Mesh,
    pub duck: Mesh,
    pub target: Mesh,
    pub enemy: Mesh,
    /// Digit glyphs 0-9 for the score readout
    pub digits: [Mesh; 10],
}

impl GameMeshes {
    pub fn resolve(library: &MeshLibrary) -> Result<Self> {
        let mut digits = [Mesh { first: 0, count: 0 }; 10];
        for (value, slot) in digits.iter_mut().enumerate() {
            *slot = library.lookup(&value.to_string())?;
        }
        Ok(Self {
            cursor: library.lookup("White")?,
            cursor_red: library.lookup("Red")?,
            duck: library.lookup("Doll")?,
            target: library.lookup("Egg")?,
            enemy: library.lookup("Cube")?,
            digits,
        })
    }
}

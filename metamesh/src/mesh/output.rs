//! Mesh output implementation
use super::Mesh;
use std::io::{BufWriter, Write};

impl Mesh {
    /// Writes a binary STL to the given output
    ///
    /// Each facet's normal is the normalized mean of its three vertex normals.
    pub fn write_stl<F: std::io::Write>(
        &self,
        out: &mut F,
    ) -> Result<(), crate::Error> {
        // We're going to do many small writes and will typically be writing to
        // a file, so using a `BufWriter` saves excessive syscalls.
        let mut out = BufWriter::new(out);
        const HEADER: &[u8] = b"This is a binary STL file exported by metamesh";
        static_assertions::const_assert!(HEADER.len() <= 80);
        out.write_all(HEADER)?;
        out.write_all(&[0u8; 80 - HEADER.len()])?;
        out.write_all(&(self.triangle_count() as u32).to_le_bytes())?;
        for t in self.triangles() {
            let normal: nalgebra::Vector3<f64> =
                t.iter().map(|i| self.normals[*i as usize]).sum();
            let normal = normal.try_normalize(0.0).unwrap_or(normal);
            for p in &normal {
                out.write_all(&(*p as f32).to_le_bytes())?;
            }
            for i in t {
                for p in &self.vertices[i as usize] {
                    out.write_all(&(*p as f32).to_le_bytes())?;
                }
            }
            out.write_all(&[0u8; std::mem::size_of::<u16>()])?; // attributes
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Vector3;

    fn read_f32s(b: &[u8]) -> Vec<f32> {
        b.chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn test_stl_layout() {
        let mut mesh = Mesh::new();
        mesh.push_triangle(
            [
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
            ],
            [Vector3::z(), Vector3::z(), Vector3::new(0.0, 0.0, 1.0)],
        )
        .unwrap();

        let mut buf = vec![];
        mesh.write_stl(&mut buf).unwrap();
        assert_eq!(buf.len(), 80 + 4 + 50);
        assert!(buf.starts_with(b"This is a binary STL file"));
        assert_eq!(&buf[80..84], &1u32.to_le_bytes());

        let floats = read_f32s(&buf[84..84 + 48]);
        assert_eq!(&floats[0..3], &[0.0, 0.0, 1.0]); // normal
        assert_eq!(&floats[3..6], &[0.0, 0.0, 1.0]);
        assert_eq!(&floats[6..9], &[1.0, 0.0, 1.0]);
        assert_eq!(&floats[9..12], &[0.0, 1.0, 1.0]);
        assert_eq!(&buf[132..134], &[0, 0]);
    }

    #[test]
    fn test_empty_stl() {
        let mut buf = vec![];
        Mesh::new().write_stl(&mut buf).unwrap();
        assert_eq!(buf.len(), 84);
        assert_eq!(&buf[80..], &[0, 0, 0, 0]);
    }
}

use crate::config::{ICON_MIME_TYPE, icon_file_name};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl IconEntry {
    pub fn png(size: u32) -> Self {
        IconEntry {
            src: icon_file_name(size),
            sizes: format!("{}x{}", size, size),
            mime_type: ICON_MIME_TYPE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub icons: Vec<IconEntry>,
}

impl Manifest {
    /// Single-line JSON, overwriting whatever is at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        self.write_to(path).map_err(|source| Error::ManifestWriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.serialize(&mut Serializer::with_formatter(&mut out, ManifestFormatter))?;
        out.flush()
    }
}

/// One line with `", "` and `": "` separators; non-ASCII text is escaped as
/// `\uXXXX`.
struct ManifestFormatter;

impl Formatter for ManifestFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

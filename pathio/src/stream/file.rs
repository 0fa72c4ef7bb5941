//! File-backed input.
//!
//! [`FileSource`] adapts a host file handle to the [`Source`]
//! primitive, pulling one UTF-8 character at a time through a buffered
//! reader. Opening goes through [`LocalFileSystem`] so the pathname
//! encoding hook applies before the handle is acquired.

use std::fs::File;
use std::io::BufReader;

use crate::error::{Error, Result};
use crate::fs::{FsProbe, LocalFileSystem};
use crate::path::AbstractPath;
use crate::stream::input::{InputStream, Source};

/// A source that pulls units from a host file.
#[derive(Debug)]
pub struct FileSource {
    /// Dropped on close; a closed source pulls nothing.
    reader: Option<BufReader<File>>,
}

impl FileSource {
    /// Opens the file named by an abstract pathname for reading.
    ///
    /// The returned stream records the absolute pathname as its origin.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::FileNotFound`] when the pathname does not
    /// name an existing regular file, and propagates host I/O errors
    /// from acquiring the handle.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use pathio::fs::LocalFileSystem;
    /// use pathio::path::AbstractPath;
    /// use pathio::stream::FileSource;
    ///
    /// let fs = LocalFileSystem::new();
    /// let path = AbstractPath::new("notes.txt", Arc::new(LocalFileSystem::new())).unwrap();
    /// let mut stream = FileSource::open(&path, &fs).unwrap();
    /// let first_line = stream.read_line(None).unwrap();
    /// ```
    pub fn open(path: &AbstractPath, fs: &LocalFileSystem) -> Result<InputStream<Self>> {
        let absolute = path.absolute_path();
        if !fs.is_file(absolute) {
            return Err(Error::FileNotFound {
                path: absolute.to_string(),
            });
        }

        let handle = File::open(fs.local_file_name(absolute))?;
        log::debug!("opened '{absolute}' for reading");
        let source = Self {
            reader: Some(BufReader::new(handle)),
        };
        Ok(InputStream::with_origin(source, absolute))
    }
}

impl Source for FileSource {
    fn pull(&mut self) -> Result<Option<char>> {
        match self.reader.as_mut() {
            Some(reader) => crate::stream::read_unit(reader),
            None => Ok(None),
        }
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the reader releases the host handle.
        self.reader = None;
        Ok(())
    }
}

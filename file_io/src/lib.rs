mod error;

pub use error::Error;

use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn create_file_buf_write<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

pub fn open_file_buf_read<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Writes `value` to `path` as a bincode snapshot, replacing any existing file.
pub fn save_snapshot<P, T>(path: P, value: &T) -> Result<(), Error>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let mut writer = create_file_buf_write(path)?;
    bincode::serialize_into(&mut writer, value)?;
    // BufWriter swallows errors on drop
    writer.flush()?;
    log::debug!("saved snapshot to {}", path.display());
    Ok(())
}

pub fn load_snapshot<P, T>(path: P) -> Result<T, Error>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let reader = open_file_buf_read(path)?;
    let value = bincode::deserialize_from(reader)?;
    log::debug!("loaded snapshot from {}", path.display());
    Ok(value)
}

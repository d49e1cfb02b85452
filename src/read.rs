use std::{io, path::Path};

use lexfreq::error::Error;
use tokio::{fs::File, io::AsyncReadExt};

/// Whole-document file reader. The only I/O the pipeline depends on; a
/// missing file becomes the core's not-found condition.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read<P: AsRef<Path>>(&self, path: P) -> Result<String, Error> {
        let path = path.as_ref();
        let id = path.display().to_string();

        let mut file = match File::open(path).await {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(Error::DocumentNotFound { id });
            }
            Err(error) => {
                return Err(Error::DocumentRead {
                    id,
                    kind: error.kind(),
                });
            }
        };

        let mut buffer = String::new();
        file.read_to_string(&mut buffer)
            .await
            .map_err(|error| Error::DocumentRead {
                id,
                kind: error.kind(),
            })?;

        Ok(buffer)
    }
}

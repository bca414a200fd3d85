use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Durable commit store.
///
/// One file per commit, named by the full object id, holding the
/// zlib-compressed JSON rendering of the commit. The store is append-only
/// except for the single sanctioned rewrite: re-storing a merge commit after
/// its second parent is attached, under the same id.
pub struct Database {
    path: Box<std::path::Path>,
}

impl Database {
    pub fn new(path: Box<std::path::Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn store(&self, commit: &Commit) -> anyhow::Result<()> {
        let object_path = self.path.join(commit.id().as_ref());
        let object_content =
            serde_json::to_vec(commit).context("unable to serialize commit object")?;

        self.write_object(object_path, object_content.into())
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_path = self.path.join(object_id.as_ref());

        let object_content = std::fs::read(&object_path).context(format!(
            "unable to read commit object {}",
            object_path.display()
        ))?;
        let object_content = Self::decompress(object_content.into())?;

        serde_json::from_slice(&object_content)
            .context(format!("corrupt commit object {}", object_id))
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.as_ref()).is_file()
    }

    /// Resolve an id prefix to the single commit it abbreviates.
    ///
    /// Returns `None` when no stored id starts with the prefix or when the
    /// prefix is ambiguous.
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<Option<ObjectId>> {
        let mut candidates = self
            .list_ids()?
            .into_iter()
            .filter(|oid| oid.as_ref().starts_with(prefix));

        match (candidates.next(), candidates.next()) {
            (Some(oid), None) => Ok(Some(oid)),
            _ => Ok(None),
        }
    }

    /// Every stored commit id, in storage (lexicographic filename) order.
    pub fn list_ids(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut ids = walkdir::WalkDir::new(self.path.as_ref())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                // skip anything that is not a full hex id, e.g. leftover
                // temp files from an interrupted write
                ObjectId::try_parse(entry.file_name().to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>();
        ids.sort();

        Ok(ids)
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make the write atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

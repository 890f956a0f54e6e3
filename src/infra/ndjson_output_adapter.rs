use anyhow::anyhow;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use crate::app::ports::{ArticleOutputPort, RejectionOutputPort};
use crate::app::records::{RejectedArticleRecord, ValidatedArticleRecord};

/// File-based output that appends one JSON document per line.
/// Implements both output ports, so one adapter per file is enough.
pub struct NdjsonFileOutputAdapter {
    file_writer: Mutex<BufWriter<std::fs::File>>,
    file_path: String,
}

impl NdjsonFileOutputAdapter {
    /// Creates (or truncates) the file, creating parent directories as needed.
    pub fn new(file_path: &str) -> anyhow::Result<Self> {
        let path = Path::new(file_path);
        let dir = path.parent().unwrap_or(Path::new("."));
        std::fs::create_dir_all(dir)?;

        info!("Creating output file: {}", file_path);

        let file_writer = BufWriter::new(
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(file_path)?,
        );

        Ok(Self {
            file_writer: Mutex::new(file_writer),
            file_path: file_path.to_string(),
        })
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    fn write_line<T: Serialize>(&self, record: &T) -> anyhow::Result<()> {
        let json_line = serde_json::to_string(record)?;

        let mut writer = self
            .file_writer
            .lock()
            .map_err(|_| anyhow!("output writer for {} is poisoned", self.file_path))?;
        writeln!(writer, "{}", json_line)?;
        writer.flush()?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ArticleOutputPort for NdjsonFileOutputAdapter {
    async fn write_validated_article(&self, record: &ValidatedArticleRecord) -> anyhow::Result<()> {
        self.write_line(record)
    }
}

#[async_trait::async_trait]
impl RejectionOutputPort for NdjsonFileOutputAdapter {
    async fn write_rejected_article(&self, record: &RejectedArticleRecord) -> anyhow::Result<()> {
        self.write_line(record)
    }
}

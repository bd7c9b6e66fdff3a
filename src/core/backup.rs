use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipping it.
    /// Returns the final path, or `None` when the user declined to overwrite.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists()
            && !ask_confirmation(&format!("The file '{}' already exists. Overwrite?", dest.display()))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let zipped = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            zipped
        } else {
            dest.to_path_buf()
        };

        let pool = DbPool::new(db_path)?;
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Zip `path` next to itself (`<name>.zip`).
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let mut zip = ZipWriter::new(fs::File::create(&zip_path)?);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let entry = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "ticktrack.sqlite".to_string());

    zip.start_file(entry, options)?;
    std::io::copy(&mut fs::File::open(path)?, &mut zip)?;
    zip.finish()?;

    success(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

use crate::config::{Config, FAVICON_SIZES, icon_file_name};
use crate::error::{Error, Result};
use crate::img;
use crate::manifest::{IconEntry, Manifest};
use crate::png;
use log::{debug, info};
use std::fs;
use std::path::Path;

pub struct FaviconGenerator {
    config: Config,
}

impl FaviconGenerator {
    pub fn new(config: Config) -> Self {
        FaviconGenerator { config }
    }

    /// Writes one PNG per entry of [`FAVICON_SIZES`] plus the manifest.
    ///
    /// Existing files are overwritten. A failure part way through leaves the
    /// icons written so far on disk.
    pub fn generate(&self, source: &Path) -> Result<Manifest> {
        let src = img::load(source)?;
        debug!(
            "loaded {} ({}x{})",
            source.display(),
            src.width(),
            src.height()
        );

        let mut icons = Vec::with_capacity(FAVICON_SIZES.len());
        for size in FAVICON_SIZES {
            let resized = img::square(&src, size);
            let encoded =
                png::encode_img(&resized).map_err(|source| Error::EncodeFailed { size, source })?;

            let out_path = self.config.out_dir.join(icon_file_name(size));
            fs::write(&out_path, encoded).map_err(|source| Error::WriteFailed {
                path: out_path.clone(),
                source,
            })?;
            debug!("wrote {}", out_path.display());

            icons.push(IconEntry::png(size));
        }

        let manifest = Manifest {
            name: self.config.app_name.clone(),
            icons,
        };
        manifest.write(&self.config.manifest_path)?;

        info!(
            "generated {} icons, manifest at {}",
            manifest.icons.len(),
            self.config.manifest_path.display()
        );
        Ok(manifest)
    }
}

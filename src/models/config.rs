use std::path::{Path, PathBuf};

use crate::rendering::SaveFormat;

/// Default listen address for the preview server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Image opened on startup when no path is given and it exists.
pub const FALLBACK_IMAGE: &str = "test.png";

/// File name used when a save request names no file.
const DEFAULT_SAVE_STEM: &str = "sketch";

/// Runtime configuration, assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: String,

    /// Image to open before the first request.
    pub initial_image: Option<PathBuf>,

    /// Directory that relative save paths resolve against.
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            initial_image: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl AppConfig {
    /// Pick the startup image: the explicit path if given, otherwise
    /// `test.png` in `cwd` when present.
    pub fn resolve_initial_image(explicit: Option<PathBuf>, cwd: &Path) -> Option<PathBuf> {
        explicit.or_else(|| {
            let fallback = cwd.join(FALLBACK_IMAGE);
            fallback.is_file().then_some(fallback)
        })
    }

    /// Work out where a save request writes and in which format.
    ///
    /// Relative paths land under `output_dir`. A path without an extension
    /// gets the format's extension, `.jpg` when no format was requested.
    /// An explicit format wins over the extension.
    pub fn resolve_save_target(
        &self,
        requested: Option<&str>,
        format: Option<SaveFormat>,
    ) -> Result<(PathBuf, SaveFormat), crate::error::FileError> {
        let mut path = match requested.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) if Path::new(p).is_absolute() => PathBuf::from(p),
            Some(p) => self.output_dir.join(p),
            None => self.output_dir.join(DEFAULT_SAVE_STEM),
        };

        if path.extension().is_none() {
            path.set_extension(format.unwrap_or(SaveFormat::Jpeg).extension());
        }
        let format = match format {
            Some(format) => format,
            None => SaveFormat::from_path(&path)?,
        };
        Ok((path, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.initial_image.is_none());
    }

    #[test]
    fn test_save_target_defaults_to_jpg_in_output_dir() {
        let config = AppConfig::default();
        let (path, format) = config.resolve_save_target(None, None).unwrap();
        assert_eq!(path, PathBuf::from("output/sketch.jpg"));
        assert_eq!(format, SaveFormat::Jpeg);
    }

    #[test]
    fn test_save_target_appends_extension() {
        let config = AppConfig::default();
        let (path, format) = config.resolve_save_target(Some("portrait"), None).unwrap();
        assert_eq!(path, PathBuf::from("output/portrait.jpg"));
        assert_eq!(format, SaveFormat::Jpeg);

        let (path, format) = config
            .resolve_save_target(Some("portrait"), Some(SaveFormat::Png))
            .unwrap();
        assert_eq!(path, PathBuf::from("output/portrait.png"));
        assert_eq!(format, SaveFormat::Png);
    }

    #[test]
    fn test_save_target_uses_extension() {
        let config = AppConfig::default();
        let (path, format) = config
            .resolve_save_target(Some("sub/a.bmp"), None)
            .unwrap();
        assert_eq!(path, PathBuf::from("output/sub/a.bmp"));
        assert_eq!(format, SaveFormat::Bmp);
    }

    #[test]
    fn test_save_target_absolute_path_is_kept() {
        let config = AppConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a.png");
        let (path, _) = config
            .resolve_save_target(target.to_str(), None)
            .unwrap();
        assert_eq!(path, target);
    }

    #[test]
    fn test_save_target_unknown_extension() {
        let config = AppConfig::default();
        let err = config
            .resolve_save_target(Some("a.tiff"), None)
            .unwrap_err();
        assert!(matches!(err, FileError::Encode(_)));
    }

    #[test]
    fn test_initial_image_fallback() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::resolve_initial_image(None, dir.path()), None);

        std::fs::write(dir.path().join("test.png"), b"x").unwrap();
        assert_eq!(
            AppConfig::resolve_initial_image(None, dir.path()),
            Some(dir.path().join("test.png"))
        );

        let explicit = PathBuf::from("photo.jpg");
        assert_eq!(
            AppConfig::resolve_initial_image(Some(explicit.clone()), dir.path()),
            Some(explicit)
        );
    }
}

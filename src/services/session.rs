//! Interactive editing session: the current image, the current parameters
//! and the latest published preview.
//!
//! Every state change that needs a new render takes an issue number while
//! holding the write lock, so issue order equals state order. Renders run on
//! the blocking pool and may finish in any order; a result is published only
//! if nothing newer has been published and it belongs to the current image.

use serde::Serialize;
use sketch_engine::{render, Bitmap, PixelFormat, SketchParams};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::rendering::{loader, save, SaveFormat};

#[derive(Default)]
struct SessionState {
    source: Option<Arc<Bitmap>>,
    source_name: Option<String>,
    params: SketchParams,
    output: Option<Arc<Bitmap>>,
    /// Issue number of the render currently shown.
    published: u64,
    /// Issue number at which the current image was opened. Renders issued
    /// earlier belong to a previous image.
    epoch: u64,
    /// Number of previews published so far.
    revision: u64,
}

/// A render waiting to run against a frozen copy of the session inputs.
struct RenderJob {
    issue: u64,
    source: Arc<Bitmap>,
    params: SketchParams,
}

/// Metadata about the loaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub color: bool,
}

/// Point-in-time view of the session, returned by every API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub image: Option<ImageInfo>,
    pub params: SketchParams,
    pub has_preview: bool,
    pub revision: u64,
}

/// Shared session state behind the HTTP handlers.
pub struct SketchSession {
    state: Arc<RwLock<SessionState>>,
    issued: AtomicU64,
}

impl SketchSession {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            issued: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        snapshot_of(&state)
    }

    pub async fn params(&self) -> SketchParams {
        self.state.read().await.params
    }

    /// Decode an image file and make it the current image.
    pub async fn open_path(&self, path: PathBuf) -> Result<SessionSnapshot, ApiError> {
        let name = display_name(&path);
        let bitmap = tokio::task::spawn_blocking(move || loader::load(&path)).await??;
        self.install(name, bitmap).await
    }

    /// Decode uploaded bytes and make them the current image.
    pub async fn open_bytes(
        &self,
        name: String,
        bytes: Vec<u8>,
    ) -> Result<SessionSnapshot, ApiError> {
        let bitmap =
            tokio::task::spawn_blocking(move || loader::load_from_memory(&bytes)).await??;
        tracing::info!(
            name = %name,
            width = bitmap.width(),
            height = bitmap.height(),
            "Decoded upload"
        );
        self.install(name, bitmap).await
    }

    /// Replace the parameter vector and re-render.
    ///
    /// Invalid parameters are rejected before anything changes. Without an
    /// image the parameters are stored and nothing is rendered.
    pub async fn set_params(&self, params: SketchParams) -> Result<SessionSnapshot, ApiError> {
        params.validate()?;

        let job = {
            let mut state = self.state.write().await;
            state.params = params;
            let issue = self.next_issue();
            match &state.source {
                Some(source) => RenderJob {
                    issue,
                    source: source.clone(),
                    params,
                },
                None => return Ok(snapshot_of(&state)),
            }
        };
        self.run(job).await
    }

    /// Restore default parameters and re-render.
    pub async fn reset_params(&self) -> Result<SessionSnapshot, ApiError> {
        self.set_params(SketchParams::default()).await
    }

    /// The latest published preview.
    pub async fn preview(&self) -> Result<Arc<Bitmap>, ApiError> {
        let state = self.state.read().await;
        match (&state.source, &state.output) {
            (None, _) => Err(ApiError::NoImage),
            (Some(_), None) => Err(ApiError::NoPreview),
            (Some(_), Some(output)) => Ok(output.clone()),
        }
    }

    /// The current input image.
    pub async fn source(&self) -> Result<Arc<Bitmap>, ApiError> {
        self.state.read().await.source.clone().ok_or(ApiError::NoImage)
    }

    /// Encode the latest preview and write it to `path`.
    pub async fn save(&self, path: PathBuf, format: SaveFormat) -> Result<(), ApiError> {
        let output = self.preview().await?;
        tokio::task::spawn_blocking(move || save(&output, &path, format)).await??;
        Ok(())
    }

    async fn install(&self, name: String, bitmap: Bitmap) -> Result<SessionSnapshot, ApiError> {
        bitmap.validate()?;
        let source = Arc::new(bitmap);
        let params = SketchParams::default();

        let job = {
            let mut state = self.state.write().await;
            let issue = self.next_issue();
            state.source = Some(source.clone());
            state.source_name = Some(name);
            state.params = params;
            state.output = None;
            state.epoch = issue;
            RenderJob {
                issue,
                source,
                params,
            }
        };
        self.run(job).await
    }

    /// Render and publish `job` on a detached task.
    ///
    /// The task owns its handle on the state, so a render whose caller is
    /// dropped (client disconnect) still gets published.
    async fn run(&self, job: RenderJob) -> Result<SessionSnapshot, ApiError> {
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            let started = Instant::now();
            let RenderJob {
                issue,
                source,
                params,
            } = job;
            let output = tokio::task::spawn_blocking(move || render(&source, &params)).await??;
            tracing::debug!(
                issue,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Render finished"
            );
            Ok::<_, ApiError>(publish(&state, issue, output).await)
        });
        task.await?
    }

    #[cfg(test)]
    async fn publish(&self, issue: u64, output: Bitmap) -> SessionSnapshot {
        publish(&self.state, issue, output).await
    }

    fn next_issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

async fn publish(state: &RwLock<SessionState>, issue: u64, output: Bitmap) -> SessionSnapshot {
    let mut state = state.write().await;
    if issue >= state.epoch && issue > state.published {
        state.published = issue;
        state.output = Some(Arc::new(output));
        state.revision += 1;
        tracing::debug!(issue, revision = state.revision, "Published preview");
    } else {
        tracing::debug!(
            issue,
            published = state.published,
            epoch = state.epoch,
            "Discarded stale render"
        );
    }
    snapshot_of(&state)
}

fn snapshot_of(state: &SessionState) -> SessionSnapshot {
    let image = state.source.as_ref().map(|source| ImageInfo {
        name: state.source_name.clone().unwrap_or_default(),
        width: source.width(),
        height: source.height(),
        color: source.format() == PixelFormat::Rgb,
    });
    SessionSnapshot {
        image,
        params: state.params,
        has_preview: state.output.is_some(),
        revision: state.revision,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

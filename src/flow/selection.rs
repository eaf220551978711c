// src/flow/selection.rs
//! The one file the form will submit, whichever way the user picked it

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::UploadRequest;
use crate::render::escape_html;
use crate::view::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Browse,
    Drop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    current: Option<SelectedFile>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&SelectedFile> {
        self.current.as_ref()
    }

    /// Replace the selection. A path that is not a readable file leaves the previous
    /// selection and the view untouched.
    pub fn select(
        &mut self,
        view: &mut ViewState,
        path: &Path,
        source: SelectionSource,
    ) -> Result<&SelectedFile> {
        if !path.is_file() {
            anyhow::bail!("Not a file: {}", path.display());
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("File name is not valid UTF-8: {}", path.display()))?;

        info!("Selected {} via {:?}", name, source);

        view.file_name_display = format!(
            r#"<i class="fa-regular fa-file-pdf"></i>{}"#,
            escape_html(&name)
        );
        view.action_area_revealed = true;

        Ok(&*self.current.insert(SelectedFile {
            path: path.to_path_buf(),
            name,
        }))
    }

    /// Only the first dropped file counts; an empty drop changes nothing
    pub fn select_dropped(
        &mut self,
        view: &mut ViewState,
        paths: &[PathBuf],
    ) -> Result<Option<&SelectedFile>> {
        match paths.first() {
            Some(path) => self.select(view, path, SelectionSource::Drop).map(Some),
            None => Ok(None),
        }
    }

    pub fn upload_request(&self, role: &str) -> Option<UploadRequest> {
        self.current.as_ref().map(|file| UploadRequest {
            file_path: file.path.clone(),
            file_name: file.name.clone(),
            role: role.to_string(),
        })
    }
}

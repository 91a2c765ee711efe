//! Asset lookup: which images exist for which logical slots.
//!
//! The story never depends on an image being present. A missing file is
//! answered with `None` and the screen shows the slot's placeholder text.
//!
//! ```text
//! <root>/
//!   title.png | assets/title.png           # title slot
//!   jumpscare.png | assets/jumpscare.png   # game-over slot
//!   assets/stage<N>_<I>.png                # stage N, primary choice I (1-based)
//! ```

use std::path::{Path, PathBuf};

/// A logical image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    Title,
    Jumpscare,
    StageChoice { stage: u8, index: usize },
}

impl AssetSlot {
    /// Candidate paths relative to the asset root, in lookup order.
    fn candidates(self) -> Vec<PathBuf> {
        match self {
            Self::Title => vec![
                PathBuf::from("title.png"),
                Path::new("assets").join("title.png"),
            ],
            Self::Jumpscare => vec![
                PathBuf::from("jumpscare.png"),
                Path::new("assets").join("jumpscare.png"),
            ],
            Self::StageChoice { stage, index } => {
                vec![Path::new("assets").join(format!("stage{stage}_{index}.png"))]
            }
        }
    }

    /// Text shown in place of a missing image.
    pub fn placeholder(self) -> String {
        match self {
            Self::Title => "타이틀 이미지 자리\n- title.png 또는 assets/title.png".to_string(),
            Self::Jumpscare => "jumpscare.png 파일이 폴더에 없어요.".to_string(),
            Self::StageChoice { stage, index } => {
                format!("선택 {index}\n이미지: assets/stage{stage}_{index}.png")
            }
        }
    }
}

/// Answers "is there an image for this slot?".
pub trait AssetLookup {
    fn locate(&self, slot: AssetSlot) -> Option<PathBuf>;
}

/// Looks for assets on disk under a root directory.
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLookup for FsAssets {
    fn locate(&self, slot: AssetSlot) -> Option<PathBuf> {
        slot.candidates()
            .into_iter()
            .map(|rel| self.root.join(rel))
            .find(|path| path.is_file())
    }
}

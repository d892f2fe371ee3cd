//! Native file dialog for picking the feedback image

use super::traits::ImagePicker;
use crate::state::ImageFile;
use async_trait::async_trait;

/// Extensions offered by the dialog filter. The filter is a hint, any file can still be chosen.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Opens the platform file dialog through `rfd`
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdImagePicker;

#[async_trait]
impl ImagePicker for RfdImagePicker {
    async fn pick_image(&self) -> Option<ImageFile> {
        let picked = rfd::AsyncFileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .set_title("Carregar imagem")
            .pick_file()
            .await;

        picked.map(|file| ImageFile::new(file.path()))
    }
}

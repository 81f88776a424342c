//! Simulated Photo Upload

use closet_core::{ClosetError, ImageUploader, Result};

/// Picks a random stock photo
pub struct RandomStockUploader {
    images: Vec<String>,
}

impl RandomStockUploader {
    pub fn new(images: Vec<String>) -> Self {
        Self { images }
    }
}

impl ImageUploader for RandomStockUploader {
    fn upload(&mut self) -> Result<String> {
        if self.images.is_empty() {
            return Err(ClosetError::Upload("no stock images configured".into()));
        }
        let last = self.images.len() - 1;
        let idx = (js_sys::Math::random() * self.images.len() as f64).floor() as usize;
        Ok(self.images[idx.min(last)].clone())
    }
}

//! Statement image storage boundary.
//!
//! Statement screenshots live in per-bank, per-year folders on a remote
//! drive. [`StatementStore`] hides the drive API behind the two operations
//! the pipeline needs: list a folder and fetch one image.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::Bank;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Handle to one stored statement image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Store-assigned identifier, opaque to the pipeline.
    pub id: String,
    /// Human-readable file name, used in logs and error reports.
    pub name: String,
}

/// Trait for statement image stores.
pub trait StatementStore {
    /// List statement images for a bank's folder for the given year.
    fn list_images(&self, bank: Bank, year: i32) -> Result<Vec<ImageRef>>;

    /// Fetch the encoded bytes of one image.
    fn fetch_image(&self, image: &ImageRef) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStore {
        images: Vec<ImageRef>,
    }

    impl StatementStore for FixedStore {
        fn list_images(&self, _bank: Bank, _year: i32) -> Result<Vec<ImageRef>> {
            Ok(self.images.clone())
        }

        fn fetch_image(&self, image: &ImageRef) -> Result<Vec<u8>> {
            if self.images.contains(image) {
                Ok(image.name.as_bytes().to_vec())
            } else {
                Err(StoreError::Fetch {
                    name: image.name.clone(),
                    reason: "not in folder".to_string(),
                })
            }
        }
    }

    #[test]
    fn test_store_round_trip_through_trait_object() {
        let store: Box<dyn StatementStore> = Box::new(FixedStore {
            images: vec![ImageRef {
                id: "abc123".to_string(),
                name: "fatura-08.png".to_string(),
            }],
        });

        let images = store.list_images(Bank::C6, 2024).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(store.fetch_image(&images[0]).unwrap(), b"fatura-08.png");
    }

    #[test]
    fn test_fetch_error_names_the_image() {
        let store = FixedStore { images: Vec::new() };
        let missing = ImageRef {
            id: "zzz".to_string(),
            name: "missing.png".to_string(),
        };

        let err = store.fetch_image(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }
}

//! Conversions between the crate's containers/views and grayscale
//! buffers of the `image` crate. Views borrow the pixel data without
//! copying.

use crate::errors::ImageBufferError;
use crate::image::GrayImage;
use crate::image_view::{GrayImageView, GrayImageViewMut};

impl<'a> TryFrom<&'a image::GrayImage> for GrayImageView<'a> {
    type Error = ImageBufferError;

    fn try_from(img: &'a image::GrayImage) -> Result<Self, Self::Error> {
        GrayImageView::new(img.as_raw(), img.width(), img.height())
    }
}

impl<'a> TryFrom<&'a mut image::GrayImage> for GrayImageViewMut<'a> {
    type Error = ImageBufferError;

    fn try_from(img: &'a mut image::GrayImage) -> Result<Self, Self::Error> {
        let width = img.width();
        let height = img.height();
        GrayImageViewMut::new(img, width, height)
    }
}

impl TryFrom<image::GrayImage> for GrayImage {
    type Error = ImageBufferError;

    fn try_from(img: image::GrayImage) -> Result<Self, Self::Error> {
        let width = img.width();
        let height = img.height();
        GrayImage::from_vec_u8(width, height, img.into_raw())
    }
}

impl From<GrayImage> for image::GrayImage {
    fn from(img: GrayImage) -> Self {
        let width = img.width();
        let height = img.height();
        // Buffer size matches dimensions by construction.
        image::GrayImage::from_raw(width, height, img.into_vec()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_buffer_converts_both_ways() {
        let luma = image::GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let view = GrayImageView::try_from(&luma).unwrap();
        assert_eq!(view.width(), 2);
        assert_eq!(view.height(), 2);

        let owned = GrayImage::try_from(luma).unwrap();
        let back = image::GrayImage::from(owned);
        assert_eq!(back.into_raw(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_luma_buffer_is_rejected() {
        let luma = image::GrayImage::from_raw(0, 0, vec![]).unwrap();
        assert_eq!(
            GrayImage::try_from(luma).unwrap_err(),
            ImageBufferError::ZeroDimension
        );
    }
}

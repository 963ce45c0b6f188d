use scenematch::{PixelBuffer, RgbaView, SceneMatchError};

#[test]
fn pixel_buffer_rejects_invalid_dimensions() {
    let err = PixelBuffer::new(Vec::new(), 0, 1).unwrap_err();
    assert!(matches!(
        err,
        SceneMatchError::InvalidDimensions {
            width: 0,
            height: 1
        }
    ));

    let err = PixelBuffer::filled(3, 0, [0, 0, 0, 255]).unwrap_err();
    assert!(matches!(
        err,
        SceneMatchError::InvalidDimensions {
            width: 3,
            height: 0
        }
    ));
}

#[test]
fn pixel_buffer_requires_exact_sample_count() {
    let err = PixelBuffer::new(vec![0u8; 15], 2, 2).unwrap_err();
    assert!(matches!(
        err,
        SceneMatchError::BufferSizeMismatch {
            expected: 16,
            got: 15
        }
    ));

    let err = PixelBuffer::new(vec![0u8; 17], 2, 2).unwrap_err();
    assert!(matches!(
        err,
        SceneMatchError::BufferSizeMismatch {
            expected: 16,
            got: 17
        }
    ));

    assert!(PixelBuffer::new(vec![0u8; 16], 2, 2).is_ok());
}

#[test]
fn pixel_buffer_rejects_overflowing_dimensions() {
    let err = PixelBuffer::new(Vec::new(), usize::MAX, 2).unwrap_err();
    assert!(matches!(err, SceneMatchError::InvalidDimensions { .. }));
}

#[test]
fn rgba_view_rejects_small_buffer() {
    let data = [0u8; 15];
    let err = RgbaView::from_slice(&data, 2, 2).unwrap_err();
    assert!(matches!(
        err,
        SceneMatchError::BufferTooSmall { needed: 16, got: 15 }
    ));
}

#[test]
fn rgba_view_rows_and_pixels_match_buffer() {
    let data: Vec<u8> = (0u8..48).collect();
    let buffer = PixelBuffer::new(data.clone(), 4, 3).unwrap();
    let view = buffer.view();
    assert_eq!(view.width(), 4);
    assert_eq!(view.height(), 3);
    assert_eq!(view.stride(), 4);
    assert_eq!(view.row(1).unwrap(), &data[16..32]);
    assert_eq!(view.pixel(3, 2).unwrap(), &[44u8, 45, 46, 47]);
    assert_eq!(buffer.pixel(3, 2), view.pixel(3, 2));
    assert!(view.pixel(4, 0).is_none());
}

#[test]
fn put_pixel_and_filled_agree() {
    let mut buffer = PixelBuffer::filled(3, 2, [1, 2, 3, 4]).unwrap();
    buffer.put_pixel(2, 1, [9, 8, 7, 6]);
    buffer.put_pixel(3, 1, [0, 0, 0, 0]);
    assert_eq!(buffer.pixel(2, 1).unwrap(), &[9u8, 8, 7, 6]);
    assert_eq!(buffer.pixel(0, 0).unwrap(), &[1u8, 2, 3, 4]);
    assert_eq!(buffer.clone().into_raw().len(), 24);
}

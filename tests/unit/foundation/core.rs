use super::*;

#[test]
fn frame_index_next_increments() {
    assert_eq!(FrameIndex(0).next(), FrameIndex(1));
    assert_eq!(FrameIndex(41).next(), FrameIndex(42));
}

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}

// Fatal statuses and their stable codes.

use lz4_gradual::gradual::{GradualDecoder, GradualError, Status};

#[test]
fn zero_offset_is_invalid() {
    let mut dec = GradualDecoder::new(64 * 1024).unwrap();
    let mut out = [0u8; 16];
    assert_eq!(
        dec.decode(&[0x10, b'a', 0x00, 0x00], &mut out),
        Err(GradualError::InvalidSequence)
    );
}

#[test]
fn length_overflow_is_invalid() {
    let mut block = vec![0xF0];
    block.extend(std::iter::repeat(255u8).take(8_300_000));
    let mut dec = GradualDecoder::new(64 * 1024).unwrap();
    let mut out = [0u8; 16];
    assert_eq!(dec.decode(&block, &mut out), Err(GradualError::InvalidSequence));
    assert_eq!(dec.total_out(), 0);
}

#[test]
fn length_overflow_detected_across_calls() {
    let mut dec = GradualDecoder::new(64 * 1024).unwrap();
    let mut out = [0u8; 16];
    assert_eq!(dec.decode(&[0xF0], &mut out).unwrap().status, Status::NeedInput);
    let chunk = vec![255u8; 1 << 20];
    let mut result = Ok(());
    for _ in 0..16 {
        match dec.decode(&chunk, &mut out) {
            Ok(p) => assert_eq!(p.status, Status::NeedInput),
            Err(e) => {
                result = Err(e);
                break;
            }
        }
    }
    assert_eq!(result, Err(GradualError::InvalidSequence));
}

#[test]
fn status_codes_are_stable() {
    assert_eq!(Status::MaybeFinished.code(), -1);
    assert_eq!(Status::NeedInput.code(), -2);
    assert_eq!(Status::NeedOutput.code(), -3);
    assert_eq!(GradualError::NoMemory.code(), 1);
    assert_eq!(GradualError::OutOfPrefixBuffer.code(), 2);
    assert_eq!(GradualError::InvalidSequence.code(), 3);
    assert_eq!(GradualError::Internal.code(), 99);
}

#[test]
fn status_names_are_stable() {
    assert_eq!(Status::MaybeFinished.to_string(), "MAYBE_FINISHED");
    assert_eq!(Status::NeedInput.as_str(), "NEED_INPUT");
    assert_eq!(Status::NeedOutput.as_str(), "NEED_OUTPUT");
    assert_eq!(GradualError::NoMemory.as_str(), "ERROR_NO_MEMORY");
    assert_eq!(GradualError::OutOfPrefixBuffer.to_string(), "ERROR_OUT_OF_PREFIX_BUFFER");
    assert_eq!(GradualError::InvalidSequence.as_str(), "ERROR_INVALID_SEQUENCE");
    assert_eq!(GradualError::Internal.as_str(), "ERROR_INTERNAL");
}

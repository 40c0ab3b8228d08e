use fixity_fs::NormalizedPath;
use fixity_fs::checksum::{compute_content_digest, compute_reader_digest, is_digest_hex};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_digest_is_hex_and_streaming_agrees(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let in_memory = compute_content_digest(&data);
        let streamed = compute_reader_digest(std::io::Cursor::new(&data)).unwrap();

        prop_assert!(is_digest_hex(&in_memory));
        prop_assert_eq!(in_memory, streamed);
    }

    #[test]
    fn test_normalization_is_idempotent(s in "[a-z./]{0,40}") {
        let once = NormalizedPath::new(&s);
        let twice = NormalizedPath::new(once.as_str());

        prop_assert_eq!(&once, &twice);
        // "." only survives as the whole path
        prop_assert!(once.as_str() == "." || !once.as_str().split('/').any(|c| c == "."));
    }
}

use std::io::Cursor;

use reshape::{Cipher, Endian, Error, ShapesBuilder, Version};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn build(version: Version, seed: u8, records: &[(u32, Vec<u8>)]) -> Vec<u8> {
    let mut writer = ShapesBuilder::new().writer(Cursor::new(Vec::new()), version, seed);
    for (ty, payload) in records {
        writer.write_entity(*ty, payload.clone());
    }
    writer.finish().unwrap().into_inner()
}

fn roundtrip(version: Version, seed: u8) {
    let records = vec![
        (1u32, pattern(10)),
        (7, vec![]),
        (2, pattern(1000)),
        (1, pattern(64)),
    ];
    let bytes = build(version, seed, &records);

    let mut reader = Cursor::new(bytes);
    let shapes = ShapesBuilder::new().reader(&mut reader).unwrap();

    assert_eq!(shapes.version(), version);
    assert_eq!(shapes.endian(), version.endian());
    assert_eq!(shapes.entities().len(), records.len());

    for (entity, (ty, payload)) in shapes.entities().iter().zip(&records) {
        assert_eq!(entity.ty, *ty);
        assert_eq!(entity.size, payload.len() as u32);
        assert_eq!(&shapes.read_payload(entity, &mut reader).unwrap(), payload);
    }

    // later entities always resume at or past the end of the keystream the
    // earlier ones reserved
    for pair in shapes.entities().windows(2) {
        assert!(pair[1].block_index >= pair[0].block_index + u64::from(pair[0].size).div_ceil(64));
    }
}

macro_rules! roundtrip_tests {
    ( $( $name:ident : $version:expr, $seed:expr ; )* ) => {
        $( paste::paste! {
            #[test]
            fn [<roundtrip_ $name>]() {
                roundtrip($version, $seed);
            }
        } )*
    };
}

roundtrip_tests! {
    v2_legacy_clear: Version::V2, 0;
    v3: Version::V3, 9;
    v4: Version::V4, 255;
    v5: Version::V5, 9;
    v6: Version::V6, 1;
    v7: Version::V7, 0x7F;
    v5_seed_zero_clear: Version::V5, 0;
}

#[test]
fn end_to_end_known_layout() {
    // version 5 / seed 9, one type-1 entity with a 10-byte payload,
    // assembled by hand with the raw block accounting rather than through
    // the writer
    let cipher = Cipher::new(9);
    let payload = pattern(10);

    let mut bytes = vec![5, 0, 9, 0];
    let mut field = 1u32.to_le_bytes(); // entity count, block 0
    let mut index = cipher.apply(&mut field, 0);
    bytes.extend_from_slice(&field);
    let mut field = 1u32.to_le_bytes(); // type, block 1
    index = cipher.apply(&mut field, index);
    bytes.extend_from_slice(&field);
    let mut field = 10u32.to_le_bytes(); // size, block 2
    index = cipher.apply(&mut field, index);
    bytes.extend_from_slice(&field);
    let mut body = payload.clone(); // payload, block 3
    cipher.apply(&mut body, index);
    bytes.extend_from_slice(&body);

    let mut reader = Cursor::new(bytes);
    let shapes = ShapesBuilder::new().reader(&mut reader).unwrap();
    assert_eq!(shapes.version(), Version::V5);
    assert_eq!(shapes.seed(), 9);
    assert!(shapes.is_encrypted());

    let [entity] = shapes.entities() else {
        panic!("expected exactly one entity")
    };
    assert_eq!(entity.ty, 1);
    assert_eq!(entity.size, 10);
    assert_eq!(entity.offset, 16);
    assert_eq!(entity.block_index, 3);

    let read_back = shapes.read_payload(entity, &mut reader).unwrap();
    assert_eq!(hex::encode(&read_back), hex::encode(&payload));
    // idempotent: same bytes on the second fetch
    assert_eq!(shapes.read_payload(entity, &mut reader).unwrap(), read_back);
}

#[test]
fn entity_block_accounting() {
    let sizes = [0usize, 1, 64, 65, 200];
    let records: Vec<(u32, Vec<u8>)> = sizes.iter().map(|&s| (3, pattern(s))).collect();
    let bytes = build(Version::V6, 42, &records);

    let mut reader = Cursor::new(bytes);
    let shapes = ShapesBuilder::new().reader(&mut reader).unwrap();

    // count takes one block, each entity's type+size take one block apiece,
    // each payload reserves ceil(size/64)
    let mut expected = 1u64;
    for (i, entity) in shapes.entities().iter().enumerate() {
        assert_eq!(entity.block_index, expected + 2, "entity {i}");
        expected += 2 + (sizes[i] as u64).div_ceil(64);
    }
}

#[test]
fn implausible_count_is_a_decryption_failure() {
    for count in [2_000_000u32, u32::MAX] {
        let cipher = Cipher::new(9);
        let mut bytes = vec![5, 0, 9, 0];
        let mut field = count.to_le_bytes();
        cipher.apply(&mut field, 0);
        bytes.extend_from_slice(&field);

        let err = ShapesBuilder::new()
            .reader(&mut Cursor::new(bytes))
            .unwrap_err();
        assert!(matches!(err, Error::Decryption), "count {count}: {err}");
    }
}

#[test]
fn scan_running_past_eof_is_a_decryption_failure() {
    let bytes = build(Version::V5, 9, &[(1, pattern(100)), (2, pattern(300))]);

    // sever the tail: the last entity's declared size now reaches past EOF
    let cut = &bytes[..bytes.len() - 20];
    let err = ShapesBuilder::new()
        .reader(&mut Cursor::new(cut.to_vec()))
        .unwrap_err();
    assert!(matches!(err, Error::Decryption), "{err}");

    // severing inside the directory scalars fails the same way
    let cut = &bytes[..9];
    let err = ShapesBuilder::new()
        .reader(&mut Cursor::new(cut.to_vec()))
        .unwrap_err();
    assert!(matches!(err, Error::Decryption), "{err}");
}

#[test]
fn truncated_payload_only_fails_that_entity() {
    let bytes = build(Version::V5, 9, &[(1, pattern(100))]);
    let mut reader = Cursor::new(bytes.clone());
    let shapes = ShapesBuilder::new().reader(&mut reader).unwrap();
    let entity = shapes.entities()[0];

    // the file shrank between scan and fetch (a different, shorter handle)
    let mut short = Cursor::new(bytes[..entity.offset as usize + 50].to_vec());
    match shapes.read_payload(&entity, &mut short) {
        Err(Error::TruncatedPayload { size: 100, available: 50 }) => {}
        other => panic!("expected truncated payload, got {other:?}"),
    }

    // the directory built from the intact handle is still usable
    assert_eq!(
        shapes.read_payload(&entity, &mut reader).unwrap(),
        pattern(100)
    );
}

#[test]
fn seed_override_ignores_the_header_byte() {
    let mut bytes = build(Version::V5, 9, &[(1, pattern(50))]);
    bytes[2] = 0x4D; // stomp the stored seed

    let mut reader = Cursor::new(bytes);
    let shapes = ShapesBuilder::new().seed(9).reader(&mut reader).unwrap();

    // override feeds the cipher, not version/endian detection
    assert_eq!(shapes.version(), Version::V5);
    assert_eq!(shapes.endian(), Endian::Little);
    assert_eq!(shapes.seed(), 9);
    let entity = shapes.entities()[0];
    assert_eq!(shapes.read_payload(&entity, &mut reader).unwrap(), pattern(50));
}

#[test]
fn legacy_clear_files_scan_identically() {
    let records = vec![(4u32, pattern(70)), (5, pattern(3))];
    let bytes = build(Version::V2, 0, &records);

    // scalar fields are plain big-endian on the wire
    assert_eq!(&bytes[4..8], &2u32.to_be_bytes());
    assert_eq!(&bytes[8..12], &4u32.to_be_bytes());

    let mut reader = Cursor::new(bytes);
    let shapes = ShapesBuilder::new().reader(&mut reader).unwrap();
    assert!(!shapes.is_encrypted());
    assert_eq!(shapes.endian(), Endian::Big);

    // the scan shape (offsets, block accounting) matches the encrypted form
    assert_eq!(shapes.entities()[0].offset, 16);
    assert_eq!(shapes.entities()[0].block_index, 3);
    // 70-byte payload reserves 2 blocks, then 2 more scalars
    assert_eq!(shapes.entities()[1].block_index, 3 + 2 + 2);
    for (entity, (_, payload)) in shapes.entities().iter().zip(&records) {
        assert_eq!(&shapes.read_payload(entity, &mut reader).unwrap(), payload);
    }
}

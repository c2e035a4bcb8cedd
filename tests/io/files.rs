// File-level decode and encode helpers.

use std::fs;

use lz4_gradual::block::compress_to_vec;
use lz4_gradual::io::{
    decode_filename, decode_multiple_filenames, encode_filename, load_dictionary, Prefs,
    StreamError,
};
use tempfile::TempDir;

use crate::support::lorem;

fn path_str(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_owned()
}

#[test]
fn many_files_in_parallel() {
    let dir = TempDir::new().unwrap();
    let mut jobs = Vec::new();
    let mut originals = Vec::new();
    for i in 0..6u64 {
        let data = lorem(10_000 + i as usize * 1_000, i + 1);
        let src = path_str(&dir, &format!("f{i}.lz4"));
        fs::write(&src, compress_to_vec(&data, &[]).unwrap()).unwrap();
        jobs.push((src, path_str(&dir, &format!("f{i}"))));
        originals.push(data);
    }

    let mut prefs = Prefs::default();
    prefs.set_nb_workers(3);
    let results = decode_multiple_filenames(&jobs, &prefs);

    assert_eq!(results.len(), jobs.len());
    for ((_, dst), (result, data)) in jobs.iter().zip(results.into_iter().zip(&originals)) {
        assert_eq!(result.unwrap().decompressed, data.len() as u64);
        assert_eq!(&fs::read(dst).unwrap(), data);
    }
}

#[test]
fn one_bad_file_does_not_stop_the_rest() {
    let dir = TempDir::new().unwrap();
    let good = path_str(&dir, "good.lz4");
    let bad = path_str(&dir, "bad.lz4");
    fs::write(&good, compress_to_vec(b"fine content here", &[]).unwrap()).unwrap();
    fs::write(&bad, [0x50, b'o', b'o']).unwrap();

    let jobs = vec![
        (bad, path_str(&dir, "bad")),
        (good, path_str(&dir, "good")),
    ];
    let mut prefs = Prefs::default();
    prefs.set_nb_workers(2);
    let results = decode_multiple_filenames(&jobs, &prefs);

    assert!(matches!(results[0], Err(StreamError::Truncated)));
    assert!(results[1].is_ok());
    assert_eq!(fs::read(&jobs[1].1).unwrap(), b"fine content here");
}

#[test]
fn existing_output_is_not_overwritten_by_default() {
    let dir = TempDir::new().unwrap();
    let src = path_str(&dir, "in.lz4");
    let dst = path_str(&dir, "out");
    fs::write(&src, compress_to_vec(b"new", &[]).unwrap()).unwrap();
    fs::write(&dst, b"old").unwrap();

    let mut prefs = Prefs::default();
    let err = decode_filename(&src, &dst, &prefs).unwrap_err();
    match err {
        StreamError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(fs::read(&dst).unwrap(), b"old");

    prefs.set_overwrite(true);
    decode_filename(&src, &dst, &prefs).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"new");
}

#[test]
fn encode_and_decode_with_dictionary_file() {
    let dir = TempDir::new().unwrap();
    let dict_path = path_str(&dir, "dict");
    let plain = path_str(&dir, "plain");
    let packed = path_str(&dir, "plain.lz4");
    let restored = path_str(&dir, "restored");

    let dict = lorem(6_000, 50);
    let mut data = dict[1_000..4_000].to_vec();
    data.extend_from_slice(&lorem(500, 51));
    fs::write(&dict_path, &dict).unwrap();
    fs::write(&plain, &data).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_dictionary(Some(load_dictionary(&dict_path).unwrap()));
    let (n_in, n_out) = encode_filename(&plain, &packed, &prefs).unwrap();
    assert_eq!(n_in, data.len() as u64);
    assert!(n_out < n_in);

    decode_filename(&packed, &restored, &prefs).unwrap();
    assert_eq!(fs::read(&restored).unwrap(), data);
}

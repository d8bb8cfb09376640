use super::*;

#[test]
fn test_decode_display_name() {
    assert_eq!(
        decode_display_name("Movie.Name.(2019)%5B1080p%5D"),
        "Movie_Name_(2019)_1080p"
    );
    assert_eq!(decode_display_name("Some+Show+S01"), "Some_Show_S01");
    assert_eq!(decode_display_name("__Leading%20and%20trailing__"), "Leading_and_trailing");
}

#[test]
fn test_parse_full_link() {
    let uri = "magnet:?xt=urn:btih:ABCDEF0123&dn=The.Matrix.1999.1080p&tr=udp%3A%2F%2Ftracker.example%3A80";
    let magnet = Magnet::parse(uri).unwrap();
    assert_eq!(magnet.name, "The_Matrix_1999_1080p");
    assert_eq!(magnet.uri, uri);
}

#[test]
fn test_parse_without_dn_uses_hash() {
    let magnet = Magnet::parse("magnet:?xt=urn:btih:0123456789abcdef&tr=x").unwrap();
    assert_eq!(magnet.name, "0123456789abcdef");
}

#[test]
fn test_parse_rejects_non_magnet_and_nameless() {
    assert_eq!(Magnet::parse("https://example.org/file.torrent"), None);
    assert_eq!(Magnet::parse("magnet:?tr=udp://x"), None);
}

#[test]
fn test_name_normalizes_like_plain_title() {
    use crate::services::matcher::normalizer::normalize;

    let magnet = Magnet::parse("magnet:?xt=urn:btih:1&dn=Ubuntu+20.04+LTS").unwrap();
    assert_eq!(normalize(&magnet.name), "ubuntu 20 04 lts");
}

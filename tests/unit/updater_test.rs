//! Tests for the full update run

use update_appcast::feed::FeedDocument;
use update_appcast::xml::{QName, parse_document};
use update_appcast::{BuildInfo, UpdateError, UpdaterConfig, run_at};

use crate::common::{BuildDir, EMPTY_FEED, SIGNATURE, SPARKLE, TWO_ITEM_FEED, fixed_time};

fn items(xml: &str) -> Vec<update_appcast::xml::Element> {
    let root = parse_document(xml).unwrap();
    let item = QName::local("item");
    root.find(&QName::local("channel"))
        .unwrap()
        .find_all(&item)
        .cloned()
        .collect()
}

#[test]
fn test_scenario_single_item_from_empty_feed() {
    let dir = BuildDir::new("edSignature=\"MC0CFQ...\" length=\"512\"", EMPTY_FEED);
    let config = UpdaterConfig::in_dir(dir.path());

    run_at(&config, &BuildInfo::new("1234", "abcd123"), fixed_time()).unwrap();

    let items = items(&dir.read_output());
    assert_eq!(items.len(), 1);

    let item = &items[0];
    let text = |name: QName| item.find(&name).unwrap().text();
    assert_eq!(text(QName::local("title")), "Build 1234");
    assert_eq!(text(QName::local("pubDate")), "Mon, 02 Jan 2006 15:04:05 +0000");
    assert_eq!(text(QName::qualified(SPARKLE, "version")), "1234");
    assert_eq!(text(QName::qualified(SPARKLE, "shortVersionString")), "abcd123");
    assert_eq!(text(QName::qualified(SPARKLE, "minimumSystemVersion")), "12.0.0");
    assert!(text(QName::local("description")).contains("<code>abcd123</code>"));

    let enclosure = item.find(&QName::local("enclosure")).unwrap();
    let attrs: Vec<(&str, &str)> = enclosure
        .attributes
        .iter()
        .map(|a| (a.name.local.as_str(), a.value.as_str()))
        .collect();
    assert_eq!(
        attrs,
        vec![
            ("url", "https://tip.files.ghostty.dev/1234/ghostty-macos-universal.zip"),
            ("type", "application/octet-stream"),
            ("edSignature", "MC0CFQ..."),
            ("length", "512"),
        ]
    );
}

#[test]
fn test_existing_items_are_kept_in_order() {
    let dir = BuildDir::new(SIGNATURE, TWO_ITEM_FEED);
    let config = UpdaterConfig::in_dir(dir.path());

    let report = run_at(&config, &BuildInfo::new("3", "c3"), fixed_time()).unwrap();
    assert_eq!(report.items_before, 2);
    assert_eq!(report.items_after, 3);

    let before = items(TWO_ITEM_FEED);
    let after = items(&dir.read_output());
    assert_eq!(after.len(), 3);
    assert_eq!(&after[..2], &before[..]);
    assert_eq!(after[2].find(&QName::local("title")).unwrap().text(), "Build 3");
}

#[test]
fn test_output_uses_registered_prefixes() {
    let dir = BuildDir::new(SIGNATURE, TWO_ITEM_FEED);
    let config = UpdaterConfig::in_dir(dir.path());

    run_at(&config, &BuildInfo::new("3", "c3"), fixed_time()).unwrap();

    let output = dir.read_output();
    assert!(output.starts_with("<?xml version='1.0' encoding='utf-8'?>"));
    assert!(output.contains("xmlns:sparkle=\"http://www.andymatuschak.org/xml-namespaces/sparkle\""));
    assert!(output.contains("xmlns:dc=\"http://purl.org/dc/elements/1.1/\""));
    assert!(output.contains("<dc:creator>ci</dc:creator>"));
    assert!(output.contains("<sparkle:shortVersionString>c3</sparkle:shortVersionString>"));
    assert!(output.contains("sparkle:edSignature=\"MC0CFQ...\""));
    assert!(!output.contains("ns0"));
}

#[test]
fn test_rerun_on_own_output_appends_again() {
    let dir = BuildDir::new(SIGNATURE, EMPTY_FEED);
    let config = UpdaterConfig::in_dir(dir.path());

    run_at(&config, &BuildInfo::new("10", "a"), fixed_time()).unwrap();
    dir.promote_output();
    let report = run_at(&config, &BuildInfo::new("11", "b"), fixed_time()).unwrap();
    assert_eq!(report.items_before, 1);
    assert_eq!(report.items_after, 2);

    let feed = FeedDocument::load(&config.output_path).unwrap();
    let titles: Vec<String> = feed
        .items()
        .unwrap()
        .iter()
        .map(|i| i.find(&QName::local("title")).unwrap().text())
        .collect();
    assert_eq!(titles, vec!["Build 10", "Build 11"]);
}

#[test]
fn test_same_build_twice_is_not_deduplicated() {
    let dir = BuildDir::new(SIGNATURE, EMPTY_FEED);
    let config = UpdaterConfig::in_dir(dir.path());
    let info = BuildInfo::new("10", "a");

    run_at(&config, &info, fixed_time()).unwrap();
    dir.promote_output();
    run_at(&config, &info, fixed_time()).unwrap();

    assert_eq!(items(&dir.read_output()).len(), 2);
}

#[test]
fn test_failures_leave_no_output() {
    let cases = [
        (BuildDir::new("badtoken", EMPTY_FEED), "MALFORMED_SIGNATURE"),
        (BuildDir::new(SIGNATURE, "<rss><item/></rss>"), "MISSING_CHANNEL"),
        (BuildDir::new(SIGNATURE, "<rss><channel></rss>"), "MALFORMED_FEED"),
        (BuildDir::empty(), "MISSING_FILE"),
    ];

    for (dir, kind) in cases {
        let config = UpdaterConfig::in_dir(dir.path());
        let err: UpdateError = run_at(&config, &BuildInfo::new("1", "c"), fixed_time()).unwrap_err();
        assert_eq!(err.kind(), kind, "{err}");
        assert!(!dir.output().exists(), "{kind} left an output file");
    }
}

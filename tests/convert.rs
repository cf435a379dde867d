use ayat::io;
use ayat::processing::convert::{self, RangeSource, RecitationSource};
use ayat::types::{GrammarAnnotation, VerseCollection, VerseRecord, WordRecord};

fn verse(n: u32) -> VerseRecord {
    let reason_only = GrammarAnnotation {
        kind: Some("Ism - Noun".to_string()),
        root: Some("ك-ت-ب (k-t-b) - to write".to_string()),
        reason: Some("Definite noun, the subject of the nominal sentence.".to_string()),
        ..Default::default()
    };
    VerseRecord::new(
        n,
        "ذَٰلِكَ ٱلْكِتَٰبُ لَا رَيْبَ فِيهِ",
        "dhālika l-kitābu lā rayba fīhi",
        "This is the Book about which there's no doubt",
        vec![
            WordRecord::simple(
                "ذَٰلِكَ",
                "dhālika",
                "that",
                "Ism - Demonstrative",
                "Points to something 'far' for emphasis.",
            ),
            WordRecord::new("ٱلْكِتَٰبُ", "l-kitābu", "the Book", reason_only),
        ],
    )
}

#[test]
fn convert_two_documents() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("surah-2-grammar.json");
    let rest = dir.path().join("surah-2-verses-4-25.json");
    io::save(&VerseCollection::new((1..=3).map(verse).collect()), &first).unwrap();

    // this one is a bare array
    let rest_verses: Vec<VerseRecord> = (4..=25).map(verse).collect();
    std::fs::write(&rest, serde_json::to_string(&rest_verses).unwrap()).unwrap();

    let sources = vec![
        RangeSource::new(&first, None),
        format!("{}:10", rest.display()).parse().unwrap(),
    ];
    let out =
        convert::convert_files(&sources, 2, "Al-Baqarah", &RecitationSource::default()).unwrap();

    assert!(out.starts_with("    2: {\n        surahNumber: 2,\n        surahName: 'Al-Baqarah',\n"));
    assert_eq!(out.matches("{ ayahNumber: ").count(), 10);
    assert!(out.contains("{ ayahNumber: 10, "));
    assert!(!out.contains("{ ayahNumber: 11, "));
    assert!(out.contains("recitationUrl: 'https://everyayah.com/data/Nasser_Alqatami_128kbps/002007.mp3'"));
    assert!(out.contains(r"translation: 'This is the Book about which there\'s no doubt'"));

    // no root, no reason: sentinel and empty explanations
    assert!(out.contains("root: 'N/A', rootExplanation: '', grammar: 'Points to something \\'far\\' for emphasis.'"));
    // reason doubles as the grammar explanation
    assert!(out.contains(
        "rootExplanation: 'Definite noun, the subject of the nominal sentence.', grammar: 'Definite noun, the subject of the nominal sentence.'"
    ));
}

#[test]
fn json_output_uses_app_keys() {
    let verses = vec![verse(225)];
    let surah = convert::convert(&verses, 2, "Al-Baqarah", &RecitationSource::default());
    let json = serde_json::to_value(&surah).unwrap();

    assert_eq!(json["surahNumber"], 2);
    assert_eq!(json["surahName"], "Al-Baqarah");
    assert_eq!(json["ayat"][0]["ayahNumber"], 225);
    assert!(json["ayat"][0]["recitationUrl"]
        .as_str()
        .unwrap()
        .ends_with("/002225.mp3"));
    assert_eq!(json["ayat"][0]["words"][1]["analysis"]["root"], "ك-ت-ب (k-t-b) - to write");
}

#[test]
fn malformed_source_emits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    io::save(&VerseCollection::new(vec![verse(1)]), &good).unwrap();
    std::fs::write(&bad, r#"{"verses": [{"verse": 2, "arabic": 3}]}"#).unwrap();

    let r = convert::convert_files(
        &[RangeSource::new(&good, None), RangeSource::new(&bad, None)],
        2,
        "Al-Baqarah",
        &RecitationSource::default(),
    );
    assert!(r.is_err());
}

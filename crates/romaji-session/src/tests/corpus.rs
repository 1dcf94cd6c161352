//! The game's word lists must be fully typeable with the default table.

use romaji_core::romaji::PatternTable;
use romaji_core::segment::Phrase;

use super::{reachable_spellings, type_string};
use crate::TypingSession;

const EASY: &[&str] = &[
    "ねこ", "いぬ", "はしる", "とぶ", "あるく", "ひ", "みず", "たいよう", "つき", "ほし",
    "あか", "あお", "みどり", "しろ", "くろ", "おおきい", "ちいさい", "あつい", "つめたい",
    "たのしい",
];

const MEDIUM: &[&str] = &[
    "コンピューター", "キーボード", "マウス", "タイピング", "ゲーム", "ゾンビ", "こうげき",
    "まもる", "ぶき", "たたかい", "がっこう", "しごと", "でんしゃ", "じどうしゃ", "りょこう",
    "おんがく", "えいが", "ほん", "しんぶん", "テレビ",
];

const HARD: &[&str] = &[
    "プログラミング", "かいはつ", "アルゴリズム", "インターフェース", "アーキテクチャ",
    "さいてきか", "デバッグ", "じっそう", "データベース", "ネットワーク", "セキュリティ",
    "クラウド", "じんこうちのう", "きかいがくしゅう", "ブロックチェーン",
];

fn all_words() -> impl Iterator<Item = &'static str> {
    EASY.iter().chain(MEDIUM).chain(HARD).copied()
}

#[test]
fn every_word_segments_into_known_units() {
    let table = PatternTable::global();
    for word in all_words() {
        let phrase = Phrase::segment(word, &table);
        assert_eq!(phrase.text(), word);
        for unit in phrase.units() {
            assert!(table.contains(unit), "{word}: unknown unit {unit}");
        }
    }
}

/// Type every word twice: once with the first reachable spelling of each
/// unit, once with the last.
#[test]
fn every_word_typeable_with_any_spelling_choice() {
    let table = PatternTable::global();
    for word in all_words() {
        let phrase = Phrase::segment(word, &table);
        for pick_last in [false, true] {
            let keys: String = phrase
                .units()
                .iter()
                .map(|unit| {
                    let spellings = reachable_spellings(&table, unit);
                    if pick_last {
                        spellings[spellings.len() - 1]
                    } else {
                        spellings[0]
                    }
                })
                .collect();

            let mut session = TypingSession::with_phrase(table.clone(), phrase.clone());
            let results = type_string(&mut session, &keys);
            assert!(
                results.iter().all(|r| r.accepted),
                "{word}: rejected while typing {keys}"
            );
            assert!(
                results.last().is_some_and(|r| r.phrase_completed),
                "{word}: not completed by {keys}"
            );
            assert_eq!(
                results.iter().filter(|r| r.unit_completed).count(),
                phrase.len(),
                "{word}: unit completions for {keys}"
            );
        }
    }
}

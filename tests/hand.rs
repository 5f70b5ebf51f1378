use scrabble_opening::hand::Hand;
use scrabble_opening::tile::Tile;
use scrabble_opening::Error;

fn hand(tokens: &[&str]) -> Hand {
    Hand::create(tokens).unwrap()
}

#[test]
fn use_removes_single_tile() {
    let mut hand = hand(&["A1", "A2", "T1"]);

    let used = hand.use_tile('A').unwrap();
    assert_eq!(1, used.score());
    assert_eq!(1, hand.count('A'));
    assert_eq!(2, hand.len());
    assert_eq!(Some(2), hand.find('A').map(Tile::score));

    assert!(hand.use_tile('A').is_some());
    assert_eq!(None, hand.use_tile('A'));
    assert!(!hand.contains('A'));
}

#[test]
fn clone_is_independent() {
    let original = hand(&["E1", "E1", "S1"]);

    let mut copy = original.clone();
    copy.use_tile('E');
    copy.use_tile('S');

    assert_eq!(2, original.count('E'));
    assert_eq!(1, original.count('S'));
    assert_eq!(3, original.len());
}

#[test]
fn lookup_by_tile() {
    let hand = hand(&["Q10", "U1"]);
    let probe = Tile::new('Q', 0);

    assert!(hand.contains(probe));
    assert!(hand.contains(&probe));
    assert_eq!(Some(10), hand.find(probe).map(Tile::score));
    assert!(!hand.contains('X'));
    assert_eq!(None, hand.find('X'));
}

#[test]
fn formable() {
    let hand = hand(&["A1", "A1", "T1"]);

    assert!(hand.can_form("AT"));
    assert!(hand.can_form("TAA"));
    assert!(!hand.can_form("AAA"));
    assert!(!hand.can_form("TAT"));
    assert!(!hand.can_form("TEA"));

    // checking never consumes tiles
    assert_eq!(3, hand.len());
}

#[test]
fn formable_iff_consumption_succeeds() {
    let hand = hand(&["S1", "T2", "O1", "P3", "S1"]);

    for word in ["STOP", "POTS", "SPOTS", "STOPS", "TOPS", "POOTS", "SPOTTS", "X"] {
        let mut copy = hand.clone();
        let consumed = word.chars().all(|c| copy.use_tile(c).is_some());
        assert_eq!(consumed, hand.can_form(word), "word {}", word);
    }
}

#[test]
fn word_score_uses_first_tile() {
    let hand = hand(&["E1", "E5", "A2"]);

    assert_eq!(Some(2), hand.word_score("EE"));
    assert_eq!(Some(3), hand.word_score("AE"));
    assert_eq!(None, hand.word_score("EAR"));

    let tiles = hand.tiles_for("EA").unwrap();
    assert_eq!(vec![1, 2], tiles.iter().map(|t| t.score()).collect::<Vec<_>>());
    assert_eq!(None, hand.tiles_for("R"));
}

#[test]
fn create_invalid() {
    assert!(matches!(Hand::create(["A1", "B"]), Err(Error::InvalidTile { .. })));
}

#[test]
fn display() {
    assert_eq!("[A(1), T(2)]", hand(&["A1", "T2"]).to_string());
}

#[test]
fn word_score_does_not_overflow() {
    let hand = hand(&["A4294967295", "B4294967295"]);

    assert_eq!(Some(2 * u32::MAX as u64), hand.word_score("AB"));
    assert_eq!(Some(3 * u32::MAX as u64), hand.word_score("ABA"));
}

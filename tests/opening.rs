use scrabble_opening::board::Board;
use scrabble_opening::dictionary::Dictionary;
use scrabble_opening::hand::Hand;
use scrabble_opening::opening::{BestOpening, SearchConfig};
use scrabble_opening::placement::{Direction, Placement};
use scrabble_opening::tile::Tile;
use scrabble_opening::util::board_gen::{random_opening, seeded_rng};
use scrabble_opening::Error;

fn search(board: &str, tiles: &[&str], words: &[&str]) -> BestOpening {
    BestOpening::new(
        Board::restore_from_text(board).unwrap(),
        Hand::create(tiles).unwrap(),
        Dictionary::create(words.iter().copied()),
    )
}

#[test]
fn eat_ate_tie() {
    let search = BestOpening::new(
        Board::new(3, 3),
        Hand::create(["A1", "T1", "E1"]).unwrap(),
        Dictionary::create(["AT", "EAT", "ATE"]),
    );

    assert_eq!(vec!["AT", "EAT", "ATE"], search.valid_words());
    assert_eq!((3, vec!["EAT", "ATE"]), search.best_words().unwrap());

    let opening = search.find().unwrap();
    // six untouched squares worth 1 each, plus the three letters worth 1 each
    assert_eq!(9, opening.score);
    assert_eq!(opening.score, opening.board.score());
    assert_eq!("EAT", opening.word);
    assert_eq!(Placement::new(Direction::Horizontal, 0, 0), opening.placement);
    assert_eq!("E A T\n1 1 1\n1 1 1", opening.board.to_string());
}

#[test]
fn placement_is_mandatory() {
    let search = search("5", &["A2"], &["A", "AB"]);

    assert_eq!(vec!["A"], search.valid_words());

    let opening = search.find().unwrap();
    assert_eq!(2, opening.score);
    assert_eq!("A", opening.board.to_string());
    assert_eq!(Some(Tile::new('A', 2)), opening.board.get(0, 0).unwrap().tile());
}

#[test]
fn multiplier_picks_placement() {
    let search = search("1 1 1\n1 1 4", &["A1", "T3"], &["AT"]);

    let opening = search.find().unwrap();
    assert_eq!(17, opening.score);
    // the vertical placement at (2, 0) scores the same but comes later
    assert_eq!(Placement::new(Direction::Horizontal, 1, 1), opening.placement);
    assert_eq!("1 1 1\n1 A T", opening.board.to_string());
}

#[test]
fn dictionary_order_breaks_ties() {
    let opening = search("1 1", &["A1", "B1"], &["BA", "AB"]).find().unwrap();
    assert_eq!("BA", opening.word);

    let opening = search("1 1", &["A1", "B1"], &["AB", "BA"]).find().unwrap();
    assert_eq!("AB", opening.word);
}

#[test]
fn only_highest_scoring_words_are_placed() {
    // "AT" would score more on the big multiplier, but "TEA" has the higher tile score
    let search = search("9 1 1\n1 1 1\n1 1 1", &["A5", "T1", "E1"], &["AT", "TEA"]);

    assert_eq!((7, vec!["TEA"]), search.best_words().unwrap());
    assert_eq!("TEA", search.find().unwrap().word);
}

#[test]
fn fits_in_one_direction() {
    let opening = search("1 1 2", &["A1", "T3"], &["AT"]).find().unwrap();
    assert_eq!(Placement::new(Direction::Horizontal, 1, 0), opening.placement);

    let opening = search("1\n1\n2", &["A1", "T3"], &["AT"]).find().unwrap();
    assert_eq!(Placement::new(Direction::Vertical, 0, 1), opening.placement);
}

#[test]
fn existing_tiles_are_overwritten() {
    let mut board = Board::restore_from_text("2 1 1").unwrap();
    board.set_tile(0, 0, Tile::new('Z', 10)).unwrap();

    let search = BestOpening::new(board, Hand::create(["A1", "T1"]).unwrap(), Dictionary::create(["AT"]));
    let opening = search.find().unwrap();

    assert_eq!(22, opening.score);
    assert_eq!("Z A T", opening.board.to_string());
}

#[test]
fn duplicate_letters_need_duplicate_tiles() {
    let search = search("1 1 1", &["A1", "T1"], &["TAT", "XYZ", "AT"]);
    assert_eq!(vec!["AT"], search.valid_words());

    let search = self::search("1 1 1", &["A1", "T1", "T2"], &["TAT"]);
    assert_eq!(vec!["TAT"], search.valid_words());
    // both letters score with the first T
    assert_eq!((3, vec!["TAT"]), search.best_words().unwrap());
}

#[test]
fn no_legal_placement() {
    assert_eq!(Err(Error::NoLegalPlacement), search("1 1", &["Z1"], &["A"]).find());
    assert_eq!(Err(Error::NoLegalPlacement), search("1 1", &["A1"], &[]).find());
    assert_eq!(
        Err(Error::NoLegalPlacement),
        search("1 1\n1 1", &["A1", "B1", "C1"], &["ABC"]).find()
    );
}

#[test]
fn inputs_are_untouched() {
    let search = search("1 2\n3 1", &["A1", "T1"], &["AT", "TA"]);
    let before = search.clone();

    search.find().unwrap();

    assert_eq!(before.board(), search.board());
    assert_eq!(before.hand(), search.hand());
    assert_eq!(before.dictionary(), search.dictionary());
    assert_eq!(2, search.hand().len());
}

#[test]
fn more_threads_than_placements() {
    let search = search("3", &["A1"], &["A"]);
    let config = SearchConfig { threads: 64 };
    assert_eq!(search.find(), search.find_with(&config));
}

#[test]
fn parallel_matches_sequential() {
    let mut rng = seeded_rng(0);

    for i in 0..20 {
        let rows = 1 + i % 7;
        let cols = 1 + (i * 3) % 9;
        let search = random_opening(rows, cols, 50, &mut rng);

        let sequential = search.find();
        for threads in [2, 3, 8] {
            let parallel = search.find_with(&SearchConfig { threads });
            assert_eq!(sequential, parallel, "instance {} with {} threads", i, threads);
        }
    }
}

#[test]
fn large_tile_scores() {
    let search = search("1 1", &["A4294967295", "A1"], &["AA", "A"]);

    assert_eq!((2 * u32::MAX as u64, vec!["AA"]), search.best_words().unwrap());

    let opening = search.find().unwrap();
    assert_eq!("AA", opening.word);
    assert_eq!(2 * u32::MAX as u64, opening.score);
}
